//! Result presentation on the server side: the plain-text download.
//!
//! Editing and clipboard copy happen in the browser (see `static/index.html`);
//! whatever text the page holds is posted back here and returned unchanged.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// File name offered for every downloaded plan.
pub const DOWNLOAD_FILENAME: &str = "ai_hiring_plan.txt";

/// Builds the attachment response. `text` is written byte-for-byte.
pub fn plan_download(text: String) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{DOWNLOAD_FILENAME}\""),
            ),
        ],
        text,
    )
        .into_response()
}
