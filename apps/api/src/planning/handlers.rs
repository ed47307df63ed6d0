//! Axum route handlers for the hiring plan API.

use axum::{extract::State, response::Response, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::planning::form::HiringForm;
use crate::planning::generator::generate_plan;
use crate::planning::presenter::{plan_download, DOWNLOAD_FILENAME};
use crate::prediction::{Prediction, Predictor};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub plan_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub plan: String,
    /// `None` when the predictor is unavailable or failed for this submission.
    pub predictions: Option<Vec<Prediction>>,
    pub download_filename: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    pub text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/plans
///
/// Validates the form, generates the plan, then attaches advisory predictions.
/// Predictor failures are logged and never change the plan outcome.
pub async fn handle_generate_plan(
    State(state): State<AppState>,
    Json(form): Json<HiringForm>,
) -> Result<Json<PlanResponse>, AppError> {
    let plan = generate_plan(&form, state.llm.as_ref()).await?;
    let predictions = advisory_predictions(state.predictor.as_deref(), &form);

    Ok(Json(PlanResponse {
        plan_id: plan.plan_id,
        generated_at: plan.generated_at,
        plan: plan.text,
        predictions,
        download_filename: DOWNLOAD_FILENAME,
    }))
}

/// POST /api/v1/plans/download
///
/// Echoes the (possibly edited) plan back as a `.txt` attachment.
pub async fn handle_download_plan(Json(request): Json<DownloadRequest>) -> Response {
    plan_download(request.text)
}

fn advisory_predictions(predictor: Option<&Predictor>, form: &HiringForm) -> Option<Vec<Prediction>> {
    match predictor?.predict(form) {
        Ok(predictions) => Some(predictions),
        Err(e) => {
            warn!("Prediction skipped: {e}");
            None
        }
    }
}
