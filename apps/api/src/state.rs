use std::sync::Arc;

use crate::llm_client::CompletionBackend;
use crate::prediction::Predictor;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. Default: the Gemini `LlmClient`.
    pub llm: Arc<dyn CompletionBackend>,
    /// Advisory predictor. `None` when the model bundle failed to load.
    pub predictor: Option<Arc<Predictor>>,
}
