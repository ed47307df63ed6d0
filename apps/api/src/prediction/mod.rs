//! Toy predictor: advisory labels from a pre-trained model bundle.
//!
//! The only input feature is the character length of the submitted form,
//! which carries no real signal. Output is shown next to the plan and is never
//! allowed to affect plan generation.

use thiserror::Error;

pub mod bundle;
pub mod forest;
pub mod predictor;

pub use bundle::ModelBundle;
pub use predictor::{Prediction, Predictor};

#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("failed to read model bundle: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse model bundle: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid model bundle: {0}")]
    InvalidBundle(String),

    #[error("classifier expects {expected} features, got {got}")]
    FeatureWidth { expected: usize, got: usize },
}

/// Loads the predictor for advisory use: any failure is logged and yields `None`.
pub fn load_advisory(path: &str) -> Option<Predictor> {
    match Predictor::load(path) {
        Ok(predictor) => Some(predictor),
        Err(e) => {
            tracing::warn!("ML models not loaded from {path}: {e}");
            None
        }
    }
}
