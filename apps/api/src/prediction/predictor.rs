use std::fmt;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::planning::form::HiringForm;
use crate::prediction::{ModelBundle, PredictorError};

/// A predicted label, or the raw class index when it could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PredictedLabel {
    Decoded(String),
    Raw(usize),
}

impl fmt::Display for PredictedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictedLabel::Decoded(label) => f.write_str(label),
            PredictedLabel::Raw(class) => write!(f, "{class}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub target: String,
    pub label: PredictedLabel,
}

/// Runs every target in a bundle against one form submission.
pub struct Predictor {
    bundle: ModelBundle,
}

impl Predictor {
    pub fn new(bundle: ModelBundle) -> Self {
        Self { bundle }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PredictorError> {
        ModelBundle::load(path).map(Self::new)
    }

    /// Predicts one label per target. Any classifier failure fails the whole call.
    pub fn predict(&self, form: &HiringForm) -> Result<Vec<Prediction>, PredictorError> {
        let feature = input_length_feature(form) as f64;
        debug!("Predictor input length feature = {feature}");

        self.bundle
            .targets()
            .map(|(target, model)| -> Result<Prediction, PredictorError> {
                let features = vec![feature; model.classifier.n_features_in()];
                let class = model.classifier.predict(&features)?;
                let label = match model
                    .label_encoder
                    .as_ref()
                    .and_then(|encoder| encoder.inverse_transform(class))
                {
                    Some(label) => PredictedLabel::Decoded(label.to_string()),
                    None => PredictedLabel::Raw(class),
                };
                Ok(Prediction {
                    target: target.to_string(),
                    label,
                })
            })
            .collect()
    }
}

/// Character count of the five fields joined with single spaces.
pub fn input_length_feature(form: &HiringForm) -> usize {
    form.joined().chars().count()
}
