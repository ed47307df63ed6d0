//! Model bundle: target name → {classifier, label encoder}, loaded once from JSON.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::prediction::forest::{Classifier, RandomForest};
use crate::prediction::PredictorError;

/// Reversible mapping between encoded class indices and labels.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelEncoder {
    pub classes: Vec<String>,
}

impl LabelEncoder {
    /// Label for an encoded class, or `None` if the index is unknown.
    pub fn inverse_transform(&self, class: usize) -> Option<&str> {
        self.classes.get(class).map(String::as_str)
    }
}

/// On-disk classifier description, tagged by `type`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ClassifierSpec {
    RandomForest(RandomForest),
}

#[derive(Debug, Deserialize)]
struct TargetSpec {
    classifier: ClassifierSpec,
    label_encoder: Option<LabelEncoder>,
}

#[derive(Debug, Deserialize)]
struct BundleFile {
    targets: BTreeMap<String, TargetSpec>,
}

/// One prediction target.
pub struct TargetModel {
    pub classifier: Box<dyn Classifier>,
    pub label_encoder: Option<LabelEncoder>,
}

/// Loaded, validated bundle. Read-only after construction.
pub struct ModelBundle {
    targets: BTreeMap<String, TargetModel>,
}

impl ModelBundle {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PredictorError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let bundle = Self::from_json(&raw)?;
        info!(
            "Loaded model bundle from {} ({} targets)",
            path.display(),
            bundle.targets.len()
        );
        Ok(bundle)
    }

    pub fn from_json(raw: &str) -> Result<Self, PredictorError> {
        let file: BundleFile = serde_json::from_str(raw)?;
        if file.targets.is_empty() {
            return Err(PredictorError::InvalidBundle(
                "bundle has no targets".to_string(),
            ));
        }

        let mut targets = BTreeMap::new();
        for (name, spec) in file.targets {
            let classifier: Box<dyn Classifier> = match spec.classifier {
                ClassifierSpec::RandomForest(forest) => {
                    forest.validate().map_err(|e| match e {
                        PredictorError::InvalidBundle(msg) => {
                            PredictorError::InvalidBundle(format!("target '{name}': {msg}"))
                        }
                        other => other,
                    })?;
                    Box::new(forest)
                }
            };
            targets.insert(
                name,
                TargetModel {
                    classifier,
                    label_encoder: spec.label_encoder,
                },
            );
        }

        Ok(Self { targets })
    }

    /// Builds a bundle from already-constructed models.
    #[cfg(test)]
    pub fn from_targets(targets: BTreeMap<String, TargetModel>) -> Self {
        Self { targets }
    }

    /// Targets in name order.
    pub fn targets(&self) -> impl Iterator<Item = (&str, &TargetModel)> {
        self.targets.iter().map(|(name, model)| (name.as_str(), model))
    }
}
