//! Classifier interface and the random-forest implementation stored in model bundles.
//!
//! Trees are flat node arrays rooted at index 0. A split sends a sample left when
//! `x[feature] <= threshold`. Children always sit after their parent, which
//! `RandomForest::validate` checks so traversal cannot loop.

use serde::Deserialize;

use crate::prediction::PredictorError;

/// A trained multi-class model: fixed input width in, encoded class index out.
pub trait Classifier: Send + Sync {
    /// Number of features `predict` expects.
    fn n_features_in(&self) -> usize;

    /// Predicts the encoded class index for one sample.
    fn predict(&self, features: &[f64]) -> Result<usize, PredictorError>;
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        /// Per-class weights (sample counts or probabilities).
        value: Vec<f64>,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RandomForest {
    pub n_features_in: usize,
    pub n_classes: usize,
    pub trees: Vec<Tree>,
}

impl Tree {
    fn leaf_for(&self, features: &[f64]) -> &[f64] {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if features[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                Node::Leaf { value } => return value,
            }
        }
    }
}

impl RandomForest {
    /// Checks the structural invariants traversal relies on.
    pub fn validate(&self) -> Result<(), PredictorError> {
        if self.n_features_in == 0 {
            return Err(invalid("n_features_in must be at least 1"));
        }
        if self.n_classes == 0 {
            return Err(invalid("n_classes must be at least 1"));
        }
        if self.trees.is_empty() {
            return Err(invalid("forest has no trees"));
        }

        for (t, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(invalid(format!("tree {t} has no nodes")));
            }
            for (i, node) in tree.nodes.iter().enumerate() {
                match node {
                    Node::Split {
                        feature,
                        threshold,
                        left,
                        right,
                    } => {
                        if *feature >= self.n_features_in {
                            return Err(invalid(format!(
                                "tree {t} node {i}: feature {feature} out of range"
                            )));
                        }
                        if threshold.is_nan() {
                            return Err(invalid(format!("tree {t} node {i}: NaN threshold")));
                        }
                        for child in [*left, *right] {
                            if child <= i || child >= tree.nodes.len() {
                                return Err(invalid(format!(
                                    "tree {t} node {i}: child {child} out of order or range"
                                )));
                            }
                        }
                    }
                    Node::Leaf { value } => {
                        if value.len() != self.n_classes {
                            return Err(invalid(format!(
                                "tree {t} node {i}: leaf has {} classes, expected {}",
                                value.len(),
                                self.n_classes
                            )));
                        }
                        if value.iter().any(|v| !v.is_finite() || *v < 0.0) {
                            return Err(invalid(format!(
                                "tree {t} node {i}: leaf weights must be finite and non-negative"
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

impl Classifier for RandomForest {
    fn n_features_in(&self) -> usize {
        self.n_features_in
    }

    /// Mean of per-tree class distributions; ties go to the lowest class index.
    fn predict(&self, features: &[f64]) -> Result<usize, PredictorError> {
        if features.len() != self.n_features_in {
            return Err(PredictorError::FeatureWidth {
                expected: self.n_features_in,
                got: features.len(),
            });
        }

        let mut votes = vec![0.0_f64; self.n_classes];
        for tree in &self.trees {
            let leaf = tree.leaf_for(features);
            let total: f64 = leaf.iter().sum();
            if total > 0.0 {
                for (vote, weight) in votes.iter_mut().zip(leaf) {
                    *vote += weight / total;
                }
            }
        }

        let mut best = 0;
        for (class, vote) in votes.iter().enumerate().skip(1) {
            if *vote > votes[best] {
                best = class;
            }
        }
        Ok(best)
    }
}

fn invalid(msg: impl Into<String>) -> PredictorError {
    PredictorError::InvalidBundle(msg.into())
}
