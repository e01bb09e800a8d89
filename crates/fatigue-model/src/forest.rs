//! Pre-trained tree-ensemble classifier.
//!
//! The model artifact is a forest of decision trees over the scaled
//! feature space. Each tree is a node arena rooted at index 0; child
//! indices always point forward in the arena, so a walk terminates. Every
//! node, internal or leaf, carries the per-class probability distribution
//! of the training samples that reached it; the attribution method
//! depends on the internal distributions, not just the leaves.

use fatigue_core::ClassLabel;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// One node of a decision tree.
///
/// A sample routes left when `sample[feature] <= threshold`, the
/// convention the artifacts are exported with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
        value: Vec<f64>,
    },
    Leaf {
        value: Vec<f64>,
    },
}

impl Node {
    /// Per-class distribution at this node.
    pub fn value(&self) -> &[f64] {
        match self {
            Self::Split { value, .. } | Self::Leaf { value } => value,
        }
    }
}

/// A single decision tree, rooted at node 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    /// Route a sample to its leaf and return the leaf distribution.
    pub fn leaf_distribution(&self, sample: &[f64]) -> &[f64] {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                    ..
                } => {
                    idx = if sample[*feature] <= *threshold {
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

/// The fitted ensemble: tree list plus the dimensions it was fitted on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forest {
    pub n_features: usize,
    pub n_classes: usize,
    pub trees: Vec<Tree>,
}

impl Forest {
    /// Check the artifact against the dimensions the pipeline expects.
    pub fn validate(&self, expected_features: usize, expected_classes: usize) -> Result<(), ModelError> {
        if self.n_features != expected_features {
            return Err(ModelError::FeatureCount {
                got: self.n_features,
                expected: expected_features,
            });
        }
        if self.n_classes != expected_classes {
            return Err(ModelError::ClassCount {
                got: self.n_classes,
                expected: expected_classes,
            });
        }
        if self.trees.is_empty() {
            return Err(ModelError::EmptyEnsemble);
        }

        for (t, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(self.malformed(t, 0, "empty node arena"));
            }
            for (n, node) in tree.nodes.iter().enumerate() {
                if node.value().len() != self.n_classes {
                    return Err(self.malformed(
                        t,
                        n,
                        format!("distribution has {} entries", node.value().len()),
                    ));
                }
                if node.value().iter().any(|v| !v.is_finite()) {
                    return Err(self.malformed(t, n, "non-finite distribution entry"));
                }
                if let Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                    ..
                } = node
                {
                    if *feature >= self.n_features {
                        return Err(self.malformed(t, n, format!("split feature {feature}")));
                    }
                    if !threshold.is_finite() {
                        return Err(self.malformed(t, n, "non-finite threshold"));
                    }
                    // Forward-only children keep the walk finite.
                    for child in [*left, *right] {
                        if child <= n || child >= tree.nodes.len() {
                            return Err(self.malformed(t, n, format!("child index {child}")));
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn malformed(&self, tree: usize, node: usize, detail: impl Into<String>) -> ModelError {
        ModelError::MalformedTree {
            tree,
            node,
            detail: detail.into(),
        }
    }

    /// Mean of the leaf distributions across all trees.
    pub fn predict_proba(&self, sample: &[f64]) -> Vec<f64> {
        let mut proba = vec![0.0; self.n_classes];
        for tree in &self.trees {
            for (p, &v) in proba.iter_mut().zip(tree.leaf_distribution(sample)) {
                *p += v;
            }
        }
        let n = self.trees.len() as f64;
        for p in &mut proba {
            *p /= n;
        }
        proba
    }

    /// Predict the class label for one scaled sample.
    ///
    /// Arg-max over the mean distribution; ties resolve to the lowest
    /// class index. The index conversion is fallible so an artifact fitted
    /// on the wrong number of classes surfaces as an error.
    pub fn predict(&self, sample: &[f64]) -> Result<ClassLabel, ModelError> {
        let proba = self.predict_proba(sample);
        let mut best = 0;
        for (idx, &p) in proba.iter().enumerate() {
            if p > proba[best] {
                best = idx;
            }
        }
        Ok(ClassLabel::from_index(best)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(value: [f64; 3]) -> Node {
        Node::Leaf {
            value: value.to_vec(),
        }
    }

    fn split(feature: usize, threshold: f64, left: usize, right: usize, value: [f64; 3]) -> Node {
        Node::Split {
            feature,
            threshold,
            left,
            right,
            value: value.to_vec(),
        }
    }

    /// One stump: feature 0 at 0.0, left mostly weak, right mostly strong.
    fn stump() -> Tree {
        Tree {
            nodes: vec![
                split(0, 0.0, 1, 2, [0.4, 0.3, 0.3]),
                leaf([0.8, 0.1, 0.1]),
                leaf([0.1, 0.2, 0.7]),
            ],
        }
    }

    fn forest(trees: Vec<Tree>) -> Forest {
        Forest {
            n_features: 15,
            n_classes: 3,
            trees,
        }
    }

    #[test]
    fn routes_left_on_at_most_threshold() {
        let tree = stump();
        let mut sample = [0.0; 15];
        assert_eq!(tree.leaf_distribution(&sample), &[0.8, 0.1, 0.1]);
        sample[0] = 0.01;
        assert_eq!(tree.leaf_distribution(&sample), &[0.1, 0.2, 0.7]);
    }

    #[test]
    fn predict_proba_averages_trees() {
        let second = Tree {
            nodes: vec![leaf([0.0, 1.0, 0.0])],
        };
        let f = forest(vec![stump(), second]);
        let mut sample = [0.0; 15];
        sample[0] = -1.0;
        let proba = f.predict_proba(&sample);
        assert_eq!(proba, vec![0.4, 0.55, 0.05]);
    }

    #[test]
    fn predict_takes_arg_max() {
        let f = forest(vec![stump()]);
        let mut sample = [0.0; 15];
        sample[0] = -1.0;
        assert_eq!(f.predict(&sample).unwrap(), ClassLabel::Weak);
        sample[0] = 1.0;
        assert_eq!(f.predict(&sample).unwrap(), ClassLabel::Strong);
    }

    #[test]
    fn tied_distribution_resolves_to_lowest_index() {
        let f = forest(vec![Tree {
            nodes: vec![leaf([0.5, 0.5, 0.0])],
        }]);
        assert_eq!(f.predict(&[0.0; 15]).unwrap(), ClassLabel::Weak);
    }

    #[test]
    fn four_class_artifact_fails_label_conversion() {
        // Bypasses validate() to exercise the explicit error path.
        let f = Forest {
            n_features: 15,
            n_classes: 4,
            trees: vec![Tree {
                nodes: vec![Node::Leaf {
                    value: vec![0.1, 0.1, 0.1, 0.7],
                }],
            }],
        };
        assert!(matches!(
            f.predict(&[0.0; 15]),
            Err(ModelError::Core(_))
        ));
    }

    #[test]
    fn validate_accepts_well_formed_forest() {
        assert!(forest(vec![stump()]).validate(15, 3).is_ok());
    }

    #[test]
    fn validate_rejects_wrong_dimensions() {
        let mut f = forest(vec![stump()]);
        f.n_features = 11;
        assert!(matches!(
            f.validate(15, 3),
            Err(ModelError::FeatureCount { got: 11, expected: 15 })
        ));

        let mut f = forest(vec![stump()]);
        f.n_classes = 4;
        assert!(matches!(
            f.validate(15, 3),
            Err(ModelError::ClassCount { got: 4, expected: 3 })
        ));
    }

    #[test]
    fn validate_rejects_empty_ensemble() {
        assert!(matches!(
            forest(vec![]).validate(15, 3),
            Err(ModelError::EmptyEnsemble)
        ));
    }

    #[test]
    fn validate_rejects_backward_child_index() {
        let f = forest(vec![Tree {
            nodes: vec![
                split(0, 0.0, 0, 2, [0.4, 0.3, 0.3]), // left points at itself
                leaf([1.0, 0.0, 0.0]),
                leaf([0.0, 0.0, 1.0]),
            ],
        }]);
        assert!(matches!(f.validate(15, 3), Err(ModelError::MalformedTree { .. })));
    }

    #[test]
    fn validate_rejects_out_of_bounds_child() {
        let f = forest(vec![Tree {
            nodes: vec![split(0, 0.0, 1, 9, [0.4, 0.3, 0.3]), leaf([1.0, 0.0, 0.0])],
        }]);
        assert!(matches!(f.validate(15, 3), Err(ModelError::MalformedTree { .. })));
    }

    #[test]
    fn validate_rejects_wrong_arity_distribution() {
        let f = forest(vec![Tree {
            nodes: vec![Node::Leaf {
                value: vec![0.5, 0.5],
            }],
        }]);
        assert!(matches!(f.validate(15, 3), Err(ModelError::MalformedTree { .. })));
    }

    #[test]
    fn validate_rejects_split_on_unknown_feature() {
        let f = forest(vec![Tree {
            nodes: vec![
                split(15, 0.0, 1, 2, [0.4, 0.3, 0.3]),
                leaf([1.0, 0.0, 0.0]),
                leaf([0.0, 0.0, 1.0]),
            ],
        }]);
        assert!(matches!(f.validate(15, 3), Err(ModelError::MalformedTree { .. })));
    }
}
