//! The two inference operations over the loaded artifacts.
//!
//! Both operations are pure functions of the input vector plus the fixed
//! artifacts: scale first, then either predict a class label or reduce
//! tree-path attributions to a ranked importance list. They are
//! independent per invocation and share no state beyond the artifacts.

use fatigue_core::{ClassLabel, FeatureVector};
use tracing::debug;

use crate::artifact::Artifacts;
use crate::error::ModelError;
use crate::explain::{Explainer, Importance, rank_importances};

/// Inference pipeline borrowing the loaded artifacts read-only.
pub struct Pipeline<'a> {
    artifacts: &'a Artifacts,
}

impl<'a> Pipeline<'a> {
    pub fn new(artifacts: &'a Artifacts) -> Self {
        Self { artifacts }
    }

    /// Scale the input and predict its fatigue-strength class.
    pub fn classify(&self, input: &FeatureVector) -> Result<ClassLabel, ModelError> {
        let scaled = self.artifacts.scaler.transform(input);
        let label = self.artifacts.forest.predict(&scaled)?;
        debug!(label = label.as_str(), "classified sample");
        Ok(label)
    }

    /// Scale the input and rank per-feature attribution scores.
    ///
    /// Returns exactly one entry per schema feature, sorted descending by
    /// mean absolute attribution over the class axis.
    pub fn explain_importances(&self, input: &FeatureVector) -> Vec<Importance> {
        let scaled = self.artifacts.scaler.transform(input);
        let attributions = Explainer::new(&self.artifacts.forest).attributions(&scaled);
        rank_importances(&attributions)
    }
}
