//! Fitted per-feature linear rescaling.
//!
//! The scaler artifact holds the mean and scale each feature was
//! normalized with at fitting time. The transform must see features in
//! schema order, which [`FeatureVector`] guarantees.

use fatigue_core::{FEATURE_COUNT, FeatureVector};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Fitted mean/variance normalizer, one `(mean, scale)` pair per feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl Scaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Self {
        Self { mean, scale }
    }

    /// Check the fitted parameters against the expected feature count.
    ///
    /// A zero, negative, or non-finite scale entry means the artifact was
    /// exported incorrectly and would poison every downstream transform.
    pub fn validate(&self, expected: usize) -> Result<(), ModelError> {
        if self.mean.len() != expected {
            return Err(ModelError::ScalerLength {
                field: "mean",
                got: self.mean.len(),
                expected,
            });
        }
        if self.scale.len() != expected {
            return Err(ModelError::ScalerLength {
                field: "scale",
                got: self.scale.len(),
                expected,
            });
        }
        for (index, &value) in self.scale.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(ModelError::ScalerScale { index, value });
            }
        }
        Ok(())
    }

    /// Apply the fitted transform: `(x - mean) / scale` per feature.
    pub fn transform(&self, input: &FeatureVector) -> [f64; FEATURE_COUNT] {
        let mut scaled = [0.0; FEATURE_COUNT];
        for (i, (&x, out)) in input.values().iter().zip(scaled.iter_mut()).enumerate() {
            *out = (x - self.mean[i]) / self.scale[i];
        }
        scaled
    }
}
