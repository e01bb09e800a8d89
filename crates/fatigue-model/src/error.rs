use std::path::PathBuf;

use fatigue_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("artifact not found: {0}")]
    NotFound(PathBuf),

    #[error("reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("scaler {field} has length {got}, expected {expected}")]
    ScalerLength {
        field: &'static str,
        got: usize,
        expected: usize,
    },

    #[error("scaler scale[{index}] is {value}, must be finite and positive")]
    ScalerScale { index: usize, value: f64 },

    #[error("model was fitted on {got} features, expected {expected}")]
    FeatureCount { got: usize, expected: usize },

    #[error("model was fitted on {got} classes, expected {expected}")]
    ClassCount { got: usize, expected: usize },

    #[error("model has no trees")]
    EmptyEnsemble,

    #[error("tree {tree}, node {node}: {detail}")]
    MalformedTree {
        tree: usize,
        node: usize,
        detail: String,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}
