//! Inference layer: fitted artifacts, classification, and tree-path attribution.

mod artifact;
mod error;
mod explain;
mod forest;
mod pipeline;
mod scaler;

pub use artifact::{Artifacts, MODEL_FILE, SCALER_FILE};
pub use error::ModelError;
pub use explain::{Explainer, Importance, rank_importances};
pub use forest::{Forest, Node, Tree};
pub use pipeline::Pipeline;
pub use scaler::Scaler;
