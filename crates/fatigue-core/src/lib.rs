pub mod error;
pub mod features;
pub mod label;

pub use error::CoreError;
pub use features::{FEATURE_COUNT, FEATURES, Feature, FeatureVector, feature_index};
pub use label::{CLASS_COUNT, ClassLabel};
