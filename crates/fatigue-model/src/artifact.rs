//! Loading and validation of the fitted model artifacts.
//!
//! The model directory must contain `scaler.json` and `model.json`,
//! exported from the fitting run. Both are loaded once at startup and
//! never mutated; the pipeline borrows them read-only.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use fatigue_core::{CLASS_COUNT, FEATURE_COUNT};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::ModelError;
use crate::forest::Forest;
use crate::scaler::Scaler;

pub const SCALER_FILE: &str = "scaler.json";
pub const MODEL_FILE: &str = "model.json";

/// The two fitted collaborators, loaded and validated.
#[derive(Debug)]
pub struct Artifacts {
    pub scaler: Scaler,
    pub forest: Forest,
}

impl Artifacts {
    /// Load both artifacts from a model directory.
    ///
    /// Fails if either file is missing, unparsable, or fitted on
    /// dimensions other than 15 features and 3 classes.
    pub fn load(model_dir: &Path) -> Result<Self, ModelError> {
        let scaler_path = model_dir.join(SCALER_FILE);
        let model_path = model_dir.join(MODEL_FILE);

        if !scaler_path.exists() {
            return Err(ModelError::NotFound(scaler_path));
        }
        if !model_path.exists() {
            return Err(ModelError::NotFound(model_path));
        }

        let scaler: Scaler = read_json(&scaler_path)?;
        scaler.validate(FEATURE_COUNT)?;

        let forest: Forest = read_json(&model_path)?;
        forest.validate(FEATURE_COUNT, CLASS_COUNT)?;

        info!(
            trees = forest.trees.len(),
            dir = %model_dir.display(),
            "loaded model artifacts"
        );
        Ok(Self { scaler, forest })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    let file = File::open(path).map_err(|source| ModelError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| ModelError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
