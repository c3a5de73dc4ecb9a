use crate::config::{MODEL_FILE, data_dir};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Classifier model configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Path to the waveform-input YAMNet ONNX graph.
    pub path: PathBuf,
}

impl ModelConfig {
    pub(crate) fn in_data_dir(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("models").join(MODEL_FILE),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::in_data_dir(&data_dir())
    }
}
