use crate::config::data_dir;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stem_namer_core::{DEFAULT_LABELS_FILE, DEFAULT_LABELS_URL, LabelRefresh};

/// Class label file configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelsConfig {
    /// URL the class map is downloaded from.
    #[serde(default = "default_labels_url")]
    pub url: String,

    /// Local copy of the class map.
    #[serde(default = "default_labels_path")]
    pub path: PathBuf,

    /// When to re-download the class map.
    #[serde(default)]
    pub refresh: RefreshPolicy,
}

/// Label refresh policy as written in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshPolicy {
    /// Download on every run.
    #[default]
    Always,
    /// Download only when the local copy is missing.
    IfMissing,
}

impl From<RefreshPolicy> for LabelRefresh {
    fn from(policy: RefreshPolicy) -> Self {
        match policy {
            RefreshPolicy::Always => LabelRefresh::Always,
            RefreshPolicy::IfMissing => LabelRefresh::IfMissing,
        }
    }
}

impl LabelsConfig {
    pub(crate) fn in_data_dir(data_dir: &Path) -> Self {
        Self {
            url: default_labels_url(),
            path: data_dir.join(DEFAULT_LABELS_FILE),
            refresh: RefreshPolicy::default(),
        }
    }
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self::in_data_dir(&data_dir())
    }
}

fn default_labels_url() -> String {
    DEFAULT_LABELS_URL.to_string()
}

fn default_labels_path() -> PathBuf {
    data_dir().join(DEFAULT_LABELS_FILE)
}
