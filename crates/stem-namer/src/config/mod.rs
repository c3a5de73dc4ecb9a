mod labels_config;
#[allow(clippy::module_inception)]
mod config;
mod model_config;

pub(crate) use {config::Config, labels_config::LabelsConfig, model_config::ModelConfig};

#[cfg(test)]
pub(crate) use labels_config::RefreshPolicy;

use std::path::PathBuf;

use directories::ProjectDirs;

pub(crate) const QUALIFIER: &str = "com";
pub(crate) const ORGANIZATION: &str = "stem-namer";
pub(crate) const APPLICATION: &str = "Stem-Namer";

pub(crate) const CONFIG_FILE: &str = "config.toml";
pub(crate) const MODEL_FILE: &str = "yamnet.onnx";

pub(crate) fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Application data directory, or the working directory when the platform
/// has no home directory.
pub(crate) fn data_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
