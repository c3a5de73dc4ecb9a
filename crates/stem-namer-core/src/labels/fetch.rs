use crate::{CoreResult, StemError};

use std::{
    fs,
    io::{Read, Write},
    panic::Location,
    path::{Path, PathBuf},
    time::Duration,
};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument};

/// Upstream YAMNet class map.
pub const DEFAULT_LABELS_URL: &str = "https://raw.githubusercontent.com/tensorflow/models/master/research/audioset/yamnet/yamnet_class_map.csv";

/// Local file name the class map is stored under.
pub const DEFAULT_LABELS_FILE: &str = "yamnet_class_map.csv";

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// When the local label file is refreshed from its URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelRefresh {
    /// Download on every run.
    #[default]
    Always,
    /// Download only when the local file does not exist.
    IfMissing,
}

/// Where the class labels come from and where they are kept.
#[derive(Debug, Clone)]
pub struct LabelSource {
    /// Remote location of the label file.
    pub url: String,
    /// Local copy of the label file.
    pub path: PathBuf,
    /// Refresh policy for the local copy.
    pub refresh: LabelRefresh,
}

/// Makes sure the local label file is present according to the refresh
/// policy and returns its path.
#[track_caller]
#[instrument]
pub fn ensure_labels(source: &LabelSource) -> CoreResult<PathBuf> {
    if source.refresh == LabelRefresh::IfMissing && source.path.exists() {
        debug!(path = ?source.path, "Reusing local label file");
        return Ok(source.path.clone());
    }

    fetch_labels(&source.url, &source.path)?;
    Ok(source.path.clone())
}

/// Downloads `url` into `dest`, replacing any existing file.
///
/// The body goes to a temporary sibling first and is renamed into place, so
/// an interrupted download never leaves a truncated label file behind.
#[track_caller]
#[instrument]
pub fn fetch_labels(url: &str, dest: &Path) -> CoreResult<()> {
    let download_failed = |reason: String| StemError::LabelDownloadFailed {
        url: url.to_string(),
        reason,
        location: ErrorLocation::from(Location::caller()),
    };

    let response = ureq::AgentBuilder::new()
        .try_proxy_from_env(true)
        .timeout(DOWNLOAD_TIMEOUT)
        .build()
        .get(url)
        .call()
        .map_err(|e| download_failed(e.to_string()))?;

    let mut body = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut body)
        .map_err(|e| download_failed(format!("Failed to read body: {}", e)))?;

    write_atomically(dest, &body)?;

    info!(url = url, path = ?dest, bytes = body.len(), "Label file downloaded");

    Ok(())
}

/// Writes `bytes` to a `.download` sibling of `dest` and renames it into
/// place. The sibling is removed if any step fails.
#[track_caller]
pub(crate) fn write_atomically(dest: &Path, bytes: &[u8]) -> CoreResult<()> {
    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let temp_path = dest.with_extension("download");
    let written = fs::File::create(&temp_path)
        .and_then(|mut file| file.write_all(bytes).and_then(|_| file.sync_all()))
        .and_then(|_| fs::rename(&temp_path, dest));

    if let Err(e) = written {
        if let Err(cleanup) = fs::remove_file(&temp_path) {
            debug!(path = ?temp_path, error = %cleanup, "Temp label file not removed");
        }
        return Err(e.into());
    }

    Ok(())
}
