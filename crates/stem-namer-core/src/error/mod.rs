use std::{panic::Location, path::PathBuf};

use error_location::ErrorLocation;
use thiserror::Error;

/// Classification pipeline errors with source location tracking.
#[derive(Error, Debug)]
pub enum StemError {
    /// Audio file does not exist.
    #[error("Audio file not found at path: {path:?} {location}")]
    AudioNotFound {
        /// Path to the missing audio file.
        path: PathBuf,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Audio container or codec could not be decoded.
    #[error("Failed to decode {path:?}: {reason} {location}")]
    DecodeFailed {
        /// Path of the file being decoded.
        path: PathBuf,
        /// Description of the decode failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Decoding succeeded but produced no samples.
    #[error("No audio decoded {location}")]
    NoAudioDecoded {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Audio resampling failed.
    #[error("Resampling error: {reason} {location}")]
    ResamplingError {
        /// Description of the resampling error.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Classifier model file not found at specified path.
    #[error("Model not found at path: {path:?} {location}")]
    ModelNotFound {
        /// Path to the missing model file.
        path: PathBuf,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Model loading or inference failed.
    #[error("Inference failed: {source} {location}")]
    InferenceFailed {
        /// Underlying error from the inference backend.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Class label file could not be fetched.
    #[error("Failed to download labels from {url}: {reason} {location}")]
    LabelDownloadFailed {
        /// Source URL of the label file.
        url: String,
        /// Description of the download failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Class label file is malformed or empty.
    #[error("Vocabulary error: {reason} {location}")]
    VocabularyError {
        /// Description of the parse failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Model score width and vocabulary length disagree.
    #[error("Model produces {model_classes} classes but vocabulary has {vocabulary_len} {location}")]
    VocabularyMismatch {
        /// Number of score columns produced by the model.
        model_classes: usize,
        /// Number of names in the loaded vocabulary.
        vocabulary_len: usize,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// IO error from filesystem operations.
    #[error("IO error: {source} {location}")]
    Io {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl From<std::io::Error> for StemError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        StemError::Io {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Result type alias using [`StemError`].
pub type Result<T> = std::result::Result<T, StemError>;
