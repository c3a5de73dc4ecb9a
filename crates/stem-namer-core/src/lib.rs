//! Stem-namer Core Library
//!
//! Classifies audio files into short, Pro Tools-friendly track names using a
//! pretrained audio-event model (YAMNet), Symphonia decoding and Rubato
//! resampling.
//!
//! # Example
//!
//! ```no_run
//! use stem_namer_core::{
//!     Classifier, CoreResult, DEFAULT_CONFIDENCE_THRESHOLD, OnnxSoundModel, Vocabulary,
//! };
//!
//! use std::path::Path;
//!
//! fn main() -> CoreResult<()> {
//!     let model = OnnxSoundModel::new("models/yamnet.onnx")?;
//!     let vocabulary = Vocabulary::from_path(Path::new("yamnet_class_map.csv"))?;
//!     let classifier = Classifier::new(model, vocabulary)?;
//!
//!     let labels = classifier.classify(&["kick.wav", "vox.flac"], DEFAULT_CONFIDENCE_THRESHOLD)?;
//!     println!("{:?}", labels);
//!     Ok(())
//! }
//! ```

mod audio;
mod classifier;
mod error;
mod labels;
mod model;

pub use {
    audio::{DecodedAudio, MODEL_SAMPLE_RATE, Resampler, decode_file, load_mono_16k},
    classifier::{Classifier, DEFAULT_CONFIDENCE_THRESHOLD, UNKNOWN_SOUND, resolve_label},
    error::{Result as CoreResult, StemError},
    labels::{
        DEFAULT_LABELS_FILE, DEFAULT_LABELS_URL, LabelRefresh, LabelSource, SHORT_NAMES,
        Vocabulary, ensure_labels, fetch_labels, short_name_for,
    },
    model::{OnnxSoundModel, ScoreMatrix, SoundModel},
};
