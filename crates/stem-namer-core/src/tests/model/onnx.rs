use crate::{OnnxSoundModel, StemError};

#[cfg(feature = "integration-tests")]
use crate::SoundModel;

use std::path::PathBuf;

/// YAMNet scores 521 AudioSet classes.
#[cfg(feature = "integration-tests")]
const YAMNET_CLASSES: usize = 521;

/// WHAT: OnnxSoundModel rejects non-existent model path
/// WHY: Early validation prevents runtime failures
#[test]
fn given_invalid_model_path_when_loading_model_then_model_not_found_error() {
    // Given: Path to non-existent model
    let invalid_path = PathBuf::from("/nonexistent/yamnet.onnx");

    // When: Attempting to load the model
    let result = OnnxSoundModel::new(&invalid_path);

    // Then: Returns ModelNotFound error
    assert!(matches!(result, Err(StemError::ModelNotFound { .. })));
}

/// WHAT: A file that is not an ONNX graph fails to load
/// WHY: Corrupt downloads must surface as inference errors
#[test]
fn given_garbage_model_file_when_loading_model_then_inference_failed_error() {
    // Given: A file with non-protobuf content
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("yamnet.onnx");
    std::fs::write(&path, b"\xff\xff\xff not a model").unwrap();

    // When: Loading it
    let result = OnnxSoundModel::new(&path);

    // Then: Returns InferenceFailed
    assert!(matches!(result, Err(StemError::InferenceFailed { .. })));
}

/// WHAT: One second of silence yields a full score matrix
/// WHY: Validates the waveform-input YAMNet export end to end
#[test]
#[cfg(feature = "integration-tests")]
fn given_silence_when_scoring_then_yamnet_class_width() {
    // Given: The real model
    let model_path = std::env::var("TEST_YAMNET_MODEL_PATH")
        .unwrap_or_else(|_| "models/yamnet.onnx".to_string());
    let model = OnnxSoundModel::new(&model_path).unwrap();
    let silence = vec![0.0f32; 16000];

    // When: Scoring
    let scores = model.scores(&silence).unwrap();

    // Then: At least one frame of 521 classes
    assert_eq!(scores.classes(), YAMNET_CLASSES);
    assert!(scores.frames() >= 1);
}

/// WHAT: Empty waveform is rejected before inference
/// WHY: The graph cannot be specialised to a zero-length input
#[test]
#[cfg(feature = "integration-tests")]
fn given_empty_waveform_when_scoring_then_no_audio_decoded_error() {
    let model_path = std::env::var("TEST_YAMNET_MODEL_PATH")
        .unwrap_or_else(|_| "models/yamnet.onnx".to_string());
    let model = OnnxSoundModel::new(&model_path).unwrap();

    let result = model.scores(&[]);

    assert!(matches!(result, Err(StemError::NoAudioDecoded { .. })));
}

/// WHAT: Scoring the same length twice reuses the plan and matches
/// WHY: Stems of one session share a length and must not pay optimisation twice
#[test]
#[cfg(feature = "integration-tests")]
fn given_same_length_twice_when_scoring_then_identical_scores() {
    let model_path = std::env::var("TEST_YAMNET_MODEL_PATH")
        .unwrap_or_else(|_| "models/yamnet.onnx".to_string());
    let model = OnnxSoundModel::new(&model_path).unwrap();
    let tone: Vec<f32> = (0..16000).map(|i| (i as f32 * 0.05).sin() * 0.3).collect();

    let first = model.scores(&tone).unwrap();
    let second = model.scores(&tone).unwrap();
    let other_length = model.scores(&tone[..8000]).unwrap();

    assert_eq!(first, second);
    assert_eq!(other_length.classes(), YAMNET_CLASSES);
}
