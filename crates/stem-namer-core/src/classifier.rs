use crate::{
    CoreResult, StemError,
    audio::load_mono_16k,
    labels::{Vocabulary, short_name_for},
    model::SoundModel,
};

use std::{panic::Location, path::Path};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument};

/// Label emitted when no confident, mappable class is found.
pub const UNKNOWN_SOUND: &str = "Unknown Sound";

/// Minimum top mean score the `classify` command requires.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.5;

/// Immutable classification context: the model and its vocabulary.
///
/// Built once before a batch and borrowed for every file.
pub struct Classifier<M> {
    model: M,
    vocabulary: Vocabulary,
}

impl<M: SoundModel> Classifier<M> {
    /// Pairs a model with the vocabulary naming its score columns.
    ///
    /// # Errors
    ///
    /// Returns [`StemError::VocabularyMismatch`] if the model reports a class
    /// count different from the vocabulary length.
    #[track_caller]
    pub fn new(model: M, vocabulary: Vocabulary) -> CoreResult<Self> {
        if let Some(model_classes) = model.num_classes() {
            check_alignment(model_classes, &vocabulary)?;
        }

        info!(classes = vocabulary.len(), "Classifier ready");

        Ok(Self { model, vocabulary })
    }

    /// Classifies every file in order, one label per path.
    ///
    /// Any decode or inference failure aborts the whole batch.
    #[track_caller]
    #[instrument(skip(self, paths), fields(files = paths.len()))]
    pub fn classify<P: AsRef<Path>>(
        &self,
        paths: &[P],
        confidence_threshold: f32,
    ) -> CoreResult<Vec<String>> {
        let mut labels = Vec::with_capacity(paths.len());

        for path in paths {
            let label = self.classify_file(path.as_ref(), confidence_threshold)?;
            labels.push(label.to_string());
        }

        Ok(labels)
    }

    /// Decodes, resamples and classifies a single file.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn classify_file(
        &self,
        path: &Path,
        confidence_threshold: f32,
    ) -> CoreResult<&'static str> {
        let waveform = load_mono_16k(path)?;
        let label = self.classify_waveform(&waveform, confidence_threshold)?;

        debug!(path = ?path, label = label, "File classified");

        Ok(label)
    }

    /// Classifies a 16 kHz mono waveform.
    #[track_caller]
    #[instrument(skip(self, waveform))]
    pub fn classify_waveform(
        &self,
        waveform: &[f32],
        confidence_threshold: f32,
    ) -> CoreResult<&'static str> {
        let scores = self.model.scores(waveform)?;
        check_alignment(scores.classes(), &self.vocabulary)?;

        Ok(resolve_label(
            &scores.mean_scores(),
            &self.vocabulary,
            confidence_threshold,
        ))
    }
}

/// Picks the short label for one file's mean class scores.
///
/// Only the single best score is held against `confidence_threshold`. Once it
/// passes, classes are tried from best to worst and the first whose name
/// contains a short-name key decides the label.
pub fn resolve_label(
    mean_scores: &[f32],
    vocabulary: &Vocabulary,
    confidence_threshold: f32,
) -> &'static str {
    let mut ranked: Vec<usize> = (0..mean_scores.len()).collect();
    // Stable sort: equal scores keep ascending index order.
    ranked.sort_by(|&a, &b| mean_scores[b].total_cmp(&mean_scores[a]));

    let Some(&top) = ranked.first() else {
        return UNKNOWN_SOUND;
    };

    if mean_scores[top] < confidence_threshold {
        debug!(
            top_score = mean_scores[top],
            threshold = confidence_threshold,
            "Top score below threshold"
        );
        return UNKNOWN_SOUND;
    }

    ranked
        .iter()
        .filter_map(|&index| vocabulary.get(index))
        .find_map(short_name_for)
        .unwrap_or(UNKNOWN_SOUND)
}

#[track_caller]
fn check_alignment(model_classes: usize, vocabulary: &Vocabulary) -> CoreResult<()> {
    if model_classes != vocabulary.len() {
        return Err(StemError::VocabularyMismatch {
            model_classes,
            vocabulary_len: vocabulary.len(),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}
