mod decoder;
mod resampler;

#[cfg(test)]
pub(crate) use decoder::downmix;

pub use {
    decoder::{DecodedAudio, decode_file},
    resampler::Resampler,
};

use crate::CoreResult;

use std::path::Path;

use tracing::instrument;

/// Sample rate the classifier model expects.
pub const MODEL_SAMPLE_RATE: u32 = 16_000;

/// Decodes `path` to mono and resamples it to [`MODEL_SAMPLE_RATE`].
#[track_caller]
#[instrument]
pub fn load_mono_16k(path: &Path) -> CoreResult<Vec<f32>> {
    let decoded = decode_file(path)?;

    if decoded.sample_rate == MODEL_SAMPLE_RATE {
        return Ok(decoded.samples);
    }

    Resampler::new(decoded.sample_rate, MODEL_SAMPLE_RATE)?.resample(&decoded.samples)
}
