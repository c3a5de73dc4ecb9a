use crate::{CoreResult, StemError};

use std::panic::Location;

use audioadapter_buffers::direct::InterleavedSlice;
use error_location::ErrorLocation;
use rubato::{Fft, FixedSync, Resampler as RubatoResampler};
use tracing::{debug, instrument};

/// Input frames fed to the FFT resampler per call.
const CHUNK_SIZE: usize = 1024;
const SUB_CHUNKS: usize = 2;

/// Mono FFT resampler between two fixed rates.
pub struct Resampler {
    inner: Fft<f32>,
    input_rate: u32,
    output_rate: u32,
}

impl Resampler {
    /// Creates a mono resampler from `input_rate` to `output_rate`.
    #[track_caller]
    #[instrument]
    pub fn new(input_rate: u32, output_rate: u32) -> CoreResult<Self> {
        let inner = Fft::<f32>::new(
            input_rate as usize,
            output_rate as usize,
            CHUNK_SIZE,
            SUB_CHUNKS,
            1,
            FixedSync::Input,
        )
        .map_err(|e| resampling_error(format!("Failed to create resampler: {}", e)))?;

        debug!(
            input_rate = input_rate,
            output_rate = output_rate,
            "Resampler initialized"
        );

        Ok(Self {
            inner,
            input_rate,
            output_rate,
        })
    }

    /// Length the output of `input_len` samples is truncated to.
    pub fn expected_len(&self, input_len: usize) -> usize {
        (input_len as f64 * self.output_rate as f64 / self.input_rate as f64) as usize
    }

    /// Resamples a complete mono signal.
    ///
    /// The resampler's internal delay is removed so output sample 0 lines up
    /// with input sample 0. Zero chunks are fed after the signal until the
    /// delayed tail has been flushed, then the output is trimmed to
    /// [`Resampler::expected_len`].
    #[track_caller]
    #[instrument(skip(self, samples))]
    pub fn resample(&mut self, samples: &[f32]) -> CoreResult<Vec<f32>> {
        if samples.is_empty() {
            return Ok(Vec::new());
        }

        // Leftover input from a previous signal must not bleed into this one.
        self.inner.reset();

        let delay = self.inner.output_delay();
        let expected_len = self.expected_len(samples.len());
        let needed = delay + expected_len;
        let mut output = Vec::with_capacity(needed + self.inner.output_frames_max());
        let mut padded = [0.0f32; CHUNK_SIZE];

        for chunk in samples.chunks(CHUNK_SIZE) {
            let input = if chunk.len() == CHUNK_SIZE {
                chunk
            } else {
                padded[..chunk.len()].copy_from_slice(chunk);
                &padded[..]
            };
            self.process_chunk(input, &mut output)?;
        }

        let silence = [0.0f32; CHUNK_SIZE];
        while output.len() < needed {
            self.process_chunk(&silence, &mut output)?;
        }

        output.drain(..delay);
        output.truncate(expected_len);

        debug!(
            input_len = samples.len(),
            output_len = output.len(),
            delay = delay,
            input_rate = self.input_rate,
            output_rate = self.output_rate,
            "Resampled audio"
        );

        Ok(output)
    }

    #[track_caller]
    fn process_chunk(&mut self, input: &[f32], output: &mut Vec<f32>) -> CoreResult<()> {
        let input_adapter = InterleavedSlice::new(input, 1, CHUNK_SIZE)
            .map_err(|e| resampling_error(format!("Failed to create input adapter: {}", e)))?;

        let max_frames = self.inner.output_frames_max();
        let mut scratch = vec![0.0f32; max_frames];
        let mut output_adapter = InterleavedSlice::new_mut(&mut scratch, 1, max_frames)
            .map_err(|e| resampling_error(format!("Failed to create output adapter: {}", e)))?;

        let (_consumed, written) = self
            .inner
            .process_into_buffer(&input_adapter, &mut output_adapter, None)
            .map_err(|e| resampling_error(format!("Resampling failed: {}", e)))?;

        output.extend_from_slice(&scratch[..written]);
        Ok(())
    }
}

#[track_caller]
fn resampling_error(reason: String) -> StemError {
    StemError::ResamplingError {
        reason,
        location: ErrorLocation::from(Location::caller()),
    }
}
