use crate::{CoreResult, StemError};

use std::{fs::File, io::ErrorKind, panic::Location, path::Path};

use error_location::ErrorLocation;
use symphonia::core::{
    audio::SampleBuffer,
    codecs::{CODEC_TYPE_NULL, DecoderOptions},
    errors::Error as SymphoniaError,
    formats::FormatOptions,
    io::MediaSourceStream,
    meta::MetadataOptions,
    probe::Hint,
};
use tracing::{debug, instrument, warn};

/// Mono PCM samples at the file's native rate.
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    /// Mono samples in `[-1.0, 1.0]`.
    pub samples: Vec<f32>,
    /// Native sample rate of the decoded track.
    pub sample_rate: u32,
}

/// Decodes the first audio track of `path` and downmixes it to mono.
///
/// Corrupt packets are skipped. Any other decoder or container error aborts
/// decoding.
#[track_caller]
#[instrument]
pub fn decode_file(path: &Path) -> CoreResult<DecodedAudio> {
    if !path.exists() {
        return Err(StemError::AudioNotFound {
            path: path.to_path_buf(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let decode_failed = |reason: String| StemError::DecodeFailed {
        path: path.to_path_buf(),
        reason,
        location: ErrorLocation::from(Location::caller()),
    };

    let file = File::open(path)?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| decode_failed(format!("Unrecognised format: {}", e)))?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| decode_failed("No supported audio track".to_string()))?;
    let track_id = track.id;
    let codec_params = track.codec_params.clone();

    let mut decoder = symphonia::default::get_codecs()
        .make(&codec_params, &DecoderOptions::default())
        .map_err(|e| decode_failed(format!("Unsupported codec: {}", e)))?;

    let mut sample_rate = codec_params.sample_rate;
    let mut samples = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(e)) if e.kind() == ErrorKind::UnexpectedEof => break,
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => return Err(decode_failed(format!("Failed to read packet: {}", e))),
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                let spec = *decoded.spec();
                if sample_rate.is_none() {
                    sample_rate = Some(spec.rate);
                }

                let mut buffer = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
                buffer.copy_interleaved_ref(decoded);
                samples.extend(downmix(buffer.samples(), spec.channels.count()));
            }
            Err(SymphoniaError::DecodeError(reason)) => {
                warn!(path = ?path, reason = reason, "Skipping corrupt packet");
            }
            Err(e) => return Err(decode_failed(format!("Decoder error: {}", e))),
        }
    }

    let sample_rate =
        sample_rate.ok_or_else(|| decode_failed("Track has no sample rate".to_string()))?;

    if samples.is_empty() {
        return Err(StemError::NoAudioDecoded {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    debug!(
        path = ?path,
        sample_rate = sample_rate,
        sample_count = samples.len(),
        "Decoded audio"
    );

    Ok(DecodedAudio {
        samples,
        sample_rate,
    })
}

/// Averages interleaved frames into a single channel.
pub(crate) fn downmix(interleaved: &[f32], channels: usize) -> Vec<f32> {
    match channels {
        0 => Vec::new(),
        1 => interleaved.to_vec(),
        n => interleaved
            .chunks_exact(n)
            .map(|frame| frame.iter().sum::<f32>() / n as f32)
            .collect(),
    }
}
