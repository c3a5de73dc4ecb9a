use crate::{CoreResult, StemError, model::ScoreMatrix, model::SoundModel};

use std::{cell::RefCell, panic::Location, path::Path};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument};
use tract_onnx::prelude::*;

/// YAMNet-style ONNX classifier taking a raw 16 kHz waveform.
///
/// The graph is loaded once. The waveform input has no fixed size, so the
/// graph is specialised to each waveform length and optimised before running.
/// The last optimised plan is kept and reused while consecutive waveforms
/// share a length; any other length pays the full optimisation again.
pub struct OnnxSoundModel {
    model: InferenceModel,
    cached: RefCell<Option<(usize, RunnablePlan)>>,
}

type RunnablePlan = TypedRunnableModel<TypedModel>;

impl OnnxSoundModel {
    /// Loads the ONNX graph at `model_path`.
    #[track_caller]
    #[instrument(skip(model_path))]
    pub fn new<P: AsRef<Path>>(model_path: P) -> CoreResult<Self> {
        let path = model_path.as_ref();

        if !path.exists() {
            return Err(StemError::ModelNotFound {
                path: path.to_path_buf(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let model = tract_onnx::onnx()
            .model_for_path(path)
            .map_err(|e| StemError::InferenceFailed {
                source: e.into(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(model_path = ?path, "Classifier model loaded");

        Ok(Self {
            model,
            cached: RefCell::new(None),
        })
    }

    /// Specialises the graph to a waveform of `len` samples.
    #[instrument(skip(self))]
    fn specialise(&self, len: usize) -> TractResult<RunnablePlan> {
        let plan = self
            .model
            .clone()
            .with_input_fact(0, InferenceFact::dt_shape(f32::datum_type(), tvec!(len)))?
            .into_optimized()?
            .into_runnable()?;

        debug!(sample_count = len, "Optimised plan for waveform length");

        Ok(plan)
    }
}

impl SoundModel for OnnxSoundModel {
    fn num_classes(&self) -> Option<usize> {
        None
    }

    #[track_caller]
    #[instrument(skip(self, waveform))]
    fn scores(&self, waveform: &[f32]) -> CoreResult<ScoreMatrix> {
        if waveform.is_empty() {
            return Err(StemError::NoAudioDecoded {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let inference_failed = |e: TractError| StemError::InferenceFailed {
            source: e.into(),
            location: ErrorLocation::from(Location::caller()),
        };

        let plan = match self.cached.take() {
            Some((len, plan)) if len == waveform.len() => plan,
            _ => self.specialise(waveform.len()).map_err(inference_failed)?,
        };

        let input: Tensor = tract_ndarray::Array1::from(waveform.to_vec()).into();
        let outputs = plan.run(tvec!(input.into()));
        self.cached.replace(Some((waveform.len(), plan)));
        let outputs = outputs.map_err(inference_failed)?;

        let scores = outputs.first().ok_or_else(|| StemError::InferenceFailed {
            source: "Model produced no outputs".into(),
            location: ErrorLocation::from(Location::caller()),
        })?;
        let view = scores.to_array_view::<f32>().map_err(inference_failed)?;
        let shape = view.shape().to_vec();
        let classes = shape.last().copied().unwrap_or(0);

        let matrix = ScoreMatrix::new(view.iter().copied().collect(), classes).ok_or_else(|| {
            StemError::InferenceFailed {
                source: format!("Unexpected score shape {:?}", shape).into(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        debug!(
            sample_count = waveform.len(),
            frames = matrix.frames(),
            classes = matrix.classes(),
            "Inference complete"
        );

        Ok(matrix)
    }
}
