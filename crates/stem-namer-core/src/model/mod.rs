mod onnx;

pub use onnx::OnnxSoundModel;

use crate::CoreResult;

/// Pretrained audio-event classifier treated as a black box.
///
/// Implementations take a 16 kHz mono waveform and return one row of class
/// scores per analysis frame.
pub trait SoundModel {
    /// Number of score columns, if known before the first inference.
    fn num_classes(&self) -> Option<usize>;

    /// Runs inference over `waveform`.
    fn scores(&self, waveform: &[f32]) -> CoreResult<ScoreMatrix>;
}

/// Per-frame class scores, row-major `frames x classes`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    data: Vec<f32>,
    classes: usize,
}

impl ScoreMatrix {
    /// Wraps row-major scores. Returns `None` unless `data` holds at least
    /// one whole `classes`-wide row.
    pub fn new(data: Vec<f32>, classes: usize) -> Option<Self> {
        if classes == 0 || data.is_empty() || data.len() % classes != 0 {
            return None;
        }
        Some(Self { data, classes })
    }

    /// Builds a matrix from explicit frame rows. All rows must share a width.
    pub fn from_frames(frames: &[Vec<f32>]) -> Option<Self> {
        let classes = frames.first()?.len();
        if frames.iter().any(|f| f.len() != classes) {
            return None;
        }
        Self::new(frames.concat(), classes)
    }

    /// Number of analysis frames.
    pub fn frames(&self) -> usize {
        self.data.len() / self.classes
    }

    /// Number of classes per frame.
    pub fn classes(&self) -> usize {
        self.classes
    }

    /// Mean score of every class across all frames.
    pub fn mean_scores(&self) -> Vec<f32> {
        let frames = self.frames();
        let mut sums = vec![0.0f64; self.classes];

        for row in self.data.chunks_exact(self.classes) {
            for (sum, &score) in sums.iter_mut().zip(row) {
                *sum += f64::from(score);
            }
        }

        sums.into_iter()
            .map(|sum| (sum / frames as f64) as f32)
            .collect()
    }
}
