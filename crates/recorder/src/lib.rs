//! Reframe Recorder
//!
//! Samples the cropper rectangle plus playback parameters into a
//! normalized, replayable time series. The recorder itself is a small
//! synchronous state machine ([`Recorder`]); the 1 Hz cadence comes from
//! [`sampling::SamplingLoop`], a cancellable periodic task.
//!
//! Sampling is best-effort per tick: when the display bounds are
//! degenerate or no crop snapshot is published, the tick appends nothing
//! and raises nothing.

pub mod sampling;

use reframe_common::{ReframeError, ReframeResult};
use reframe_session_model::{serialize_samples, CropSnapshot, PlaybackState, Sample};

pub use sampling::{SamplingLoop, DEFAULT_SAMPLE_INTERVAL};

/// Recording state of the recorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderState {
    /// Not recording; the accumulated sequence is kept.
    Disarmed,
    /// Recording; each tick may append one sample.
    Armed,
}

/// Accumulates ordered, timestamped crop samples while armed.
#[derive(Debug)]
pub struct Recorder {
    state: RecorderState,
    samples: Vec<Sample>,
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            state: RecorderState::Disarmed,
            samples: Vec::new(),
        }
    }

    pub fn state(&self) -> RecorderState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        self.state == RecorderState::Armed
    }

    /// The accumulated sequence, in recording order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Arm the recorder: clear the sequence and take the time-zero sample
    /// immediately (best-effort, like every later tick).
    pub fn start(&mut self, snapshot: Option<&CropSnapshot>, playback: &PlaybackState) {
        self.samples.clear();
        self.state = RecorderState::Armed;
        self.sample(snapshot, playback);
        tracing::debug!(samples = self.samples.len(), "Recorder armed");
    }

    /// Disarm. The accumulated sequence stays as recorded.
    pub fn stop(&mut self) {
        self.state = RecorderState::Disarmed;
        tracing::debug!(samples = self.samples.len(), "Recorder disarmed");
    }

    /// Take one sample. Returns whether a sample was appended; skips
    /// silently while disarmed or when the snapshot is unusable.
    pub fn sample(&mut self, snapshot: Option<&CropSnapshot>, playback: &PlaybackState) -> bool {
        if self.state != RecorderState::Armed {
            return false;
        }
        let Some(snapshot) = snapshot else {
            return false;
        };
        match Sample::normalized(snapshot, playback) {
            Some(sample) => {
                self.samples.push(sample);
                true
            }
            None => false,
        }
    }

    /// Serialize the sequence to the exported JSON document. Does not
    /// mutate state; valid in either recorder state.
    pub fn export(&self) -> ReframeResult<String> {
        serialize_samples(&self.samples).map_err(ReframeError::from)
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}
