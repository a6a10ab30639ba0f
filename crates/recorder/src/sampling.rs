//! Fixed-cadence sampling loop.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use reframe_common::LoopHandle;
use reframe_session_model::{CropSnapshot, MediaPlayback};
use tokio::sync::watch;

use crate::Recorder;

/// Default interval between samples.
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// Handle to a running sampling loop.
///
/// Each tick reads the latest published crop snapshot and a fresh
/// playback snapshot, then hands both to the recorder. Cancellation
/// aborts the underlying task, so no sample lands after [`stop`] — even
/// a tick the timer had already queued.
///
/// [`stop`]: SamplingLoop::stop
pub struct SamplingLoop {
    handle: LoopHandle,
}

impl SamplingLoop {
    /// Spawn the sampling loop at the given interval.
    pub fn start(
        recorder: Arc<Mutex<Recorder>>,
        snapshot_rx: watch::Receiver<Option<CropSnapshot>>,
        playback: Arc<dyn MediaPlayback>,
        interval: Duration,
    ) -> Self {
        let handle = LoopHandle::every(interval, move || {
            let Ok(mut recorder) = recorder.lock() else {
                return;
            };
            if !recorder.is_armed() {
                return;
            }
            let snapshot = *snapshot_rx.borrow();
            recorder.sample(snapshot.as_ref(), &playback.snapshot());
        });

        Self { handle }
    }

    /// Cancel the loop unconditionally.
    pub fn stop(&self) {
        self.handle.cancel();
    }

    /// Whether the loop task has stopped.
    pub fn is_stopped(&self) -> bool {
        self.handle.is_finished()
    }
}
