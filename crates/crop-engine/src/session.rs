//! Edit session orchestration.
//!
//! An [`EditSession`] owns the cropper state machine, the preview render
//! loop, and the recording sampler, and publishes every recomputed rect
//! as one atomic [`CropSnapshot`] over a watch channel. Both loops read
//! the channel, so a bounds change is always fully recomputed before the
//! next render or sample tick observes it.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use reframe_common::{AppConfig, RecordingClock, ReframeError, ReframeResult};
use reframe_preview_engine::{FrameSource, PreviewLoop, Surface, DEFAULT_PREVIEW_FPS};
use reframe_recorder::{Recorder, SamplingLoop, DEFAULT_SAMPLE_INTERVAL};
use reframe_session_model::{
    AspectRatio, CropSnapshot, DisplayBounds, MediaPlayback, PlaybackState, Point, Sample,
};
use tokio::sync::watch;

use crate::cropper::CropperState;

/// Tunables for a session's loops and preview surface.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Fixed reference width of the preview surface.
    pub preview_reference_width: u32,

    /// Render loop tick rate.
    pub preview_fps: u32,

    /// Interval between recorded samples.
    pub sample_interval: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            preview_reference_width: 300,
            preview_fps: DEFAULT_PREVIEW_FPS,
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
        }
    }
}

impl From<&AppConfig> for SessionOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            preview_reference_width: config.preview.reference_width,
            preview_fps: config.preview.fps,
            sample_interval: Duration::from_millis(config.sampling.interval_ms),
        }
    }
}

/// Coordinates the cropper, the preview loop, and the recorder against
/// one media playback provider and frame source.
pub struct EditSession {
    cropper: CropperState,
    playback: Arc<dyn MediaPlayback>,
    frames: Arc<dyn FrameSource>,
    options: SessionOptions,

    snapshot_tx: watch::Sender<Option<CropSnapshot>>,
    surface: Arc<Mutex<Surface>>,
    preview: Option<PreviewLoop>,

    recorder: Arc<Mutex<Recorder>>,
    sampler: Option<SamplingLoop>,
    clock: Option<RecordingClock>,
}

impl EditSession {
    pub fn new(
        playback: Arc<dyn MediaPlayback>,
        frames: Arc<dyn FrameSource>,
        aspect: AspectRatio,
        options: SessionOptions,
    ) -> Self {
        let (snapshot_tx, _) = watch::channel(None);
        let surface = Arc::new(Mutex::new(Surface::for_aspect(
            aspect,
            options.preview_reference_width,
        )));

        Self {
            cropper: CropperState::new(aspect),
            playback,
            frames,
            options,
            snapshot_tx,
            surface,
            preview: None,
            recorder: Arc::new(Mutex::new(Recorder::new())),
            sampler: None,
            clock: None,
        }
    }

    pub fn cropper(&self) -> &CropperState {
        &self.cropper
    }

    /// The surface the preview loop renders into.
    pub fn preview_surface(&self) -> Arc<Mutex<Surface>> {
        self.surface.clone()
    }

    pub fn is_recording(&self) -> bool {
        self.sampler.is_some()
    }

    // Cropper lifecycle

    /// Activate the cropper and start the preview render loop.
    pub fn activate_cropper(&mut self, bounds: DisplayBounds) -> ReframeResult<()> {
        self.cropper.activate(bounds)?;
        self.publish();

        if self.preview.is_none() {
            self.preview = Some(PreviewLoop::start(
                self.frames.clone(),
                self.snapshot_tx.subscribe(),
                self.surface.clone(),
                self.options.preview_fps,
            ));
            tracing::info!(fps = self.options.preview_fps, "Preview loop started");
        }
        Ok(())
    }

    /// Deactivate the cropper and cancel the preview loop. Idempotent.
    pub fn deactivate_cropper(&mut self) {
        if let Some(preview) = self.preview.take() {
            preview.stop();
            tracing::info!("Preview loop stopped");
        }
        self.cropper.deactivate();
        self.publish();
    }

    pub fn set_aspect_ratio(&mut self, aspect: AspectRatio) {
        self.cropper.set_aspect_ratio(aspect);
        if let Ok(mut surface) = self.surface.lock() {
            *surface = Surface::for_aspect(aspect, self.options.preview_reference_width);
        }
        self.publish();
    }

    pub fn display_bounds_changed(&mut self, bounds: DisplayBounds) {
        self.cropper.display_bounds_changed(bounds);
        self.publish();
    }

    pub fn begin_drag(&mut self, pointer: Point) -> ReframeResult<()> {
        self.cropper.begin_drag(pointer)?;
        self.publish();
        Ok(())
    }

    pub fn update_drag(&mut self, pointer: Point) -> ReframeResult<()> {
        self.cropper.update_drag(pointer)?;
        self.publish();
        Ok(())
    }

    pub fn end_drag(&mut self) {
        self.cropper.end_drag();
        self.publish();
    }

    // Recording

    /// Arm the recorder (clearing any previous sequence), take the
    /// time-zero sample, and start the sampling loop.
    pub fn start_recording(&mut self) -> ReframeResult<()> {
        if self.sampler.is_some() {
            return Err(ReframeError::session("recording already started"));
        }

        let clock = RecordingClock::start();
        {
            let mut recorder = self.lock_recorder()?;
            let snapshot = self.cropper.snapshot();
            recorder.start(snapshot.as_ref(), &self.playback.snapshot());
        }

        self.sampler = Some(SamplingLoop::start(
            self.recorder.clone(),
            self.snapshot_tx.subscribe(),
            self.playback.clone(),
            self.options.sample_interval,
        ));
        tracing::info!(epoch_wall = %clock.epoch_wall(), "Recording started");
        self.clock = Some(clock);
        Ok(())
    }

    /// Cancel the sampling loop and disarm the recorder. The accumulated
    /// sequence stays available for export.
    pub fn stop_recording(&mut self) -> ReframeResult<()> {
        let Some(sampler) = self.sampler.take() else {
            return Err(ReframeError::session("not recording"));
        };
        sampler.stop();

        let duration_secs = self
            .clock
            .take()
            .map(|clock| clock.elapsed_secs())
            .unwrap_or(0.0);

        let mut recorder = self.lock_recorder()?;
        recorder.stop();
        tracing::info!(
            duration_secs,
            samples = recorder.len(),
            "Recording stopped"
        );
        Ok(())
    }

    /// Serialize the recorded sequence to the exported JSON document.
    pub fn export_samples(&self) -> ReframeResult<String> {
        self.lock_recorder()?.export()
    }

    /// A copy of the recorded sequence.
    pub fn recorded_samples(&self) -> ReframeResult<Vec<Sample>> {
        Ok(self.lock_recorder()?.samples().to_vec())
    }

    pub fn sample_count(&self) -> usize {
        self.lock_recorder().map(|r| r.len()).unwrap_or(0)
    }

    // Playback pass-through

    pub fn playback_snapshot(&self) -> PlaybackState {
        self.playback.snapshot()
    }

    pub fn play(&self) {
        self.playback.play();
    }

    pub fn pause(&self) {
        self.playback.pause();
    }

    pub fn seek(&self, secs: f64) {
        self.playback.seek(secs);
    }

    pub fn set_volume(&self, volume: f64) {
        self.playback.set_volume(volume);
    }

    pub fn set_playback_rate(&self, rate: f64) {
        self.playback.set_playback_rate(rate);
    }

    pub fn set_muted(&self, muted: bool) {
        self.playback.set_muted(muted);
    }

    /// Cancel both loops unconditionally. Safe to call more than once;
    /// the recorded sequence survives for export.
    pub fn shutdown(&mut self) {
        if let Some(preview) = self.preview.take() {
            preview.stop();
        }
        if let Some(sampler) = self.sampler.take() {
            sampler.stop();
        }
        if let Ok(mut recorder) = self.recorder.lock() {
            recorder.stop();
        }
        self.clock = None;
    }

    fn publish(&self) {
        self.snapshot_tx.send_replace(self.cropper.snapshot());
    }

    fn lock_recorder(&self) -> ReframeResult<std::sync::MutexGuard<'_, Recorder>> {
        self.recorder
            .lock()
            .map_err(|_| ReframeError::session("recorder state poisoned"))
    }
}

impl Drop for EditSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}
