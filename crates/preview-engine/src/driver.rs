//! Per-frame render loop.
//!
//! One [`PreviewLoop`] is started when the cropper becomes active and
//! cancelled when it deactivates or the owning session is torn down.
//! While the published snapshot is `None` the loop idles: no rendering,
//! no surface writes.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use reframe_common::LoopHandle;
use reframe_session_model::CropSnapshot;
use tokio::sync::watch;

use crate::project::project_frame;
use crate::source::FrameSource;
use crate::surface::Surface;

/// Default render tick rate when the host does not supply one.
pub const DEFAULT_PREVIEW_FPS: u32 = 60;

/// Handle to a running preview render loop.
pub struct PreviewLoop {
    handle: LoopHandle,
    surface: Arc<Mutex<Surface>>,
}

impl PreviewLoop {
    /// Spawn the render loop.
    ///
    /// Each tick reads the latest published crop snapshot, pulls the
    /// current frame from `source`, and projects it into `surface`.
    /// Projection failures are logged and the loop continues on the next
    /// tick; a missing frame is a silent skip.
    pub fn start(
        source: Arc<dyn FrameSource>,
        snapshot_rx: watch::Receiver<Option<CropSnapshot>>,
        surface: Arc<Mutex<Surface>>,
        fps: u32,
    ) -> Self {
        let period = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
        let tick_surface = surface.clone();

        let handle = LoopHandle::every(period, move || {
            let Some(snapshot) = *snapshot_rx.borrow() else {
                return;
            };
            let Some(frame) = source.current_frame() else {
                return;
            };
            let Ok(mut dest) = tick_surface.lock() else {
                return;
            };
            if let Err(e) = project_frame(&frame, snapshot.rect, &mut dest) {
                tracing::warn!(source = source.name(), error = %e, "Preview projection failed");
            }
        });

        Self { handle, surface }
    }

    /// The destination surface this loop renders into.
    pub fn surface(&self) -> Arc<Mutex<Surface>> {
        self.surface.clone()
    }

    /// Cancel the loop. No render tick executes after this returns and
    /// the in-flight tick (if any) finishes.
    pub fn stop(&self) {
        self.handle.cancel();
    }

    /// Whether the loop task has stopped.
    pub fn is_stopped(&self) -> bool {
        self.handle.is_finished()
    }
}
