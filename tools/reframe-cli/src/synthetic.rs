//! Synthetic playback and frame sources for headless recording runs.

use std::sync::Mutex;
use std::time::Instant;

use reframe_preview_engine::{FrameSource, Surface, VideoFrame};
use reframe_session_model::{DisplayBounds, MediaPlayback, PlaybackState};

/// Media playback driven by the wall clock: video time advances at the
/// configured rate while playing.
pub struct SyntheticPlayback {
    started: Instant,
    state: Mutex<PlaybackState>,
}

impl SyntheticPlayback {
    pub fn new(rate: f64) -> Self {
        let mut state = PlaybackState::new(900.0);
        state.set_playback_rate(rate);
        Self {
            started: Instant::now(),
            state: Mutex::new(state),
        }
    }
}

impl MediaPlayback for SyntheticPlayback {
    fn snapshot(&self) -> PlaybackState {
        let Ok(mut state) = self.state.lock() else {
            return PlaybackState::default();
        };
        if state.playing {
            let elapsed = self.started.elapsed().as_secs_f64();
            let position = elapsed * state.playback_rate;
            state.seek(position);
        }
        *state
    }

    fn play(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.playing = true;
        }
    }

    fn pause(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.playing = false;
        }
    }

    fn seek(&self, secs: f64) {
        if let Ok(mut state) = self.state.lock() {
            state.seek(secs);
        }
    }

    fn set_volume(&self, volume: f64) {
        if let Ok(mut state) = self.state.lock() {
            state.set_volume(volume);
        }
    }

    fn set_playback_rate(&self, rate: f64) {
        if let Ok(mut state) = self.state.lock() {
            state.set_playback_rate(rate);
        }
    }

    fn set_muted(&self, muted: bool) {
        if let Ok(mut state) = self.state.lock() {
            state.muted = muted;
        }
    }
}

/// Frame source producing a fixed gradient test pattern at the given
/// layout size.
pub struct SyntheticFrames {
    displayed: DisplayBounds,
}

impl SyntheticFrames {
    pub fn new(displayed: DisplayBounds) -> Self {
        Self { displayed }
    }
}

impl FrameSource for SyntheticFrames {
    fn current_frame(&self) -> Option<VideoFrame> {
        let (width, height) = (96u32, 54u32);
        let mut pixels = Surface::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let r = (x * 255 / (width - 1)) as u8;
                let g = (y * 255 / (height - 1)) as u8;
                pixels.set_pixel(x, y, [r, g, 128, 255]);
            }
        }
        Some(VideoFrame {
            pixels,
            displayed: self.displayed,
        })
    }

    fn name(&self) -> &str {
        "synthetic gradient"
    }
}
