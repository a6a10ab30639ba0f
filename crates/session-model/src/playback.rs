//! Playback state and the media playback collaborator trait.
//!
//! The playback element itself lives outside this workspace; the engine
//! reads a [`PlaybackState`] snapshot for sampling and issues pass-through
//! control calls via [`MediaPlayback`].

use serde::{Deserialize, Serialize};

/// The playback-rate presets offered by the control surface.
pub const PLAYBACK_RATES: [f64; 4] = [0.5, 1.0, 1.5, 2.0];

/// Volume restored when unmuting.
pub const UNMUTE_VOLUME: f64 = 0.5;

/// A read-side snapshot of the playback element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Playback position in seconds.
    pub current_time: f64,
    /// Media duration in seconds.
    pub duration: f64,
    /// Volume in `[0, 1]`.
    pub volume: f64,
    /// Playback rate; any positive value, presets in [`PLAYBACK_RATES`].
    pub playback_rate: f64,
    pub muted: bool,
    pub playing: bool,
}

impl PlaybackState {
    /// Initial state for media of the given duration.
    pub fn new(duration: f64) -> Self {
        Self {
            current_time: 0.0,
            duration,
            volume: UNMUTE_VOLUME,
            playback_rate: 1.0,
            muted: false,
            playing: false,
        }
    }

    /// Clamp-set the volume. Volume zero also mutes.
    pub fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
        self.muted = self.volume == 0.0;
    }

    /// Flip mute: muting drops volume to zero, unmuting restores
    /// [`UNMUTE_VOLUME`].
    pub fn toggle_mute(&mut self) {
        if self.muted {
            self.muted = false;
            self.volume = UNMUTE_VOLUME;
        } else {
            self.muted = true;
            self.volume = 0.0;
        }
    }

    /// Set the playback rate; non-positive values are ignored.
    pub fn set_playback_rate(&mut self, rate: f64) {
        if rate > 0.0 {
            self.playback_rate = rate;
        }
    }

    /// Seek, clamped to `[0, duration]`.
    pub fn seek(&mut self, secs: f64) {
        self.current_time = secs.clamp(0.0, self.duration.max(0.0));
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Media playback collaborator.
///
/// Control calls are pass-through; `snapshot` is the only read the engine
/// performs (once per sample tick).
pub trait MediaPlayback: Send + Sync {
    /// Current playback state.
    fn snapshot(&self) -> PlaybackState;

    fn play(&self);
    fn pause(&self);

    /// Seek to an absolute position in seconds.
    fn seek(&self, secs: f64);

    /// Set volume in `[0, 1]`.
    fn set_volume(&self, volume: f64);

    /// Set the playback rate.
    fn set_playback_rate(&self, rate: f64);

    fn set_muted(&self, muted: bool);
}
