//! End-to-end flow: activate, drag, record, export, replay.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use reframe_crop_engine::{EditSession, SessionOptions};
use reframe_preview_engine::replay::simulate_replay;
use reframe_preview_engine::{FrameSource, Surface, VideoFrame};
use reframe_session_model::{
    parse_samples, validate_sequence, AspectRatio, DisplayBounds, MediaPlayback, PlaybackState,
    Point,
};

/// Playback that advances half a second of video time per snapshot read.
struct ScriptedPlayback {
    state: Mutex<PlaybackState>,
}

impl ScriptedPlayback {
    fn new() -> Self {
        Self {
            state: Mutex::new(PlaybackState::new(900.0)),
        }
    }
}

impl MediaPlayback for ScriptedPlayback {
    fn snapshot(&self) -> PlaybackState {
        let mut state = self.state.lock().expect("playback lock");
        let out = *state;
        let next = state.current_time + 0.5;
        state.seek(next);
        out
    }

    fn play(&self) {
        self.state.lock().expect("playback lock").playing = true;
    }

    fn pause(&self) {
        self.state.lock().expect("playback lock").playing = false;
    }

    fn seek(&self, secs: f64) {
        self.state.lock().expect("playback lock").seek(secs);
    }

    fn set_volume(&self, volume: f64) {
        self.state.lock().expect("playback lock").set_volume(volume);
    }

    fn set_playback_rate(&self, rate: f64) {
        self.state
            .lock()
            .expect("playback lock")
            .set_playback_rate(rate);
    }

    fn set_muted(&self, muted: bool) {
        self.state.lock().expect("playback lock").muted = muted;
    }
}

/// Checkerboard frames at a fixed layout size.
struct CheckerSource;

impl FrameSource for CheckerSource {
    fn current_frame(&self) -> Option<VideoFrame> {
        let mut pixels = Surface::new(8, 8);
        for y in 0..8 {
            for x in 0..8 {
                let on = (x + y) % 2 == 0;
                pixels.set_pixel(x, y, if on { [255; 4] } else { [0, 0, 0, 255] });
            }
        }
        Some(VideoFrame {
            pixels,
            displayed: DisplayBounds::new(960.0, 540.0),
        })
    }

    fn name(&self) -> &str {
        "checker"
    }
}

fn scripted_session() -> EditSession {
    EditSession::new(
        Arc::new(ScriptedPlayback::new()),
        Arc::new(CheckerSource),
        AspectRatio::NINE_SIXTEEN,
        SessionOptions {
            sample_interval: Duration::from_millis(25),
            ..SessionOptions::default()
        },
    )
}

#[tokio::test]
async fn recorded_session_exports_normalized_drag_positions() {
    let bounds = DisplayBounds::new(960.0, 540.0);
    let mut session = scripted_session();
    session.activate_cropper(bounds).unwrap();

    // Drag the centered rect to the left edge before recording.
    let start = Point::new(400.0, 100.0);
    session.begin_drag(start).unwrap();
    session.update_drag(Point::new(-500.0, 100.0)).unwrap();
    session.end_drag();
    assert_eq!(session.cropper().rect().position.x, 0.0);

    session.start_recording().unwrap();
    tokio::time::sleep(Duration::from_millis(90)).await;
    session.stop_recording().unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;

    let samples = session.recorded_samples().unwrap();
    assert!(samples.len() >= 2, "immediate sample plus at least one tick");

    // 303.75 / 960 of the width, pinned at the left edge, full height.
    for sample in &samples {
        assert_eq!(sample.coordinates[0], 0.0);
        assert_eq!(sample.coordinates[1], 0.0);
        assert_eq!(sample.coordinates[2], 31.640625);
        assert_eq!(sample.coordinates[3], 100.0);
    }

    // Scripted playback never rewinds, so the sequence validates clean.
    assert!(validate_sequence(&samples).is_empty());

    let json = session.export_samples().unwrap();
    let parsed = parse_samples(&json).unwrap();
    assert_eq!(parsed, samples);

    // The recorded session replays as transform instructions.
    let frames = simulate_replay(&samples, 10.0);
    assert!(!frames.is_empty());
    assert!((frames[0].scale_y - 1.0).abs() < 1e-9);
    assert!((frames[0].translate_x_percent - 0.0).abs() < 1e-9);
}

#[tokio::test]
async fn aspect_change_mid_session_resizes_preview_and_recomputes() {
    let mut session = scripted_session();
    session
        .activate_cropper(DisplayBounds::new(960.0, 540.0))
        .unwrap();

    session.set_aspect_ratio(AspectRatio::new(1, 1).unwrap());

    let rect = session.cropper().rect();
    assert_eq!(rect.dimensions.width, 540.0);
    assert_eq!(rect.dimensions.height, 540.0);

    let surface = session.preview_surface();
    let (w, h) = {
        let s = surface.lock().unwrap();
        (s.width(), s.height())
    };
    assert_eq!((w, h), (300, 300));
}
