//! Session replay helpers.
//!
//! Turns a recorded sample sequence back into CSS-like transform samples
//! so UI clients can play a session back without a frame source.

use reframe_session_model::Sample;

/// Transform instruction for one replay frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplayFrame {
    pub time_secs: f64,
    pub translate_x_percent: f64,
    pub translate_y_percent: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl ReplayFrame {
    pub fn css_transform(&self) -> String {
        format!(
            "translate({:.3}%, {:.3}%) scale({:.4}, {:.4})",
            self.translate_x_percent, self.translate_y_percent, self.scale_x, self.scale_y
        )
    }

    /// Transform for one set of normalized `[x, y, w, h]` percent
    /// coordinates applied to a full-size source frame.
    fn from_coordinates(time_secs: f64, coordinates: [f64; 4]) -> Self {
        let [x, y, w, h] = coordinates;
        Self {
            time_secs,
            translate_x_percent: -x,
            translate_y_percent: -y,
            // Minimum 1% region, matching the recorder's smallest useful crop.
            scale_x: 100.0 / w.max(1.0),
            scale_y: 100.0 / h.max(1.0),
        }
    }
}

/// Coordinates at time `t`, linearly interpolated between the adjacent
/// samples; clamped to the first/last sample outside the recorded span.
pub fn coordinates_at(samples: &[Sample], t: f64) -> Option<[f64; 4]> {
    let first = samples.first()?;
    if t <= first.time_stamp {
        return Some(first.coordinates);
    }

    for pair in samples.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if t <= b.time_stamp {
            let span = b.time_stamp - a.time_stamp;
            if span <= 0.0 {
                return Some(b.coordinates);
            }
            let frac = (t - a.time_stamp) / span;
            let mut coords = [0.0; 4];
            for (i, slot) in coords.iter_mut().enumerate() {
                *slot = a.coordinates[i] + (b.coordinates[i] - a.coordinates[i]) * frac;
            }
            return Some(coords);
        }
    }

    samples.last().map(|s| s.coordinates)
}

/// Simulate frame-by-frame replay transforms across the recorded span.
pub fn simulate_replay(samples: &[Sample], sample_rate_fps: f64) -> Vec<ReplayFrame> {
    let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
        return Vec::new();
    };

    let sample_rate_fps = sample_rate_fps.max(1.0);
    let step = 1.0 / sample_rate_fps;
    let mut t = first.time_stamp;
    let mut frames = Vec::new();

    while t <= last.time_stamp + f64::EPSILON {
        if let Some(coords) = coordinates_at(samples, t) {
            frames.push(ReplayFrame::from_coordinates(t, coords));
        }
        t += step;
    }

    frames
}
