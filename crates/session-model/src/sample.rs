//! Recorded crop samples and their exported JSON form.
//!
//! A sample is one snapshot of the cropper, normalized to percent of the
//! display bounds, paired with the playback parameters at that instant.
//! The exported document is a JSON array in recording order; field names
//! (`timeStamp`, `playbackRate`) are part of the wire format.

use serde::{Deserialize, Serialize};

use crate::geometry::CropSnapshot;
use crate::playback::PlaybackState;

/// One recorded snapshot of normalized crop coordinates plus playback
/// parameters at a point in video time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Video time in seconds at sampling.
    #[serde(rename = "timeStamp")]
    pub time_stamp: f64,

    /// `[x, y, width, height]`, each in `[0, 100]` percent of the display
    /// bounds, rounded to 6 decimal digits.
    pub coordinates: [f64; 4],

    /// Volume in `[0, 1]`.
    pub volume: f64,

    /// Playback rate.
    #[serde(rename = "playbackRate")]
    pub playback_rate: f64,
}

impl Sample {
    /// Normalize a crop snapshot into a sample.
    ///
    /// Returns `None` when the bounds are degenerate — sampling is
    /// best-effort and a tick with no usable bounds is skipped, not an
    /// error.
    pub fn normalized(snapshot: &CropSnapshot, playback: &PlaybackState) -> Option<Self> {
        if snapshot.bounds.is_degenerate() {
            return None;
        }

        let rect = snapshot.rect;
        let bounds = snapshot.bounds;
        Some(Self {
            time_stamp: playback.current_time,
            coordinates: [
                round6(rect.position.x / bounds.width * 100.0),
                round6(rect.position.y / bounds.height * 100.0),
                round6(rect.dimensions.width / bounds.width * 100.0),
                round6(rect.dimensions.height / bounds.height * 100.0),
            ],
            volume: playback.volume,
            playback_rate: playback.playback_rate,
        })
    }
}

/// Round to 6 decimal digits, the precision of the exported coordinates.
pub fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

/// Serialize samples to the exported document form: a pretty-printed JSON
/// array in recording order.
pub fn serialize_samples(samples: &[Sample]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(samples)
}

/// Parse an exported document back into samples.
pub fn parse_samples(json: &str) -> Result<Vec<Sample>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Check a recorded sequence for out-of-contract values.
///
/// Returns one human-readable issue per violation; an empty list means the
/// sequence is clean. Time reversals are reported because replay assumes
/// forward playback, even though a seek during recording can produce them
/// legitimately.
pub fn validate_sequence(samples: &[Sample]) -> Vec<String> {
    let mut issues = Vec::new();

    for (i, sample) in samples.iter().enumerate() {
        for (axis, value) in ["x", "y", "width", "height"].iter().zip(sample.coordinates) {
            if !(0.0..=100.0 + 1e-6).contains(&value) {
                issues.push(format!(
                    "sample {i}: coordinate {axis} = {value} outside [0, 100]"
                ));
            }
        }

        let [x, y, w, h] = sample.coordinates;
        if x + w > 100.0 + 1e-6 {
            issues.push(format!("sample {i}: x + width = {} exceeds 100", x + w));
        }
        if y + h > 100.0 + 1e-6 {
            issues.push(format!("sample {i}: y + height = {} exceeds 100", y + h));
        }

        if !(0.0..=1.0).contains(&sample.volume) {
            issues.push(format!(
                "sample {i}: volume = {} outside [0, 1]",
                sample.volume
            ));
        }
        if sample.playback_rate <= 0.0 {
            issues.push(format!(
                "sample {i}: playbackRate = {} is not positive",
                sample.playback_rate
            ));
        }

        if i > 0 && sample.time_stamp < samples[i - 1].time_stamp {
            issues.push(format!(
                "sample {i}: timeStamp {} reverses from {}",
                sample.time_stamp,
                samples[i - 1].time_stamp
            ));
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use crate::geometry::{CropperRect, Dimensions, DisplayBounds, Point};

    use super::*;

    fn snapshot(rect: CropperRect, bounds: DisplayBounds) -> CropSnapshot {
        CropSnapshot { rect, bounds }
    }

    #[test]
    fn test_normalizes_to_percent_of_bounds() {
        // 10% x offset, full height, 30% width on a 960x540 layout.
        let rect = CropperRect::new(Point::new(96.0, 0.0), Dimensions::new(288.0, 540.0));
        let bounds = DisplayBounds::new(960.0, 540.0);

        let mut playback = PlaybackState::new(900.0);
        playback.seek(12.5);

        let sample = Sample::normalized(&snapshot(rect, bounds), &playback).unwrap();
        assert_eq!(sample.time_stamp, 12.5);
        assert_eq!(sample.coordinates, [10.0, 0.0, 30.0, 100.0]);
        assert_eq!(sample.volume, 0.5);
        assert_eq!(sample.playback_rate, 1.0);
    }

    #[test]
    fn test_rounding_keeps_six_decimals() {
        let rect = CropperRect::new(Point::new(1.0, 0.0), Dimensions::new(1.0, 3.0));
        let bounds = DisplayBounds::new(3.0, 3.0);

        let sample =
            Sample::normalized(&snapshot(rect, bounds), &PlaybackState::new(10.0)).unwrap();
        // 1/3 of the width -> 33.333333%, cut at 6 decimals.
        assert_eq!(sample.coordinates[0], 33.333333);
        assert_eq!(sample.coordinates[2], 33.333333);
    }

    #[test]
    fn test_degenerate_bounds_skip_sampling() {
        let snap = snapshot(CropperRect::ZERO, DisplayBounds::default());
        assert!(Sample::normalized(&snap, &PlaybackState::default()).is_none());
    }

    #[test]
    fn test_export_parse_roundtrip() {
        let samples = vec![
            Sample {
                time_stamp: 0.0,
                coordinates: [10.0, 0.0, 30.0, 100.0],
                volume: 0.5,
                playback_rate: 1.0,
            },
            Sample {
                time_stamp: 1.0,
                coordinates: [12.5, 0.0, 30.0, 100.0],
                volume: 0.5,
                playback_rate: 1.5,
            },
        ];

        let json = serialize_samples(&samples).unwrap();
        let parsed = parse_samples(&json).unwrap();
        assert_eq!(parsed, samples);
    }

    #[test]
    fn test_wire_field_names() {
        let sample = Sample {
            time_stamp: 12.5,
            coordinates: [10.0, 0.0, 30.0, 100.0],
            volume: 0.5,
            playback_rate: 2.0,
        };
        let json = serde_json::to_string(&sample).unwrap();
        assert!(json.contains("\"timeStamp\":12.5"));
        assert!(json.contains("\"playbackRate\":2.0"));
        assert!(json.contains("\"coordinates\":[10.0,0.0,30.0,100.0]"));
    }

    #[test]
    fn test_validate_flags_out_of_contract_values() {
        let bad = vec![
            Sample {
                time_stamp: 5.0,
                coordinates: [90.0, 0.0, 30.0, 100.0],
                volume: 1.4,
                playback_rate: 0.0,
            },
            Sample {
                time_stamp: 4.0,
                coordinates: [0.0, 0.0, 30.0, 100.0],
                volume: 0.5,
                playback_rate: 1.0,
            },
        ];

        let issues = validate_sequence(&bad);
        assert!(issues.iter().any(|i| i.contains("x + width")));
        assert!(issues.iter().any(|i| i.contains("volume")));
        assert!(issues.iter().any(|i| i.contains("playbackRate")));
        assert!(issues.iter().any(|i| i.contains("reverses")));
    }

    #[test]
    fn test_validate_accepts_clean_sequence() {
        let clean = vec![
            Sample {
                time_stamp: 0.0,
                coordinates: [0.0, 0.0, 56.25, 100.0],
                volume: 0.5,
                playback_rate: 1.0,
            },
            Sample {
                time_stamp: 1.0,
                coordinates: [20.0, 0.0, 56.25, 100.0],
                volume: 0.5,
                playback_rate: 1.0,
            },
        ];
        assert!(validate_sequence(&clean).is_empty());
    }
}
