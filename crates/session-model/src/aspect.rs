//! Aspect ratios for the cropper.
//!
//! Ratios are pairs of positive integers parsed from the canonical `"W:H"`
//! string form. Validation happens here, at the selection boundary — the
//! geometry functions assume a ratio they receive is already valid.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An integer width:height aspect ratio constraining the cropper's shape.
///
/// Immutable once selected; changing the ratio replaces it wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectRatio {
    /// Width units.
    pub width: u32,
    /// Height units.
    pub height: u32,
}

/// The preset ratios offered by the selector surface, in display order.
pub const ASPECT_PRESETS: [AspectRatio; 6] = [
    AspectRatio {
        width: 9,
        height: 18,
    },
    AspectRatio {
        width: 9,
        height: 16,
    },
    AspectRatio {
        width: 4,
        height: 3,
    },
    AspectRatio {
        width: 3,
        height: 4,
    },
    AspectRatio {
        width: 1,
        height: 1,
    },
    AspectRatio {
        width: 4,
        height: 5,
    },
];

/// Error produced when parsing an aspect-ratio string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AspectRatioError {
    #[error("malformed aspect ratio {0:?}, expected \"W:H\"")]
    Malformed(String),

    #[error("aspect ratio {0:?} has a zero component")]
    ZeroComponent(String),
}

impl AspectRatio {
    /// 9:16 portrait, the default selection.
    pub const NINE_SIXTEEN: AspectRatio = AspectRatio {
        width: 9,
        height: 16,
    };

    /// Create a ratio from two positive integers.
    pub fn new(width: u32, height: u32) -> Result<Self, AspectRatioError> {
        if width == 0 || height == 0 {
            return Err(AspectRatioError::ZeroComponent(format!(
                "{width}:{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Width-to-height ratio as a float.
    pub fn value(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::NINE_SIXTEEN
    }
}

impl FromStr for AspectRatio {
    type Err = AspectRatioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(':')
            .ok_or_else(|| AspectRatioError::Malformed(s.to_string()))?;
        let width: u32 = w
            .trim()
            .parse()
            .map_err(|_| AspectRatioError::Malformed(s.to_string()))?;
        let height: u32 = h
            .trim()
            .parse()
            .map_err(|_| AspectRatioError::Malformed(s.to_string()))?;
        Self::new(width, height)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}
