//! Cropper geometry: display bounds, the cropper rectangle, and the pure
//! compute/clamp operations.
//!
//! All values are display pixels relative to the video's top-left corner.
//! The functions here are stateless and total: degenerate bounds produce a
//! degenerate (zero-size) rect rather than an error, and callers guard
//! against zero bounds before using the result.

use serde::{Deserialize, Serialize};

use crate::aspect::AspectRatio;

/// A 2D point in display pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width/height of a rectangle in display pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Rendered pixel size of the video surface at the current layout.
///
/// Recomputed whenever the video's rendered size changes (metadata load,
/// resize, ratio-triggered relayout); treated as a read-only snapshot per
/// recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DisplayBounds {
    pub width: f64,
    pub height: f64,
}

impl DisplayBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either dimension is unusable (video not yet laid out).
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// The user-manipulable crop rectangle in display-pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CropperRect {
    pub position: Point,
    pub dimensions: Dimensions,
}

impl CropperRect {
    /// The zero rect an inactive cropper holds.
    pub const ZERO: CropperRect = CropperRect {
        position: Point { x: 0.0, y: 0.0 },
        dimensions: Dimensions {
            width: 0.0,
            height: 0.0,
        },
    };

    pub fn new(position: Point, dimensions: Dimensions) -> Self {
        Self {
            position,
            dimensions,
        }
    }

    /// True when the rect has no usable area.
    pub fn is_zero(&self) -> bool {
        !(self.dimensions.width > 0.0 && self.dimensions.height > 0.0)
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.position.x + self.dimensions.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.position.y + self.dimensions.height
    }

    /// Whether a display-space point falls inside the rect.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.position.x
            && point.x <= self.right()
            && point.y >= self.position.y
            && point.y <= self.bottom()
    }
}

/// Rect plus the bounds it was computed against, published as one unit so
/// downstream consumers (preview, sampler) never observe a half-updated
/// pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropSnapshot {
    pub rect: CropperRect,
    pub bounds: DisplayBounds,
}

/// Compute the cropper rect for the given bounds and aspect ratio.
///
/// The cropper always spans the full displayed height; width follows the
/// ratio and is capped at the display width. When the cap triggers the
/// rect no longer matches the nominal ratio exactly — that permissive
/// behavior is kept as-is. The rect is centered horizontally.
pub fn compute_cropper_rect(bounds: DisplayBounds, ratio: AspectRatio) -> CropperRect {
    let height = bounds.height;
    let width = (height * ratio.width as f64 / ratio.height as f64).min(bounds.width);
    let x = (bounds.width - width) / 2.0;

    CropperRect::new(Point::new(x, 0.0), Dimensions::new(width, height))
}

/// Clamp a proposed rect position so the rect stays inside the bounds.
///
/// Total over any proposed position, including pointer positions far
/// outside the video element, and idempotent.
pub fn clamp_position(proposed: Point, dims: Dimensions, bounds: DisplayBounds) -> Point {
    Point::new(
        proposed.x.min(bounds.width - dims.width).max(0.0),
        proposed.y.min(bounds.height - dims.height).max(0.0),
    )
}
