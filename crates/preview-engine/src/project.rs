//! Crop projection: copy the crop region of a frame into the preview
//! surface, scaled to fill it.

use reframe_common::{ReframeError, ReframeResult};
use reframe_session_model::CropperRect;

use crate::source::VideoFrame;
use crate::surface::Surface;

/// Clear `dest` and copy the sub-region of `frame` described by `rect`
/// into it, scaled to fill the destination's full extent.
///
/// `rect` is in display coordinates; the frame's displayed bounds map it
/// onto natural pixels. Sampling is nearest-neighbor. The destination is
/// cleared even when projection then fails, so a failed tick shows an
/// empty surface rather than a stale frame.
pub fn project_frame(
    frame: &VideoFrame,
    rect: CropperRect,
    dest: &mut Surface,
) -> ReframeResult<()> {
    dest.clear();

    if dest.is_empty() {
        return Err(ReframeError::preview("destination surface has no pixels"));
    }
    if frame.pixels.is_empty() || frame.displayed.is_degenerate() {
        return Err(ReframeError::preview("source frame not ready"));
    }
    if rect.is_zero() {
        return Err(ReframeError::preview("crop rect has no area"));
    }

    // Display-space rect -> natural-pixel-space region.
    let scale_x = frame.pixels.width() as f64 / frame.displayed.width;
    let scale_y = frame.pixels.height() as f64 / frame.displayed.height;
    let src_x = rect.position.x * scale_x;
    let src_y = rect.position.y * scale_y;
    let src_w = rect.dimensions.width * scale_x;
    let src_h = rect.dimensions.height * scale_y;

    let max_sx = frame.pixels.width() - 1;
    let max_sy = frame.pixels.height() - 1;

    for dy in 0..dest.height() {
        let v = (dy as f64 + 0.5) / dest.height() as f64;
        let sy = ((src_y + v * src_h).floor() as i64).clamp(0, max_sy as i64) as u32;

        for dx in 0..dest.width() {
            let u = (dx as f64 + 0.5) / dest.width() as f64;
            let sx = ((src_x + u * src_w).floor() as i64).clamp(0, max_sx as i64) as u32;

            if let Some(color) = frame.pixels.pixel(sx, sy) {
                dest.set_pixel(dx, dy, color);
            }
        }
    }

    Ok(())
}
