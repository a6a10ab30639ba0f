//! Owned RGBA pixel surface used for decoded frames and the preview
//! destination.

use reframe_session_model::AspectRatio;

/// RGBA pixel.
pub type Rgba = [u8; 4];

/// A plain CPU pixel buffer, row-major RGBA.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Surface {
    /// Create a cleared surface of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0, 0, 0, 0]; (width as usize) * (height as usize)],
        }
    }

    /// Create a preview destination for the given ratio at a fixed
    /// reference width: `height = reference_width * ratio.h / ratio.w`,
    /// rounded to whole pixels.
    pub fn for_aspect(ratio: AspectRatio, reference_width: u32) -> Self {
        let height = (reference_width as f64 * ratio.height as f64 / ratio.width as f64)
            .round()
            .max(1.0) as u32;
        Self::new(reference_width, height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when the surface holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Reset every pixel to transparent black.
    pub fn clear(&mut self) {
        self.pixels.fill([0, 0, 0, 0]);
    }

    /// Fill the whole surface with one color.
    pub fn fill(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Pixel at `(x, y)`; `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y as usize) * (self.width as usize) + (x as usize)])
    }

    /// Write a pixel; out-of-range writes are dropped.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.pixels[(y as usize) * (self.width as usize) + (x as usize)] = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_aspect_sizes_height_from_reference_width() {
        // 300 wide at 9:16 -> 533.33, rounded.
        let surface = Surface::for_aspect(AspectRatio::NINE_SIXTEEN, 300);
        assert_eq!(surface.width(), 300);
        assert_eq!(surface.height(), 533);

        let square = Surface::for_aspect(AspectRatio::new(1, 1).unwrap(), 300);
        assert_eq!(square.height(), 300);
    }

    #[test]
    fn test_for_aspect_never_collapses_height() {
        let wide = Surface::for_aspect(AspectRatio::new(100, 1).unwrap(), 3);
        assert_eq!(wide.height(), 1);
    }

    #[test]
    fn test_pixel_accessors_bounds_checked() {
        let mut surface = Surface::new(2, 2);
        surface.set_pixel(1, 1, [9, 9, 9, 255]);
        assert_eq!(surface.pixel(1, 1), Some([9, 9, 9, 255]));
        assert_eq!(surface.pixel(2, 0), None);

        // Out-of-range write is a no-op, not a panic.
        surface.set_pixel(5, 5, [1, 2, 3, 4]);
    }

    #[test]
    fn test_clear_resets_pixels() {
        let mut surface = Surface::new(2, 1);
        surface.fill([255, 0, 0, 255]);
        surface.clear();
        assert_eq!(surface.pixel(0, 0), Some([0, 0, 0, 0]));
    }
}
