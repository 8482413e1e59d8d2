//! Output surfaces
//!
//! The compositor writes colored pixels through the [`Surface`] trait and
//! presents them with an explicit flush. [`FrameBuffer`] is the in-memory
//! implementation used headless and in tests.

use crate::color::Rgba;

/// Pixel sink the compositor draws into.
pub trait Surface: Send {
    /// Writes one pixel. Coordinates outside the surface are ignored.
    fn set(&mut self, x: i32, y: i32, color: Rgba);

    /// Presents everything written since the previous flush.
    fn flush(&mut self);
}

/// An RGBA pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
    flushes: usize,
}

impl FrameBuffer {
    /// Creates a buffer filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; width as usize * height as usize],
            flushes: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reads one pixel, `None` outside the buffer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        self.offset(x, y).map(|i| self.pixels[i])
    }

    /// Number of flushes received so far.
    pub fn flush_count(&self) -> usize {
        self.flushes
    }

    /// Counts pixels currently holding `color`.
    pub fn count_color(&self, color: Rgba) -> usize {
        self.pixels.iter().filter(|p| **p == color).count()
    }

    /// Row-major RGBA bytes, four per pixel.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_array()).collect()
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        let (x, y) = (u32::try_from(x).ok()?, u32::try_from(y).ok()?);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

impl Surface for FrameBuffer {
    fn set(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(i) = self.offset(x, y) {
            self.pixels[i] = color;
        }
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}
