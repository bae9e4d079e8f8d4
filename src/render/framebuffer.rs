//! Frame buffer views and the double-buffered backing store.
//!
//! [`Vram`] owns one flat region of `VRAM_WIDTH * VRAM_HEIGHT` pixels and
//! carves two frames out of it at fixed offsets. [`FrameBuffer`] is a
//! borrowed, bounds-checked view of one of those frames.

use crate::colors::PackedColor;
use crate::config::{FRAME_HEIGHT, FRAME_OFFSET, FRAME_RESOLUTION, FRAME_WIDTH, VRAM_RESOLUTION};

/// A view into one frame's pixels.
///
/// Wraps a 1D slice with width/height metadata to enable safe 2D pixel
/// access. Rows are stored top first, `width` pixels each.
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [PackedColor],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view from a buffer slice and dimensions.
    ///
    /// # Panics
    /// Panics in debug builds if the buffer length doesn't match
    /// `width * height`.
    pub fn new(color_buffer: &'a mut [PackedColor], width: u32, height: u32) -> Self {
        debug_assert_eq!(
            color_buffer.len(),
            (width * height) as usize,
            "Color buffer size doesn't match dimensions"
        );
        Self {
            color_buffer,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: PackedColor) {
        self.color_buffer.fill(color);
    }

    /// Set the pixel at (x, y). Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i64, y: i64, color: PackedColor) {
        if let Some(idx) = self.index(x, y) {
            self.color_buffer[idx] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i64, y: i64) -> Option<PackedColor> {
        self.index(x, y).map(|idx| self.color_buffer[idx])
    }

    pub fn pixels(&self) -> &[PackedColor] {
        &self.color_buffer[..]
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x >= 0 && x < self.width as i64 && y >= 0 && y < self.height as i64 {
            Some((y * self.width as i64 + x) as usize)
        } else {
            None
        }
    }
}

/// Backing store holding the two frames used for double buffering.
///
/// Frame 0 starts at offset 0 and frame 1 at [`FRAME_OFFSET`]; the rest of
/// the region is unused. Exactly one frame is active (the one being drawn
/// this iteration); the other holds the most recently presented frame.
pub struct Vram {
    data: Vec<PackedColor>,
    active: usize,
}

impl Vram {
    const OFFSETS: [usize; 2] = [0, FRAME_OFFSET];

    pub fn new() -> Self {
        Self {
            data: vec![PackedColor::default(); VRAM_RESOLUTION],
            active: 0,
        }
    }

    /// Index (0 or 1) of the frame being written this iteration.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Makes the other frame active.
    pub fn swap(&mut self) {
        self.active ^= 1;
    }

    /// Pixels of frame `index`.
    ///
    /// # Panics
    /// Panics if `index` is not 0 or 1.
    pub fn frame(&self, index: usize) -> &[PackedColor] {
        let offset = Self::OFFSETS[index];
        &self.data[offset..offset + FRAME_RESOLUTION]
    }

    /// Mutable view of frame `index`.
    ///
    /// # Panics
    /// Panics if `index` is not 0 or 1.
    pub fn frame_mut(&mut self, index: usize) -> FrameBuffer<'_> {
        let offset = Self::OFFSETS[index];
        FrameBuffer::new(
            &mut self.data[offset..offset + FRAME_RESOLUTION],
            FRAME_WIDTH,
            FRAME_HEIGHT,
        )
    }

    pub fn active_frame_mut(&mut self) -> FrameBuffer<'_> {
        self.frame_mut(self.active)
    }

    /// The whole backing region, both frames and the unused space.
    pub fn as_slice(&self) -> &[PackedColor] {
        &self.data
    }
}

impl Default for Vram {
    fn default() -> Self {
        Self::new()
    }
}
