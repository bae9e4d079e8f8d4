//! RGB555 high-color packing.
//!
//! A [`PackedColor`] holds three 5-bit channels as `R << 10 | G << 5 | B`;
//! bit 15 is unused. Packing masks each channel to its low 5 bits, so
//! out-of-range input wraps instead of saturating.

use bytemuck::{Pod, Zeroable};

const CHANNEL_MASK: i32 = 0b11111;

/// Largest value a single channel can hold.
pub const CHANNEL_MAX: i32 = CHANNEL_MASK;

#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct PackedColor(u16);

impl PackedColor {
    #[inline]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn r(self) -> i32 {
        (self.0 as i32 >> 10) & CHANNEL_MASK
    }

    #[inline]
    pub const fn g(self) -> i32 {
        (self.0 as i32 >> 5) & CHANNEL_MASK
    }

    #[inline]
    pub const fn b(self) -> i32 {
        self.0 as i32 & CHANNEL_MASK
    }

    /// Expands to 8 bits per channel, replicating the high bits so that 31
    /// maps to 255.
    pub const fn to_rgb8(self) -> [u8; 3] {
        [expand(self.r()), expand(self.g()), expand(self.b())]
    }
}

/// Packs three 5-bit channels into a [`PackedColor`].
#[inline]
pub const fn pack_color(r: i32, g: i32, b: i32) -> PackedColor {
    PackedColor(
        (((r & CHANNEL_MASK) << 10) | ((g & CHANNEL_MASK) << 5) | (b & CHANNEL_MASK)) as u16,
    )
}

const fn expand(channel: i32) -> u8 {
    ((channel << 3) | (channel >> 2)) as u8
}

pub const BACKGROUND: PackedColor = pack_color(3, 16, 3);
pub const RED: PackedColor = pack_color(31, 0, 0);
pub const GREEN: PackedColor = pack_color(0, 31, 0);
pub const BLUE: PackedColor = pack_color(0, 0, 31);
