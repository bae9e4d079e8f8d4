//! Per-frame input snapshot.

use crate::math::point::Point2D;

/// Digital and analog input captured once per loop iteration.
///
/// `mouse_position` is already in frame coordinates; see [`scale_to_frame`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub left_arrow: bool,
    pub right_arrow: bool,
    pub up_arrow: bool,
    pub down_arrow: bool,

    pub mouse_position: Point2D,
    pub left_mouse_button: bool,
    pub right_mouse_button: bool,

    pub gamepad_a: bool,
    pub gamepad_b: bool,
    pub gamepad_lx: i16,
    pub gamepad_ly: i16,
}

/// Maps a coordinate on a display surface of size `surface_dim` onto a frame
/// axis of size `frame_dim`, truncating toward zero.
///
/// A zero-sized surface (e.g. a minimized window) maps everything to 0.
pub fn scale_to_frame(raw: i32, surface_dim: u32, frame_dim: u32) -> i32 {
    if surface_dim == 0 {
        return 0;
    }
    (raw as i64 * frame_dim as i64 / surface_dim as i64) as i32
}
