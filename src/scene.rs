//! The single movable triangle.
//!
//! [`Scene`] holds the anchor: the top-left corner of the triangle's
//! 50x50 footprint. It only changes inside a fixed-step [`Scene::update`] and
//! is read when the frame is rendered.

use crate::colors::{self, PackedColor};
use crate::config::{FRAME_HEIGHT, FRAME_WIDTH, TRIANGLE_SIZE};
use crate::input::InputState;
use crate::math::fixed::clamp;
use crate::math::point::Point2D;
use crate::render::{draw_triangle, FrameBuffer};

/// Colors of vertices a, b and c.
pub const TRIANGLE_COLORS: [PackedColor; 3] = [colors::RED, colors::GREEN, colors::BLUE];

#[derive(Clone, Debug, Default)]
pub struct Scene {
    anchor: Point2D,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anchor(&self) -> Point2D {
        self.anchor
    }

    /// One simulation step: follow the mouse, keeping the footprint inside
    /// the frame.
    pub fn update(&mut self, input: &InputState) {
        let max_x = (FRAME_WIDTH as i32 - TRIANGLE_SIZE) as i64;
        let max_y = (FRAME_HEIGHT as i32 - TRIANGLE_SIZE) as i64;
        let mouse = input.mouse_position;

        self.anchor = Point2D::new(
            clamp(mouse.x as i64, 0, max_x) as i32,
            clamp(mouse.y as i64, 0, max_y) as i32,
        );
    }

    /// Triangle vertices for the current anchor: base along the bottom of the
    /// footprint, apex centered on its top edge.
    pub fn vertices(&self) -> [Point2D; 3] {
        let Point2D { x, y } = self.anchor;
        [
            Point2D::new(x + TRIANGLE_SIZE, y + TRIANGLE_SIZE),
            Point2D::new(x, y + TRIANGLE_SIZE),
            Point2D::new(x + TRIANGLE_SIZE / 2, y),
        ]
    }

    /// Clears `target` and draws the triangle into it.
    pub fn render(&self, target: &mut FrameBuffer) {
        target.clear(colors::BACKGROUND);
        draw_triangle(self.vertices(), TRIANGLE_COLORS, target);
    }
}
