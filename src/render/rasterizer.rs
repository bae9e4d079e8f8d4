//! Fixed-point edge-function triangle rasterization.
//!
//! # Algorithm Overview
//!
//! 1. Compute the triangle's bounding box, clamped to `[0, width]` x
//!    `[0, height]` (both ends inclusive, so the box may touch one pixel past
//!    the frame; those writes are dropped by the frame buffer).
//! 2. Compute the signed double area `abc = (b - a) x (c - a)`. A zero area
//!    draws nothing.
//! 3. For every pixel `p` in the box, evaluate the two sub-areas
//!    `apc = (p - a) x (c - a)` and `abp = (b - a) x (p - a)` and turn them
//!    into Q12 barycentric weights:
//!
//! ```text
//! beta  = apc / abc
//! gamma = abp / abc
//! alpha = 1 - beta - gamma
//! ```
//!
//! A pixel is covered when all three weights are `>= 0`, so pixels exactly
//! on an edge are drawn. Both windings render: a reversed triangle flips the
//! sign of `abc`, `apc` and `abp` together and the quotients are unchanged.
//!
//! # Shading
//!
//! Each weight drives one output channel, scaled by the raw value of the
//! third vertex color:
//!
//! ```text
//! red   = (alpha * colors[2].raw()) >> 12
//! green = (beta  * colors[2].raw()) >> 12
//! blue  = (gamma * colors[2].raw()) >> 12
//! ```
//!
//! Each channel is clamped to `[0, 31]` before packing. With the usual blue
//! `(0, 0, 31)` third vertex this yields a red/green/blue gradient toward
//! vertices a, b and c.

use super::framebuffer::FrameBuffer;
use crate::colors::{pack_color, PackedColor, CHANNEL_MAX};
use crate::math::fixed::{clamp, div_q12, to_q12, Q12, Q12_ONE, Q12_SHIFT};
use crate::math::point::{cross, subtract, Point2D};

/// Barycentric weights of a pixel, in Q12.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Barycentric {
    pub alpha: Q12,
    pub beta: Q12,
    pub gamma: Q12,
}

impl Barycentric {
    #[inline]
    pub fn is_inside(&self) -> bool {
        self.alpha >= 0 && self.beta >= 0 && self.gamma >= 0
    }

    /// Applies the per-channel weighting against `color`'s raw value.
    #[inline]
    pub fn shade(&self, color: PackedColor) -> PackedColor {
        let raw = color.raw() as i64;
        let channel =
            |weight: Q12| clamp((weight * raw) >> Q12_SHIFT, 0, CHANNEL_MAX as i64) as i32;
        pack_color(channel(self.alpha), channel(self.beta), channel(self.gamma))
    }
}

/// Computes the barycentric weights of `p` in triangle `[a, b, c]`.
///
/// Returns `None` for a zero-area triangle.
pub fn barycentric(vertices: [Point2D; 3], p: Point2D) -> Option<Barycentric> {
    let [a, b, c] = vertices;
    let ab = subtract(b, a);
    let ac = subtract(c, a);
    let abc = cross(ab, ac);
    if abc == 0 {
        return None;
    }
    Some(weights(ab, ac, to_q12(abc), subtract(p, a)))
}

#[inline]
fn weights(ab: Point2D, ac: Point2D, fixed_abc: Q12, ap: Point2D) -> Barycentric {
    let apc = cross(ap, ac);
    let abp = cross(ab, ap);

    let beta = div_q12(to_q12(apc), fixed_abc);
    let gamma = div_q12(to_q12(abp), fixed_abc);
    let alpha = Q12_ONE - beta - gamma;

    Barycentric { alpha, beta, gamma }
}

/// Rasterizes one triangle into `target`.
///
/// Zero-area triangles and triangles whose clamped bounding box is empty are
/// silent no-ops.
pub fn draw_triangle(vertices: [Point2D; 3], colors: [PackedColor; 3], target: &mut FrameBuffer) {
    let [a, b, c] = vertices;
    let shade_color = colors[2];

    let width = target.width() as i64;
    let height = target.height() as i64;

    let x_min = clamp(a.x.min(b.x).min(c.x) as i64, 0, width);
    let y_min = clamp(a.y.min(b.y).min(c.y) as i64, 0, height);
    let x_max = clamp(a.x.max(b.x).max(c.x) as i64, 0, width);
    let y_max = clamp(a.y.max(b.y).max(c.y) as i64, 0, height);

    let ab = subtract(b, a);
    let ac = subtract(c, a);
    let abc = cross(ab, ac);

    // Degenerate triangle
    if abc == 0 {
        return;
    }
    let fixed_abc = to_q12(abc);

    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let ap = subtract(Point2D::new(x as i32, y as i32), a);
            let bary = weights(ab, ac, fixed_abc, ap);
            if !bary.is_inside() {
                continue;
            }
            target.set_pixel(x, y, bary.shade(shade_color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLUE, GREEN, RED};
    use crate::config::{FRAME_HEIGHT, FRAME_OFFSET, FRAME_RESOLUTION, FRAME_WIDTH};
    use crate::render::Vram;

    const RIGHT_TRIANGLE: [Point2D; 3] = [
        Point2D::new(0, 0),
        Point2D::new(10, 0),
        Point2D::new(0, 10),
    ];

    fn blank() -> Vec<PackedColor> {
        vec![PackedColor::default(); (FRAME_WIDTH * FRAME_HEIGHT) as usize]
    }

    fn written(pixels: &[PackedColor]) -> usize {
        pixels.iter().filter(|&&c| c != PackedColor::default()).count()
    }

    #[test]
    fn test_collinear_triangle_draws_nothing() {
        let mut pixels = blank();
        let mut fb = FrameBuffer::new(&mut pixels, FRAME_WIDTH, FRAME_HEIGHT);
        let vertices = [Point2D::new(0, 0), Point2D::new(10, 10), Point2D::new(20, 20)];
        draw_triangle(vertices, [RED, GREEN, BLUE], &mut fb);
        assert_eq!(written(&pixels), 0);

        let mut fb = FrameBuffer::new(&mut pixels, FRAME_WIDTH, FRAME_HEIGHT);
        let point = [Point2D::new(5, 5); 3];
        draw_triangle(point, [RED, GREEN, BLUE], &mut fb);
        assert_eq!(written(&pixels), 0);
        assert_eq!(barycentric(point, Point2D::new(5, 5)), None);
    }

    #[test]
    fn test_containment() {
        let inside = barycentric(RIGHT_TRIANGLE, Point2D::new(1, 1)).unwrap();
        assert!(inside.is_inside());
        assert_eq!(inside.beta, 409);
        assert_eq!(inside.gamma, 409);
        assert_eq!(inside.alpha, 4096 - 818);

        let outside = barycentric(RIGHT_TRIANGLE, Point2D::new(9, 9)).unwrap();
        assert!(!outside.is_inside());
    }

    #[test]
    fn test_edges_are_inclusive() {
        let on_hypotenuse = barycentric(RIGHT_TRIANGLE, Point2D::new(5, 5)).unwrap();
        assert!(on_hypotenuse.is_inside());
        assert_eq!(on_hypotenuse.alpha, 0);

        let mut pixels = blank();
        let mut fb = FrameBuffer::new(&mut pixels, FRAME_WIDTH, FRAME_HEIGHT);
        draw_triangle(RIGHT_TRIANGLE, [RED, GREEN, BLUE], &mut fb);
        assert_ne!(fb.get_pixel(5, 5), Some(PackedColor::default()));
        assert_ne!(fb.get_pixel(10, 0), Some(PackedColor::default()));
        assert_eq!(fb.get_pixel(6, 5), Some(PackedColor::default()));
        // Every pixel with x + y <= 10
        assert_eq!(written(&pixels), 66);
    }

    #[test]
    fn test_vertex_colors_follow_third_color() {
        let colors = [RED, GREEN, PackedColor::from_raw(20)];
        let mut pixels = blank();
        let mut fb = FrameBuffer::new(&mut pixels, FRAME_WIDTH, FRAME_HEIGHT);
        draw_triangle(RIGHT_TRIANGLE, colors, &mut fb);

        // alpha = 1 at a: only the red channel, scaled from colors[2]
        assert_eq!(fb.get_pixel(10, 0), Some(pack_color(0, 20, 0)));
        assert_eq!(fb.get_pixel(0, 10), Some(pack_color(0, 0, 20)));
        let at_a = barycentric(RIGHT_TRIANGLE, Point2D::new(0, 0)).unwrap();
        assert_eq!(at_a, Barycentric { alpha: Q12_ONE, beta: 0, gamma: 0 });
        assert_eq!(at_a.shade(colors[2]), pack_color(20, 0, 0));
    }

    #[test]
    fn test_pixel_at_a_is_not_a_vertex_blend() {
        // A plain vertex blend would give green at a.
        let mut pixels = blank();
        let mut fb = FrameBuffer::new(&mut pixels, FRAME_WIDTH, FRAME_HEIGHT);
        let shifted = [Point2D::new(1, 1), Point2D::new(11, 1), Point2D::new(1, 11)];
        draw_triangle(shifted, [GREEN, GREEN, RED], &mut fb);
        // RED.raw() is far above 31, so alpha = 1 saturates red only
        assert_eq!(fb.get_pixel(1, 1), Some(pack_color(31, 0, 0)));
        assert_eq!(fb.get_pixel(11, 1), Some(pack_color(0, 31, 0)));
    }

    #[test]
    fn test_shade_clamps_channels() {
        let weights = Barycentric {
            alpha: Q12_ONE,
            beta: Q12_ONE / 2,
            gamma: -Q12_ONE,
        };
        assert_eq!(weights.shade(BLUE), pack_color(31, 15, 0));
    }

    #[test]
    fn test_reversed_winding_still_renders() {
        let mut ccw = blank();
        let mut fb = FrameBuffer::new(&mut ccw, FRAME_WIDTH, FRAME_HEIGHT);
        draw_triangle(RIGHT_TRIANGLE, [RED, GREEN, BLUE], &mut fb);

        let mut cw = blank();
        let mut fb = FrameBuffer::new(&mut cw, FRAME_WIDTH, FRAME_HEIGHT);
        let [a, b, c] = RIGHT_TRIANGLE;
        draw_triangle([a, c, b], [RED, GREEN, BLUE], &mut fb);

        assert!(written(&cw) > 0);
        let covered = |pixels: &[PackedColor]| -> Vec<bool> {
            pixels.iter().map(|&p| p != PackedColor::default()).collect()
        };
        assert_eq!(covered(&ccw), covered(&cw));
    }

    #[test]
    fn test_offscreen_vertex_stays_in_frame() {
        let mut vram = Vram::new();
        let vertices = [
            Point2D::new(-100, -100),
            Point2D::new(100, 10),
            Point2D::new(10, 100),
        ];
        draw_triangle(vertices, [RED, GREEN, BLUE], &mut vram.frame_mut(0));
        assert!(written(vram.frame(0)) > 0);
        assert_eq!(written(&vram.as_slice()[FRAME_RESOLUTION..]), 0);
    }

    #[test]
    fn test_triangle_past_far_edges_does_not_wrap() {
        let mut vram = Vram::new();
        let w = FRAME_WIDTH as i32;
        let h = FRAME_HEIGHT as i32;
        let vertices = [
            Point2D::new(w - 20, h - 20),
            Point2D::new(w + 40, h - 20),
            Point2D::new(w - 20, h + 40),
        ];
        draw_triangle(vertices, [RED, GREEN, BLUE], &mut vram.frame_mut(1));

        let frame = vram.frame(1);
        // Column 0 would pick up wrapped writes from x == FRAME_WIDTH
        for y in 0..FRAME_HEIGHT as usize {
            assert_eq!(frame[y * FRAME_WIDTH as usize], PackedColor::default());
        }
        assert!(written(frame) > 0);
        assert_eq!(written(&vram.as_slice()[..FRAME_OFFSET]), 0);
        assert_eq!(written(&vram.as_slice()[FRAME_OFFSET + FRAME_RESOLUTION..]), 0);
    }

    #[test]
    fn test_fully_offscreen_is_noop() {
        let mut pixels = blank();
        let mut fb = FrameBuffer::new(&mut pixels, FRAME_WIDTH, FRAME_HEIGHT);
        let vertices = [
            Point2D::new(-50, -50),
            Point2D::new(-10, -50),
            Point2D::new(-50, -10),
        ];
        draw_triangle(vertices, [RED, GREEN, BLUE], &mut fb);
        assert_eq!(written(&pixels), 0);
    }
}
