//! Integer math used by the rasterizer: Q12 fixed point and 2D points.

pub mod fixed;
pub mod point;
