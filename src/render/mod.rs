//! Frame buffers and triangle rasterization.

pub mod framebuffer;
pub mod rasterizer;

pub use framebuffer::{FrameBuffer, Vram};
pub use rasterizer::draw_triangle;
