//! A single-triangle software renderer.
//!
//! A fixed-point edge-function rasterizer draws one shaded triangle into an
//! RGB555 frame buffer. A fixed-timestep loop moves the triangle with the
//! mouse and double-buffers frames. SDL2 is used only for the window, input
//! and putting the finished frame on screen.
//!
//! # Quick Start
//!
//! ```ignore
//! use sankaku::prelude::*;
//!
//! let config = Config::default();
//! let mut window = Window::new(&config)?;
//! App::new(config).run(&mut window)?;
//! ```

// Public API - exposed to library consumers
pub mod app;
pub mod capture;
pub mod colors;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod math;
pub mod render;
pub mod scene;
pub mod time;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use app::{App, FrameOutcome, Platform};
pub use colors::{pack_color, PackedColor};
pub use error::{Error, Result};
pub use render::{draw_triangle, FrameBuffer, Vram};

/// Prelude module for convenient imports.
pub mod prelude {
    // Loop
    pub use crate::app::{App, FrameOutcome, Platform};
    pub use crate::config::Config;
    pub use crate::scene::Scene;
    pub use crate::time::{Clock, FixedStep, FpsCounter, FrameLimiter};

    // Rendering
    pub use crate::colors::{pack_color, PackedColor};
    pub use crate::math::point::Point2D;
    pub use crate::render::{draw_triangle, FrameBuffer, Vram};

    // Window & Input
    pub use crate::input::InputState;
    pub use crate::window::{Window, WindowEvent};
}
