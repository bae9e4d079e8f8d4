//! Frame, VRAM and timing constants plus the runtime configuration used by
//! the binary.

use std::path::PathBuf;

use crate::logging::LoggingConfig;

/// Width of one frame in pixels.
pub const FRAME_WIDTH: u32 = 320;
/// Height of one frame in pixels.
pub const FRAME_HEIGHT: u32 = 240;
/// Number of pixels in one frame.
pub const FRAME_RESOLUTION: usize = (FRAME_WIDTH * FRAME_HEIGHT) as usize;

/// Width of the shared backing store both frames are carved from.
pub const VRAM_WIDTH: u32 = 1024;
/// Height of the shared backing store.
pub const VRAM_HEIGHT: u32 = 512;
/// Total capacity of the backing store in pixels.
pub const VRAM_RESOLUTION: usize = (VRAM_WIDTH * VRAM_HEIGHT) as usize;
/// Offset of the second frame inside the backing store.
pub const FRAME_OFFSET: usize = (VRAM_WIDTH * FRAME_HEIGHT) as usize;

/// Length of one simulation step in milliseconds.
pub const STEP_MS: i64 = 16;
/// Most simulation steps run for a single rendered frame.
pub const MAX_UPDATES: u32 = 5;

/// Side of the square footprint the triangle occupies.
pub const TRIANGLE_SIZE: i32 = 50;

#[derive(Debug, Clone)]
pub struct Config {
    pub title: String,
    /// Integer scale applied to the frame size to get the initial window size.
    pub window_scale: u32,
    pub step_ms: i64,
    pub max_updates: u32,
    /// Directory screenshots are written into.
    pub capture_dir: PathBuf,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn window_size(&self) -> (u32, u32) {
        (FRAME_WIDTH * self.window_scale, FRAME_HEIGHT * self.window_scale)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Hello Sankaku".to_string(),
            window_scale: 2,
            step_ms: STEP_MS,
            max_updates: MAX_UPDATES,
            capture_dir: PathBuf::from("."),
            logging: LoggingConfig::default(),
        }
    }
}
