//! Crate-wide error type.
//!
//! The rasterizer and the loop have no recoverable failures; errors only come
//! from the platform layer (SDL2) and from writing screenshots.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("SDL error: {0}")]
    Sdl(String),
    #[error("failed to save capture: {0}")]
    Capture(#[from] image::ImageError),
}

// SDL2 reports most failures as plain strings.
impl From<String> for Error {
    fn from(message: String) -> Self {
        Error::Sdl(message)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
