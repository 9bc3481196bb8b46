//! Plain-text pixel map images and the filters that run over them.
//!
//! - `grid`: in-memory RGB pixel grid
//! - `codec`: decode/encode the whitespace-delimited `P3` text format
//! - `base_effect`, `stylized_effect`, `blur_effect`: the filters

pub mod base_effect;
pub mod blur_effect;
pub mod codec;
pub mod grid;
pub mod stylized_effect;

pub use grid::{Pixel, PixelGrid};

pub type PixmapResult<T> = Result<T, PixmapError>;

#[derive(thiserror::Error, Debug)]
pub enum PixmapError {
    #[error("Format error: {0}")]
    Format(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub trait Effect {
    fn apply(&self, grid: &mut PixelGrid) -> PixmapResult<()>;
}

#[derive(Debug, Clone)]
pub enum ImageEffect {
    Grayscale,
    Invert,
    Emboss,
    MotionBlur(blur_effect::MotionBlurConfig),
}

impl ImageEffect {
    pub fn name(&self) -> &'static str {
        match self {
            ImageEffect::Grayscale => "grayscale",
            ImageEffect::Invert => "invert",
            ImageEffect::Emboss => "emboss",
            ImageEffect::MotionBlur(_) => "motionblur",
        }
    }
}

impl Effect for ImageEffect {
    fn apply(&self, grid: &mut PixelGrid) -> PixmapResult<()> {
        log::debug!(
            "apply {} to {}x{} grid",
            self.name(),
            grid.width(),
            grid.height()
        );

        match self {
            ImageEffect::Grayscale => base_effect::grayscale(grid),
            ImageEffect::Invert => base_effect::invert(grid),
            ImageEffect::Emboss => stylized_effect::emboss(grid),
            ImageEffect::MotionBlur(config) => config.apply(grid),
        }
    }
}

/// Constrain a widened channel value back into `0..=255`.
pub(crate) fn clamp_channel(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}
