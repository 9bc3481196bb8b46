use crate::{Effect, Pixel, PixelGrid, PixmapResult, clamp_channel};
use derivative::Derivative;
use derive_setters::Setters;

/// Horizontal motion blur configuration
///
/// Each pixel is averaged with the `length - 1` pixels to its right on the
/// same row, stopping at the right edge. A `length` below 1 leaves the image
/// untouched.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct MotionBlurConfig {
    #[derivative(Default(value = "10"))]
    length: i64,
}

impl MotionBlurConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn length(&self) -> i64 {
        self.length
    }
}

impl Effect for MotionBlurConfig {
    fn apply(&self, grid: &mut PixelGrid) -> PixmapResult<()> {
        if self.length < 1 {
            log::debug!("motion blur length {} is a no-op", self.length);
            return Ok(());
        }

        let width = grid.width();
        let reach = usize::try_from(self.length - 1).unwrap_or(usize::MAX);
        let mut result = grid.clone();

        for row in 0..grid.height() {
            let source = grid.row(row);

            for col in 0..width {
                let max_col = col.saturating_add(reach).min(width - 1);
                let window = &source[col..=max_col];

                let mut sum = [0i64; 3];
                for pixel in window {
                    for (acc, channel) in sum.iter_mut().zip(pixel.channels()) {
                        *acc += i64::from(channel);
                    }
                }

                let count = window.len() as i64;
                *result.get_mut(row, col) =
                    Pixel::from_channels(sum.map(|s| clamp_channel(s / count)));
            }
        }

        *grid = result;
        Ok(())
    }
}
