use crate::{Pixel, PixelGrid, PixmapResult, clamp_channel};

/// Replace every channel with the floored mean of the pixel's three channels.
pub fn grayscale(grid: &mut PixelGrid) -> PixmapResult<()> {
    for pixel in grid.pixels_mut() {
        let sum = i64::from(pixel.red) + i64::from(pixel.green) + i64::from(pixel.blue);
        *pixel = Pixel::gray(clamp_channel(sum / 3));
    }

    Ok(())
}

/// Invert the colors of an image
pub fn invert(grid: &mut PixelGrid) -> PixmapResult<()> {
    for pixel in grid.pixels_mut() {
        pixel.red = 255 - pixel.red;
        pixel.green = 255 - pixel.green;
        pixel.blue = 255 - pixel.blue;
    }

    Ok(())
}
