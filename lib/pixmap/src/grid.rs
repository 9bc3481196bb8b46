use crate::{PixmapError, PixmapResult};

/// One RGB sample, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Pixel with the same value on every channel.
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Channels in the fixed order red, green, blue.
    pub const fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    pub const fn from_channels(channels: [u8; 3]) -> Self {
        Self::new(channels[0], channels[1], channels[2])
    }
}

/// Owned row-major RGB image.
///
/// Pixels are stored flat; row `r` occupies `pixels[r * width..(r + 1) * width]`.
/// Both dimensions are always positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    /// All-black grid of the given size.
    pub fn new(width: usize, height: usize) -> PixmapResult<Self> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![Pixel::default(); len],
        })
    }

    /// Build a grid from row-major pixels. `pixels.len()` must equal `width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Pixel>) -> PixmapResult<Self> {
        let len = checked_len(width, height)?;
        if pixels.len() != len {
            return Err(PixmapError::InvalidParameter(format!(
                "{width}x{height} grid needs {len} pixels, got {}",
                pixels.len()
            )));
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a grid from nested rows, rejecting empty or ragged input.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> PixmapResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(PixmapError::InvalidParameter(format!(
                "row {index} has {} pixels, expected {width}",
                row.len()
            )));
        }

        Self::from_pixels(width, height, rows.into_iter().flatten().collect())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at `(row, col)`. Panics when out of bounds, like slice indexing.
    pub fn get(&self, row: usize, col: usize) -> Pixel {
        self.pixels[self.index(row, col)]
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut Pixel {
        let index = self.index(row, col);
        &mut self.pixels[index]
    }

    pub fn row(&self, row: usize) -> &[Pixel] {
        let start = row * self.width;
        &self.pixels[start..start + self.width]
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        self.pixels.chunks_exact(self.width)
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "pixel ({row}, {col}) outside {}x{} grid",
            self.width,
            self.height
        );
        row * self.width + col
    }
}

fn checked_len(width: usize, height: usize) -> PixmapResult<usize> {
    if width == 0 || height == 0 {
        return Err(PixmapError::InvalidParameter(format!(
            "grid dimensions must be positive, got {width}x{height}"
        )));
    }

    width.checked_mul(height).ok_or_else(|| {
        PixmapError::InvalidParameter(format!("grid dimensions {width}x{height} overflow"))
    })
}
