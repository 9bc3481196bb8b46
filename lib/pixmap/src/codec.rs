//! Plain-text pixel map codec.
//!
//! Layout on disk: magic marker, width, height, max channel value, then
//! `width * height` row-major `R G B` triples. Any whitespace run separates
//! tokens on read. Writing always emits `P3`, a max value of `255`, and one
//! line per row.
//!
//! Decoding is lenient on purpose: the magic marker and the max value are not
//! checked, trailing tokens are ignored, and channel values outside `0..=255`
//! are clamped. Headers that cannot describe a real image (unparseable or
//! non-positive dimensions, too few samples) are rejected.

use crate::{Pixel, PixelGrid, PixmapError, PixmapResult, clamp_channel};
use std::{fmt::Write as _, fs, path::Path};

pub const MAGIC: &str = "P3";
pub const MAX_CHANNEL_VALUE: u8 = 255;

const HEADER_TOKENS: usize = 4;

/// Parse the full text of a pixel map file.
///
/// Channel values outside `0..=255` are clamped here, before any filter sees
/// them. A filter therefore works on the clamped value: grayscale on
/// `300 0 0` averages `255 0 0` to `85`, not `300 0 0` to `100`.
pub fn decode(content: &str) -> PixmapResult<PixelGrid> {
    let mut tokens = content.split_whitespace();

    let header: Vec<&str> = tokens.by_ref().take(HEADER_TOKENS).collect();
    if header.len() < HEADER_TOKENS {
        return Err(PixmapError::Format(format!(
            "expected {HEADER_TOKENS} header tokens, found {}",
            header.len()
        )));
    }

    let width = parse_dimension("width", header[1])?;
    let height = parse_dimension("height", header[2])?;
    log::debug!(
        "pixel map header: magic={} {width}x{height} max={}",
        header[0],
        header[3]
    );

    let samples = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(|| {
            PixmapError::Format(format!("image size {width}x{height} is too large"))
        })?;

    // A sample needs at least two bytes of content.
    let mut channels = Vec::with_capacity(samples.min(content.len() / 2 + 1));
    let mut clamped = 0usize;
    for token in tokens.by_ref().take(samples) {
        let value = parse_channel(token, channels.len())?;
        if !(0..=i64::from(MAX_CHANNEL_VALUE)).contains(&value) {
            clamped += 1;
        }
        channels.push(clamp_channel(value));
    }

    if channels.len() < samples {
        return Err(PixmapError::Format(format!(
            "expected {} tokens for a {width}x{height} image, found {}",
            HEADER_TOKENS + samples,
            HEADER_TOKENS + channels.len()
        )));
    }

    if clamped > 0 {
        log::warn!("clamped {clamped} channel value(s) outside 0..={MAX_CHANNEL_VALUE}");
    }

    let trailing = tokens.count();
    if trailing > 0 {
        log::debug!("ignoring {trailing} trailing token(s)");
    }

    let pixels = channels
        .chunks_exact(3)
        .map(|c| Pixel::new(c[0], c[1], c[2]))
        .collect();

    PixelGrid::from_pixels(width, height, pixels)
}

/// Render a grid in the pixel map text format.
pub fn encode(grid: &PixelGrid) -> String {
    // Up to 12 bytes per pixel ("255 255 255 ") plus the header.
    let mut out = String::with_capacity(grid.width() * grid.height() * 12 + 32);

    _ = writeln!(out, "{MAGIC}");
    _ = writeln!(out, "{} {}", grid.width(), grid.height());
    _ = writeln!(out, "{MAX_CHANNEL_VALUE}");

    for row in grid.rows() {
        for (col, pixel) in row.iter().enumerate() {
            if col > 0 {
                out.push(' ');
            }
            _ = write!(out, "{} {} {}", pixel.red, pixel.green, pixel.blue);
        }
        out.push('\n');
    }

    out
}

/// Read and decode a pixel map file.
pub fn read_file(path: impl AsRef<Path>) -> PixmapResult<PixelGrid> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let grid = decode(&content)?;

    log::info!(
        "decoded {}x{} image from {}",
        grid.width(),
        grid.height(),
        path.display()
    );

    Ok(grid)
}

/// Encode `grid` and write it to `path`, replacing any existing file.
///
/// The text is fully built before the file is opened.
pub fn write_file(grid: &PixelGrid, path: impl AsRef<Path>) -> PixmapResult<()> {
    let path = path.as_ref();
    let content = encode(grid);
    fs::write(path, content)?;

    log::info!(
        "encoded {}x{} image to {}",
        grid.width(),
        grid.height(),
        path.display()
    );

    Ok(())
}

fn parse_dimension(name: &str, token: &str) -> PixmapResult<usize> {
    let value: i64 = token
        .parse()
        .map_err(|e| PixmapError::Format(format!("invalid {name} '{token}': {e}")))?;

    if value <= 0 {
        return Err(PixmapError::Format(format!(
            "{name} must be positive, got {value}"
        )));
    }

    usize::try_from(value)
        .map_err(|_| PixmapError::Format(format!("{name} {value} is too large")))
}

fn parse_channel(token: &str, index: usize) -> PixmapResult<i64> {
    token.parse().map_err(|e| {
        PixmapError::Format(format!(
            "invalid channel value '{token}' at sample {index}: {e}"
        ))
    })
}
