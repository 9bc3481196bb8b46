use crate::{Pixel, PixelGrid, PixmapResult, clamp_channel};

/// Gray level of a pixel with no difference from its neighbor.
pub const EMBOSS_BASE: i64 = 128;

/// Emboss relief against the up-left neighbor.
///
/// Each pixel becomes a gray level of `128 + diff`, where `diff` is the signed
/// channel difference to the pixel at `(row - 1, col - 1)` with the largest
/// magnitude. Channels are compared in the order red, green, blue and a later
/// channel only replaces `diff` when its magnitude is strictly larger. The top
/// row and left column have no neighbor and come out as `(128, 128, 128)`.
///
/// Neighbors are read from the untouched input, so traversal order does not
/// matter.
pub fn emboss(grid: &mut PixelGrid) -> PixmapResult<()> {
    let mut result = grid.clone();

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let diff = if row == 0 || col == 0 {
                0
            } else {
                strongest_diff(grid.get(row, col), grid.get(row - 1, col - 1))
            };

            *result.get_mut(row, col) = Pixel::gray(clamp_channel(EMBOSS_BASE + diff));
        }
    }

    *grid = result;
    Ok(())
}

fn strongest_diff(current: Pixel, neighbor: Pixel) -> i64 {
    current
        .channels()
        .into_iter()
        .zip(neighbor.channels())
        .map(|(c, n)| i64::from(c) - i64::from(n))
        .fold(0, |diff, d| if d.abs() > diff.abs() { d } else { diff })
}
