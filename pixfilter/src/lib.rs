//! Command-line front end for the `pixmap` filters.
//!
//! Reads a plain-text pixel map, applies one filter and writes the result.
//! The output file is only touched after the whole image has been filtered
//! and encoded.

pub mod cli;
pub mod logger;

use anyhow::{Context, Result};
use cli::Args;
use pixmap::{Effect, codec};

pub fn run(args: &Args) -> Result<()> {
    let effect = args.effect()?;

    let mut grid = codec::read_file(&args.in_file)
        .with_context(|| format!("failed to load {}", args.in_file.display()))?;

    effect
        .apply(&mut grid)
        .with_context(|| format!("{} filter failed", effect.name()))?;

    codec::write_file(&grid, &args.out_file)
        .with_context(|| format!("failed to save {}", args.out_file.display()))?;

    log::info!(
        "{} -> {} ({})",
        args.in_file.display(),
        args.out_file.display(),
        effect.name()
    );

    Ok(())
}
