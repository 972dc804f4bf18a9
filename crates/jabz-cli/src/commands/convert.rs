//! Stream conversion command.
//!
//! Maps a farbfeld stream pixel by pixel from one space to another. Each
//! output pixel goes through the gamut policy on quantization.

use crate::ConvertArgs;
use anyhow::{Context, Result, bail};
use jabz_color::repair::repair_pixel;
use jabz_color::{ColorSpace, Jchz, JzCzHz, convert_pixel};
use jabz_io::map_stream;
use tracing::{debug, info, trace};

/// Runs the convert command.
pub fn run(args: ConvertArgs) -> Result<()> {
    trace!(from = %args.from, to = %args.to, gamut = %args.gamut, approx = args.approx, "convert::run");

    if args.approx && (!args.from.is_polar() || args.to != ColorSpace::Srgb) {
        bail!(
            "--approx requires --from jchz or jzczhz and --to srgb (got {} -> {})",
            args.from,
            args.to
        );
    }

    let input = super::open_input(args.input.as_deref())?;
    let output = super::open_output(args.output.as_deref())?;
    let (from, to) = (args.from, args.to);

    let header = match (args.approx, from) {
        (true, ColorSpace::Jchz) => map_stream(input, output, args.gamut, repair_pixel::<Jchz>),
        (true, _) => map_stream(input, output, args.gamut, repair_pixel::<JzCzHz>),
        (false, _) => map_stream(input, output, args.gamut, |px| convert_pixel(from, to, px)),
    }
    .context("Failed to convert stream")?;

    debug!(width = header.width, height = header.height, "stream header");
    info!(from = %from, to = %to, pixels = header.pixel_count(), "Converted stream");
    Ok(())
}
