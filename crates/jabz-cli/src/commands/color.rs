//! Single color inspection command.
//!
//! Prints one color in every supported space, plus its HTML hex form. The
//! color comes from components, a hex literal or a hashed label.

use crate::ColorArgs;
use anyhow::{Context, Result, bail};
use jabz_color::hash::jchz_hash;
use jabz_color::html::{from_html_hex, to_html_hex};
use jabz_color::{ColorSpace, Srgb, convert};
use tracing::{debug, trace};

/// Lightness and chroma used with `--hash` when not given.
const HASH_LIGHTNESS: f64 = 0.7;
const HASH_CHROMA: f64 = 0.5;

/// Resolves the arguments to a source space and components.
fn source(args: &ColorArgs) -> Result<(ColorSpace, [f64; 3])> {
    if let Some(text) = &args.hash {
        let j = args.lightness.unwrap_or(HASH_LIGHTNESS);
        let c = args.chroma.unwrap_or(HASH_CHROMA);
        return Ok((ColorSpace::Jchz, jchz_hash(j, c, text).to_array()));
    }
    if let Some(hex) = &args.hex {
        let c = from_html_hex(hex).context("Failed to parse --hex")?;
        return Ok((ColorSpace::Srgb, c.to_array()));
    }
    match (args.from, args.values.as_slice()) {
        (Some(space), &[a, b, c]) => Ok((space, [a, b, c])),
        _ => bail!("expected --from <space> with three components, or --hex #rrggbb"),
    }
}

/// Renders the report, one line per space.
fn report(from: ColorSpace, value: [f64; 3]) -> Vec<String> {
    let mut lines: Vec<String> = ColorSpace::ALL
        .iter()
        .map(|&space| {
            let v = convert(from, space, value);
            format!("{:<7} {}", space.name(), super::format_triple(space, v))
        })
        .collect();
    let rgb = Srgb::from_array(convert(from, ColorSpace::Srgb, value));
    lines.push(format!("{:<7} {}", "html", to_html_hex(rgb)));
    lines
}

/// Runs the color command.
pub fn run(args: ColorArgs) -> Result<()> {
    trace!(from = ?args.from, hex = ?args.hex, hash = ?args.hash, "color::run");
    let (from, value) = source(&args)?;
    debug!(space = %from, ?value, "input color");

    for line in report(from, value) {
        println!("{}", line);
    }
    Ok(())
}
