//! Perceptual distance command.

use crate::DistanceArgs;
use anyhow::{Result, bail};
use jabz_color::{ColorSpace, JzCzHz, convert, distance};
use tracing::{debug, trace};

/// Distance between two colors given in `from`.
fn measure(from: ColorSpace, a: [f64; 3], b: [f64; 3]) -> f64 {
    let a = JzCzHz::from_array(convert(from, ColorSpace::JzCzHz, a));
    let b = JzCzHz::from_array(convert(from, ColorSpace::JzCzHz, b));
    debug!(?a, ?b, "polar operands");
    distance(a, b)
}

/// Runs the distance command.
pub fn run(args: DistanceArgs) -> Result<()> {
    trace!(from = %args.from, "distance::run");
    let &[a0, a1, a2, b0, b1, b2] = args.values.as_slice() else {
        bail!("expected six components, got {}", args.values.len());
    };
    println!("{:.6}", measure(args.from, [a0, a1, a2], [b0, b1, b2]));
    Ok(())
}
