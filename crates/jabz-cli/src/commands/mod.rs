//! CLI command implementations

pub mod color;
pub mod convert;
pub mod distance;

use anyhow::{Context, Result};
use jabz_color::ColorSpace;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

/// Open input stream, stdin when no path is given
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(p) => {
            let file = File::open(p).with_context(|| format!("Failed to open: {}", p.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdin())),
    }
}

/// Open output stream, stdout when no path is given
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(p) => {
            let file = File::create(p).with_context(|| format!("Failed to create: {}", p.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Format a triple with the component labels of its space
pub fn format_triple(space: ColorSpace, v: [f64; 3]) -> String {
    let [a, b, c] = space.components();
    format!("{}={:.6} {}={:.6} {}={:.6}", a, v[0], b, v[1], c, v[2])
}
