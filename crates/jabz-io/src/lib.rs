//! # jabz-io
//!
//! Pixel-stream I/O for the jabz command-line tools.
//!
//! The only container is **farbfeld**: a 16-byte header followed by 16-bit
//! RGBA pixels. It needs no decoder state, so a stream can be converted
//! pixel by pixel between stdin and stdout.
//!
//! - [`farbfeld::FarbfeldReader`] - Pixel iterator
//! - [`farbfeld::FarbfeldWriter`] - Quantizing writer with a gamut policy
//! - [`map_stream`] - Read, transform and write in one pass
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use jabz_core::GamutPolicy;
//! use std::io;
//!
//! // Swap red and blue on every pixel of stdin
//! jabz_io::map_stream(io::stdin(), io::stdout(), GamutPolicy::Clip, |px| {
//!     px.map_rgb(|[r, g, b]| [b, g, r])
//! })?;
//! ```
//!
//! # Dependencies
//!
//! - [`jabz-core`] - Pixel and gamut policy types
//! - [`byteorder`] - Big-endian header and channel codes
//! - [`tracing`] - Stream diagnostics
//!
//! # Used By
//!
//! - `jabz-cli` - `jabz convert`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod farbfeld;

pub use error::{IoError, IoResult};
pub use farbfeld::{FarbfeldReader, FarbfeldWriter, Header, map_stream, read_pixels, write_pixels};
