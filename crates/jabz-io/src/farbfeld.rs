//! Farbfeld pixel streams.
//!
//! Farbfeld is a minimal lossless RGBA format that can be piped between
//! processes one pixel at a time.
//!
//! # Layout
//!
//! ```text
//! offset  size  content
//! 0       8     "farbfeld"
//! 8       4     width,  big-endian u32
//! 12      4     height, big-endian u32
//! 16      8*n   pixels, row-major, 4 x big-endian u16 (R, G, B, A)
//! ```
//!
//! Channel codes map to `[0, 1]` by division by 65535. On the way out,
//! values are scaled by 65535 and rounded to the nearest code, then the
//! [`GamutPolicy`] decides what happens to codes outside `[0, 65535]`.
//! Because the policy sees rounded codes, a value within half a code step
//! outside the range still passes under [`GamutPolicy::Mask`].
//!
//! # Example
//!
//! ```rust
//! use jabz_core::{GamutPolicy, Rgba};
//! use jabz_io::farbfeld::{Header, FarbfeldReader, FarbfeldWriter};
//!
//! let mut buf = Vec::new();
//! let mut writer = FarbfeldWriter::new(&mut buf, Header::new(1, 1), GamutPolicy::Clip)?;
//! writer.write_pixel(Rgba::new(1.0, 0.5, 0.0, 1.0))?;
//! writer.finish()?;
//!
//! let mut reader = FarbfeldReader::new(buf.as_slice())?;
//! let px = reader.next().unwrap()?;
//! assert_eq!(px.r, 1.0);
//! # Ok::<(), jabz_io::IoError>(())
//! ```

use std::io::{self, BufReader, BufWriter, Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use jabz_core::{GamutPolicy, MASK_SENTINEL, Rgba};
use tracing::debug;

use crate::{IoError, IoResult};

/// File signature.
pub const MAGIC: &[u8; 8] = b"farbfeld";

/// Largest channel code.
pub const MAX_CODE: f64 = 65535.0;

/// Bytes per pixel.
pub const PIXEL_BYTES: u64 = 8;

/// Image dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Header {
    /// Creates a header.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels that follow the header.
    #[inline]
    pub const fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Total stream size in bytes, header included.
    pub fn byte_len(&self) -> IoResult<u64> {
        self.pixel_count()
            .checked_mul(PIXEL_BYTES)
            .and_then(|n| n.checked_add(16))
            .ok_or(IoError::DimensionOverflow {
                width: self.width,
                height: self.height,
            })
    }
}

/// Reads and validates a header.
pub fn read_header<R: Read>(reader: &mut R) -> IoResult<Header> {
    let mut magic = [0u8; 8];
    reader.read_exact(&mut magic).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => IoError::invalid_format("stream too short for a header"),
        _ => IoError::Io(e),
    })?;
    if &magic != MAGIC {
        return Err(IoError::invalid_format(format!(
            "bad magic {:?}, expected \"farbfeld\"",
            String::from_utf8_lossy(&magic)
        )));
    }

    let width = read_dimension(reader)?;
    let height = read_dimension(reader)?;

    debug!(width, height, "farbfeld header read");
    Ok(Header::new(width, height))
}

fn read_dimension<R: Read>(reader: &mut R) -> IoResult<u32> {
    reader.read_u32::<BigEndian>().map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => IoError::invalid_format("truncated header"),
        _ => IoError::Io(e),
    })
}

/// Writes a header.
pub fn write_header<W: Write>(writer: &mut W, header: Header) -> IoResult<()> {
    writer.write_all(MAGIC)?;
    writer.write_u32::<BigEndian>(header.width)?;
    writer.write_u32::<BigEndian>(header.height)?;
    debug!(width = header.width, height = header.height, "farbfeld header written");
    Ok(())
}

/// Converts channel codes to a pixel.
#[inline]
pub fn decode_pixel(codes: [u16; 4]) -> Rgba {
    Rgba::from_array(codes.map(|c| c as f64 / MAX_CODE))
}

/// Converts a pixel to channel codes under a gamut policy.
///
/// - `Clip` saturates each code to `[0, 65535]`; NaN becomes 0.
/// - `Mask` emits the mask sentinel if any code is out of range or NaN.
pub fn encode_pixel(px: Rgba, policy: GamutPolicy) -> [u16; 4] {
    let codes = px.to_array().map(|v| (v * MAX_CODE).round());
    match policy {
        // `as` saturates and maps NaN to 0
        GamutPolicy::Clip => codes.map(|c| c as u16),
        GamutPolicy::Mask => {
            if codes.iter().all(|c| (0.0..=MAX_CODE).contains(c)) {
                codes.map(|c| c as u16)
            } else {
                MASK_SENTINEL.to_array().map(|v| (v * MAX_CODE) as u16)
            }
        }
    }
}

/// Pixel iterator over a farbfeld stream.
///
/// The header is consumed by [`FarbfeldReader::new`]. Iteration yields
/// exactly `width * height` pixels, or stops at the first error.
pub struct FarbfeldReader<R> {
    inner: R,
    header: Header,
    decoded: u64,
    failed: bool,
}

impl<R: Read> FarbfeldReader<R> {
    /// Reads the header and prepares to stream pixels.
    pub fn new(mut inner: R) -> IoResult<Self> {
        let header = read_header(&mut inner)?;
        Ok(Self {
            inner,
            header,
            decoded: 0,
            failed: false,
        })
    }

    /// The stream header.
    pub fn header(&self) -> Header {
        self.header
    }

    /// Pixels read so far.
    pub fn decoded(&self) -> u64 {
        self.decoded
    }

    /// Reads the next pixel, or `None` once every pixel has been read.
    pub fn read_pixel(&mut self) -> IoResult<Option<Rgba>> {
        if self.failed || self.decoded >= self.header.pixel_count() {
            return Ok(None);
        }

        let mut codes = [0u16; 4];
        match self.inner.read_u16_into::<BigEndian>(&mut codes) {
            Ok(()) => {
                self.decoded += 1;
                Ok(Some(decode_pixel(codes)))
            }
            Err(e) => {
                self.failed = true;
                if e.kind() == io::ErrorKind::UnexpectedEof {
                    Err(IoError::Truncated {
                        expected: self.header.pixel_count(),
                        decoded: self.decoded,
                    })
                } else {
                    Err(e.into())
                }
            }
        }
    }

    /// Returns the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Iterator for FarbfeldReader<R> {
    type Item = IoResult<Rgba>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_pixel().transpose()
    }
}

/// Quantizing pixel writer.
///
/// Writes the header on construction. Every pixel goes through the
/// writer's [`GamutPolicy`]. Call [`FarbfeldWriter::finish`] to flush and
/// to check that the announced number of pixels was written.
pub struct FarbfeldWriter<W: Write> {
    inner: W,
    header: Header,
    policy: GamutPolicy,
    written: u64,
}

impl<W: Write> FarbfeldWriter<W> {
    /// Writes the header and prepares to stream pixels.
    pub fn new(mut inner: W, header: Header, policy: GamutPolicy) -> IoResult<Self> {
        write_header(&mut inner, header)?;
        Ok(Self {
            inner,
            header,
            policy,
            written: 0,
        })
    }

    /// The gamut policy applied to each pixel.
    pub fn policy(&self) -> GamutPolicy {
        self.policy
    }

    /// Pixels written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Quantizes and writes one pixel.
    pub fn write_pixel(&mut self, px: Rgba) -> IoResult<()> {
        if self.written >= self.header.pixel_count() {
            return Err(IoError::invalid_format(format!(
                "more than {} pixels written",
                self.header.pixel_count()
            )));
        }
        for code in encode_pixel(px, self.policy) {
            self.inner.write_u16::<BigEndian>(code)?;
        }
        self.written += 1;
        Ok(())
    }

    /// Flushes and returns the underlying writer.
    ///
    /// Fails with [`IoError::Truncated`] if fewer pixels were written than
    /// the header announced.
    pub fn finish(mut self) -> IoResult<W> {
        self.inner.flush()?;
        let expected = self.header.pixel_count();
        if self.written != expected {
            return Err(IoError::Truncated {
                expected,
                decoded: self.written,
            });
        }
        Ok(self.inner)
    }
}

/// Reads a whole stream into memory.
pub fn read_pixels<R: Read>(reader: R) -> IoResult<(Header, Vec<Rgba>)> {
    let reader = FarbfeldReader::new(reader)?;
    let header = reader.header();
    let count = usize::try_from(header.pixel_count()).map_err(|_| IoError::DimensionOverflow {
        width: header.width,
        height: header.height,
    })?;
    // untrusted header: don't reserve more than a modest amount up front
    let mut pixels = Vec::with_capacity(count.min(1 << 20));
    for px in reader {
        pixels.push(px?);
    }
    Ok((header, pixels))
}

/// Writes a whole image. `pixels.len()` must match the header.
pub fn write_pixels<W: Write>(
    writer: W,
    header: Header,
    pixels: &[Rgba],
    policy: GamutPolicy,
) -> IoResult<W> {
    let mut out = FarbfeldWriter::new(writer, header, policy)?;
    for &px in pixels {
        out.write_pixel(px)?;
    }
    out.finish()
}

/// Streams pixels from `reader` to `writer` through `f`.
///
/// The output keeps the input's dimensions. Both ends are buffered, so
/// passing raw stdin/stdout is fine. Returns the header.
pub fn map_stream<R, W, F>(reader: R, writer: W, policy: GamutPolicy, mut f: F) -> IoResult<Header>
where
    R: Read,
    W: Write,
    F: FnMut(Rgba) -> Rgba,
{
    let mut input = FarbfeldReader::new(BufReader::new(reader))?;
    let header = input.header();
    header.byte_len()?;

    let mut output = FarbfeldWriter::new(BufWriter::new(writer), header, policy)?;
    while let Some(px) = input.read_pixel()? {
        output.write_pixel(f(px))?;
    }
    let pixels = output.written();
    output.finish()?;

    debug!(pixels, policy = %policy, "farbfeld stream mapped");
    Ok(header)
}
