//! Farbfeld stream tests against real files.

use std::fs::File;
use std::io::{Read, Write};

use approx::assert_abs_diff_eq;
use jabz_core::{GamutPolicy, Rgba};
use jabz_io::{Header, IoError, map_stream, read_pixels, write_pixels};
use tempfile::tempdir;

fn gradient(width: u32, height: u32) -> Vec<Rgba> {
    let n = (width * height) as f64;
    (0..width * height)
        .map(|i| {
            let t = i as f64 / (n - 1.0);
            Rgba::new(t, 1.0 - t, 0.5, 1.0)
        })
        .collect()
}

#[test]
fn file_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gradient.ff");
    let header = Header::new(16, 4);
    let pixels = gradient(16, 4);

    write_pixels(File::create(&path).unwrap(), header, &pixels, GamutPolicy::Mask).unwrap();
    assert_eq!(std::fs::metadata(&path).unwrap().len(), header.byte_len().unwrap());

    let (read_header, read) = read_pixels(File::open(&path).unwrap()).unwrap();
    assert_eq!(read_header, header);
    assert_eq!(read.len(), pixels.len());
    for (a, b) in pixels.iter().zip(&read) {
        // within half a code step
        assert_abs_diff_eq!(a.r, b.r, epsilon = 0.5 / 65535.0);
        assert_abs_diff_eq!(a.g, b.g, epsilon = 0.5 / 65535.0);
        assert_eq!(b.a, 1.0);
    }
}

#[test]
fn map_stream_between_files() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("in.ff");
    let dst = dir.path().join("out.ff");
    let pixels = gradient(8, 8);
    write_pixels(File::create(&src).unwrap(), Header::new(8, 8), &pixels, GamutPolicy::Clip).unwrap();

    let header = map_stream(
        File::open(&src).unwrap(),
        File::create(&dst).unwrap(),
        GamutPolicy::Mask,
        |px| px.map_rgb(|[r, g, b]| [g, r, b]),
    )
    .unwrap();
    assert_eq!(header, Header::new(8, 8));

    let (_, swapped) = read_pixels(File::open(&dst).unwrap()).unwrap();
    let (_, original) = read_pixels(File::open(&src).unwrap()).unwrap();
    for (a, b) in original.iter().zip(&swapped) {
        assert_eq!(a.r, b.g);
        assert_eq!(a.g, b.r);
        assert_eq!(a.b, b.b);
    }
}

#[test]
fn map_stream_applies_policy() {
    let input = {
        let mut buf = Vec::new();
        write_pixels(&mut buf, Header::new(2, 1), &[Rgba::new(0.5, 0.5, 0.5, 1.0); 2], GamutPolicy::Clip)
            .unwrap();
        buf
    };

    let push = |px: Rgba| px.map_rgb(|[r, g, b]| [r * 3.0, g, b - 1.0]);

    let mut clipped = Vec::new();
    map_stream(input.as_slice(), &mut clipped, GamutPolicy::Clip, push).unwrap();
    let (_, px) = read_pixels(clipped.as_slice()).unwrap();
    assert_eq!(px[0], Rgba::new(1.0, 32768.0 / 65535.0, 0.0, 1.0));

    let mut masked = Vec::new();
    map_stream(input.as_slice(), &mut masked, GamutPolicy::Mask, push).unwrap();
    assert_eq!(&masked[16..24], &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0, 0]);
}

#[test]
fn truncated_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("short.ff");
    {
        let mut f = File::create(&path).unwrap();
        f.write_all(b"farbfeld").unwrap();
        f.write_all(&[0, 0, 0, 2, 0, 0, 0, 2]).unwrap();
        f.write_all(&[0xFF; 12]).unwrap();
    }

    let mut out = Vec::new();
    let err = map_stream(File::open(&path).unwrap(), &mut out, GamutPolicy::Mask, |px| px).unwrap_err();
    match err {
        IoError::Truncated { expected, decoded } => {
            assert_eq!(expected, 4);
            assert_eq!(decoded, 1);
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn not_farbfeld_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("image.png");
    std::fs::write(&path, b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR").unwrap();

    let mut bytes = Vec::new();
    File::open(&path).unwrap().read_to_end(&mut bytes).unwrap();
    let err = read_pixels(bytes.as_slice()).unwrap_err();
    assert!(err.is_invalid_format());
}

#[test]
fn empty_image() {
    let mut buf = Vec::new();
    write_pixels(&mut buf, Header::new(0, 5), &[], GamutPolicy::Mask).unwrap();
    assert_eq!(buf.len(), 16);
    let (header, pixels) = read_pixels(buf.as_slice()).unwrap();
    assert_eq!(header.pixel_count(), 0);
    assert!(pixels.is_empty());
}
