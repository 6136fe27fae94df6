//! Integration tests for detector-icons-ico

use detector_icons_ico::{best_frame_index, FrameFormat, IcoError, IconDirectory, ResourceKind};

/// Frame description used to assemble test icons.
struct TestFrame {
    width: u8,
    height: u8,
    bit_count: u16,
    payload: Vec<u8>,
}

/// BITMAPINFOHEADER for a frame; the stored height covers both masks.
fn bmp_payload(size: u32, bit_count: u16) -> Vec<u8> {
    let mut dib = vec![0u8; 40];
    dib[0..4].copy_from_slice(&40u32.to_le_bytes());
    dib[4..8].copy_from_slice(&size.to_le_bytes());
    dib[8..12].copy_from_slice(&(size * 2).to_le_bytes());
    dib[12..14].copy_from_slice(&1u16.to_le_bytes());
    dib[14..16].copy_from_slice(&bit_count.to_le_bytes());
    dib
}

fn png_payload(size: u32) -> Vec<u8> {
    let mut out = std::io::Cursor::new(Vec::new());
    image::RgbaImage::new(size, size)
        .write_to(&mut out, image::ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

fn build_icon(kind: u16, frames: &[TestFrame]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&kind.to_le_bytes());
    out.extend_from_slice(&(frames.len() as u16).to_le_bytes());

    let mut offset = 6 + 16 * frames.len() as u32;
    for frame in frames {
        out.push(frame.width);
        out.push(frame.height);
        out.push(0);
        out.push(0);
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&frame.bit_count.to_le_bytes());
        out.extend_from_slice(&(frame.payload.len() as u32).to_le_bytes());
        out.extend_from_slice(&offset.to_le_bytes());
        offset += frame.payload.len() as u32;
    }
    for frame in frames {
        out.extend_from_slice(&frame.payload);
    }
    out
}

fn bmp_frame(size: u8, bit_count: u16) -> TestFrame {
    TestFrame {
        width: size,
        height: size,
        bit_count,
        payload: bmp_payload(u32::from(size), bit_count),
    }
}

#[test]
fn test_parse_bmp_frames() {
    let data = build_icon(1, &[bmp_frame(16, 32), bmp_frame(32, 8)]);
    let dir = IconDirectory::parse(&data).unwrap();

    assert_eq!(dir.kind, ResourceKind::Icon);
    assert_eq!(dir.frames.len(), 2);
    assert_eq!(dir.frames[0].width, 16);
    assert_eq!(dir.frames[0].bits_per_pixel, Some(32));
    assert_eq!(dir.frames[1].format, FrameFormat::Bmp);
    assert_eq!(dir.frames[1].bits_per_pixel, Some(8));
    assert_eq!(dir.frames[1].size, 40);
}

#[test]
fn test_best_frame_skips_monochrome() {
    let data = build_icon(1, &[bmp_frame(32, 32), bmp_frame(64, 1), bmp_frame(16, 4)]);
    let dir = IconDirectory::parse(&data).unwrap();

    assert_eq!(dir.best_frame().unwrap().index, 0);
}

#[test]
fn test_best_frame_prefers_later_on_tie() {
    let data = build_icon(1, &[bmp_frame(48, 8), bmp_frame(48, 32), bmp_frame(16, 32)]);
    let dir = IconDirectory::parse(&data).unwrap();

    assert_eq!(dir.best_frame().unwrap().index, 1);
}

#[test]
fn test_png_frame_uses_png_header() {
    let png = TestFrame {
        width: 0,
        height: 0,
        bit_count: 0,
        payload: png_payload(256),
    };
    let data = build_icon(1, &[bmp_frame(48, 32), png]);
    let dir = IconDirectory::parse(&data).unwrap();

    let frame = &dir.frames[1];
    assert_eq!(frame.format, FrameFormat::Png);
    assert_eq!((frame.width, frame.height), (256, 256));
    assert_eq!(frame.bits_per_pixel, Some(32));
    assert_eq!(dir.best_frame().unwrap().index, 1);
    assert_eq!(dir.largest_dimensions(), Some((256, 256)));
}

#[test]
fn test_depth_from_entry_without_dib_header() {
    let frame = TestFrame {
        width: 32,
        height: 32,
        bit_count: 1,
        payload: vec![0u8; 8],
    };
    let data = build_icon(1, &[frame]);
    let dir = IconDirectory::parse(&data).unwrap();

    assert_eq!(dir.frames[0].bits_per_pixel, Some(1));
}

#[test]
fn test_monochrome_icon_selects_first_frame() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("favicon.ico");
    std::fs::write(&path, build_icon(1, &[bmp_frame(16, 1), bmp_frame(32, 1)])).unwrap();

    assert_eq!(best_frame_index(&path).unwrap(), 0);
}

#[test]
fn test_cursor_ignores_hotspot_fields() {
    let mut frame = bmp_frame(32, 24);
    // Hotspot y lands in the bit count slot for cursors.
    frame.bit_count = 1;
    let data = build_icon(2, &[frame]);
    let dir = IconDirectory::parse(&data).unwrap();

    assert_eq!(dir.kind, ResourceKind::Cursor);
    assert_eq!(dir.frames[0].bits_per_pixel, Some(24));
}

#[test]
fn test_payload_out_of_bounds() {
    let mut data = build_icon(1, &[bmp_frame(16, 32)]);
    data.truncate(data.len() - 10);

    assert!(matches!(
        IconDirectory::parse(&data),
        Err(IcoError::Malformed(_))
    ));
}

#[test]
fn test_best_frame_index_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("favicon.ico");
    std::fs::write(&path, build_icon(1, &[bmp_frame(16, 32), bmp_frame(32, 32)])).unwrap();

    assert_eq!(best_frame_index(&path).unwrap(), 1);
}

#[test]
fn test_missing_file() {
    let result = best_frame_index(std::path::Path::new("/nonexistent/favicon.ico"));
    assert!(matches!(result, Err(IcoError::FileNotFound(_))));
}
