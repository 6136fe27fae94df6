//! ICO/CUR directory reading

use std::fs;
use std::io::Cursor;
use std::path::Path;

use ico::{IconDir, IconDirEntry, ResourceType};
use image::codecs::png::PngDecoder;
use image::ImageDecoder;
use tracing::debug;

use crate::error::IcoError;
use crate::types::{Frame, FrameFormat, ResourceKind};

/// Frames of an ICO or CUR file, in directory order.
#[derive(Debug, Clone)]
pub struct IconDirectory {
    pub kind: ResourceKind,
    pub frames: Vec<Frame>,
}

impl IconDirectory {
    /// Read and parse an icon file from disk.
    pub fn read_file(path: &Path) -> Result<Self, IcoError> {
        if !path.exists() {
            return Err(IcoError::FileNotFound(path.to_path_buf()));
        }
        let data = fs::read(path)?;
        Self::parse(&data)
    }

    /// Parse an icon directory from the full file contents.
    pub fn parse(data: &[u8]) -> Result<Self, IcoError> {
        let dir = IconDir::read(Cursor::new(data)).map_err(IcoError::Malformed)?;

        let kind = match dir.resource_type() {
            ResourceType::Icon => ResourceKind::Icon,
            ResourceType::Cursor => ResourceKind::Cursor,
        };
        let frames = dir
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| frame_from_entry(index, entry, kind))
            .collect();

        Ok(Self { kind, frames })
    }

    /// Pick the widest frame, ignoring monochrome ones. Later frames win ties.
    ///
    /// An icon made only of monochrome frames still yields its first frame,
    /// so conversion always has something to work with.
    pub fn best_frame(&self) -> Result<&Frame, IcoError> {
        let first = self.frames.first().ok_or(IcoError::NoFrames)?;
        let best = self
            .frames
            .iter()
            .filter(|f| !f.is_monochrome())
            .fold(None, |best: Option<&Frame>, frame| match best {
                Some(b) if b.width > frame.width => Some(b),
                _ => Some(frame),
            });
        Ok(best.unwrap_or(first))
    }

    /// Dimensions of the frame covering the most pixels.
    pub fn largest_dimensions(&self) -> Option<(u32, u32)> {
        self.frames
            .iter()
            .max_by_key(|f| u64::from(f.width) * u64::from(f.height))
            .map(|f| (f.width, f.height))
    }
}

fn frame_from_entry(index: usize, entry: &IconDirEntry, kind: ResourceKind) -> Frame {
    let data = entry.data();
    // Cursors store the hotspot where icons store the bit count.
    let entry_bits = match kind {
        ResourceKind::Icon => Some(entry.bits_per_pixel()).filter(|&b| b != 0),
        ResourceKind::Cursor => None,
    };

    let mut frame = Frame {
        index,
        width: entry.width(),
        height: entry.height(),
        bits_per_pixel: entry_bits,
        format: FrameFormat::Bmp,
        size: data.len() as u32,
    };

    if entry.is_png() {
        frame.format = FrameFormat::Png;
        match png_header(data) {
            Ok((width, height, bits)) => {
                frame.width = width;
                frame.height = height;
                frame.bits_per_pixel = Some(bits);
            }
            Err(e) => debug!("Frame {}: unreadable PNG header, using directory entry: {}", index, e),
        }
    } else if let Some(bits) = dib_bit_count(data) {
        frame.bits_per_pixel = Some(bits);
    }

    frame
}

/// Width, height and bits per pixel as stored in a PNG frame's header.
fn png_header(data: &[u8]) -> image::ImageResult<(u32, u32, u16)> {
    let decoder = PngDecoder::new(Cursor::new(data))?;
    let (width, height) = decoder.dimensions();
    Ok((width, height, decoder.original_color_type().bits_per_pixel()))
}

/// `biBitCount` of the BITMAPINFOHEADER that opens a BMP frame.
fn dib_bit_count(data: &[u8]) -> Option<u16> {
    let bytes = data.get(14..16)?;
    Some(u16::from_le_bytes([bytes[0], bytes[1]])).filter(|&b| b != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(kind: u16, count: u16) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(&kind.to_le_bytes());
        out.extend_from_slice(&count.to_le_bytes());
        out
    }

    fn frame(index: usize, width: u32, bits: Option<u16>) -> Frame {
        Frame {
            index,
            width,
            height: width,
            bits_per_pixel: bits,
            format: FrameFormat::Bmp,
            size: 0,
        }
    }

    #[test]
    fn test_rejects_bad_reserved() {
        let mut data = header(1, 0);
        data[0] = 1;
        assert!(matches!(IconDirectory::parse(&data), Err(IcoError::Malformed(_))));
    }

    #[test]
    fn test_rejects_unknown_type() {
        let data = header(3, 0);
        assert!(matches!(IconDirectory::parse(&data), Err(IcoError::Malformed(_))));
    }

    #[test]
    fn test_truncated_directory() {
        let data = header(1, 2);
        assert!(matches!(IconDirectory::parse(&data), Err(IcoError::Malformed(_))));
    }

    #[test]
    fn test_empty_directory_has_no_best_frame() {
        let dir = IconDirectory {
            kind: ResourceKind::Icon,
            frames: vec![],
        };
        assert!(matches!(dir.best_frame(), Err(IcoError::NoFrames)));
        assert_eq!(dir.largest_dimensions(), None);
    }

    #[test]
    fn test_monochrome_only_falls_back_to_first() {
        let dir = IconDirectory {
            kind: ResourceKind::Icon,
            frames: vec![frame(0, 16, Some(1)), frame(1, 32, Some(1))],
        };
        assert_eq!(dir.best_frame().unwrap().index, 0);
    }

    #[test]
    fn test_unknown_depth_is_eligible() {
        let dir = IconDirectory {
            kind: ResourceKind::Icon,
            frames: vec![frame(0, 16, Some(32)), frame(1, 32, None)],
        };
        assert_eq!(dir.best_frame().unwrap().index, 1);
    }

    #[test]
    fn test_dib_bit_count() {
        let mut dib = vec![0u8; 40];
        assert_eq!(dib_bit_count(&dib), None);
        dib[14] = 24;
        assert_eq!(dib_bit_count(&dib), Some(24));
        assert_eq!(dib_bit_count(&dib[..10]), None);
    }
}
