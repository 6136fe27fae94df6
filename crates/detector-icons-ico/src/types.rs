//! Types describing an icon directory

use std::fmt;

/// Kind of resource declared in the directory header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Icon,
    Cursor,
}

/// Encoding of a single frame's image data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameFormat {
    /// Embedded PNG stream (Vista-style icons, usually 256x256).
    Png,
    /// Headerless DIB followed by XOR and AND masks.
    Bmp,
}

impl fmt::Display for FrameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameFormat::Png => write!(f, "PNG"),
            FrameFormat::Bmp => write!(f, "BMP"),
        }
    }
}

/// One image stored in an ICO/CUR file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Zero-based position in the directory.
    pub index: usize,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Bits per pixel, when it can be determined.
    pub bits_per_pixel: Option<u16>,
    /// Encoding of the image data.
    pub format: FrameFormat,
    /// Length of the image data in bytes.
    pub size: u32,
}

impl Frame {
    /// Monochrome frames carry little useful detail for an icon set.
    pub fn is_monochrome(&self) -> bool {
        self.bits_per_pixel == Some(1)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} {}x{}", self.index, self.format, self.width, self.height)?;
        if let Some(bpp) = self.bits_per_pixel {
            write!(f, " {}-bit", bpp)?;
        }
        Ok(())
    }
}
