//! # detector-icons-ico
//!
//! Frame inspection for ICO and CUR files.
//!
//! Favicons frequently bundle several sizes and colour depths in one file.
//! This crate lists the frames without decoding pixels and picks the frame
//! worth converting. The container itself is read with the `ico` crate.
//!
//! ## Features
//!
//! - Icons and cursors, with cursor hotspots never mistaken for colour depth
//! - PNG-compressed frames: size and depth read from the PNG header
//! - BMP frames: depth from the DIB header, else from the directory entry
//!
//! ## Example
//!
//! ```no_run
//! use detector_icons_ico::IconDirectory;
//! use std::path::Path;
//!
//! let dir = IconDirectory::read_file(Path::new("favicon.ico")).unwrap();
//! for frame in &dir.frames {
//!     println!("{}", frame);
//! }
//! println!("best frame: {}", dir.best_frame().unwrap().index);
//! ```

pub mod directory;
pub mod error;
pub mod types;

pub use directory::IconDirectory;
pub use error::IcoError;
pub use types::*;

use std::path::Path;

/// Index of the frame to extract from an icon file: the widest one that is
/// not monochrome, or the first frame when all of them are.
pub fn best_frame_index(path: &Path) -> Result<usize, IcoError> {
    let dir = IconDirectory::read_file(path)?;
    dir.best_frame().map(|f| f.index)
}
