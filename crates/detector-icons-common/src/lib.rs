//! Detector-icons-common: Shared ordering, path helpers, and errors.
//!
//! This crate provides common functionality used across detector-icons:
//!
//! - **Natural Ordering**: Case-insensitive comparison that reads digit runs as numbers
//! - **Path Utilities**: Icon file extension checks and the `src/`/`dist/` layout
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use detector_icons_common::natural::natural_cmp_ignore_case;
//! use detector_icons_common::paths::is_icon_file;
//! use std::cmp::Ordering;
//! use std::path::Path;
//!
//! assert_eq!(natural_cmp_ignore_case("iPhone2", "iPhone10"), Ordering::Less);
//! assert!(is_icon_file(Path::new("src/brand/AP.svg")));
//! ```

pub mod error;
pub mod natural;
pub mod paths;

pub use error::{Error, Result};
pub use natural::{natural_cmp_ignore_case, sort_by_value_natural};
