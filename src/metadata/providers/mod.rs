//! Concrete metadata provider implementations.
//!
//! Each submodule wraps a single data source and implements the
//! [`MetadataProvider`](super::MetadataProvider) trait.

pub mod builtin;
pub mod snapshot;

pub use builtin::BuiltinProvider;
pub use snapshot::SnapshotProvider;

use std::path::Path;

use anyhow::Result;
use tracing::info;

use super::MetadataProvider;
use crate::config::ProviderConfig;

/// Select the provider named by the configuration.
///
/// A configured snapshot file takes precedence; otherwise the bundled tables
/// are used.
pub fn from_config(config: &ProviderConfig) -> Result<Box<dyn MetadataProvider>> {
    match &config.snapshot {
        Some(path) => {
            let path = shellexpand::tilde(&path.to_string_lossy()).into_owned();
            info!("Using metadata snapshot {}", path);
            Ok(Box::new(SnapshotProvider::open(Path::new(&path))?))
        }
        None => Ok(Box::new(BuiltinProvider::new())),
    }
}
