//! Metadata read from a JSON snapshot file.
//!
//! The snapshot has the same shape as an export document (`os`, `browsers`,
//! `brand`), so a previous export can be fed back in. The file is read once
//! when the provider is opened; brand order in the file is kept as provider
//! order.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::metadata::brands::BrandList;
use crate::metadata::provider::{ExportDocument, MetadataProvider};

/// Provider backed by a snapshot file on disk.
#[derive(Debug, Clone)]
pub struct SnapshotProvider {
    path: PathBuf,
    data: ExportDocument,
}

impl SnapshotProvider {
    /// Read and parse the snapshot at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read metadata snapshot: {:?}", path))?;
        let data: ExportDocument = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse metadata snapshot: {:?}", path))?;

        debug!(
            path = %path.display(),
            brands = data.brand.len(),
            os = data.os.len(),
            browsers = data.browsers.len(),
            "Loaded metadata snapshot"
        );

        Ok(Self {
            path: path.to_path_buf(),
            data,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MetadataProvider for SnapshotProvider {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn device_brands(&self) -> Result<BrandList> {
        Ok(self.data.brand.clone())
    }

    fn available_operating_systems(&self) -> Result<Vec<String>> {
        Ok(self.data.os.clone())
    }

    fn available_browsers(&self) -> Result<Vec<String>> {
        Ok(self.data.browsers.clone())
    }
}
