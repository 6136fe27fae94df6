//! Trait definition and types for metadata providers.
//!
//! This module defines the [`MetadataProvider`] trait that every source of
//! device, operating system, and browser names must implement, along with the
//! [`ExportDocument`] assembled from them.

use serde::{Deserialize, Serialize};

use super::brands::BrandList;

// ---------------------------------------------------------------------------
// Export document
// ---------------------------------------------------------------------------

/// The record written by the exporter.
///
/// Field order here is the key order of the emitted JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    /// Operating system names, in provider order.
    pub os: Vec<String>,
    /// Browser names, in provider order.
    pub browsers: Vec<String>,
    /// Device brands, sorted by name.
    pub brand: BrandList,
}

// ---------------------------------------------------------------------------
// Provider trait
// ---------------------------------------------------------------------------

/// Read-only source of device, operating system, and browser metadata.
///
/// Providers are handed to the exporter by reference and are never mutated
/// through this trait. Every accessor may fail; failures are fatal to an
/// export run.
pub trait MetadataProvider: Send + Sync {
    /// Short, lowercase identifier for this provider (e.g. `"builtin"`).
    fn name(&self) -> &'static str;

    /// Known device brands, keyed by brand code, in the provider's own order.
    fn device_brands(&self) -> anyhow::Result<BrandList>;

    /// Canonical names of the operating systems the provider can detect.
    fn available_operating_systems(&self) -> anyhow::Result<Vec<String>>;

    /// Canonical names of the browsers the provider can detect.
    fn available_browsers(&self) -> anyhow::Result<Vec<String>>;
}
