//! Device, operating system, and browser metadata export.
//!
//! This module defines the [`MetadataProvider`] trait, the data sources that
//! implement it, and the exporter that turns a provider's tables into one
//! JSON document.
//!
//! # Module layout
//!
//! - [`provider`] -- Trait definition and the export document type.
//! - [`brands`] -- Ordered brand code to name mapping.
//! - [`providers`] -- Concrete providers (bundled tables, snapshot file).
//! - [`export`] -- Building, sorting, and writing the export document.

pub mod brands;
pub mod export;
pub mod provider;
pub mod providers;

pub use brands::BrandList;
pub use export::{build_document, export_to, render};
pub use provider::{ExportDocument, MetadataProvider};
pub use providers::{BuiltinProvider, SnapshotProvider};
