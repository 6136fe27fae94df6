//! Assembling and writing the metadata export.
//!
//! The exporter asks a [`MetadataProvider`] for its three collections, sorts
//! the brands by name, and writes a single JSON document. Output is compact
//! and has no trailing newline unless pretty printing is requested.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::provider::{ExportDocument, MetadataProvider};

/// Collect the provider's data into an [`ExportDocument`].
///
/// Brands are sorted by name in natural, case-insensitive order. Operating
/// systems and browsers are passed through untouched.
pub fn build_document(provider: &dyn MetadataProvider) -> Result<ExportDocument> {
    let brand = provider
        .device_brands()
        .with_context(|| format!("Failed to read device brands from {}", provider.name()))?
        .into_sorted();

    let os = provider.available_operating_systems().with_context(|| {
        format!("Failed to read operating systems from {}", provider.name())
    })?;

    let browsers = provider
        .available_browsers()
        .with_context(|| format!("Failed to read browsers from {}", provider.name()))?;

    debug!(
        provider = provider.name(),
        brands = brand.len(),
        os = os.len(),
        browsers = browsers.len(),
        "Collected metadata"
    );

    Ok(ExportDocument {
        os,
        browsers,
        brand,
    })
}

/// Serialize a document to JSON text.
pub fn render(document: &ExportDocument, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    Ok(json)
}

/// Build the document from `provider` and write it to `out`.
///
/// Nothing is written when the provider fails.
pub fn export_to<W: Write>(
    provider: &dyn MetadataProvider,
    out: &mut W,
    pretty: bool,
) -> Result<()> {
    let document = build_document(provider)?;
    let json = render(&document, pretty)?;

    out.write_all(json.as_bytes())
        .context("Failed to write export document")?;
    if pretty {
        out.write_all(b"\n")?;
    }
    out.flush()?;

    info!(
        provider = provider.name(),
        bytes = json.len(),
        "Exported metadata"
    );
    Ok(())
}
