//! Consistency checks for an icon repository.
//!
//! The repository keeps original icons at `src/<type>/<file>` and converted
//! PNGs at `dist/<type>/<code>.png`. [`run_checks`] walks the source tree one
//! level deep and reports missing conversions, missing attribution files,
//! broken symlinks, damaged placeholders, and icons that are too small or
//! stored in a lossy format.

mod report;

pub use report::{CheckReport, Finding, Severity};

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use detector_icons_common::paths::{
    dist_path_for, is_icon_file, is_lossy_icon, is_raster_icon, source_attribution_path,
    source_root, SOURCE_DIR,
};
use detector_icons_ico::IconDirectory;
use sha2::{Digest, Sha256};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::CheckConfig;

/// A file found at `src/<type>/<name>`.
#[derive(Debug, Clone)]
struct SourceEntry {
    /// Path relative to the repository root.
    relative: PathBuf,
    /// Absolute (or root-joined) path.
    path: PathBuf,
    icon_type: String,
    is_symlink: bool,
}

/// Run every check against the repository at `config.root`.
pub fn run_checks(config: &CheckConfig) -> Result<CheckReport> {
    let root = config.root.as_path();
    let entries = scan_sources(root)?;
    info!("Checking {} files under {:?}", entries.len(), root.join(SOURCE_DIR));

    let mut report = CheckReport {
        files_scanned: entries.len(),
        ..CheckReport::default()
    };

    if config.skip_conversion_check {
        debug!("Skipping conversion check");
    } else {
        check_converted(root, &entries, &config.ignored_source_files, &mut report)?;
    }
    check_sources(&entries, &config.source_required_types, &mut report);
    check_symlinks(&entries, &mut report);
    check_placeholders(root, config, &mut report)?;
    check_sizes(&entries, config, &mut report);

    Ok(report)
}

fn scan_sources(root: &Path) -> Result<Vec<SourceEntry>> {
    let src = source_root(root)?;
    let mut entries = Vec::new();

    for entry in WalkDir::new(&src)
        .min_depth(2)
        .max_depth(2)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("Failed to scan {:?}", src))?;
        if entry.file_type().is_dir() || entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        let path = entry.path().to_path_buf();
        let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
        let icon_type = path
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        entries.push(SourceEntry {
            relative,
            path,
            icon_type,
            is_symlink: entry.path_is_symlink(),
        });
    }

    Ok(entries)
}

fn check_converted(
    root: &Path,
    entries: &[SourceEntry],
    ignored: &[PathBuf],
    report: &mut CheckReport,
) -> Result<()> {
    for entry in entries.iter().filter(|e| is_icon_file(&e.relative)) {
        if ignored.iter().any(|i| i == &entry.relative) {
            continue;
        }
        let expected = dist_path_for(&entry.relative)?;
        if !root.join(&expected).is_file() {
            report.push(Finding::NotConverted {
                source: entry.relative.clone(),
                expected,
            });
        }
    }
    Ok(())
}

fn check_sources(entries: &[SourceEntry], types: &[String], report: &mut CheckReport) {
    for entry in entries {
        if entry.is_symlink || !is_icon_file(&entry.relative) || !types.contains(&entry.icon_type) {
            continue;
        }
        if entry.relative.to_string_lossy().contains("UNK") {
            continue;
        }
        if !source_attribution_path(&entry.path).is_file() {
            report.push(Finding::MissingSource {
                icon: entry.relative.clone(),
            });
        }
    }
}

fn check_symlinks(entries: &[SourceEntry], report: &mut CheckReport) {
    for entry in entries.iter().filter(|e| e.is_symlink) {
        // exists() follows the link
        if !entry.path.exists() {
            let target = fs::read_link(&entry.path).unwrap_or_default();
            report.push(Finding::BrokenSymlink {
                link: entry.relative.clone(),
                target,
            });
        }
    }
}

fn check_placeholders(root: &Path, config: &CheckConfig, report: &mut CheckReport) -> Result<()> {
    for (icon_type, file_name) in &config.placeholders {
        let relative = Path::new(SOURCE_DIR).join(icon_type).join(file_name);
        let path = root.join(&relative);

        let valid = if path.is_file() {
            let bytes =
                fs::read(&path).with_context(|| format!("Failed to read placeholder {:?}", path))?;
            let digest = hex::encode(Sha256::digest(&bytes));
            digest.eq_ignore_ascii_case(&config.placeholder_hash)
        } else {
            false
        };

        if !valid {
            report.push(Finding::BadPlaceholder { path: relative });
        }
    }
    Ok(())
}

fn check_sizes(entries: &[SourceEntry], config: &CheckConfig, report: &mut CheckReport) {
    for entry in entries {
        if !config.size_checked_types.contains(&entry.icon_type) || !is_raster_icon(&entry.relative)
        {
            continue;
        }
        // Broken links are reported by the symlink check.
        if !entry.path.exists() {
            continue;
        }

        match image_size(&entry.path) {
            Ok((width, height)) => {
                if width < config.min_image_size || height < config.min_image_size {
                    report.push(Finding::TooSmall {
                        path: entry.relative.clone(),
                        width,
                        height,
                        min: config.min_image_size,
                    });
                }
            }
            Err(e) => report.push(Finding::Unreadable {
                path: entry.relative.clone(),
                reason: format!("{:#}", e),
            }),
        }

        if is_lossy_icon(&entry.relative) {
            let format = entry
                .relative
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default();
            report.push(Finding::LossyFormat {
                path: entry.relative.clone(),
                format,
            });
        }
    }
}

/// Pixel size of a raster icon. ICO files report their largest frame.
fn image_size(path: &Path) -> Result<(u32, u32)> {
    if path.extension().is_some_and(|e| e == "ico") {
        let dir = IconDirectory::read_file(path)?;
        return dir
            .largest_dimensions()
            .ok_or_else(|| anyhow::anyhow!("icon has no frames"));
    }

    Ok(image::image_dimensions(path)?)
}
