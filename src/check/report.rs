//! Findings produced by an icon tree check.

use std::fmt;
use std::path::PathBuf;

/// How a finding affects the outcome of a check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fails the run.
    Error,
    /// Reported, but the run still passes.
    Warning,
}

/// A single problem found in the icon tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// A source icon has no converted PNG under `dist/`.
    NotConverted { source: PathBuf, expected: PathBuf },
    /// An icon has no `.source` attribution file next to it.
    MissingSource { icon: PathBuf },
    /// A symlink points at a file that does not exist.
    BrokenSymlink { link: PathBuf, target: PathBuf },
    /// A placeholder icon is absent or differs from the reference image.
    BadPlaceholder { path: PathBuf },
    /// An icon could not be decoded.
    Unreadable { path: PathBuf, reason: String },
    /// A raster icon is below the minimum size.
    TooSmall {
        path: PathBuf,
        width: u32,
        height: u32,
        min: u32,
    },
    /// A raster icon is stored as JPEG, GIF or ICO.
    LossyFormat { path: PathBuf, format: String },
}

impl Finding {
    pub fn severity(&self) -> Severity {
        match self {
            Finding::TooSmall { .. } | Finding::LossyFormat { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::NotConverted { source, expected } => write!(
                f,
                "{} is missing (from {})",
                expected.display(),
                source.display()
            ),
            Finding::MissingSource { icon } => {
                write!(f, "Source is missing for {}", icon.display())
            }
            Finding::BrokenSymlink { link, target } => write!(
                f,
                "Symlink doesn't link to a file ({} -> {})",
                link.display(),
                target.display()
            ),
            Finding::BadPlaceholder { path } => write!(
                f,
                "The placeholder icon {} is missing or invalid",
                path.display()
            ),
            Finding::Unreadable { path, reason } => {
                write!(f, "{} cannot be read: {}", path.display(), reason)
            }
            Finding::TooSmall {
                path,
                width,
                height,
                min,
            } => write!(
                f,
                "{} is smaller ({}x{}) than the target size ({}x{})",
                path.display(),
                width,
                height,
                min,
                min
            ),
            Finding::LossyFormat { path, format } => write!(
                f,
                "{} is saved in a lossy image format ({}). Maybe try to find a PNG or SVG from another source.",
                path.display(),
                format
            ),
        }
    }
}

/// Outcome of a check run.
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub findings: Vec<Finding>,
    /// Number of files visited under `src/`.
    pub files_scanned: usize,
}

impl CheckReport {
    pub fn push(&mut self, finding: Finding) {
        tracing::debug!("{}", finding);
        self.findings.push(finding);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity() == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity() == Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }
}
