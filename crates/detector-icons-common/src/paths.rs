//! Path utilities for the icon repository layout.
//!
//! Source icons live at `src/<type>/<code>.<ext>` and their converted
//! counterparts at `dist/<type>/<code>.png`. These helpers classify files by
//! extension and map between the two trees.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Directory holding the original icons.
pub const SOURCE_DIR: &str = "src";

/// Directory holding the converted PNG icons.
pub const DIST_DIR: &str = "dist";

/// Extensions of files treated as icons. Matching is case-sensitive.
const ICON_EXTENSIONS: &[&str] = &["svg", "png", "gif", "jpg", "ico"];

/// Raster icon extensions whose pixel size can be measured.
const RASTER_EXTENSIONS: &[&str] = &["png", "gif", "jpg", "ico"];

/// Raster formats that lose quality or carry several sizes.
const LOSSY_EXTENSIONS: &[&str] = &["jpg", "gif", "ico"];

fn extension_in(path: &Path, list: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| list.contains(&ext))
        .unwrap_or(false)
}

/// Check if a path has an icon file extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use detector_icons_common::paths::is_icon_file;
///
/// assert!(is_icon_file(Path::new("src/os/AND.png")));
/// assert!(is_icon_file(Path::new("src/brand/AP.svg")));
/// assert!(!is_icon_file(Path::new("src/brand/AP.svg.source")));
/// ```
pub fn is_icon_file(path: &Path) -> bool {
    extension_in(path, ICON_EXTENSIONS)
}

/// Check if a path is a raster icon whose dimensions can be read.
pub fn is_raster_icon(path: &Path) -> bool {
    extension_in(path, RASTER_EXTENSIONS)
}

/// Check if a path is stored in a lossy or multi-size format.
pub fn is_lossy_icon(path: &Path) -> bool {
    extension_in(path, LOSSY_EXTENSIONS)
}

/// Path of the attribution file that must accompany a source icon.
///
/// ```
/// use std::path::Path;
/// use detector_icons_common::paths::source_attribution_path;
///
/// assert_eq!(
///     source_attribution_path(Path::new("src/brand/AP.png")),
///     Path::new("src/brand/AP.png.source")
/// );
/// ```
pub fn source_attribution_path(icon: &Path) -> PathBuf {
    let mut name = icon.as_os_str().to_owned();
    name.push(".source");
    PathBuf::from(name)
}

/// Map a source icon path (relative to the repository root) to its
/// converted path under `dist/`.
///
/// `src/browsers/FF.svg` becomes `dist/browsers/FF.png`. Paths that are not
/// exactly `src/<type>/<file>` are rejected.
pub fn dist_path_for(relative_source: &Path) -> Result<PathBuf> {
    let mut components = relative_source.components();
    let root = components.next().map(|c| c.as_os_str());
    let icon_type = components.next().map(|c| c.as_os_str());
    let file = components.next();

    match (root, icon_type, file, components.next()) {
        (Some(root), Some(icon_type), Some(_), None) if root == SOURCE_DIR => {
            let stem = relative_source.file_stem().ok_or_else(|| {
                Error::invalid_input(format!("no file name in {:?}", relative_source))
            })?;
            let mut file_name = stem.to_owned();
            file_name.push(".png");
            Ok(Path::new(DIST_DIR).join(icon_type).join(file_name))
        }
        _ => Err(Error::invalid_input(format!(
            "expected {}/<type>/<file>, got {:?}",
            SOURCE_DIR, relative_source
        ))),
    }
}

/// Resolve the `src/` directory of an icon repository.
pub fn source_root(repo_root: &Path) -> Result<PathBuf> {
    let src = repo_root.join(SOURCE_DIR);
    if !src.is_dir() {
        return Err(Error::not_found(format!("{:?}", src)));
    }
    Ok(src)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_extensions() {
        assert!(is_icon_file(Path::new("src/flags/de.svg")));
        assert!(!is_icon_file(Path::new("src/flags/README.md")));
        assert!(!is_icon_file(Path::new("src/flags/noext")));
    }

    #[test]
    fn test_extensions_are_case_sensitive() {
        assert!(is_icon_file(Path::new("src/SEO/alexa.ico")));
        assert!(!is_icon_file(Path::new("src/SEO/alexa.ICO")));
        assert!(!is_raster_icon(Path::new("src/brand/AP.PNG")));
        assert!(!is_lossy_icon(Path::new("src/brand/AP.Jpg")));
    }

    #[test]
    fn test_raster_and_lossy() {
        assert!(is_raster_icon(Path::new("a.png")));
        assert!(!is_raster_icon(Path::new("a.svg")));
        assert!(is_lossy_icon(Path::new("a.jpg")));
        assert!(is_lossy_icon(Path::new("a.ico")));
        assert!(!is_lossy_icon(Path::new("a.png")));
    }

    #[test]
    fn test_dist_path_for() {
        assert_eq!(
            dist_path_for(Path::new("src/browsers/FF.svg")).unwrap(),
            PathBuf::from("dist/browsers/FF.png")
        );
        assert_eq!(
            dist_path_for(Path::new("src/brand/Tecno Mobile.png")).unwrap(),
            PathBuf::from("dist/brand/Tecno Mobile.png")
        );
    }

    #[test]
    fn test_dist_path_rejects_other_layouts() {
        assert!(dist_path_for(Path::new("dist/brand/AP.png")).is_err());
        assert!(dist_path_for(Path::new("src/brand")).is_err());
        assert!(dist_path_for(Path::new("src/brand/nested/AP.png")).is_err());
    }

    #[test]
    fn test_source_root_missing() {
        let err = source_root(Path::new("/nonexistent/repo")).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
