mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./detector-icons.toml",
        "~/.config/detector-icons/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.check.min_image_size == 0 {
        anyhow::bail!("check.min_image_size cannot be 0");
    }

    let hash = &config.check.placeholder_hash;
    if hash.len() != 64 || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
        anyhow::bail!(
            "check.placeholder_hash must be a 64 character hex SHA-256, got {:?}",
            hash
        );
    }

    if config.ignore_list.key.is_empty() {
        anyhow::bail!("ignore_list.key cannot be empty");
    }

    if let Some(ref snapshot) = config.provider.snapshot {
        if !Path::new(shellexpand::tilde(&snapshot.to_string_lossy()).as_ref()).exists() {
            tracing::warn!("Metadata snapshot does not exist: {:?}", snapshot);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn empty_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let config = load_config(&path).unwrap();
        assert!(config.provider.snapshot.is_none());
        assert_eq!(config.check.min_image_size, 48);
        assert_eq!(config.check.placeholders.get("brand").unwrap(), "unk.png");
        assert_eq!(config.check.ignored_source_files.len(), 5);
        assert_eq!(config.ignore_list.key, "less_important_device_detector_icons");
    }

    #[test]
    fn sections_override_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[provider]
snapshot = "data/snapshot.json"

[check]
root = "/srv/icons"
min_image_size = 32
skip_conversion_check = true

[check.placeholders]
os = "UNK.png"

[ignore_list]
path = "ignore.yml"
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(
            config.provider.snapshot.as_deref(),
            Some(Path::new("data/snapshot.json"))
        );
        assert_eq!(config.check.root, Path::new("/srv/icons"));
        assert_eq!(config.check.min_image_size, 32);
        assert!(config.check.skip_conversion_check);
        assert_eq!(config.check.placeholders.len(), 1);
        assert_eq!(config.ignore_list.path, Path::new("ignore.yml"));
        assert_eq!(config.ignore_list.key, "less_important_device_detector_icons");
    }

    #[test]
    fn rejects_zero_min_size() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[check]\nmin_image_size = 0\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("min_image_size"));
    }

    #[test]
    fn rejects_bad_placeholder_hash() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[check]\nplaceholder_hash = \"abc\"\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("placeholder_hash"));
    }

    #[test]
    fn rejects_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[check\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn missing_custom_path_fails() {
        assert!(load_config_or_default(Some(Path::new("/nonexistent/config.toml"))).is_err());
    }
}
