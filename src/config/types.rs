use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub check: CheckConfig,

    #[serde(default)]
    pub ignore_list: IgnoreListConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderConfig {
    /// JSON snapshot to read metadata from instead of the bundled tables
    #[serde(default)]
    pub snapshot: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckConfig {
    /// Root of the icon repository (holds `src/` and `dist/`)
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Smallest acceptable width and height for raster icons
    #[serde(default = "default_min_image_size")]
    pub min_image_size: u32,

    /// SHA-256 (hex) every placeholder icon must have
    #[serde(default = "default_placeholder_hash")]
    pub placeholder_hash: String,

    /// Placeholder file name per icon type
    #[serde(default = "default_placeholders")]
    pub placeholders: BTreeMap<String, String>,

    /// Source files (relative to root) that are never converted
    #[serde(default = "default_ignored_source_files")]
    pub ignored_source_files: Vec<PathBuf>,

    /// Icon types whose files need a `.source` attribution file
    #[serde(default = "default_source_required_types")]
    pub source_required_types: Vec<String>,

    /// Icon types whose raster files are checked for size and format
    #[serde(default = "default_size_checked_types")]
    pub size_checked_types: Vec<String>,

    /// Skip the src -> dist conversion check (e.g. before a build has run)
    #[serde(default)]
    pub skip_conversion_check: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            min_image_size: default_min_image_size(),
            placeholder_hash: default_placeholder_hash(),
            placeholders: default_placeholders(),
            ignored_source_files: default_ignored_source_files(),
            source_required_types: default_source_required_types(),
            size_checked_types: default_size_checked_types(),
            skip_conversion_check: false,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_min_image_size() -> u32 {
    48
}

fn default_placeholder_hash() -> String {
    "398a623a3b0b10eba6d1884b0ff1713ee12aeafaa8efaf67b60a4624f4dce48c".to_string()
}

fn default_placeholders() -> BTreeMap<String, String> {
    [
        ("brand", "unk.png"),
        ("browsers", "UNK.png"),
        ("devices", "unknown.png"),
        ("os", "UNK.png"),
        ("searchEngines", "xx.png"),
        ("socials", "xx.png"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn default_ignored_source_files() -> Vec<PathBuf> {
    [
        "src/flags/un.svg",
        "src/flags/gb-wls.svg",
        "src/flags/gb-sct.svg",
        "src/flags/gb-eng.svg",
        "src/flags/gb-nir.svg",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

fn default_source_required_types() -> Vec<String> {
    ["brand", "browsers", "os", "plugins", "SEO"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_size_checked_types() -> Vec<String> {
    ["brand", "browsers", "devices", "flags", "os", "plugins", "SEO"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct IgnoreListConfig {
    /// YAML file holding the ignore lists
    #[serde(default = "default_ignore_list_path")]
    pub path: PathBuf,

    /// Top-level key of the mapping whose lists get sorted
    #[serde(default = "default_ignore_list_key")]
    pub key: String,
}

impl Default for IgnoreListConfig {
    fn default() -> Self {
        Self {
            path: default_ignore_list_path(),
            key: default_ignore_list_key(),
        }
    }
}

fn default_ignore_list_path() -> PathBuf {
    PathBuf::from("tests-ignore.yml")
}

fn default_ignore_list_key() -> String {
    "less_important_device_detector_icons".to_string()
}
