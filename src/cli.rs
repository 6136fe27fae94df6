use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "detector-icons")]
#[command(
    author,
    version,
    about = "Export device, browser and OS metadata as JSON and maintain the icon set"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    // Defaults to `export` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print brands, operating systems and browsers as one JSON document
    Export {
        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },

    /// Check the icon repository for missing, broken or low quality icons
    CheckIcons {
        /// Repository root (overrides the config)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Do not require converted icons under dist/
        #[arg(long)]
        skip_conversion_check: bool,
    },

    /// Print the index of the best frame in an ICO file
    IcoFrame {
        /// Icon file to inspect
        #[arg(required = true)]
        file: PathBuf,

        /// List every frame before the result
        #[arg(long)]
        list: bool,
    },

    /// Sort the ignore lists in the YAML ignore file
    SortIgnoreList {
        /// Ignore file to sort (overrides the config)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        #[arg(value_name = "CONFIG")]
        file: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
