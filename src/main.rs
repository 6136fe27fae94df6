mod cli;

use detector_icons::{check, config, ignore_list, metadata};
use detector_icons_ico::IconDirectory;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag.
    // Logs go to stderr; stdout carries the export document.
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "detector_icons=debug,detector_icons_common=debug,detector_icons_ico=debug".to_string()
        } else {
            "detector_icons=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        None => export(cli.config.as_deref(), false),
        Some(Commands::Export { pretty }) => export(cli.config.as_deref(), pretty),
        Some(Commands::CheckIcons {
            root,
            skip_conversion_check,
        }) => check_icons(cli.config.as_deref(), root, skip_conversion_check),
        Some(Commands::IcoFrame { file, list }) => ico_frame(&file, list),
        Some(Commands::SortIgnoreList { file }) => sort_ignore_list(cli.config.as_deref(), file),
        Some(Commands::Validate { file }) => {
            let path = file.or(cli.config);
            validate_config(path.as_deref())
        }
        Some(Commands::Version) => {
            println!("detector-icons {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn export(config_path: Option<&Path>, pretty: bool) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let provider = metadata::providers::from_config(&config.provider)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    metadata::export_to(provider.as_ref(), &mut out, pretty)
}

fn check_icons(
    config_path: Option<&Path>,
    root: Option<std::path::PathBuf>,
    skip_conversion_check: bool,
) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;
    if let Some(root) = root {
        config.check.root = root;
    }
    if skip_conversion_check {
        config.check.skip_conversion_check = true;
    }

    let report = check::run_checks(&config.check)?;

    for finding in &report.findings {
        let marker = match finding.severity() {
            check::Severity::Error => "✗",
            check::Severity::Warning => "!",
        };
        println!("{} {}", marker, finding);
    }

    let errors = report.errors().count();
    let warnings = report.warnings().count();
    println!();
    println!(
        "Checked {} files: {} errors, {} warnings",
        report.files_scanned, errors, warnings
    );

    if errors > 0 {
        anyhow::bail!("Icon check failed with {} errors", errors);
    }
    Ok(())
}

fn ico_frame(file: &Path, list: bool) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {:?}", file);
    }

    let dir = IconDirectory::read_file(file)?;
    if list {
        for frame in &dir.frames {
            println!("{}", frame);
        }
    }

    let best = dir.best_frame()?;
    tracing::debug!("Best frame: {}", best);
    println!("{}", best.index);
    Ok(())
}

fn sort_ignore_list(config_path: Option<&Path>, file: Option<std::path::PathBuf>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let path = file.unwrap_or(config.ignore_list.path);

    let sorted = ignore_list::sort_file(&path, &config.ignore_list.key)?;
    println!("Sorted {} lists in {}", sorted, path.display());
    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            config
        }
        None => {
            println!("No config file specified, using defaults");
            config::Config::default()
        }
    };

    match config.provider.snapshot {
        Some(ref snapshot) => println!("  Provider: snapshot ({})", snapshot.display()),
        None => println!("  Provider: builtin"),
    }
    println!("  Icon root: {}", config.check.root.display());
    println!("  Minimum icon size: {}px", config.check.min_image_size);
    println!("  Placeholders: {}", config.check.placeholders.len());
    println!("  Ignore list: {}", config.ignore_list.path.display());

    Ok(())
}
