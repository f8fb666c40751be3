//! Inspect and validate geonames import settings
//!
//! # Usage
//!
//! ```bash
//! geonames-conf --config cities.toml show --format toml
//! geonames-conf check
//! geonames-conf urls city postal_code
//! geonames-conf countries --retired
//! ```
//!
//! Plugins cannot be instantiated from this binary; a configuration that
//! lists plugins fails resolution here and must be checked by the host.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use geonames_conf::{
    ConfigLoader, ImportStage,
    cli::{self, OutputFormat, commands},
    utils::get_version,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "geonames-conf")]
#[command(disable_version_flag = true)]
struct Cli {
    /// Host settings file (TOML)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Show version information
    #[arg(long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the resolved settings
    Show {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Resolve the settings and report any configuration error
    Check,
    /// Print download URLs for the given import stages
    Urls {
        /// Import stages (all, country, region, subregion, city, district, alt_name, postal_code)
        #[arg(value_name = "STAGE", value_parser = parse_stage)]
        stages: Vec<ImportStage>,
    },
    /// Print supported country codes
    Countries {
        /// Print withdrawn codes instead
        #[arg(long)]
        retired: bool,
    },
}

fn parse_stage(value: &str) -> Result<ImportStage, String> {
    value.parse().map_err(|e: geonames_conf::Error| e.to_string())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", get_version());
        return Ok(());
    }

    cli::init_logging(cli.verbose);

    let Some(command) = cli.command else {
        eprintln!("No command given, see --help");
        std::process::exit(2);
    };

    let loader = ConfigLoader::new();
    let settings = match loader.load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    debug!("Settings resolved for data dir {:?}", settings.data_dir);

    let mut stdout = io::stdout().lock();
    match command {
        Command::Show { format } => commands::show(&settings, format, &mut stdout)?,
        Command::Check => writeln!(stdout, "configuration ok")?,
        Command::Urls { stages } => commands::urls(&settings, &stages, &mut stdout)?,
        Command::Countries { retired } => commands::countries(&settings, retired, &mut stdout)?,
    }

    Ok(())
}
