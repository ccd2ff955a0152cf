//! tilemap_inspect - validate and inspect tilemap documents
//!
//! ```text
//! tilemap_inspect check maps/*.json
//! tilemap_inspect summary maps/0.json --json
//! tilemap_inspect layers maps/0.json
//! ```

mod config;
mod logging;
mod summary;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tilemap_core::Tilemap;
use tilemap_schema::load_tilemap;
use tracing::{debug, warn};

use config::InspectConfig;
use summary::{draw_order_lines, MapSummary};

#[derive(Parser)]
#[command(name = "tilemap_inspect")]
#[command(version, about = "Validate and inspect tilemap JSON documents")]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate one or more map files
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print an overview of a map
    Summary {
        file: PathBuf,

        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print layers in draw order
    Layers { file: PathBuf },
}

fn main() {
    let cli = Cli::parse();

    let config = match InspectConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };
    logging::init(cli.verbose, &config.log_level);

    if let Err(e) = run(cli.command, &config) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Command, config: &InspectConfig) -> Result<()> {
    match command {
        Command::Check { files } => check(&files),
        Command::Summary { file, json } => {
            let map = load(&file)?;
            let summary = MapSummary::new(&file.display().to_string(), &map);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{summary}");
            }
            Ok(())
        }
        Command::Layers { file } => {
            let map = load(&file)?;
            for line in draw_order_lines(&map, config) {
                println!("{line}");
            }
            Ok(())
        }
    }
}

fn check(files: &[PathBuf]) -> Result<()> {
    let mut failed = 0;
    for file in files {
        match load_tilemap(file) {
            Ok(_) => println!("{}: ok", file.display()),
            Err(e) => {
                warn!(path = %file.display(), error = %e, "validation failed");
                println!("{}: {}", file.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} files failed validation", files.len());
    }
    debug!(files = files.len(), "all files valid");
    Ok(())
}

fn load(path: &Path) -> Result<Tilemap> {
    load_tilemap(path).with_context(|| format!("failed to load {}", path.display()))
}
