use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::generator::build_from_config;

/// Command-line interface for tokenforge
///
/// Turns hierarchical token sources into typed TypeScript modules and
/// stylesheet variable files.
#[derive(Parser)]
#[command(name = "tokenforge")]
#[command(about = "Design token code generator", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands for tokenforge
#[derive(Subcommand)]
pub enum Commands {
    /// Build all configured platform outputs from token sources
    Build {
        /// Path to the build configuration file (JSON or YAML)
        #[arg(short, long, default_value = "tokens.config.json")]
        config: PathBuf,

        /// Limit the build to a single named platform
        #[arg(short, long)]
        platform: Option<String>,

        /// Render every output without writing any files
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
}

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Build {
            config,
            platform,
            dry_run,
        } => {
            let written = build_from_config(config, platform.as_deref(), *dry_run)?;
            if *dry_run {
                println!("ℹ️  Dry run: {} file(s) would be written", written.len());
            } else {
                println!("✅ Build complete: {} file(s) written", written.len());
            }
            Ok(())
        }
    }
}
