//! Main CLI application structure

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::input::ShapeSpec;
use super::output::{Output, OutputFormat};
use super::{area, session};
use crate::config::Config;

#[derive(Parser)]
#[command(name = "shapes")]
#[command(author, version, about = "Compute shape areas with the Visitor pattern")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Path to a config file
    #[arg(long, global = true, env = "SHAPES_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the area of one shape
    ///
    /// Examples:
    ///   shapes area circle:40               # Circle with radius 40
    ///   shapes area "square:Tile:60"        # Named square
    ///   shapes area triangle:Roof:80x50     # Base 80, height 50
    Area {
        /// Shape as kind[:name]:dims
        shape: ShapeSpec,
    },

    /// Compute each shape's area and the total
    Total {
        /// Shapes as kind[:name]:dims (omit to use the demo shapes)
        shapes: Vec<ShapeSpec>,
    },

    /// Start an interactive session reading commands from stdin
    Session {
        /// Start with no shapes instead of the demo shapes
        #[arg(long)]
        empty: bool,
    },

    /// Explain how the visitor computes areas
    Explain,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.default_format);
    let output = Output::new(format, cli.verbose).with_timestamps(config.timestamps);

    output.verbose("shapes starting");
    if let Some(path) = &cli.config {
        output.verbose(&format!("Loaded config from {}", path.display()));
    }

    match cli.command {
        Commands::Area { shape } => area::area(&output, &config, &shape)?,
        Commands::Total { shapes } => area::total(&output, &config, &shapes)?,
        Commands::Session { empty } => {
            session::run(io::stdin().lock(), &output, config, empty)?
        }
        Commands::Explain => area::explain(&output)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}
