//! Taxa CLI - category taxonomy for documentation sites.
//!
//! Provides commands for:
//! - `build`: Generate category pages and publish the site
//! - `list`: Print the category hierarchy

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use taxa_config::Config;
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, ListArgs};
use error::CliError;
use output::Output;

/// Taxa - category taxonomy for documentation sites.
#[derive(Parser)]
#[command(name = "taxa", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate category pages and publish the site.
    Build(BuildArgs),
    /// Print the category hierarchy without writing files.
    List(ListArgs),
}

impl Commands {
    fn load_config(&self) -> Result<Config, CliError> {
        match self {
            Self::Build(args) => args.load_config(),
            Self::List(args) => args.load_config(),
        }
    }

    fn execute(&self, config: &Config) -> Result<(), CliError> {
        match self {
            Self::Build(_) => commands::build::execute(config),
            Self::List(_) => commands::list::execute(config),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let config = match cli.command.load_config() {
        Ok(config) => config,
        Err(err) => {
            output.error(&format!("Error: {err}"));
            std::process::exit(1);
        }
    };

    // Verbose (from --verbose or the config file) enables INFO level,
    // otherwise use RUST_LOG or default to WARN
    let filter = if config.categories.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = cli.command.execute(&config) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
