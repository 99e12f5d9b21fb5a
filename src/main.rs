//! CLI entry point for mdpost

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mdpost::{BuilderConfig, FactoryRegistry};

/// Config file picked up from the current directory when no --config is given
const DEFAULT_CONFIG_FILE: &str = "mdpost.yml";

#[derive(Parser)]
#[command(name = "mdpost")]
#[command(version)]
#[command(about = "Builds a blog post record from a Markdown file with YAML front-matter", long_about = None)]
struct Cli {
    /// Builder configuration file (defaults to ./mdpost.yml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a post and print it as JSON
    #[command(alias = "b")]
    Build {
        /// Source file
        file: PathBuf,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// List the file extensions that can be built
    Extensions,
}

fn load_config(path: Option<PathBuf>) -> Result<BuilderConfig> {
    let path = match path {
        Some(path) => path,
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                return Ok(BuilderConfig::default());
            }
            default
        }
    };

    tracing::info!("Using configuration {:?}", path);
    Ok(BuilderConfig::load(&path)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "mdpost=debug,info"
    } else {
        "mdpost=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_config(cli.config)?;
    let registry = FactoryRegistry::with_defaults(config);

    match cli.command {
        Commands::Build { file, pretty } => {
            let post = registry
                .create(&file)
                .with_context(|| format!("Failed to build post from {:?}", file))?;

            let json = if pretty {
                serde_json::to_string_pretty(&post)?
            } else {
                serde_json::to_string(&post)?
            };
            println!("{}", json);
        }

        Commands::Extensions => {
            for extension in registry.extensions() {
                println!("{}", extension);
            }
        }
    }

    Ok(())
}
