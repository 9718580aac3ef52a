//! classgen CLI - Model class generator for relational tables
//!
//! Commands:
//! - `classgen generate` - Generate one class file per table
//! - `classgen check` - Validate a classgen.toml configuration

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod generate;
mod logging;

use logging::LogLevel;

#[derive(Parser)]
#[command(name = "classgen")]
#[command(author, version, about = "Generate model classes from table metadata", long_about = None)]
struct Cli {
    /// Log level (overridden by RUST_LOG)
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate classes from a JSON table description
    Generate {
        /// JSON file with the table descriptors
        #[arg(short, long)]
        tables: Option<PathBuf>,

        /// Path to classgen.toml (default: ./classgen.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output directory for generated files
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory with template, type-conversion and annotation overrides
        #[arg(short, long)]
        resources: Option<PathBuf>,

        /// Table-name filter, `*` as wildcard at either end
        #[arg(short, long)]
        filter: Option<String>,

        /// Namespace for the generated classes
        #[arg(short, long)]
        namespace: Option<String>,

        /// Print the generated code instead of writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate a classgen.toml configuration
    Check {
        /// Path to classgen.toml (default: ./classgen.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_level)?;

    match cli.command {
        Commands::Generate {
            tables,
            config,
            output,
            resources,
            filter,
            namespace,
            dry_run,
        } => {
            generate::run(generate::GenerateArgs {
                tables,
                config,
                output,
                resources,
                filter,
                namespace,
                dry_run,
            })?;
        }
        Commands::Check { config } => {
            config::check(config)?;
        }
    }

    Ok(())
}
