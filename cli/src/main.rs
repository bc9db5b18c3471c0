//! statetree CLI - inspect and publish state trees
//!
//! # Commands
//! - `statetree render <state>` - Apply an override, aggregate and print a state tree
//! - `statetree find <state> <source>...` - Print the subtree at a source path
//! - `statetree report <state>` - Run a reporting cycle and write snapshot files

mod render;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use render::OutputFormat;
use tracing_subscriber::EnvFilter;

/// statetree CLI
#[derive(Parser)]
#[command(name = "statetree")]
#[command(author, version, about = "Inspect and publish hierarchical state reports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply an override document, aggregate and print a state tree
    Render {
        /// State JSON file
        state: String,

        /// Override document to merge in before aggregation
        #[arg(short = 'o', long = "override")]
        override_file: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Print levels as stored, without rolling them up
        #[arg(long)]
        no_aggregate: bool,
    },

    /// Print the subtree at a source path
    Find {
        /// State JSON file
        state: String,

        /// Source path, one element per tree level
        #[arg(required = true)]
        path: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Run a reporting cycle and write snapshot files
    Report {
        /// State JSON file produced by the module
        state: String,

        /// Status config (TOML)
        #[arg(short, long)]
        config: Option<String>,

        /// Output directory (overrides the config)
        #[arg(long)]
        out: Option<String>,

        /// Fail on an unusable override document instead of skipping it
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            state,
            override_file,
            format,
            no_aggregate,
        } => render::run_render_command(&state, override_file.as_deref(), format, !no_aggregate),
        Commands::Find {
            state,
            path,
            format,
        } => render::run_find_command(&state, &path, format),
        Commands::Report {
            state,
            config,
            out,
            strict,
        } => report::run_report_command(&state, config.as_deref(), out.as_deref(), strict),
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,statetree_core=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
