//! blockdown CLI - Markdown to Notion blocks.
//!
//! Provides commands for:
//! - `render`: Print the Notion blocks for a Markdown file
//! - `append`: Append a Markdown file to an existing page or block
//! - `create`: Create a new page from a Markdown file

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AppendArgs, CreateArgs, GlobalArgs, RenderArgs};
use output::Output;

/// blockdown - publish Markdown to Notion.
#[derive(Parser)]
#[command(name = "blockdown", version, about)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the block JSON for a Markdown file.
    Render(RenderArgs),
    /// Append a Markdown file to a page or block.
    Append(AppendArgs),
    /// Create a page from a Markdown file.
    Create(CreateArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.global.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(&output),
        Commands::Append(args) => args.execute(&cli.global, &output),
        Commands::Create(args) => args.execute(&cli.global, &output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
