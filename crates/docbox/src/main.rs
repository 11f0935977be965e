//! docbox CLI - documentation cache and search service.
//!
//! Provides commands for:
//! - `serve`: Start the HTTP API
//! - `sync`: Pull the document repository once
//! - `search`: List documents containing a keyword
//! - `title`: Print the breadcrumb title of a document

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{SearchArgs, ServeArgs, SyncArgs, TitleArgs};
use error::CliError;
use output::Output;

/// docbox - documentation cache and search service.
#[derive(Parser)]
#[command(name = "docbox", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API.
    Serve(ServeArgs),
    /// Pull the document repository once.
    Sync(SyncArgs),
    /// List documents containing a keyword.
    Search(SearchArgs),
    /// Print the breadcrumb title of a document.
    Title(TitleArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Check if verbose flag is set for serve command
    let verbose = matches!(&cli.command, Commands::Serve(args) if args.verbose);

    // --verbose enables INFO level, otherwise use RUST_LOG (default: errors only)
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli.command, &output) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

fn run(command: Commands, output: &Output) -> Result<(), CliError> {
    match command {
        Commands::Serve(args) => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(args.execute(output))
        }
        Commands::Sync(args) => args.execute(output),
        Commands::Search(args) => args.execute(output),
        Commands::Title(args) => args.execute(output),
    }
}
