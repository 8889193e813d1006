//! Recast CLI - the alternative-syntax translator front end.

mod commands;
mod output;

use clap::{Parser, Subcommand};

/// Main CLI structure.
#[derive(Parser)]
#[command(name = "recast")]
#[command(author, version, about = "Recast - parser front end for an alternative systems-language syntax", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress output.
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Parse a file and report diagnostics.
    Check {
        /// The file to check.
        file: String,
    },

    /// Parse a file and print its parse tree.
    Print {
        /// The file to print.
        file: String,
    },
}

/// Main entry point.
fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { file } => commands::check(&file),
        Commands::Print { file } => commands::print(&file),
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("error: {}", e);
        }
        std::process::exit(1);
    }
}
