//! CLI Adapter.

mod check;
mod list;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "scaffolint")]
#[command(version)]
#[command(
    about = "Validate the template repository scaffold",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a repository against the required scaffold
    #[clap(visible_alias = "c")]
    Check {
        /// Repository root to check (defaults to the current directory)
        #[arg(long)]
        root: Option<PathBuf>,
        /// Emit a machine-readable JSON report on stdout
        #[arg(long)]
        json: bool,
    },
    /// List the directories and files the scaffold requires
    #[clap(visible_alias = "ls")]
    List {
        /// Emit the entries as JSON on stdout
        #[arg(long)]
        json: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Check { root, json } => check::run_check(root, json),
        Commands::List { json } => list::run_list(json).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
