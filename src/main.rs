//! # velux CLI Entry Point
//!
//! Parses CLI arguments using clap and routes commands to the handlers in
//! `velux::commands`.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

use velux::build::BuildOptions;
use velux::commands;
use velux::config::CONFIG_FILE;
use velux::tree;

#[derive(Parser)]
#[command(name = "velux")]
#[command(about = "Declarative C/C++ build orchestrator", version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Project description to use
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,
    /// Show every command before it runs
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the project and its dependencies (default)
    Build {
        /// Show what would be executed without running
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the dependency tree
    Tree,
    /// Check compilers, pkg-config and packages
    Doctor,
}

fn run(cli: Cli) -> Result<bool> {
    match cli.command.unwrap_or(Commands::Build { dry_run: false }) {
        Commands::Build { dry_run } => commands::build::run_build(
            &cli.config,
            BuildOptions {
                dry_run,
                verbose: cli.verbose,
            },
        ),
        Commands::Tree => tree::print_tree(&cli.config).map(|_| true),
        Commands::Doctor => commands::doctor::run_doctor(&cli.config),
    }
}

fn main() {
    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{} {:#}", "x".red(), e);
            std::process::exit(1);
        }
    }
}
