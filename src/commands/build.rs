//! Build command handler
//!
//! Handles `velux build`: loads the project description, runs the build
//! and prints the final report.

use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::build::{BuildOptions, build_project};
use crate::config::load_config;

/// Returns `Ok(false)` when the build itself failed.
pub fn run_build(config_path: &Path, options: BuildOptions) -> Result<bool> {
    let config = load_config(config_path)?;
    let project_dir = crate::project_dir(config_path);

    match build_project(&config, &project_dir, options) {
        Ok(summary) => {
            if !summary.reports.is_empty() {
                println!(
                    "{} Finished with {} reported problem(s):",
                    "!".yellow(),
                    summary.reports.len()
                );
                for report in &summary.reports {
                    println!("   [{}] {}", report.label().yellow(), report);
                }
            }
            if options.dry_run {
                println!("{} Dry run: {} command(s) planned", "✓".green(), summary.commands.len());
            }
            Ok(true)
        }
        Err(e) => {
            eprintln!("{} [{}] {}", "x".red(), e.label().red(), e);
            eprintln!("{} Build failed", "x".red());
            Ok(false)
        }
    }
}
