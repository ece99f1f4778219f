//! Doctor command handler
//!
//! Handles `velux doctor`: reports which of the project's compilers,
//! pkg-config, and requested packages are usable on this machine.

use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::config::{ProjectConfig, load_config};
use crate::pkg;
use crate::process::{Executor, ShellExecutor};
use crate::toolchain;

/// One line of the doctor report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub subject: String,
    pub found: bool,
}

/// Run every availability check for `config`.
pub fn collect_checks(config: &ProjectConfig, cwd: &Path, executor: &dyn Executor) -> Vec<Check> {
    let mut checks = Vec::new();

    for compiler in &config.compilers {
        checks.push(Check {
            subject: format!("compiler {}", compiler),
            found: toolchain::is_compiler_available(compiler, cwd, executor),
        });
    }

    if !config.packages.is_empty() {
        let tool_found = pkg::is_pkg_config_available(cwd, executor);
        checks.push(Check {
            subject: pkg::PKG_CONFIG.to_string(),
            found: tool_found,
        });
        if tool_found {
            for name in &config.packages {
                checks.push(Check {
                    subject: format!("package {}", name),
                    found: pkg::package_exists(name, cwd, executor),
                });
            }
        }
    }

    checks
}

/// Run the `velux doctor` command to diagnose system issues
pub fn run_doctor(config_path: &Path) -> Result<bool> {
    println!("{} Running System Doctor...", "🚑".red());
    println!("-------------------------------");

    println!(
        "Checking OS... {} ({})",
        std::env::consts::OS.green(),
        std::env::consts::ARCH.cyan()
    );

    let config = load_config(config_path)?;
    let cwd = crate::project_dir(config_path);
    let checks = collect_checks(&config, &cwd, &ShellExecutor);

    if config.compilers.is_empty() {
        println!("{}", "No compilers listed in 'compilers'".red());
    }

    for check in &checks {
        print!("Checking {}... ", check.subject);
        if check.found {
            println!("{}", "Found".green());
        } else {
            println!("{}", "Not Found".red());
        }
    }

    let compiler_ok = checks
        .iter()
        .any(|c| c.found && c.subject.starts_with("compiler "));
    let rest_ok = checks
        .iter()
        .filter(|c| !c.subject.starts_with("compiler "))
        .all(|c| c.found);
    Ok(compiler_ok && rest_ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::testutil::RecordingExecutor;

    #[test]
    fn test_checks_cover_compilers_and_packages() {
        let config = ProjectConfig {
            compilers: vec!["clang".into(), "gcc".into()],
            packages: vec!["zlib".into(), "gone".into()],
            ..Default::default()
        };
        let exec = RecordingExecutor::new()
            .with_missing("clang")
            .with_reply("pkg-config --exists gone", false, "");

        let checks = collect_checks(&config, Path::new("."), &exec);
        let summary: Vec<(&str, bool)> = checks
            .iter()
            .map(|c| (c.subject.as_str(), c.found))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("compiler clang", false),
                ("compiler gcc", true),
                ("pkg-config", true),
                ("package zlib", true),
                ("package gone", false),
            ]
        );
    }

    #[test]
    fn test_packages_skipped_without_pkg_config() {
        let config = ProjectConfig {
            packages: vec!["zlib".into()],
            ..Default::default()
        };
        let exec = RecordingExecutor::new().with_missing(pkg::PKG_CONFIG);
        let checks = collect_checks(&config, Path::new("."), &exec);
        assert_eq!(checks.len(), 1);
        assert!(!checks[0].found);
    }
}
