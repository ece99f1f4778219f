//! System package flags via pkg-config.
//!
//! All requested packages are checked before any flags are queried, so a
//! missing package never leaves a partial flag set behind.

use crate::error::BuildError;
use crate::process::{Executor, OutputMode};
use crate::shell::CommandLine;
use colored::*;
use std::path::Path;

pub const PKG_CONFIG: &str = "pkg-config";

pub fn is_pkg_config_available(cwd: &Path, executor: &dyn Executor) -> bool {
    let mut probe = CommandLine::new(PKG_CONFIG);
    probe.arg("--version");
    executor
        .run(&probe, cwd, OutputMode::Silent)
        .map(|out| out.success)
        .unwrap_or(false)
}

pub fn package_exists(name: &str, cwd: &Path, executor: &dyn Executor) -> bool {
    let mut probe = CommandLine::new(PKG_CONFIG);
    probe.args(["--exists", name]);
    executor
        .run(&probe, cwd, OutputMode::Silent)
        .map(|out| out.success)
        .unwrap_or(false)
}

/// Resolve the combined compiler and linker flags for `packages`.
///
/// Returns `None` when there is nothing to resolve. The flags come back as
/// one blob, exactly as pkg-config printed them minus the trailing newline.
pub fn resolve_package_flags(
    packages: &[String],
    cwd: &Path,
    executor: &dyn Executor,
) -> Result<Option<String>, BuildError> {
    if packages.is_empty() {
        return Ok(None);
    }

    if !is_pkg_config_available(cwd, executor) {
        return Err(BuildError::PkgConfigUnavailable);
    }

    for name in packages {
        println!("   {} Resolving system pkg: {}", "🔎".cyan(), name);
        if !package_exists(name, cwd, executor) {
            return Err(BuildError::PackageNotFound { name: name.clone() });
        }
    }

    let mut query = CommandLine::new(PKG_CONFIG);
    query.args(["--cflags", "--libs"]).args(packages);
    let output = executor
        .run(&query, cwd, OutputMode::Capture)
        .map_err(|e| BuildError::PkgConfigExecutionFailed {
            reason: e.to_string(),
        })?;
    if !output.success {
        return Err(BuildError::PkgConfigExecutionFailed {
            reason: format!("'{}' exited with an error", query),
        });
    }

    let flags = strip_line_terminator(&output.stdout);
    if flags.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(flags.to_string()))
    }
}

fn strip_line_terminator(s: &str) -> &str {
    s.strip_suffix("\r\n")
        .or_else(|| s.strip_suffix('\n'))
        .unwrap_or(s)
}
