//! Sub-project dependencies.
//!
//! Each entry of `dependencies` is a directory holding its own
//! `velux.json`. Dependencies are built depth-first, in declaration order,
//! and their artifacts are handed back for linking into the parent.
//!
//! A broken dependency is reported and skipped; only fatal errors (no
//! compiler, pkg-config problems, cycles) stop the top-level build.

use crate::build::Builder;
use crate::config::{CONFIG_FILE, ProjectConfig, load_config};
use crate::error::BuildError;
use colored::*;
use std::path::{Path, PathBuf};

fn report(reports: &mut Vec<BuildError>, err: BuildError) {
    println!("{} {}", "!".yellow(), err);
    reports.push(err);
}

/// Identity of a project directory on the build chain.
pub(crate) fn chain_key(dir: &Path) -> PathBuf {
    dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf())
}

/// Build every dependency of `config` and return the artifacts to link,
/// relative to `project_dir`.
///
/// Recoverable problems, including those raised inside nested builds that
/// later fail, are appended to `reports`.
pub fn resolve_dependencies(
    config: &ProjectConfig,
    project_dir: &Path,
    builder: &Builder<'_>,
    chain: &mut Vec<PathBuf>,
    reports: &mut Vec<BuildError>,
) -> Result<Vec<PathBuf>, BuildError> {
    let mut libs = Vec::new();
    if config.dependencies.is_empty() {
        return Ok(libs);
    }

    println!(
        "{} Checking {} dependencies...",
        "📦".blue(),
        config.dependencies.len()
    );

    for dep in &config.dependencies {
        let declared = PathBuf::from(dep);
        let dep_dir = project_dir.join(&declared);

        if !dep_dir.exists() {
            report(reports, BuildError::DependencyPathMissing { path: declared });
            continue;
        }

        let desc_path = dep_dir.join(CONFIG_FILE);
        if !desc_path.is_file() {
            report(reports, BuildError::DependencyConfigMissing { path: declared });
            continue;
        }

        let dep_config = match load_config(&desc_path) {
            Ok(c) => c,
            Err(e) => {
                report(reports, BuildError::DependencyConfigInvalid {
                    path: declared,
                    reason: format!("{:#}", e),
                });
                continue;
            }
        };

        let key = chain_key(&dep_dir);
        if chain.contains(&key) {
            return Err(BuildError::DependencyCycle { path: declared });
        }

        chain.push(key);
        let outcome = builder.build_in_chain(&dep_config, &dep_dir, chain, reports);
        chain.pop();

        match outcome {
            Ok(_) => {}
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => report(
                reports,
                BuildError::DependencyBuildFailed {
                    path: declared.clone(),
                    reason: e.to_string(),
                },
            ),
        }

        let artifact = declared.join(&dep_config.output);
        if !dep_config.output.is_empty() && project_dir.join(&artifact).is_file() {
            println!("   {} Linking {}", "🔗".cyan(), artifact.display());
            libs.push(artifact);
        } else {
            report(reports, BuildError::DependencyArtifactMissing { path: artifact });
        }
    }

    Ok(libs)
}
