//! Compile, archive and link command synthesis.
//!
//! Token order is fixed so the same description always yields the same
//! commands: compiler, output, standard, user flags, sources, includes,
//! package flags, dependency libraries.

use crate::config::{ProjectConfig, TargetKind};
use crate::shell::CommandLine;
use std::path::{Path, PathBuf};

/// Language identifier to standard-flag prefix. Matched case-insensitively.
pub const DIALECTS: &[(&str, &str)] = &[("C", "-std=c"), ("CXX", "-std=c++"), ("C++", "-std=c++")];

const DEFAULT_STD_PREFIX: &str = "-std=c";
const DEFAULT_ARCHIVER: &str = "ar";

/// Build the `-std=` flag for a language/version pair.
///
/// Unknown languages use the C prefix. An empty version yields no flag.
pub fn standard_flag(language: &str, version: &str) -> Option<String> {
    let version = version.trim();
    if version.is_empty() {
        return None;
    }
    let prefix = DIALECTS
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(language.trim()))
        .map(|(_, prefix)| *prefix)
        .unwrap_or(DEFAULT_STD_PREFIX);
    Some(format!("{}{}", prefix, version))
}

pub fn include_flags(config: &ProjectConfig) -> Vec<String> {
    config.include.iter().map(|inc| format!("-I{}", inc)).collect()
}

/// `src/core.c` -> `src/core.o`
pub fn object_path(source: &str) -> String {
    Path::new(source)
        .with_extension("o")
        .to_string_lossy()
        .to_string()
}

/// Commands for one build, in execution order.
#[derive(Debug, Clone, Default)]
pub struct BuildPlan {
    pub commands: Vec<CommandLine>,
    /// Flags contributed by package and dependency resolution, in the order
    /// they were appended.
    pub extra_flags: Vec<String>,
}

pub fn executable_command(
    config: &ProjectConfig,
    compiler: &str,
    package_flags: Option<&str>,
    dependency_libs: &[PathBuf],
) -> CommandLine {
    let mut cmd = CommandLine::new(compiler);
    cmd.arg("-o").arg(&config.output);
    if let Some(std) = standard_flag(&config.language, &config.standard) {
        cmd.arg(std);
    }
    cmd.args(&config.flags);
    cmd.args(&config.sources);
    cmd.args(include_flags(config));
    if let Some(flags) = package_flags {
        cmd.arg(flags);
    }
    for lib in dependency_libs {
        cmd.arg(lib.to_string_lossy());
    }
    cmd
}

/// One compile command per source followed by the archive command.
pub fn library_commands(
    config: &ProjectConfig,
    compiler: &str,
    package_flags: Option<&str>,
) -> Vec<CommandLine> {
    let std = standard_flag(&config.language, &config.standard);
    let includes = include_flags(config);

    let mut commands = Vec::with_capacity(config.sources.len() + 1);
    for source in &config.sources {
        let mut cmd = CommandLine::new(compiler);
        if let Some(std) = &std {
            cmd.arg(std);
        }
        cmd.arg("-c").arg(source).arg("-o").arg(object_path(source));
        cmd.args(&config.flags);
        cmd.args(&includes);
        if let Some(flags) = package_flags {
            cmd.arg(flags);
        }
        commands.push(cmd);
    }

    let archiver = if config.archiver.trim().is_empty() {
        DEFAULT_ARCHIVER
    } else {
        config.archiver.as_str()
    };
    let mut archive = CommandLine::new(archiver);
    archive.arg("rcs").arg(&config.output);
    archive.args(config.sources.iter().map(|s| object_path(s)));
    commands.push(archive);

    commands
}

pub fn synthesize(
    config: &ProjectConfig,
    compiler: &str,
    package_flags: Option<&str>,
    dependency_libs: &[PathBuf],
) -> BuildPlan {
    let mut extra_flags: Vec<String> = package_flags.map(str::to_string).into_iter().collect();

    let commands = match config.kind {
        TargetKind::Executable => {
            extra_flags.extend(
                dependency_libs
                    .iter()
                    .map(|lib| lib.to_string_lossy().to_string()),
            );
            vec![executable_command(
                config,
                compiler,
                package_flags,
                dependency_libs,
            )]
        }
        TargetKind::Library => library_commands(config, compiler, package_flags),
    };

    BuildPlan {
        commands,
        extra_flags,
    }
}
