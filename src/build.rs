//! Build orchestration.
//!
//! One build runs these steps in order: dependencies, compiler, package
//! flags, source expansion, command synthesis, execution. Every step works relative to the
//! project directory passed in; the process working directory is never
//! changed.

use crate::config::ProjectConfig;
use crate::deps;
use crate::error::BuildError;
use crate::pkg;
use crate::process::{Executor, OutputMode};
use crate::sources;
use crate::synth;
use crate::toolchain;
use colored::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Print commands instead of running them.
    pub dry_run: bool,
    /// Print every command before it runs.
    pub verbose: bool,
}

/// Result of a build that did not fail.
#[derive(Debug, Default)]
pub struct BuildSummary {
    pub compiler: String,
    /// Artifact path, relative to the project directory.
    pub artifact: PathBuf,
    /// Commands run (or planned, in dry-run mode), in order.
    pub commands: Vec<String>,
    /// Dependency artifacts linked into this build.
    pub dependency_libs: Vec<PathBuf>,
    /// Recoverable problems met along the way, nested builds included.
    pub reports: Vec<BuildError>,
}

pub struct Builder<'a> {
    executor: &'a dyn Executor,
    options: BuildOptions,
}

impl<'a> Builder<'a> {
    pub fn new(executor: &'a dyn Executor, options: BuildOptions) -> Self {
        Self { executor, options }
    }

    /// Build the project described by `config`, rooted at `project_dir`.
    pub fn build(
        &self,
        config: &ProjectConfig,
        project_dir: &Path,
    ) -> Result<BuildSummary, BuildError> {
        let mut chain = vec![deps::chain_key(project_dir)];
        let mut reports = Vec::new();
        let mut summary = self.build_in_chain(config, project_dir, &mut chain, &mut reports)?;
        summary.reports = reports;
        Ok(summary)
    }

    /// `chain` holds the directories of every build currently on the stack.
    /// Recoverable problems from this build and every nested one land in
    /// `reports`, whether or not the build succeeds.
    pub(crate) fn build_in_chain(
        &self,
        config: &ProjectConfig,
        project_dir: &Path,
        chain: &mut Vec<PathBuf>,
        reports: &mut Vec<BuildError>,
    ) -> Result<BuildSummary, BuildError> {
        let start_time = Instant::now();
        config.validate()?;

        println!(
            "{} Building {} ({})",
            "🚀".blue(),
            config.output.bold(),
            project_dir.display()
        );

        let dependency_libs =
            deps::resolve_dependencies(config, project_dir, self, chain, reports)?;

        let compiler = toolchain::resolve_compiler(&config.compilers, project_dir, self.executor)?;
        println!("   {} Using compiler: {}", "🔧".cyan(), compiler.cyan());

        let package_flags = pkg::resolve_package_flags(&config.packages, project_dir, self.executor)?;

        let config = ProjectConfig {
            sources: sources::expand_sources(&config.sources, project_dir),
            ..config.clone()
        };
        let plan = synth::synthesize(
            &config,
            &compiler,
            package_flags.as_deref(),
            &dependency_libs,
        );
        if (self.options.verbose || self.options.dry_run) && !plan.extra_flags.is_empty() {
            println!(
                "   {} Extra flags: {}",
                "+".dimmed(),
                plan.extra_flags.join(" ")
            );
        }

        let mut commands = Vec::with_capacity(plan.commands.len());
        for cmd in &plan.commands {
            let line = cmd.to_shell_string();
            if self.options.dry_run {
                println!("   {} Would execute: {}", "›".dimmed(), line);
                commands.push(line);
                continue;
            }
            if self.options.verbose {
                println!("   {} {}", "$".dimmed(), line);
            }
            let output = self.executor.run(cmd, project_dir, OutputMode::Inherit)?;
            commands.push(line.clone());
            if !output.success {
                println!("{} Command failed: {}", "x".red(), line);
                return Err(BuildError::CommandFailed { command: line });
            }
        }

        if !self.options.dry_run {
            println!(
                "{} Built {} in {:.2?}",
                "✓".green(),
                config.output,
                start_time.elapsed()
            );
        }

        Ok(BuildSummary {
            compiler,
            artifact: PathBuf::from(&config.output),
            commands,
            dependency_libs,
            reports: Vec::new(),
        })
    }
}

/// Build with the system shell as executor.
pub fn build_project(
    config: &ProjectConfig,
    project_dir: &Path,
    options: BuildOptions,
) -> Result<BuildSummary, BuildError> {
    let executor = crate::process::ShellExecutor;
    Builder::new(&executor, options).build(config, project_dir)
}
