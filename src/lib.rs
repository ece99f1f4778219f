//! # velux - Declarative C/C++ Build Orchestrator
//!
//! velux reads a `velux.json` project description, picks a usable compiler,
//! and builds either an executable or a static library. Sub-projects listed
//! under `dependencies` are built first, recursively, and their archives are
//! linked into the dependent executable.
//!
//! ## Quick Start
//!
//! ```json
//! {
//!     "velux": "1",
//!     "language": "C",
//!     "version": "11",
//!     "type": "executable",
//!     "output": "app",
//!     "compilers": ["clang", "gcc", "cc"],
//!     "sources": ["src/main.c"],
//!     "include": ["include"],
//!     "find-pkg": ["zlib"],
//!     "dependencies": ["libs/core"]
//! }
//! ```
//!
//! ```bash
//! velux build
//! ```
//!
//! ## Module Organization
//!
//! - [`build`] - Build orchestration
//! - [`config`] - Project description parsing (`velux.json`)
//! - [`deps`] - Recursive sub-project builds
//! - [`shell`] - Argument sanitization and command lines
//! - [`sources`] - Glob expansion of `sources`
//! - [`synth`] - Compile/archive/link command synthesis

use std::path::{Path, PathBuf};

/// Build orchestration.
pub mod build;

/// CLI command handlers extracted from main.
pub mod commands;

/// Project description parsing (`velux.json`).
pub mod config;

/// Sub-project dependency resolution.
pub mod deps;

/// Error taxonomy.
pub mod error;

/// pkg-config integration.
pub mod pkg;

/// Process execution boundary.
pub mod process;

/// Shell argument sanitization.
pub mod shell;

/// Source pattern expansion.
pub mod sources;

/// Command synthesis.
pub mod synth;

/// Compiler detection.
pub mod toolchain;

/// Dependency tree visualization.
pub mod tree;

/// Directory a project description belongs to.
pub fn project_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
