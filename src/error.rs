//! Build error taxonomy.
//!
//! Errors fall in two tiers. Fatal errors abort the whole top-level build,
//! including when they surface from inside a nested dependency build.
//! Recoverable errors are reported to the caller and the build carries on.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Could not find a suitable compiler (tried: {tried})")]
    NoCompilerFound { tried: String },

    #[error("pkg-config is not available on this system")]
    PkgConfigUnavailable,

    #[error("Package '{name}' not found via pkg-config")]
    PackageNotFound { name: String },

    #[error("pkg-config failed: {reason}")]
    PkgConfigExecutionFailed { reason: String },

    #[error("Dependency cycle detected at {}", path.display())]
    DependencyCycle { path: PathBuf },

    #[error("Project description has no 'output' path")]
    MissingOutput,

    #[error("Command failed: {command}")]
    CommandFailed { command: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dependency path does not exist: {}", path.display())]
    DependencyPathMissing { path: PathBuf },

    #[error("Dependency has no velux.json: {}", path.display())]
    DependencyConfigMissing { path: PathBuf },

    #[error("Dependency description at {} is invalid: {reason}", path.display())]
    DependencyConfigInvalid { path: PathBuf, reason: String },

    #[error("Dependency {} failed to build: {reason}", path.display())]
    DependencyBuildFailed { path: PathBuf, reason: String },

    #[error("Dependency artifact not found: {}", path.display())]
    DependencyArtifactMissing { path: PathBuf },
}

impl BuildError {
    /// Whether this error aborts the top-level build even when raised
    /// inside a dependency.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            BuildError::NoCompilerFound { .. }
                | BuildError::PkgConfigUnavailable
                | BuildError::PackageNotFound { .. }
                | BuildError::PkgConfigExecutionFailed { .. }
                | BuildError::DependencyCycle { .. }
        )
    }

    /// Short category label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            BuildError::NoCompilerFound { .. } => "NoCompilerFound",
            BuildError::PkgConfigUnavailable => "PkgConfigUnavailable",
            BuildError::PackageNotFound { .. } => "PackageNotFound",
            BuildError::PkgConfigExecutionFailed { .. } => "PkgConfigExecutionFailed",
            BuildError::DependencyCycle { .. } => "DependencyCycle",
            BuildError::MissingOutput => "MissingOutput",
            BuildError::CommandFailed { .. } => "CommandFailed",
            BuildError::Io(_) => "Io",
            BuildError::DependencyPathMissing { .. } => "DependencyPathMissing",
            BuildError::DependencyConfigMissing { .. } => "DependencyConfigMissing",
            BuildError::DependencyConfigInvalid { .. } => "DependencyConfigInvalid",
            BuildError::DependencyBuildFailed { .. } => "DependencyBuildFailed",
            BuildError::DependencyArtifactMissing { .. } => "DependencyArtifactMissing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_taxonomy() {
        assert!(BuildError::NoCompilerFound { tried: "cc".into() }.is_fatal());
        assert!(BuildError::PkgConfigUnavailable.is_fatal());
        assert!(BuildError::PackageNotFound { name: "x".into() }.is_fatal());
        assert!(BuildError::DependencyCycle { path: "a".into() }.is_fatal());
    }

    #[test]
    fn test_recoverable_taxonomy() {
        assert!(!BuildError::DependencyPathMissing { path: "b".into() }.is_fatal());
        assert!(!BuildError::DependencyConfigMissing { path: "b".into() }.is_fatal());
        assert!(!BuildError::DependencyArtifactMissing { path: "b".into() }.is_fatal());
        assert!(!BuildError::CommandFailed { command: "cc".into() }.is_fatal());
    }

    #[test]
    fn test_label_and_message() {
        let err = BuildError::PackageNotFound { name: "gtk+-3.0".into() };
        assert_eq!(err.label(), "PackageNotFound");
        assert!(err.to_string().contains("gtk+-3.0"));
    }
}
