use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::BuildError;

/// Project description file looked up in every project and dependency directory.
pub const CONFIG_FILE: &str = "velux.json";

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(from = "String")]
pub enum TargetKind {
    #[default]
    Executable,
    Library,
}

impl From<String> for TargetKind {
    fn from(raw: String) -> Self {
        match raw.to_lowercase().as_str() {
            "library" | "lib" | "static" | "staticlib" => TargetKind::Library,
            _ => TargetKind::Executable,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ProjectConfig {
    /// Format identifier, informational only.
    #[serde(rename = "velux")]
    pub schema: String,
    pub language: String,
    #[serde(rename = "version")]
    pub standard: String,
    #[serde(rename = "type")]
    pub kind: TargetKind,
    pub output: String,
    pub compilers: Vec<String>,
    pub flags: Vec<String>,
    pub sources: Vec<String>,
    pub include: Vec<String>,
    #[serde(rename = "find-pkg")]
    pub packages: Vec<String>,
    pub dependencies: Vec<String>,
    #[serde(default = "default_archiver")]
    pub archiver: String,
}

fn default_archiver() -> String {
    "ar".to_string()
}

impl ProjectConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: ProjectConfig =
            serde_json::from_str(text).context("Failed to parse project description")?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        if self.output.trim().is_empty() {
            return Err(BuildError::MissingOutput);
        }
        Ok(())
    }
}

// --- Helper: Load Config ---
pub fn load_config(path: &Path) -> Result<ProjectConfig> {
    if !path.exists() {
        return Err(anyhow::anyhow!(
            "{} not found.\n\n\
            💡 Tip: Pass another description with '-c <file>'.",
            path.display()
        ));
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} - check file permissions", path.display()))?;
    ProjectConfig::from_json(&text).with_context(|| format!("Invalid {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"{
        "velux": "1",
        "language": "CXX",
        "version": "17",
        "type": "Library",
        "output": "libcore.a",
        "compilers": ["clang++", "g++"],
        "flags": ["-Wall"],
        "sources": ["src/core.cpp"],
        "include": ["include"],
        "find-pkg": ["zlib"],
        "dependencies": ["../base"]
    }"#;

    #[test]
    fn test_parse_full_description() {
        let config = ProjectConfig::from_json(FULL).unwrap();
        assert_eq!(config.schema, "1");
        assert_eq!(config.language, "CXX");
        assert_eq!(config.standard, "17");
        assert_eq!(config.kind, TargetKind::Library);
        assert_eq!(config.compilers, vec!["clang++", "g++"]);
        assert_eq!(config.packages, vec!["zlib"]);
        assert_eq!(config.dependencies, vec!["../base"]);
        assert_eq!(config.archiver, "ar");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let config = ProjectConfig::from_json("{}").unwrap();
        assert!(config.language.is_empty());
        assert!(config.output.is_empty());
        assert!(config.sources.is_empty());
        assert!(config.dependencies.is_empty());
        assert_eq!(config.kind, TargetKind::Executable);
    }

    #[test]
    fn test_target_kind_aliases() {
        for raw in ["library", "LIB", "static", "staticlib"] {
            assert_eq!(TargetKind::from(raw.to_string()), TargetKind::Library);
        }
        assert_eq!(TargetKind::from("exe".to_string()), TargetKind::Executable);
        assert_eq!(TargetKind::from(String::new()), TargetKind::Executable);
    }

    #[test]
    fn test_validate_requires_output() {
        let config = ProjectConfig::from_json(r#"{"type": "library"}"#).unwrap();
        assert!(matches!(config.validate(), Err(BuildError::MissingOutput)));
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join(CONFIG_FILE)).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_config_rejects_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();
        assert!(load_config(&path).is_err());
    }
}
