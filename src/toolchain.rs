//! Compiler discovery.
//!
//! Candidates from the project description are probed in order and the
//! first one that answers `--version` wins.

use crate::error::BuildError;
use crate::process::{Executor, OutputMode};
use crate::shell::CommandLine;
use std::path::Path;

/// Check whether `candidate` can be run from `cwd`.
pub fn is_compiler_available(candidate: &str, cwd: &Path, executor: &dyn Executor) -> bool {
    let mut probe = CommandLine::new(candidate);
    probe.arg("--version");
    executor
        .run(&probe, cwd, OutputMode::Silent)
        .map(|out| out.success)
        .unwrap_or(false)
}

pub fn resolve_compiler(
    candidates: &[String],
    cwd: &Path,
    executor: &dyn Executor,
) -> Result<String, BuildError> {
    candidates
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .find(|c| is_compiler_available(c, cwd, executor))
        .map(str::to_string)
        .ok_or_else(|| BuildError::NoCompilerFound {
            tried: if candidates.is_empty() {
                "<none>".to_string()
            } else {
                candidates.join(", ")
            },
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::testutil::RecordingExecutor;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_available_candidate_wins() {
        let exec = RecordingExecutor::new().with_missing("doesnotexist123");
        let compiler =
            resolve_compiler(&names(&["doesnotexist123", "cc"]), Path::new("."), &exec).unwrap();
        assert_eq!(compiler, "cc");
        assert_eq!(
            exec.commands(),
            vec!["doesnotexist123 --version", "cc --version"]
        );
    }

    #[test]
    fn test_stops_after_first_hit() {
        let exec = RecordingExecutor::new();
        let compiler = resolve_compiler(&names(&["gcc", "clang"]), Path::new("."), &exec).unwrap();
        assert_eq!(compiler, "gcc");
        assert_eq!(exec.commands().len(), 1);
    }

    #[test]
    fn test_empty_candidates_fail() {
        let exec = RecordingExecutor::new();
        let err = resolve_compiler(&[], Path::new("."), &exec).unwrap_err();
        assert!(matches!(err, BuildError::NoCompilerFound { .. }));
        assert!(exec.commands().is_empty());
    }

    #[test]
    fn test_all_missing_fails() {
        let exec = RecordingExecutor::new().with_missing("a").with_missing("b");
        let err = resolve_compiler(&names(&["a", "", "b"]), Path::new("."), &exec).unwrap_err();
        assert!(err.to_string().contains("a, , b"));
    }

    #[cfg(unix)]
    #[test]
    fn test_real_host_probe() {
        use crate::process::ShellExecutor;
        let cwd = Path::new(".");
        if !is_compiler_available("cc", cwd, &ShellExecutor) {
            eprintln!("Skipping test: no cc on this host");
            return;
        }
        let compiler =
            resolve_compiler(&names(&["doesnotexist123", "cc"]), cwd, &ShellExecutor).unwrap();
        assert_eq!(compiler, "cc");
    }
}
