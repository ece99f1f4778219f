//! Process execution boundary.
//!
//! Everything the engine runs (probes, pkg-config queries, compiles,
//! archives, links) goes through [`Executor::run`] as a fully assembled
//! [`CommandLine`]. Calls are blocking; there is no timeout.

use crate::shell::CommandLine;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// What to do with the child's output streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Stream to the terminal (build steps).
    Inherit,
    /// Discard everything (presence probes).
    Silent,
    /// Capture stdout as text, discard stderr (tool queries).
    Capture,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutput {
    pub success: bool,
    pub stdout: String,
}

pub trait Executor {
    /// Run `cmd` with `cwd` as the child's working directory.
    ///
    /// `Err` means the process could not be run at all; a non-zero exit is
    /// reported through [`RunOutput::success`].
    fn run(&self, cmd: &CommandLine, cwd: &Path, mode: OutputMode) -> io::Result<RunOutput>;
}

/// Runs commands through a POSIX `sh`.
///
/// Tokens are escaped with backslashes, which only a POSIX shell honors, so
/// `sh` is used on every platform (on Windows it must come from MSYS2, Git
/// Bash or similar). `cmd.exe` ignores backslashes and would still split a
/// token like `a.c \& calc` into two commands.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellExecutor;

fn shell_command(cmd: &CommandLine, cwd: &Path) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(cmd.to_shell_string()).current_dir(cwd);
    command
}

impl Executor for ShellExecutor {
    fn run(&self, cmd: &CommandLine, cwd: &Path, mode: OutputMode) -> io::Result<RunOutput> {
        let mut command = shell_command(cmd, cwd);

        match mode {
            OutputMode::Inherit => {
                let status = command.status()?;
                Ok(RunOutput {
                    success: status.success(),
                    stdout: String::new(),
                })
            }
            OutputMode::Silent => {
                let status = command
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .status()?;
                Ok(RunOutput {
                    success: status.success(),
                    stdout: String::new(),
                })
            }
            OutputMode::Capture => {
                let output = command.stdin(Stdio::null()).stderr(Stdio::null()).output()?;
                Ok(RunOutput {
                    success: output.status.success(),
                    stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                })
            }
        }
    }
}
