//! External command execution
//!
//! This module provides:
//! - A runner trait so the rest of the crate never spawns processes directly
//! - The system runner backed by `std::process::Command`
//! - `run`, which turns a non-zero exit into an error carrying stderr

use crate::error::ExecError;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Captured result of a finished command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Standard output, minus one trailing newline
    pub stdout: String,
    /// Standard error, minus one trailing newline
    pub stderr: String,
    /// Whether the command exited successfully
    pub success: bool,
    /// Exit code, if the process exited normally
    pub code: Option<i32>,
}

impl CommandOutput {
    /// Create a successful output
    pub fn success(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            success: true,
            code: Some(0),
        }
    }

    /// Create a failed output
    pub fn failure(
        code: Option<i32>,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            success: false,
            code,
        }
    }
}

/// Trait for running external commands
pub trait CommandRunner {
    /// Run `program` with `args` in `working_dir` and capture its output.
    ///
    /// Returns an error only when the process could not be started; a
    /// process that ran and failed is reported through `CommandOutput`.
    fn exec(
        &self,
        program: &str,
        args: &[&str],
        working_dir: &Path,
    ) -> Result<CommandOutput, ExecError>;
}

/// Default runner that executes real commands
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system runner
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn exec(
        &self,
        program: &str,
        args: &[&str],
        working_dir: &Path,
    ) -> Result<CommandOutput, ExecError> {
        debug!(program, ?args, dir = %working_dir.display(), "running command");

        let output = Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .output()
            .map_err(|e| ExecError::start(program, e))?;

        let stdout = trim_newline(String::from_utf8_lossy(&output.stdout).into_owned());
        let stderr = trim_newline(String::from_utf8_lossy(&output.stderr).into_owned());

        debug!(
            program,
            code = ?output.status.code(),
            stdout_len = stdout.len(),
            stderr_len = stderr.len(),
            "command finished"
        );

        if output.status.success() {
            Ok(CommandOutput::success(stdout, stderr))
        } else {
            Ok(CommandOutput::failure(output.status.code(), stdout, stderr))
        }
    }
}

/// Remove exactly one trailing `\n`, if present
fn trim_newline(mut s: String) -> String {
    if s.ends_with('\n') {
        s.pop();
    }
    s
}

/// Run a command and return its stdout.
///
/// A non-zero exit becomes an error whose message is stderr, or a generic
/// exit status error when stderr is empty.
pub fn run<R: CommandRunner + ?Sized>(
    runner: &R,
    program: &str,
    args: &[&str],
    working_dir: &Path,
) -> Result<String, ExecError> {
    let output = runner.exec(program, args, working_dir)?;
    if output.success {
        return Ok(output.stdout);
    }
    if output.stderr.is_empty() {
        Err(ExecError::status(program, output.code))
    } else {
        Err(ExecError::failed(program, output.stderr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock runner returning a canned output
    struct MockRunner {
        output: CommandOutput,
    }

    impl CommandRunner for MockRunner {
        fn exec(
            &self,
            _program: &str,
            _args: &[&str],
            _working_dir: &Path,
        ) -> Result<CommandOutput, ExecError> {
            Ok(self.output.clone())
        }
    }

    #[test]
    fn test_trim_newline() {
        assert_eq!(trim_newline("out\n".to_string()), "out");
        assert_eq!(trim_newline("out\n\n".to_string()), "out\n");
        assert_eq!(trim_newline("out".to_string()), "out");
        assert_eq!(trim_newline(String::new()), "");
    }

    #[test]
    fn test_run_success_returns_stdout() {
        let runner = MockRunner {
            output: CommandOutput::success("hello", "warning"),
        };
        let out = run(&runner, "tool", &[], Path::new(".")).unwrap();
        assert_eq!(out, "hello");
    }

    #[test]
    fn test_run_failure_uses_stderr() {
        let runner = MockRunner {
            output: CommandOutput::failure(Some(1), "partial", "go: no go.mod"),
        };
        let err = run(&runner, "go", &[], Path::new(".")).unwrap_err();
        assert!(matches!(err, ExecError::Failed { .. }));
        assert_eq!(err.to_string(), "go: no go.mod");
    }

    #[test]
    fn test_run_failure_without_stderr() {
        let runner = MockRunner {
            output: CommandOutput::failure(Some(3), "", ""),
        };
        let err = run(&runner, "go", &[], Path::new(".")).unwrap_err();
        assert!(matches!(err, ExecError::Status { code: Some(3), .. }));
    }

    #[test]
    fn test_system_runner_missing_binary() {
        let runner = SystemRunner::new();
        let err = runner
            .exec("check-deps-no-such-binary", &[], Path::new("."))
            .unwrap_err();
        assert!(matches!(err, ExecError::Start { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_missing_working_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("missing");
        let runner = SystemRunner::new();
        let err = run(&runner, "sh", &["-c", "true"], &missing).unwrap_err();
        assert!(matches!(err, ExecError::Start { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_captures_streams_separately() {
        let runner = SystemRunner::new();
        let output = runner
            .exec(
                "sh",
                &["-c", "printf 'out\\n'; printf 'err\\n' >&2"],
                Path::new("."),
            )
            .unwrap();
        assert!(output.success);
        assert_eq!(output.stdout, "out");
        assert_eq!(output.stderr, "err");
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_non_zero_exit() {
        let runner = SystemRunner::new();
        let err = run(
            &runner,
            "sh",
            &["-c", "echo 'something broke' >&2; exit 2"],
            Path::new("."),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "something broke");
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_silent_failure() {
        let runner = SystemRunner::new();
        let err = run(&runner, "sh", &["-c", "exit 4"], Path::new(".")).unwrap_err();
        assert!(matches!(err, ExecError::Status { code: Some(4), .. }));
    }
}
