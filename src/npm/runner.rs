//! External command invocation
//!
//! One trait seam between the cache and the operating system so tests can
//! substitute a recording runner. `SystemRunner` is the real thing: locate
//! the tool on PATH, spawn it, wait, capture everything.

use crate::error::{PlugdexError, Result};
use std::process::Command;

/// Captured result of one child process run.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandOutput {
    /// Return stdout if the run was clean, otherwise the gate that tripped.
    ///
    /// Stderr is checked before the exit code: several npm versions exit 0
    /// while printing warnings that corrupt the JSON contract.
    pub fn ensure_clean(self, command: &str) -> Result<String> {
        if !self.stderr.trim().is_empty() {
            return Err(PlugdexError::NonEmptyStderr {
                command: command.to_string(),
                stderr: self.stderr,
            });
        }
        if self.exit_code != 0 {
            return Err(PlugdexError::NonZeroExit {
                command: command.to_string(),
                code: self.exit_code,
            });
        }
        Ok(self.stdout)
    }
}

pub trait CommandRunner: Send + Sync {
    /// Spawn `tool args...` and wait for it. Exactly one child process per
    /// call; no retry. Fails with `ExecutableNotFound` when the tool is not
    /// on PATH and `ProcessSpawn` when the OS cannot start it.
    fn run(&self, tool: &str, args: &[&str]) -> Result<CommandOutput>;
}

/// Runner backed by the host system.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, tool: &str, args: &[&str]) -> Result<CommandOutput> {
        // which resolves PATHEXT suffixes on Windows, so "npm" finds npm.cmd
        let exe = which::which(tool).map_err(|_| PlugdexError::ExecutableNotFound {
            tool: tool.to_string(),
        })?;

        let output = Command::new(&exe)
            .args(args)
            .output()
            .map_err(|e| PlugdexError::ProcessSpawn {
                command: format!("{} {}", tool, args.join(" ")),
                reason: e.to_string(),
            })?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            // None means killed by signal; fold into a failing code
            exit_code: output.status.code().unwrap_or(-1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(stdout: &str, stderr: &str, exit_code: i32) -> CommandOutput {
        CommandOutput {
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            exit_code,
        }
    }

    #[test]
    fn clean_run_yields_stdout() {
        let out = output("payload", "", 0);
        assert_eq!(out.ensure_clean("npm search").unwrap(), "payload");
    }

    #[test]
    fn stderr_gate_trips_before_exit_code() {
        let out = output("payload", "npm WARN deprecated", 0);
        match out.ensure_clean("npm search") {
            Err(PlugdexError::NonEmptyStderr { .. }) => {}
            other => panic!("expected NonEmptyStderr, got {:?}", other),
        }
    }

    #[test]
    fn whitespace_only_stderr_is_clean() {
        let out = output("payload", "  \n", 0);
        assert!(out.ensure_clean("npm search").is_ok());
    }

    #[test]
    fn nonzero_exit_is_rejected() {
        let out = output("", "", 1);
        match out.ensure_clean("npm search") {
            Err(PlugdexError::NonZeroExit { code: 1, .. }) => {}
            other => panic!("expected NonZeroExit, got {:?}", other),
        }
    }

    #[test]
    fn missing_tool_reports_executable_not_found() {
        let runner = SystemRunner;
        match runner.run("plugdex-no-such-tool-xyz", &["--version"]) {
            Err(PlugdexError::ExecutableNotFound { tool }) => {
                assert_eq!(tool, "plugdex-no-such-tool-xyz");
            }
            other => panic!("expected ExecutableNotFound, got {:?}", other),
        }
    }
}
