use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::error::{ReleaseError, Result};
use crate::git::{CommandRunner, HistorySource};
use crate::history::LOG_FORMAT;

/// Runs programs with `std::process::Command` in a fixed working directory
pub struct SystemCommandRunner {
    working_dir: PathBuf,
}

impl SystemCommandRunner {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        SystemCommandRunner {
            working_dir: working_dir.into(),
        }
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        debug!(program, ?args, dir = %self.working_dir.display(), "running command");

        let output = Command::new(program)
            .args(args)
            .current_dir(&self.working_dir)
            .output()
            .map_err(|e| ReleaseError::command(program, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ReleaseError::command(
                program,
                format!("{}: {}", output.status, stderr.trim()),
            ));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| ReleaseError::command(program, format!("output is not UTF-8: {}", e)))
    }
}

/// History read with `git log` through a [CommandRunner]
pub struct CommandHistory<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> CommandHistory<R> {
    pub fn new(runner: R) -> Self {
        CommandHistory { runner }
    }

    /// Arguments passed to `git`
    pub fn log_args() -> Vec<String> {
        vec!["log".to_string(), format!("--format={}", LOG_FORMAT)]
    }
}

impl<R: CommandRunner> HistorySource for CommandHistory<R> {
    /// `git log` output, or empty text when HEAD has no commits yet.
    ///
    /// Failing outside a repository is still an error.
    fn raw_log(&self) -> Result<String> {
        if self
            .runner
            .run("git", &["rev-parse", "--quiet", "--verify", "HEAD"])
            .is_err()
        {
            self.runner.run("git", &["rev-parse", "--git-dir"])?;
            debug!("repository has no commits yet");
            return Ok(String::new());
        }

        let args = Self::log_args();
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.runner.run("git", &args)
    }
}
