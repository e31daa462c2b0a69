use std::{
    path::PathBuf,
    process::{Command, Output},
};

use tracing::debug;

use crate::error::AppError;

/// `git config` exit status when the key being read does not exist
const CONFIG_KEY_MISSING: i32 = 1;
/// `git config --unset` exit status when the key does not exist
const CONFIG_UNSET_MISSING: i32 = 5;

/// Key/value access to the current repository's Git configuration
pub trait GitConfig {
    /// Checks if current directory is in a Git work tree
    fn is_inside_repo(&self) -> Result<bool, AppError>;
    /// Reads the effective value of `key`, empty when unset
    fn get(&self, key: &str) -> Result<String, AppError>;
    /// Sets `key` in the repository's local config
    fn set_local(&self, key: &str, value: &str) -> Result<(), AppError>;
    /// Removes `key` from the repository's local config; a missing key is fine
    fn unset_local(&self, key: &str) -> Result<(), AppError>;
}

/// Runs the `git` executable, in the current directory unless told otherwise
#[derive(Debug, Default)]
pub struct GitCli {
    dir: Option<PathBuf>,
}

impl GitCli {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs git inside `dir` instead of the current directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    fn run(&self, args: &[&str]) -> Result<Output, AppError> {
        debug!(?args, dir = ?self.dir, "running git");
        let mut command = Command::new("git");
        command.args(args);
        if let Some(dir) = &self.dir {
            command.current_dir(dir);
        }
        let output = command.output().map_err(|err| {
            AppError::GitCommand(format!("failed to run git: {err}"))
        })?;
        Ok(output)
    }
}

fn command_error(output: Output) -> Result<AppError, AppError> {
    let stderr = String::from_utf8(output.stderr)?.trim().to_string();
    let message = if stderr.is_empty() {
        format!("git exited with {}", output.status)
    } else {
        stderr
    };
    Ok(AppError::GitCommand(message))
}

impl GitConfig for GitCli {
    fn is_inside_repo(&self) -> Result<bool, AppError> {
        let git_command_output: Output = self.run(&["rev-parse", "--is-inside-work-tree"])?;

        // Outside a repository git exits non-zero; that is an answer, not a failure.
        if !git_command_output.status.success() {
            return Ok(false);
        }

        let value = String::from_utf8_lossy(&git_command_output.stdout).to_string();
        Ok(value.trim() == "true")
    }

    fn get(&self, key: &str) -> Result<String, AppError> {
        let git_command_output: Output = self.run(&["config", "--get", key])?;

        if git_command_output.status.code() == Some(CONFIG_KEY_MISSING) {
            return Ok(String::new());
        }
        if !git_command_output.status.success() {
            return Err(command_error(git_command_output)?);
        }

        Ok(String::from_utf8(git_command_output.stdout)?.trim().to_string())
    }

    fn set_local(&self, key: &str, value: &str) -> Result<(), AppError> {
        let git_command_output: Output = self.run(&["config", "--local", key, value])?;

        if !git_command_output.status.success() {
            return Err(command_error(git_command_output)?);
        }

        Ok(())
    }

    fn unset_local(&self, key: &str) -> Result<(), AppError> {
        let git_command_output: Output = self.run(&["config", "--local", "--unset", key])?;

        if git_command_output.status.success()
            || git_command_output.status.code() == Some(CONFIG_UNSET_MISSING)
        {
            return Ok(());
        }

        Err(command_error(git_command_output)?)
    }
}
