use std::path::PathBuf;

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Error during file I/O operations
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Profiles file exists but is not a valid profile document
    #[error("invalid profiles file {}: {source}", .path.display())]
    ConfigFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Error when serializing profiles back to JSON
    #[error("json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
    /// Error when user input fails.
    #[error("inquire error: {0}")]
    Inquire(#[from] inquire::InquireError),
    /// Error when executing Git commands
    #[error("git command failed: {0}")]
    GitCommand(String),
    /// Error when current directory is not a Git repository
    #[error("not a git repository")]
    NotInGitRepository,
    /// Error when adding a profile key that is already taken
    #[error("profile '{0}' already exists")]
    DuplicateProfile(String),
    /// Error when a profile key is not in the store
    #[error("profile '{0}' not found")]
    ProfileNotFound(String),
    /// Error when the command line cannot be acted on
    #[error("usage: {0}")]
    Usage(String),
    /// Error when the home directory cannot be located
    #[error("failed to find the home directory")]
    HomeDirNotFound,
    /// Error during UTF-8 conversion.
    #[error("UTF-8 error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}

impl AppError {
    /// Follow-up suggestion printed under the error, if any
    pub fn hint(&self) -> Option<String> {
        match self {
            AppError::DuplicateProfile(_) => Some("use 'edit' to modify it".to_string()),
            AppError::ProfileNotFound(key) => Some(format!("to create it: git-swap add {key}")),
            AppError::NotInGitRepository => {
                Some("run this command from inside a git work tree".to_string())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_hint_suggests_add() {
        let err = AppError::ProfileNotFound("work".to_string());
        assert_eq!(err.to_string(), "profile 'work' not found");
        assert_eq!(err.hint().as_deref(), Some("to create it: git-swap add work"));
    }

    #[test]
    fn io_error_has_no_hint() {
        let err = AppError::from(std::io::Error::other("disk full"));
        assert!(err.hint().is_none());
    }
}
