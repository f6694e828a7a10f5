use thiserror::Error;

use crate::domain::{Version, VersionBump};

/// Unified error type for git-release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Malformed commit history at record {record}: {reason}")]
    MalformedHistory { record: usize, reason: String },

    #[error("Ambiguous release window: no pending commits and no release boundary")]
    AmbiguousReleaseWindow,

    #[error("Cannot apply a {bump} bump to {version}: component out of range")]
    VersionOverflow { version: Version, bump: VersionBump },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Command '{program}' failed: {reason}")]
    Command { program: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a malformed history error for the given record index
    pub fn malformed(record: usize, reason: impl Into<String>) -> Self {
        ReleaseError::MalformedHistory {
            record,
            reason: reason.into(),
        }
    }

    /// Create a command error with context
    pub fn command(program: impl Into<String>, reason: impl Into<String>) -> Self {
        ReleaseError::Command {
            program: program.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReleaseError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_malformed_history_display() {
        let err = ReleaseError::malformed(3, "missing ref separator");
        assert_eq!(
            err.to_string(),
            "Malformed commit history at record 3: missing ref separator"
        );
    }

    #[test]
    fn test_command_display() {
        let err = ReleaseError::command("git", "exit status 128");
        assert_eq!(err.to_string(), "Command 'git' failed: exit status 128");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReleaseError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ReleaseError::config("x"), "Configuration error"),
            (ReleaseError::malformed(0, "x"), "Malformed commit history"),
            (ReleaseError::AmbiguousReleaseWindow, "Ambiguous release window"),
            (ReleaseError::command("git", "x"), "Command 'git' failed"),
            (
                ReleaseError::VersionOverflow {
                    version: Version::new(u64::MAX, 0, 0),
                    bump: VersionBump::Major,
                },
                "Cannot apply a major bump",
            ),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_special_characters_in_messages() {
        let special_chars = vec![
            "message with\nnewline",
            "message with\ttab",
            "message with 'quotes'",
            "message with unicode: ñ",
        ];

        for msg in special_chars {
            let err = ReleaseError::config(msg);
            assert!(err.to_string().contains(msg));
        }
    }
}
