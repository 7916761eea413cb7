//! Error types for lasttag

use thiserror::Error;

/// Main error type for lasttag
#[derive(Debug, Error)]
pub enum LastTagError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Collaborator error: {0}")]
    Collaborator(String),

    #[error("No matching tag: {0}")]
    NoMatchingTag(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LastTagError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            LastTagError::Usage(_) => 2,
            LastTagError::Collaborator(_) => 3,
            LastTagError::NoMatchingTag(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            LastTagError::Usage(msg) => {
                format!(
                    "{}\n\n\
                    Usage: lasttag <REPOSITORY_URL> [REPOSITORY_TAG]\n\n\
                    Examples:\n\
                    lasttag alpine\n\
                    lasttag ghcr.io/org/app 1.0.0-rc1",
                    msg
                )
            }
            LastTagError::Collaborator(msg) => {
                if msg.contains("container engine") {
                    format!(
                        "{}\n\n\
                        Suggestions:\n\
                        • Check if the docker engine is running\n\
                        • Run regctl natively: lasttag --runtime native <REPOSITORY_URL>",
                        msg
                    )
                } else if msg.contains("Failed to launch") {
                    format!(
                        "{}\n\n\
                        Suggestions:\n\
                        • Install regctl (https://github.com/regclient/regclient) and add it to PATH\n\
                        • Point to the binary: lasttag --regctl /path/to/regctl <REPOSITORY_URL>\n\
                        • Run regctl in a container: lasttag --runtime docker <REPOSITORY_URL>",
                        msg
                    )
                } else {
                    format!(
                        "{}\n\n\
                        Suggestions:\n\
                        • Check the repository name and registry host\n\
                        • Log in to private registries with 'regctl registry login'",
                        msg
                    )
                }
            }
            LastTagError::NoMatchingTag(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Omit REPOSITORY_TAG to consider every version tag\n\
                    • Match by coarse type instead of exact shape: lasttag --match kind ...",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using LastTagError
pub type Result<T> = std::result::Result<T, LastTagError>;
