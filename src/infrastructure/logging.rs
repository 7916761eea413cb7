//! Diagnostic logging to stderr

use crate::error::{LastTagError, Result};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// How much lasttag reports on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    /// Filter directive used when `RUST_LOG` is not set
    pub fn directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "info",
            Verbosity::Verbose => "debug",
        }
    }
}

/// Install the global subscriber. Logs always go to stderr because stdout
/// carries nothing but the resolved tag.
pub fn init(verbosity: Verbosity) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .map_err(|e| LastTagError::Config(format!("Failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives() {
        assert_eq!(Verbosity::Quiet.directive(), "error");
        assert_eq!(Verbosity::default().directive(), "info");
        assert_eq!(Verbosity::Verbose.directive(), "debug");
    }

    #[test]
    fn test_init_twice_fails_cleanly() {
        // Only one global subscriber per process
        let _ = init(Verbosity::Quiet);
        assert!(init(Verbosity::Quiet).is_err());
    }
}
