//! lasttag - Latest container image tag lookup
//!
//! A command-line tool that lists a container repository's tags through
//! regctl and prints the most recent version, optionally restricted to tags
//! of the same type as a tag already in use.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::LastTagError;
