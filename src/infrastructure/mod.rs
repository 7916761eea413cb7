//! Infrastructure layer - External processes, configuration and logging

pub mod config;
pub mod lister;
pub mod logging;

pub use config::{Runtime, Settings, SettingsOverrides};
pub use lister::{RegctlLister, TagLister};
pub use logging::Verbosity;
