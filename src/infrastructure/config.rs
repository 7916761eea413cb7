//! Configuration management

use crate::domain::{MatchPolicy, DEFAULT_REGISTRY};
use crate::error::{LastTagError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// How the regctl collaborator is launched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Runtime {
    /// Run the regctl binary directly
    #[default]
    Native,
    /// Run regctl inside the `regclient/regctl` container image
    Docker,
}

impl FromStr for Runtime {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "native" => Ok(Runtime::Native),
            "docker" => Ok(Runtime::Docker),
            _ => Err(format!(
                "Invalid runtime: '{}'. Valid runtimes are: native, docker",
                s
            )),
        }
    }
}

/// Settings for one resolution run
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Registry prefixed to unqualified repository names
    pub default_registry: String,
    /// Tag type classification policy
    #[serde(rename = "match")]
    pub match_policy: MatchPolicy,
    pub runtime: Runtime,
    /// regctl command for the native runtime
    pub regctl: String,
    /// Container engine command for the docker runtime
    pub docker: String,
    /// regctl image for the docker runtime
    pub image: String,
    /// Volume holding regctl's configuration (credentials) for the docker runtime
    pub volume: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            default_registry: DEFAULT_REGISTRY.to_string(),
            match_policy: MatchPolicy::default(),
            runtime: Runtime::default(),
            regctl: "regctl".to_string(),
            docker: "docker".to_string(),
            image: "regclient/regctl:latest".to_string(),
            volume: "regctl-conf".to_string(),
        }
    }
}

/// Values given on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub default_registry: Option<String>,
    pub match_policy: Option<MatchPolicy>,
    pub runtime: Option<Runtime>,
    pub regctl: Option<String>,
    pub docker: Option<String>,
}

impl Settings {
    /// Load settings from a TOML file; keys missing from the file keep their defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LastTagError::Config(format!("Config file not found: {}", path.display()))
            } else {
                LastTagError::Io(e)
            }
        })?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            LastTagError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Apply command-line overrides on top of these settings
    pub fn with_overrides(mut self, overrides: SettingsOverrides) -> Result<Self> {
        if let Some(registry) = overrides.default_registry {
            self.default_registry = registry;
        }
        if let Some(policy) = overrides.match_policy {
            self.match_policy = policy;
        }
        if let Some(runtime) = overrides.runtime {
            self.runtime = runtime;
        }
        if let Some(regctl) = overrides.regctl {
            self.regctl = regctl;
        }
        if let Some(docker) = overrides.docker {
            self.docker = docker;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        let fields = [
            ("default_registry", &self.default_registry),
            ("regctl", &self.regctl),
            ("docker", &self.docker),
            ("image", &self.image),
            ("volume", &self.volume),
        ];
        for (key, value) in fields {
            if value.trim().is_empty() {
                return Err(LastTagError::Config(format!("'{}' must not be empty", key)));
            }
        }
        Ok(())
    }
}
