//! CLI command definitions

use crate::domain::MatchPolicy;
use crate::infrastructure::{Runtime, SettingsOverrides, Verbosity};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lasttag")]
#[command(about = "Print the latest version tag of a container repository", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Repository (e.g., alpine, grafana/loki, ghcr.io/org/app); Docker Hub if no registry host
    #[arg(value_name = "REPOSITORY_URL")]
    pub repository_url: String,

    /// Tag currently in use; only tags of the same type are considered
    #[arg(value_name = "REPOSITORY_TAG")]
    pub repository_tag: Option<String>,

    /// How tags are matched against REPOSITORY_TAG (shape, kind)
    #[arg(long = "match", value_name = "POLICY", env = "LASTTAG_MATCH")]
    pub match_policy: Option<MatchPolicy>,

    /// How regctl is run (native, docker)
    #[arg(long, value_name = "RUNTIME", env = "LASTTAG_RUNTIME")]
    pub runtime: Option<Runtime>,

    /// regctl command for the native runtime
    #[arg(long, value_name = "CMD", env = "LASTTAG_REGCTL")]
    pub regctl: Option<String>,

    /// Container engine command for the docker runtime
    #[arg(long, value_name = "CMD", env = "LASTTAG_DOCKER")]
    pub docker: Option<String>,

    /// Registry used for repositories without a registry host
    #[arg(long, value_name = "HOST", env = "LASTTAG_DEFAULT_REGISTRY")]
    pub default_registry: Option<String>,

    /// TOML settings file
    #[arg(long, value_name = "PATH", env = "LASTTAG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors to stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Settings given on the command line or through the environment
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            default_registry: self.default_registry.clone(),
            match_policy: self.match_policy,
            runtime: self.runtime,
            regctl: self.regctl.clone(),
            docker: self.docker.clone(),
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        if self.verbose {
            Verbosity::Verbose
        } else if self.quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        }
    }
}
