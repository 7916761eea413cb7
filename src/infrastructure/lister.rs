//! Tag listing through the regctl command-line tool

use crate::domain::RepositoryReference;
use crate::error::{LastTagError, Result};
use crate::infrastructure::config::{Runtime, Settings};
use std::process::{Command, Stdio};
use tracing::debug;

/// Mount point of regctl's configuration inside the regctl image
const REGCTL_CONFIG_DIR: &str = "/home/appuser/.regctl/";

/// Exit status of `docker run` when the container itself could not be started
const CONTAINER_RUN_FAILED: i32 = 125;

/// Source of the tags of a repository
pub trait TagLister {
    /// List every tag of the repository, in the order the source returns them
    fn list_tags(&self, reference: &RepositoryReference) -> Result<Vec<String>>;
}

impl<F> TagLister for F
where
    F: Fn(&RepositoryReference) -> Result<Vec<String>>,
{
    fn list_tags(&self, reference: &RepositoryReference) -> Result<Vec<String>> {
        self(reference)
    }
}

/// Lists tags by running `regctl tag ls`, natively or in a container
#[derive(Debug, Clone)]
pub struct RegctlLister {
    runtime: Runtime,
    regctl: String,
    docker: String,
    image: String,
    volume: String,
}

impl RegctlLister {
    pub fn new(settings: &Settings) -> Self {
        RegctlLister {
            runtime: settings.runtime,
            regctl: settings.regctl.clone(),
            docker: settings.docker.clone(),
            image: settings.image.clone(),
            volume: settings.volume.clone(),
        }
    }

    /// Program and arguments that list the tags of `reference`
    pub fn command_line(&self, reference: &RepositoryReference) -> (String, Vec<String>) {
        let listing = ["tag".to_string(), "ls".to_string(), reference.to_string()];

        match self.runtime {
            Runtime::Native => {
                let (program, mut args) = split_command(&self.regctl, "regctl");
                args.extend(listing);
                (program, args)
            }
            Runtime::Docker => {
                let (program, mut args) = split_command(&self.docker, "docker");
                args.extend([
                    "run".to_string(),
                    "--rm".to_string(),
                    "-v".to_string(),
                    format!("{}:{}", self.volume, REGCTL_CONFIG_DIR),
                    self.image.clone(),
                ]);
                args.extend(listing);
                (program, args)
            }
        }
    }

    fn launcher(&self) -> &'static str {
        match self.runtime {
            Runtime::Native => "regctl",
            Runtime::Docker => "container engine",
        }
    }
}

impl TagLister for RegctlLister {
    fn list_tags(&self, reference: &RepositoryReference) -> Result<Vec<String>> {
        let (program, args) = self.command_line(reference);
        debug!(program = %program, args = ?args, "Running tag listing command");

        let output = build_command(&program, &args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                LastTagError::Collaborator(format!(
                    "Failed to launch {} '{}': {}",
                    self.launcher(),
                    program,
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = stderr.trim();
            let mut message = if self.runtime == Runtime::Docker
                && output.status.code() == Some(CONTAINER_RUN_FAILED)
            {
                format!(
                    "Could not start regctl with container engine '{}' ({})",
                    program, output.status
                )
            } else {
                format!(
                    "Could not list tags for repository {} ({})",
                    reference, output.status
                )
            };
            if !detail.is_empty() {
                message.push_str(": ");
                message.push_str(detail);
            }
            return Err(LastTagError::Collaborator(message));
        }

        let tags = parse_tag_list(&String::from_utf8_lossy(&output.stdout));
        debug!(count = tags.len(), "Tags downloaded");
        Ok(tags)
    }
}

/// Split one tag per line, dropping blank lines and `\r` from tty output
pub fn parse_tag_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Split a command string into program and leading arguments
fn split_command(command: &str, fallback: &str) -> (String, Vec<String>) {
    let parts: Vec<&str> = command.split_whitespace().collect();

    match parts.split_first() {
        Some((program, args)) => (
            program.to_string(),
            args.iter().map(|s| s.to_string()).collect(),
        ),
        None => (fallback.to_string(), vec![]),
    }
}

fn build_command(program: &str, args: &[String]) -> Command {
    // On Windows, go through cmd /c so .bat and .cmd shims are found
    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(program).args(args);
        cmd
    }

    #[cfg(not(windows))]
    {
        let mut cmd = Command::new(program);
        cmd.args(args);
        cmd
    }
}
