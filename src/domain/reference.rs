//! Repository reference parsing and normalization
//!
//! Wraps `oci_spec::distribution::Reference`, which applies the Docker Hub
//! rules (`index.docker.io` folding and the `library/` namespace).

use crate::error::{LastTagError, Result};
use oci_spec::distribution::Reference as OciReference;
use std::fmt;
use std::str::FromStr;

/// Registry prefixed to references that carry no registry host
pub const DEFAULT_REGISTRY: &str = "docker.io";

/// A fully-qualified container repository reference (`registry/path`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryReference {
    registry: String,
    path: String,
}

impl RepositoryReference {
    /// Parse a repository reference, prefixing `default_registry` when the
    /// input names no registry host.
    ///
    /// `alpine` becomes `docker.io/library/alpine`, `grafana/loki` becomes
    /// `docker.io/grafana/loki` and `ghcr.io/org/app` is kept as is.
    /// Parsing an already-normalized reference returns it unchanged.
    pub fn parse(input: &str, default_registry: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(LastTagError::Usage(
                "Repository reference is empty".to_string(),
            ));
        }

        let qualified = if Self::has_registry_host(input) {
            input.to_string()
        } else {
            format!("{}/{}", default_registry, input)
        };

        let oci_reference = OciReference::from_str(&qualified).map_err(|e| {
            LastTagError::Usage(format!(
                "Invalid repository reference '{}': {}",
                input, e
            ))
        })?;

        if oci_reference.digest().is_some() {
            return Err(LastTagError::Usage(format!(
                "Repository reference '{}' must not include a digest",
                input
            )));
        }
        // A missing tag is filled in with `latest`, so only a tag written in the input counts
        if let Some(tag) = oci_reference.tag() {
            if input.ends_with(&format!(":{}", tag)) {
                return Err(LastTagError::Usage(format!(
                    "Repository reference '{}' must not include a tag; pass the tag as REPOSITORY_TAG instead",
                    input
                )));
            }
        }

        Ok(RepositoryReference {
            registry: oci_reference.registry().to_string(),
            path: oci_reference.repository().to_string(),
        })
    }

    /// Registry host, e.g. `docker.io` or `localhost:5000`
    pub fn registry(&self) -> &str {
        &self.registry
    }

    /// Repository path below the registry, e.g. `library/alpine`
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The first component names a registry host when it looks like a domain,
    /// carries a port or is `localhost`.
    fn has_registry_host(input: &str) -> bool {
        match input.split_once('/') {
            Some((first, _)) => {
                first.contains('.') || first.contains(':') || first == "localhost"
            }
            None => false,
        }
    }
}

impl fmt::Display for RepositoryReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.registry, self.path)
    }
}
