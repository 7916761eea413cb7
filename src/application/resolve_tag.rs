//! Resolve latest tag use case

use crate::domain::{select_latest, RepositoryReference, TagClassifier};
use crate::error::{LastTagError, Result};
use crate::infrastructure::TagLister;
use tracing::{debug, info};

/// Service resolving the latest tag of a repository
pub struct ResolveTagService<L: TagLister> {
    lister: L,
    classifier: Box<dyn TagClassifier>,
    default_registry: String,
}

impl<L: TagLister> ResolveTagService<L> {
    /// Create a new resolve tag service
    pub fn new(lister: L, classifier: Box<dyn TagClassifier>, default_registry: String) -> Self {
        ResolveTagService {
            lister,
            classifier,
            default_registry,
        }
    }

    /// Return the latest tag of `repository_url`.
    ///
    /// With `repository_tag` only tags of the same type are considered; an
    /// empty `repository_tag` counts as absent.
    pub fn execute(&self, repository_url: &str, repository_tag: Option<&str>) -> Result<String> {
        // 1. Normalize the reference
        let reference = RepositoryReference::parse(repository_url, &self.default_registry)?;
        debug!(input = repository_url, reference = %reference, "Normalized repository reference");
        info!("Downloading latest version for repository: {}", reference);

        // 2. Ask the collaborator for the tag set
        let tags = self.lister.list_tags(&reference)?;
        if tags.is_empty() {
            return Err(LastTagError::NoMatchingTag(format!(
                "No tags downloaded for repository: {}",
                reference
            )));
        }

        // 3. Filter by type and pick the maximum
        let repository_tag = repository_tag.filter(|tag| !tag.is_empty());
        let latest = select_latest(&tags, repository_tag, self.classifier.as_ref()).map_err(
            |e| match e {
                LastTagError::NoMatchingTag(msg) => {
                    LastTagError::NoMatchingTag(format!("{} ({})", msg, reference))
                }
                other => other,
            },
        )?;

        info!("Latest tag found: {}", latest);
        Ok(latest)
    }
}
