//! Picking the latest tag out of a tag set

use super::classify::TagClassifier;
use super::version::TagVersion;
use crate::error::{LastTagError, Result};
use tracing::{debug, warn};

/// Return the latest tag of `tags` under version-aware ordering.
///
/// When `reference_tag` is given only tags of the same family (per
/// `classifier`) are candidates. Tags that cannot be parsed as versions are
/// skipped. Among tags of equal precedence the first one listed wins.
pub fn select_latest(
    tags: &[String],
    reference_tag: Option<&str>,
    classifier: &dyn TagClassifier,
) -> Result<String> {
    let candidates: Vec<&String> = match reference_tag {
        Some(reference) => {
            let family = classifier.family(reference);
            debug!(reference, family = %family, "Filtering tags by type");
            tags.iter()
                .filter(|tag| classifier.family(tag) == family)
                .collect()
        }
        None => tags.iter().collect(),
    };
    debug!(total = tags.len(), candidates = candidates.len(), "Tag candidates selected");

    if candidates.is_empty() {
        let message = match reference_tag {
            Some(reference) => format!(
                "None of the {} downloaded tags has the same type as '{}'",
                tags.len(),
                reference
            ),
            None => "No tags downloaded".to_string(),
        };
        return Err(LastTagError::NoMatchingTag(message));
    }

    let mut latest: Option<(&String, TagVersion)> = None;
    for tag in candidates {
        let Some(version) = TagVersion::parse(tag) else {
            warn!(tag = %tag, "Incomparable tag version");
            continue;
        };
        let newer = match &latest {
            Some((_, current)) => version > *current,
            None => true,
        };
        if newer {
            latest = Some((tag, version));
        }
    }

    latest.map(|(tag, _)| tag.clone()).ok_or_else(|| {
        LastTagError::NoMatchingTag(
            "Latest tag not retrieved, obtained tags cannot be compared".to_string(),
        )
    })
}
