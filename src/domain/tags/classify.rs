//! Tag type classification
//!
//! A classifier maps a tag to a family key. Two tags are of the same type
//! when their keys are equal, which lets the resolver keep only tags from the
//! same family as a tag the caller already uses.

use regex::Regex;
use serde::Deserialize;
use std::str::FromStr;
use std::sync::OnceLock;

/// Placeholder substituted for every digit run in a tag's shape
const DIGIT_PLACEHOLDER: &str = "#";

fn digit_run_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[0-9]+").unwrap())
}

fn release_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[vV]?[0-9]+(?:\.[0-9]+)*(?:\+[0-9A-Za-z.-]+)?$").unwrap())
}

fn pre_release_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^[vV]?[0-9]+(?:\.[0-9]+)*-[0-9A-Za-z.-]+(?:\+[0-9A-Za-z.-]+)?$").unwrap()
    })
}

/// Policy deciding which tags are "of the same type"
pub trait TagClassifier {
    /// Family key of a tag
    fn family(&self, tag: &str) -> String;

    /// Whether two tags belong to the same family
    fn same_family(&self, left: &str, right: &str) -> bool {
        self.family(left) == self.family(right)
    }
}

/// Classifies tags by exact shape: digit runs become a placeholder, every
/// other character is kept.
///
/// `1.0.0-rc1` and `1.2.0-rc12` share the shape `#.#.#-rc#`; `1.0.0` and
/// `1.0.0-beta1` do not.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeClassifier;

impl TagClassifier for ShapeClassifier {
    fn family(&self, tag: &str) -> String {
        digit_run_regex().replace_all(tag, DIGIT_PLACEHOLDER).into_owned()
    }
}

/// Coarse tag categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// Dotted numeric version, e.g. `1.2.3` or `v3.19`
    Release,
    /// Dotted numeric version with a suffix, e.g. `1.0.0-rc1` or `3.19-alpine`
    PreRelease,
    /// Anything else, e.g. `latest`
    Other,
}

impl TagKind {
    pub fn of(tag: &str) -> Self {
        if release_regex().is_match(tag) {
            TagKind::Release
        } else if pre_release_regex().is_match(tag) {
            TagKind::PreRelease
        } else {
            TagKind::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TagKind::Release => "release",
            TagKind::PreRelease => "pre-release",
            TagKind::Other => "other",
        }
    }
}

/// Classifies tags into [`TagKind`] buckets
#[derive(Debug, Clone, Copy, Default)]
pub struct KindClassifier;

impl TagClassifier for KindClassifier {
    fn family(&self, tag: &str) -> String {
        TagKind::of(tag).as_str().to_string()
    }
}

/// Selectable classification policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Same shape as the reference tag
    #[default]
    Shape,
    /// Same coarse kind as the reference tag
    Kind,
}

impl MatchPolicy {
    /// Build the classifier implementing this policy
    pub fn classifier(&self) -> Box<dyn TagClassifier> {
        match self {
            MatchPolicy::Shape => Box::new(ShapeClassifier),
            MatchPolicy::Kind => Box::new(KindClassifier),
        }
    }
}

impl FromStr for MatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shape" => Ok(MatchPolicy::Shape),
            "kind" => Ok(MatchPolicy::Kind),
            _ => Err(format!(
                "Invalid match policy: '{}'. Valid policies are: shape, kind",
                s
            )),
        }
    }
}
