//! Version-aware ordering of tags

use std::cmp::Ordering;
use std::fmt;

/// A tag parsed into comparable parts.
///
/// `v1.10.0-rc2+build.5` parses into release `["1", "10", "0"]`, pre-release
/// `["rc2"]` and build `build.5`. Build metadata never affects ordering.
#[derive(Debug, Clone)]
pub struct TagVersion {
    release: Vec<String>,
    pre_release: Vec<String>,
    build: Option<String>,
}

impl TagVersion {
    /// Parse a tag, returning `None` when it does not start with a numeric
    /// release segment (e.g. `latest`, `edge`, `stable-alpine`).
    pub fn parse(tag: &str) -> Option<Self> {
        let stripped = tag.strip_prefix(&['v', 'V'][..]).unwrap_or(tag);

        let (rest, build) = match stripped.split_once('+') {
            Some((rest, build)) => (rest, Some(build.to_string())),
            None => (stripped, None),
        };

        let (release, pre_release) = match rest.split_once('-') {
            Some((release, pre)) => (release, Some(pre)),
            None => (rest, None),
        };

        let release: Vec<String> = release.split('.').map(String::from).collect();
        let first = release.first()?;
        if first.is_empty() || !first.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        let pre_release = pre_release
            .map(|pre| pre.split('.').map(String::from).collect())
            .unwrap_or_default();

        Some(TagVersion {
            release,
            pre_release,
            build,
        })
    }

    /// Whether the tag carries a pre-release part (`1.0.0-rc1`)
    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// Build metadata after `+`, if any
    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    fn cmp_release(&self, other: &Self) -> Ordering {
        let len = self.release.len().max(other.release.len());
        for idx in 0..len {
            let left = self.release.get(idx).map(String::as_str).unwrap_or("0");
            let right = other.release.get(idx).map(String::as_str).unwrap_or("0");
            let ordering = natural_cmp(left, right);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    fn cmp_pre_release(&self, other: &Self) -> Ordering {
        // A release sorts above its own pre-releases
        match (self.is_pre_release(), other.is_pre_release()) {
            (false, false) => return Ordering::Equal,
            (false, true) => return Ordering::Greater,
            (true, false) => return Ordering::Less,
            (true, true) => {}
        }

        for (left, right) in self.pre_release.iter().zip(&other.pre_release) {
            let ordering = natural_cmp(left, right);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        self.pre_release.len().cmp(&other.pre_release.len())
    }
}

impl Ord for TagVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_release(other).then_with(|| self.cmp_pre_release(other))
    }
}

impl PartialOrd for TagVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for TagVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TagVersion {}

impl fmt::Display for TagVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.release.join("."))?;
        if self.is_pre_release() {
            write!(f, "-{}", self.pre_release.join("."))?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

/// Compare two identifiers run by run: digit runs numerically, other runs
/// lexically, and a digit run sorts below a non-digit run.
///
/// `rc10` > `rc2`, `9` < `10`, `1` < `alpha`.
pub fn natural_cmp(left: &str, right: &str) -> Ordering {
    let left_runs = runs(left);
    let right_runs = runs(right);

    for (a, b) in left_runs.iter().zip(&right_runs) {
        let ordering = cmp_run(a, b);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    left_runs.len().cmp(&right_runs.len())
}

/// Split into maximal runs of ASCII digits and non-digits
fn runs(text: &str) -> Vec<&str> {
    let mut output = Vec::new();
    let mut start = 0;
    let mut previous: Option<bool> = None;

    for (idx, ch) in text.char_indices() {
        let is_digit = ch.is_ascii_digit();
        if let Some(was_digit) = previous {
            if was_digit != is_digit {
                output.push(&text[start..idx]);
                start = idx;
            }
        }
        previous = Some(is_digit);
    }
    if start < text.len() {
        output.push(&text[start..]);
    }

    output
}

fn cmp_run(left: &str, right: &str) -> Ordering {
    let left_digits = left.starts_with(|c: char| c.is_ascii_digit());
    let right_digits = right.starts_with(|c: char| c.is_ascii_digit());

    match (left_digits, right_digits) {
        (true, true) => cmp_numeric(left, right),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => left.cmp(right),
    }
}

/// Numeric comparison of digit strings of any length
fn cmp_numeric(left: &str, right: &str) -> Ordering {
    let left = left.trim_start_matches('0');
    let right = right.trim_start_matches('0');
    left.len().cmp(&right.len()).then_with(|| left.cmp(right))
}
