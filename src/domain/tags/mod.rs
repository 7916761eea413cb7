//! Tag system

pub mod classify;
pub mod select;
pub mod version;

// Re-export main types
pub use classify::{KindClassifier, MatchPolicy, ShapeClassifier, TagClassifier, TagKind};
pub use select::select_latest;
pub use version::TagVersion;
