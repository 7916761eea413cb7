//! Domain layer - Repository references and tag logic

pub mod reference;
pub mod tags;

pub use reference::{RepositoryReference, DEFAULT_REGISTRY};
pub use tags::{select_latest, MatchPolicy, TagClassifier, TagVersion};
