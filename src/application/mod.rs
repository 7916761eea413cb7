//! Application layer - Use cases and orchestration

pub mod resolve_tag;

pub use resolve_tag::ResolveTagService;
