//! Herodex core: the dataset repository, the hero-detail join
//! resolver, and the pure filter/sort query engine that the
//! presentation layer renders from.

pub mod dataset;
pub mod query;
pub mod resolve;

// Re-exports for convenience
pub use dataset::{Dataset, DatasetError};
pub use herodex_types as types;
pub use resolve::{HeroDetail, ResolveError, ResolvedCounter, ResolvedSynergy, hero_detail};
