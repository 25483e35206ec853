//! Pipeline entry points for word lookups.
//!
//! - `LookupService`: store-first search, suggestions, recents, enrichment
//! - `RelatedResolver`: synonym/antonym resolution for a stored word

pub mod lookup;
pub mod related;

pub use lookup::LookupService;
pub use related::RelatedResolver;
