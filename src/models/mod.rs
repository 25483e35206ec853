// src/models/mod.rs

//! Domain models for the lookup service.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod raw;
mod related;
mod word;

// Re-export all public types
pub use config::{Config, FetcherConfig, LanguageConfig, LookupConfig, StorageConfig};
pub use raw::{RawDefinition, RawForm, RawRelated, RawWordResponse};
pub use related::{EnrichmentStatus, RelatedWords};
pub use word::{Definition, Form, ValidationError, Word};
