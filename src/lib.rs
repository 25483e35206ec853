// src/lib.rs

//! Wordbook Library
//!
//! Looks up vocabulary words in a local store and falls back to scraping
//! Wiktionary when no record exists.

pub mod error;
pub mod language;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;

#[cfg(test)]
mod testing;
