//! MovieFight-RS: debounced movie search with head-to-head comparison
//!
//! An event-driven rendition of the classic movie-fight widget: a
//! debounced, cancel-safe autocomplete engine wired to the OMDb API, plus
//! a coordinator that scores two selected movies against each other.

pub mod autocomplete;
pub mod compare;
pub mod config;
pub mod debounce;
pub mod network;
pub mod omdb;

pub use autocomplete::{Autocomplete, AutocompleteConfig, FetchSource, Update};
pub use compare::{Comparison, Scoreboard, Side};
pub use config::Settings;
pub use debounce::Debouncer;
pub use omdb::{MovieDetail, MovieSummary, OmdbClient};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default quiet period in milliseconds for the generic debounce utility
pub const DEFAULT_DEBOUNCE_MS: u64 = 1000;

/// Quiet period in milliseconds used by the search inputs
pub const SEARCH_DEBOUNCE_MS: u64 = 500;
