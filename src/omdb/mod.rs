//! OMDb movie database collaborator
//!
//! Implements the two calls the widgets need: title search for the
//! autocomplete dropdown and full-record lookup by IMDb id for the fight.

mod client;
mod models;

pub use client::{OmdbClient, OmdbError};
pub use models::{MovieDetail, MovieSummary};
