//! Debounced, cancel-safe autocomplete engine
//!
//! Binds a text-input surface to a live result list: input changes are
//! debounced, each fetch is stamped with a generation counter so a
//! superseded fetch can never paint stale results, and rendering is
//! delegated to the host through an update stream.

mod engine;
mod page;

pub use engine::{Autocomplete, AutocompleteConfig, Update};
pub use page::{ClickTarget, PageClicks, RootId};

use anyhow::Result;
use async_trait::async_trait;

/// Source of candidate items for an autocomplete instance.
///
/// The engine treats the source as an opaque collaborator: it is never
/// validated or retried, and a failure surfaces through
/// [`Update::FetchFailed`] instead of crashing the input.
#[async_trait]
pub trait FetchSource<T>: Send + Sync {
    /// Fetch candidates for a search term
    async fn fetch(&self, term: &str) -> Result<Vec<T>>;
}
