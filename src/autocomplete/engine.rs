//! Engine task and host-facing handle

use super::{ClickTarget, FetchSource, RootId};
use crate::debounce::Debouncer;
use crate::SEARCH_DEBOUNCE_MS;
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, warn};

/// Rendering commands emitted to the host surface.
///
/// The stream replaces direct DOM manipulation: the host applies each
/// update to its input field and dropdown however it renders them.
#[derive(Debug, Clone)]
pub enum Update {
    /// Replace the candidate list wholesale and show the dropdown
    DropdownOpened(Vec<String>),
    /// Hide the dropdown
    DropdownClosed,
    /// Set the text shown in the bound input field
    InputValueSet(String),
    /// A fetch failed; the dropdown stays closed
    FetchFailed(Arc<anyhow::Error>),
}

/// Configuration contract for one autocomplete instance
pub struct AutocompleteConfig<T> {
    /// Identity of the UI surface owning the input and dropdown
    pub root: RootId,
    /// Quiet period between the last keystroke and the fetch
    pub debounce: Duration,
    /// Produces the visual representation of one candidate
    pub render_option: Box<dyn Fn(&T) -> String + Send>,
    /// Produces the text to display in the input field after selection
    pub input_value: Box<dyn Fn(&T) -> String + Send>,
    /// Invoked exactly once when the user picks a candidate
    pub on_option_select: Box<dyn FnMut(&T) + Send>,
}

impl<T> AutocompleteConfig<T> {
    pub fn new(
        root: RootId,
        render_option: impl Fn(&T) -> String + Send + 'static,
        input_value: impl Fn(&T) -> String + Send + 'static,
        on_option_select: impl FnMut(&T) + Send + 'static,
    ) -> Self {
        Self {
            root,
            debounce: Duration::from_millis(SEARCH_DEBOUNCE_MS),
            render_option: Box::new(render_option),
            input_value: Box::new(input_value),
            on_option_select: Box::new(on_option_select),
        }
    }

    /// Override the debounce delay
    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.debounce = delay;
        self
    }
}

enum Msg<T> {
    Input(String),
    DebounceFired(String),
    FetchResolved {
        generation: u64,
        outcome: Result<Vec<T>>,
    },
    OptionClicked(usize),
    PageClick(ClickTarget),
    Shutdown,
}

/// Host-facing handle to a running autocomplete engine.
///
/// The engine stops when [`shutdown`](Self::shutdown) is called or when the
/// host drops the update receiver (the owning surface was torn down).
pub struct Autocomplete<T> {
    tx: UnboundedSender<Msg<T>>,
    root: RootId,
}

impl<T> Clone for Autocomplete<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            root: self.root,
        }
    }
}

impl<T: Clone + Send + 'static> Autocomplete<T> {
    /// Spawn the engine task.
    ///
    /// Returns the handle plus the update stream the host renders from.
    pub fn spawn(
        config: AutocompleteConfig<T>,
        source: Arc<dyn FetchSource<T>>,
    ) -> (Self, UnboundedReceiver<Update>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let (updates_tx, updates_rx) = mpsc::unbounded_channel();
        let root = config.root;

        let engine = Engine {
            config,
            source,
            self_tx: tx.clone(),
            updates: updates_tx,
            open: false,
            options: Vec::new(),
            generation: 0,
        };
        tokio::spawn(engine.run(rx));

        (Self { tx, root }, updates_rx)
    }

    /// The root surface this instance is bound to
    pub fn root(&self) -> RootId {
        self.root
    }

    /// Report an input-change event with the field's current text
    pub fn input(&self, text: impl Into<String>) {
        let _ = self.tx.send(Msg::Input(text.into()));
    }

    /// Report a click on the rendered candidate at `index`
    pub fn click_option(&self, index: usize) {
        let _ = self.tx.send(Msg::OptionClicked(index));
    }

    /// Report a page-level click; closes the dropdown when the click is
    /// outside this instance's root
    pub fn page_click(&self, target: &ClickTarget) {
        let _ = self.tx.send(Msg::PageClick(target.clone()));
    }

    /// Dismissal listener suitable for [`super::PageClicks`] registration
    pub fn click_listener(&self) -> impl Fn(&ClickTarget) + Send + Sync {
        let tx = self.tx.clone();
        move |target: &ClickTarget| {
            let _ = tx.send(Msg::PageClick(target.clone()));
        }
    }

    /// Stop the engine task
    pub fn shutdown(&self) {
        let _ = self.tx.send(Msg::Shutdown);
    }
}

struct Engine<T> {
    config: AutocompleteConfig<T>,
    source: Arc<dyn FetchSource<T>>,
    self_tx: UnboundedSender<Msg<T>>,
    updates: UnboundedSender<Update>,
    /// Dropdown visibility; tracks the last completed fetch, not the
    /// in-flight one
    open: bool,
    /// The most recently completed non-stale result list, replaced
    /// wholesale on each fetch
    options: Vec<T>,
    /// Stamp for the race policy: only the latest-initiated fetch may
    /// update the displayed list
    generation: u64,
}

impl<T: Clone + Send + 'static> Engine<T> {
    async fn run(mut self, mut rx: UnboundedReceiver<Msg<T>>) {
        let mut debouncer = Debouncer::with_delay(self.config.debounce, {
            let tx = self.self_tx.clone();
            move |text: String| {
                let _ = tx.send(Msg::DebounceFired(text));
            }
        });

        while let Some(msg) = rx.recv().await {
            match msg {
                Msg::Input(text) => debouncer.trigger(text),
                Msg::DebounceFired(text) => self.start_fetch(text),
                Msg::FetchResolved {
                    generation,
                    outcome,
                } => self.finish_fetch(generation, outcome),
                Msg::OptionClicked(index) => self.select(index),
                Msg::PageClick(target) => self.dismiss(&target),
                Msg::Shutdown => break,
            }

            if self.updates.is_closed() {
                debug!("update receiver dropped; stopping engine");
                break;
            }
        }
    }

    fn start_fetch(&mut self, term: String) {
        self.generation += 1;
        let generation = self.generation;
        debug!(generation, term = %term, "starting fetch");

        let source = Arc::clone(&self.source);
        let tx = self.self_tx.clone();
        tokio::spawn(async move {
            let outcome = source.fetch(&term).await;
            let _ = tx.send(Msg::FetchResolved {
                generation,
                outcome,
            });
        });
    }

    fn finish_fetch(&mut self, generation: u64, outcome: Result<Vec<T>>) {
        if generation != self.generation {
            debug!(
                generation,
                latest = self.generation,
                "discarding stale fetch resolution"
            );
            return;
        }

        match outcome {
            Ok(items) if items.is_empty() => self.close(),
            Ok(items) => {
                let rendered = items
                    .iter()
                    .map(|item| (self.config.render_option)(item))
                    .collect();
                self.options = items;
                self.open = true;
                self.emit(Update::DropdownOpened(rendered));
            }
            Err(err) => {
                error!(error = %err, "fetch failed");
                self.close();
                self.emit(Update::FetchFailed(Arc::new(err)));
            }
        }
    }

    fn select(&mut self, index: usize) {
        if !self.open {
            warn!(index, "option click ignored: dropdown closed");
            return;
        }
        let Some(item) = self.options.get(index).cloned() else {
            warn!(index, len = self.options.len(), "option click out of range");
            return;
        };

        self.open = false;
        self.options.clear();
        self.emit(Update::DropdownClosed);
        self.emit(Update::InputValueSet((self.config.input_value)(&item)));
        (self.config.on_option_select)(&item);
    }

    fn dismiss(&mut self, target: &ClickTarget) {
        if !target.contains(self.config.root) {
            self.close();
        }
    }

    fn close(&mut self) {
        self.options.clear();
        if self.open {
            self.open = false;
            self.emit(Update::DropdownClosed);
        }
    }

    fn emit(&self, update: Update) {
        if self.updates.send(update).is_err() {
            debug!("update receiver dropped");
        }
    }
}
