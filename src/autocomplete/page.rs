//! Page-level click dismissal
//!
//! Each autocomplete instance owns a root surface and closes its dropdown
//! when a click lands outside that root. Instances share the page-level
//! click event but no mutable state: every registered listener evaluates
//! containment against its own root only.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ROOT: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of the UI surface owning one autocomplete instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RootId(u64);

impl RootId {
    /// Allocate a fresh root identity
    pub fn next() -> Self {
        Self(NEXT_ROOT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Where on the page a click landed, expressed as the set of roots
/// containing the click point.
#[derive(Debug, Clone, Default)]
pub struct ClickTarget {
    within: Vec<RootId>,
}

impl ClickTarget {
    /// A click outside every root
    pub fn outside() -> Self {
        Self::default()
    }

    /// A click inside the given root
    pub fn inside(root: RootId) -> Self {
        Self { within: vec![root] }
    }

    /// Mark the click as also inside `root` (nested surfaces)
    pub fn and_inside(mut self, root: RootId) -> Self {
        self.within.push(root);
        self
    }

    /// Whether the click landed within `root`
    pub fn contains(&self, root: RootId) -> bool {
        self.within.contains(&root)
    }
}

/// Registry fanning one page-level click out to every autocomplete
/// instance's dismissal listener
#[derive(Default)]
pub struct PageClicks {
    listeners: Vec<Box<dyn Fn(&ClickTarget) + Send + Sync>>,
}

impl PageClicks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an instance's dismissal listener
    pub fn register(&mut self, listener: impl Fn(&ClickTarget) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Dispatch a click to every registered listener
    pub fn dispatch(&self, target: &ClickTarget) {
        for listener in &self.listeners {
            listener(target);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
