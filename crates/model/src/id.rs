//! ID generation.

use std::cell::Cell;

use uuid::Uuid;

/// Source of unique identifiers for generated collection items.
///
/// Conversion assigns a fresh ID to every folder and request it creates.
/// Production code uses [`UuidIds`]; tests can substitute [`SequentialIds`]
/// so converted trees compare stable across runs.
pub trait IdProvider {
    /// Returns the next unique identifier.
    fn next_id(&self) -> String;
}

/// UUID v7 identifiers, sortable by creation time.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdProvider for UuidIds {
    fn next_id(&self) -> String {
        Uuid::now_v7().to_string()
    }
}

/// Counter-backed identifiers (`id-0001`, `id-0002`, ...).
#[derive(Debug, Default)]
pub struct SequentialIds {
    counter: Cell<u64>,
}

impl SequentialIds {
    /// Creates a provider counting from 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdProvider for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.counter.get() + 1;
        self.counter.set(n);
        format!("id-{n:04}")
    }
}
