//! Linear undo/redo history of whole-chart snapshots.
//!
//! Every committed state is stored as an immutable JSON string. Restoring a
//! state parses the snapshot into a fresh value tree, so the live chart never
//! shares structure with the history.

use tracing::{debug, instrument};

use crate::domain::error::DomainResult;
use crate::domain::Employee;

#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<String>,
    cursor: usize,
}

impl History {
    /// Starts a history whose only entry is `initial`, at cursor 0.
    pub fn new(initial: &Employee) -> DomainResult<Self> {
        Ok(Self {
            snapshots: vec![serde_json::to_string(initial)?],
            cursor: 0,
        })
    }

    /// Commits `state` after the cursor and moves the cursor onto it.
    ///
    /// Snapshots past the cursor (the redo branch left behind by `undo`) are
    /// discarded first.
    #[instrument(level = "debug", skip(self, state))]
    pub fn record(&mut self, state: &Employee) -> DomainResult<()> {
        let snapshot = serde_json::to_string(state)?;
        let dropped = self.snapshots.len() - (self.cursor + 1);
        if dropped > 0 {
            debug!(dropped, "discarding redo branch");
        }
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;
        Ok(())
    }

    /// Index `undo` would move to, if any.
    pub fn undo_target(&self) -> Option<usize> {
        self.cursor.checked_sub(1)
    }

    /// Index `redo` would move to, if any.
    pub fn redo_target(&self) -> Option<usize> {
        let next = self.cursor + 1;
        (next < self.snapshots.len()).then_some(next)
    }

    /// Rebuilds the value tree stored at `index`.
    pub fn restore(&self, index: usize) -> Option<DomainResult<Employee>> {
        self.snapshots
            .get(index)
            .map(|snapshot| serde_json::from_str(snapshot).map_err(Into::into))
    }

    /// Moves the cursor; out-of-range indices are ignored.
    pub fn seek(&mut self, index: usize) {
        if index < self.snapshots.len() {
            self.cursor = index;
        }
    }

    pub fn can_undo(&self) -> bool {
        self.undo_target().is_some()
    }

    pub fn can_redo(&self) -> bool {
        self.redo_target().is_some()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Raw snapshot at the cursor.
    pub fn current(&self) -> &str {
        &self.snapshots[self.cursor]
    }
}
