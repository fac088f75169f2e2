//! # Snapshot History
//!
//! Linear undo/redo over whole-state snapshots.
//!
//! ## Design
//!
//! - History is a list of snapshots plus a cursor at the current one
//! - Recording a snapshot drops everything after the cursor, appends, and
//!   moves the cursor to the new end
//! - Undo/redo only move the cursor; snapshots are never modified
//! - The list is bounded: when it grows past the limit the oldest snapshot is
//!   evicted and the cursor shifts down so the newest stays current
//! - One position can be marked as "saved" to answer whether the document
//!   differs from what the host last persisted
//!
//! Invariant: whenever the list is non-empty, `0 <= index < len`.

/// Bounded linear history of snapshots
#[derive(Debug, Clone)]
pub struct History<S> {
    entries: Vec<S>,
    index: usize,
    limit: usize,
    saved: Option<usize>,
}

impl<S> History<S> {
    /// Create an empty history retaining at most `limit` snapshots
    ///
    /// A limit of zero is treated as one: the current state is always kept.
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            index: 0,
            limit: limit.max(1),
            saved: None,
        }
    }

    /// Record a new current snapshot
    ///
    /// Returns `true` when the oldest snapshot had to be evicted.
    pub fn record(&mut self, snapshot: S) -> bool {
        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
            if self.saved.is_some_and(|saved| saved > self.index) {
                self.saved = None;
            }
        }

        self.entries.push(snapshot);
        self.index = self.entries.len() - 1;

        if self.entries.len() > self.limit {
            self.entries.remove(0);
            self.index -= 1;
            self.saved = self.saved.and_then(|saved| saved.checked_sub(1));
            return true;
        }
        false
    }

    /// Step back; returns the snapshot that is now current
    pub fn undo(&mut self) -> Option<&S> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        self.entries.get(self.index)
    }

    /// Step forward; returns the snapshot that is now current
    pub fn redo(&mut self) -> Option<&S> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        self.entries.get(self.index)
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty() && self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        !self.entries.is_empty() && self.index + 1 < self.entries.len()
    }

    /// The snapshot under the cursor
    pub fn current(&self) -> Option<&S> {
        self.entries.get(self.index)
    }

    /// Cursor position, or `None` while the history is empty
    pub fn index(&self) -> Option<usize> {
        (!self.entries.is_empty()).then_some(self.index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of steps available to undo
    pub fn undo_depth(&self) -> usize {
        self.index().unwrap_or(0)
    }

    /// Number of steps available to redo
    pub fn redo_depth(&self) -> usize {
        self.index()
            .map(|index| self.entries.len() - index - 1)
            .unwrap_or(0)
    }

    /// Drop every snapshot
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index = 0;
        self.saved = None;
    }

    /// Remember the cursor position as the saved state
    pub fn mark_saved(&mut self) {
        self.saved = self.index();
    }

    /// Whether the cursor sits on the saved state
    ///
    /// An empty history counts as saved.
    pub fn is_at_saved(&self) -> bool {
        self.entries.is_empty() || self.saved == Some(self.index)
    }
}

impl<S> Default for History<S> {
    fn default() -> Self {
        Self::new(slidekit_settings::config::DEFAULT_HISTORY_LIMIT)
    }
}
