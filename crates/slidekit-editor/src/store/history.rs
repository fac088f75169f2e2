//! Undo/redo functionality for the editor store.

use super::{EditorStore, Snapshot};
use crate::events::StoreEvent;

impl EditorStore {
    /// Steps back one history entry; returns `false` at the oldest entry.
    ///
    /// Restores slides and the selected slide; element selection is cleared
    /// because restored elements may no longer match it.
    pub fn undo(&mut self) -> bool {
        match self.history.undo().cloned() {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    /// Steps forward one history entry; returns `false` at the newest entry.
    pub fn redo(&mut self) -> bool {
        match self.history.redo().cloned() {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of snapshots retained
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Cursor into the snapshot list, `None` before anything was recorded
    pub fn history_index(&self) -> Option<usize> {
        self.history.index()
    }

    /// Whether the document differs from the last load or `mark_saved`.
    pub fn is_modified(&self) -> bool {
        !self.history.is_at_saved()
    }

    /// Marks the current state as persisted by the host.
    pub fn mark_saved(&mut self) {
        self.history.mark_saved();
    }

    fn restore(&mut self, snapshot: Snapshot) {
        let Snapshot {
            slides,
            selected_slide_id,
        } = snapshot;

        self.slides = slides;
        self.set_selected_slide(selected_slide_id);

        let index = self.history.index().unwrap_or(0);
        tracing::debug!(index, "Restored history snapshot");
        self.emit(StoreEvent::HistoryRestored { index });
    }
}
