//! Clipboard operations (copy, cut, paste) for the editor store.

use super::EditorStore;
use crate::events::StoreEvent;
use slidekit_core::{ElementId, SlideElement};

impl EditorStore {
    /// Copies the selected elements to the clipboard, replacing its contents.
    ///
    /// Elements are copied in z-order. Does nothing when no slide is
    /// selected. Returns the number of elements copied.
    pub fn copy_elements(&mut self) -> usize {
        let Ok(index) = self.selected_slide_index() else {
            return 0;
        };

        self.clipboard = self.slides[index]
            .elements
            .iter()
            .filter(|el| self.selected_element_ids.contains(&el.id))
            .cloned()
            .collect();

        tracing::debug!(count = self.clipboard.len(), "Copied elements");
        self.emit(StoreEvent::ClipboardChanged);
        self.clipboard.len()
    }

    /// Copies the selected elements, then deletes them one by one.
    ///
    /// Each deletion is its own history entry. Returns the number cut.
    pub fn cut_elements(&mut self) -> usize {
        let count = self.copy_elements();
        if count == 0 {
            return 0;
        }
        let ids: Vec<ElementId> = self.clipboard.iter().map(|el| el.id).collect();

        for id in ids {
            if let Err(err) = self.delete_element(id) {
                tracing::warn!(%id, error = %err, "Cut skipped element");
            }
        }
        count
    }

    /// Pastes the clipboard onto the selected slide.
    ///
    /// Every pasted element gets a fresh id and the nudge offset; the pasted
    /// elements become the selection. The clipboard is left intact so the
    /// same contents can be pasted again. Returns the new ids, empty when
    /// there was nothing to paste or no slide selected.
    pub fn paste_elements(&mut self) -> Vec<ElementId> {
        if self.clipboard.is_empty() {
            return Vec::new();
        }
        let Ok(index) = self.selected_slide_index() else {
            return Vec::new();
        };

        let offset = self.config.nudge_offset;
        let pasted: Vec<SlideElement> = self
            .clipboard
            .iter()
            .map(|el| el.duplicate_with_offset(offset))
            .collect();
        let ids: Vec<ElementId> = pasted.iter().map(|el| el.id).collect();

        let slide = self.slide_mut(index);
        for element in pasted {
            slide.push_element(element);
        }
        self.select_only(ids.iter().copied());

        tracing::debug!(count = ids.len(), "Pasted elements");
        self.commit("paste elements");
        self.emit(StoreEvent::SelectionChanged);
        ids
    }

    /// Elements currently held by the clipboard.
    pub fn clipboard(&self) -> &[SlideElement] {
        &self.clipboard
    }
}
