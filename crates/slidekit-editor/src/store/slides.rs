//! Slide operations (add, delete, duplicate, reorder, background) for the editor store.

use super::EditorStore;
use crate::events::StoreEvent;
use slidekit_core::{Background, DocumentError, Result, Slide, SlideId};
use std::sync::Arc;

impl EditorStore {
    /// Inserts a new empty slide at `index` (default: the end) and selects it.
    ///
    /// An index past the end appends. The background comes from the theme.
    pub fn add_slide(&mut self, index: Option<usize>) -> SlideId {
        let len = self.slides.len();
        let at = index.unwrap_or(len).min(len);

        let slide = Slide::new(self.theme.slide_background());
        let id = slide.id;
        self.slides.insert(at, Arc::new(slide));
        self.set_selected_slide(Some(id));

        self.commit("add slide");
        self.emit(StoreEvent::SelectionChanged);
        id
    }

    /// Removes a slide.
    ///
    /// When the removed slide was selected, selection moves to the slide now
    /// at the same index, else the one before it, else nothing.
    pub fn delete_slide(&mut self, id: SlideId) -> Result<()> {
        let index = self.require_slide_index(id)?;
        self.slides.remove(index);

        let was_selected = self.selected_slide_id == Some(id);
        if was_selected {
            let next = self
                .slides
                .get(index)
                .or_else(|| index.checked_sub(1).and_then(|prev| self.slides.get(prev)))
                .or_else(|| self.slides.first())
                .map(|slide| slide.id);
            self.set_selected_slide(next);
        }

        self.commit("delete slide");
        if was_selected {
            self.emit(StoreEvent::SelectionChanged);
        }
        Ok(())
    }

    /// Inserts a deep copy right after the source slide and selects it.
    ///
    /// The copy and every element on it get fresh ids.
    pub fn duplicate_slide(&mut self, id: SlideId) -> Result<SlideId> {
        let index = self.require_slide_index(id)?;
        let copy = self.slides[index].duplicate();
        let copy_id = copy.id;

        self.slides.insert(index + 1, Arc::new(copy));
        self.set_selected_slide(Some(copy_id));

        self.commit("duplicate slide");
        self.emit(StoreEvent::SelectionChanged);
        Ok(copy_id)
    }

    /// Moves the slide at `old_index` so that it ends up at `new_index`.
    ///
    /// Slides between the two positions shift by one. Both indices must be
    /// inside the current slide list.
    pub fn reorder_slides(&mut self, old_index: usize, new_index: usize) -> Result<()> {
        let len = self.slides.len();
        for index in [old_index, new_index] {
            if index >= len {
                tracing::warn!(index, len, "Rejected slide reorder");
                return Err(DocumentError::IndexOutOfRange { index, len }.into());
            }
        }

        let slide = self.slides.remove(old_index);
        self.slides.insert(new_index, slide);

        self.commit("reorder slides");
        Ok(())
    }

    /// Replaces a slide's background.
    pub fn update_slide_background(&mut self, id: SlideId, background: Background) -> Result<()> {
        let index = self.require_slide_index(id)?;
        self.slide_mut(index).background = background;

        self.commit("update slide background");
        Ok(())
    }
}
