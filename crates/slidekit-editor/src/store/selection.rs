//! Selection operations. Selection is transient UI state and never recorded
//! in history.

use super::EditorStore;
use crate::events::StoreEvent;
use slidekit_core::{DocumentError, ElementId, Result, SlideId};

impl EditorStore {
    /// Selects a slide and clears the element selection.
    pub fn select_slide(&mut self, id: SlideId) -> Result<()> {
        self.require_slide_index(id)?;
        self.set_selected_slide(Some(id));
        self.emit(StoreEvent::SelectionChanged);
        Ok(())
    }

    /// Selects an element of the selected slide.
    ///
    /// Without `multi_select` the element becomes the only selection. With
    /// it, the element is toggled in or out of the current selection.
    pub fn select_element(&mut self, id: ElementId, multi_select: bool) -> Result<()> {
        let index = self.selected_slide_index()?;
        if !self.slides[index].contains_element(id) {
            return Err(DocumentError::ElementNotFound { id }.into());
        }

        if !multi_select {
            self.select_only([id]);
        } else if !self.selected_element_ids.remove(&id) {
            self.selected_element_ids.insert(id);
        }

        self.emit(StoreEvent::SelectionChanged);
        Ok(())
    }

    /// Selects every element of the selected slide; returns how many.
    pub fn select_all_elements(&mut self) -> usize {
        let Ok(index) = self.selected_slide_index() else {
            return 0;
        };
        let ids: Vec<ElementId> = self.slides[index].element_ids().collect();
        let count = ids.len();
        self.select_only(ids);

        self.emit(StoreEvent::SelectionChanged);
        count
    }

    /// Empties the element selection; the selected slide stays.
    pub fn clear_selection(&mut self) {
        if self.selected_element_ids.is_empty() {
            return;
        }
        self.selected_element_ids.clear();
        self.emit(StoreEvent::SelectionChanged);
    }
}
