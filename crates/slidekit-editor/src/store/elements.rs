//! Element operations for the editor store.
//!
//! Elements are always addressed on the selected slide.

use super::EditorStore;
use crate::events::StoreEvent;
use slidekit_core::{DocumentError, ElementId, ElementPatch, NewElement, Result, SlideElement};

impl EditorStore {
    /// Adds an element on top of the selected slide and makes it the only
    /// selected element.
    pub fn add_element(&mut self, element: NewElement) -> Result<ElementId> {
        let index = self.selected_slide_index()?;

        let id = ElementId::new();
        let kind = element.content.kind_name();
        self.slide_mut(index)
            .push_element(SlideElement::from_new(id, element));
        self.select_only([id]);

        tracing::debug!(%id, kind, "Added element");
        self.commit("add element");
        self.emit(StoreEvent::SelectionChanged);
        Ok(id)
    }

    /// Merges `patch` into an element of the selected slide.
    pub fn update_element(&mut self, id: ElementId, patch: ElementPatch) -> Result<()> {
        let index = self.element_slide_index(id)?;

        if let Some(element) = self.slide_mut(index).element_mut(id) {
            element.apply_patch(patch);
        }

        self.commit("update element");
        Ok(())
    }

    /// Removes an element from the selected slide and from the selection.
    pub fn delete_element(&mut self, id: ElementId) -> Result<()> {
        let index = self.element_slide_index(id)?;

        self.slide_mut(index).remove_element(id);
        let was_selected = self.selected_element_ids.remove(&id);

        self.commit("delete element");
        if was_selected {
            self.emit(StoreEvent::SelectionChanged);
        }
        Ok(())
    }

    /// Copies an element under a fresh id, nudged away from the original,
    /// places it on top, and selects only the copy.
    pub fn duplicate_element(&mut self, id: ElementId) -> Result<ElementId> {
        let index = self.element_slide_index(id)?;

        let copy = self.slides[index]
            .element(id)
            .map(|element| element.duplicate_with_offset(self.config.nudge_offset))
            .ok_or(DocumentError::ElementNotFound { id })?;
        let copy_id = copy.id;

        self.slide_mut(index).push_element(copy);
        self.select_only([copy_id]);

        self.commit("duplicate element");
        self.emit(StoreEvent::SelectionChanged);
        Ok(copy_id)
    }

    /// Index of the selected slide, provided it holds element `id`.
    fn element_slide_index(&self, id: ElementId) -> Result<usize> {
        let index = self.selected_slide_index()?;
        if !self.slides[index].contains_element(id) {
            tracing::warn!(%id, "Element not on the selected slide");
            return Err(DocumentError::ElementNotFound { id }.into());
        }
        Ok(index)
    }

    pub(super) fn select_only(&mut self, ids: impl IntoIterator<Item = ElementId>) {
        self.selected_element_ids.clear();
        self.selected_element_ids.extend(ids);
    }
}
