//! Read-only accessors for the editor store.

use super::EditorStore;
use slidekit_core::{ElementId, Slide, SlideElement, SlideId, Theme};
use std::collections::HashSet;
use std::sync::Arc;

impl EditorStore {
    /// Slides in presentation order.
    pub fn slides(&self) -> &[Arc<Slide>] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Gets a slide by id.
    pub fn slide(&self, id: SlideId) -> Option<&Slide> {
        self.slides
            .iter()
            .find(|slide| slide.id == id)
            .map(Arc::as_ref)
    }

    /// Position of a slide in the presentation.
    pub fn slide_index(&self, id: SlideId) -> Option<usize> {
        self.slides.iter().position(|slide| slide.id == id)
    }

    pub fn selected_slide_id(&self) -> Option<SlideId> {
        self.selected_slide_id
    }

    /// The selected slide, if any.
    pub fn selected_slide(&self) -> Option<&Slide> {
        self.selected_slide_id.and_then(|id| self.slide(id))
    }

    /// Looks up an element on the selected slide only.
    pub fn element_by_id(&self, id: ElementId) -> Option<&SlideElement> {
        self.selected_slide()?.element(id)
    }

    pub fn selected_element_ids(&self) -> &HashSet<ElementId> {
        &self.selected_element_ids
    }

    pub fn is_element_selected(&self, id: ElementId) -> bool {
        self.selected_element_ids.contains(&id)
    }

    /// Selected elements in z-order.
    pub fn selected_elements(&self) -> Vec<&SlideElement> {
        self.selected_slide()
            .map(|slide| {
                slide
                    .elements
                    .iter()
                    .filter(|el| self.selected_element_ids.contains(&el.id))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of registered change handlers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
