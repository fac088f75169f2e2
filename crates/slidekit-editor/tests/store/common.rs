use slidekit_core::{NewElement, Position, Presentation, Slide, SlideId, Theme};
use slidekit_editor::EditorStore;

/// A store loaded with `count` empty slides
pub fn store_with_slides(count: usize) -> (EditorStore, Vec<SlideId>) {
    let theme = Theme::default();
    let mut presentation = Presentation::new("Test deck", theme.clone());
    for _ in 0..count {
        presentation = presentation.with_slide(Slide::new(theme.slide_background()));
    }
    let ids = presentation.slides.iter().map(|s| s.id).collect();

    let mut store = EditorStore::new();
    store.set_presentation(presentation).unwrap();
    (store, ids)
}

pub fn text_at(text: &str, x: f64, y: f64) -> NewElement {
    NewElement::text(text, Position::new(x, y))
}

pub fn slide_order(store: &EditorStore) -> Vec<SlideId> {
    store.slides().iter().map(|s| s.id).collect()
}
