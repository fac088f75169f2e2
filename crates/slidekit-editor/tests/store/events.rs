use crate::common::{store_with_slides, text_at};
use slidekit_core::{Presentation, SlideId, Theme};
use slidekit_editor::{EditorStore, StoreEvent};
use std::cell::RefCell;
use std::rc::Rc;

fn recording(store: &mut EditorStore) -> Rc<RefCell<Vec<StoreEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    store.subscribe(move |event| sink.borrow_mut().push(*event));
    events
}

#[test]
fn test_load_emits_presentation_loaded() {
    let mut store = EditorStore::new();
    let events = recording(&mut store);

    store
        .set_presentation(Presentation::new("Empty", Theme::default()))
        .unwrap();
    assert_eq!(*events.borrow(), vec![StoreEvent::PresentationLoaded]);
}

#[test]
fn test_mutation_emits_change_then_selection() {
    let (mut store, _) = store_with_slides(1);
    let events = recording(&mut store);

    store.add_element(text_at("a", 0.0, 0.0)).unwrap();
    assert_eq!(
        *events.borrow(),
        vec![StoreEvent::SlidesChanged, StoreEvent::SelectionChanged]
    );
}

#[test]
fn test_failed_operation_emits_nothing() {
    let (mut store, _) = store_with_slides(1);
    let events = recording(&mut store);

    assert!(store.delete_slide(SlideId::new()).is_err());
    assert!(store.reorder_slides(0, 5).is_err());
    assert!(!store.undo());
    assert!(events.borrow().is_empty());
}

#[test]
fn test_clipboard_and_history_events() {
    let (mut store, _) = store_with_slides(1);
    store.add_element(text_at("a", 0.0, 0.0)).unwrap();
    let events = recording(&mut store);

    store.copy_elements();
    store.undo();
    store.redo();
    assert_eq!(
        *events.borrow(),
        vec![
            StoreEvent::ClipboardChanged,
            StoreEvent::HistoryRestored { index: 0 },
            StoreEvent::HistoryRestored { index: 1 },
        ]
    );
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let (mut store, _) = store_with_slides(1);
    let events = Rc::new(RefCell::new(0usize));
    let sink = Rc::clone(&events);
    let id = store.subscribe(move |_| *sink.borrow_mut() += 1);
    assert_eq!(store.subscriber_count(), 1);

    store.add_slide(None);
    let delivered = *events.borrow();
    assert!(delivered > 0);

    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.add_slide(None);
    assert_eq!(*events.borrow(), delivered);
}
