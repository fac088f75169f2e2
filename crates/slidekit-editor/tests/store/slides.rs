use crate::common::{slide_order, store_with_slides, text_at};
use slidekit_core::{
    Background, DocumentError, ElementId, Error, NewElement, Position, Presentation, Slide,
    SlideElement, SlideId, Theme,
};
use slidekit_editor::EditorStore;

#[test]
fn test_set_presentation_selects_first_slide() {
    let (store, ids) = store_with_slides(3);
    assert_eq!(store.selected_slide_id(), Some(ids[0]));
    assert!(store.selected_element_ids().is_empty());
    assert_eq!(store.history_len(), 1);
    assert!(!store.can_undo());
    assert!(!store.is_modified());
}

#[test]
fn test_set_presentation_empty_selects_nothing() {
    let (store, _) = store_with_slides(0);
    assert!(store.selected_slide_id().is_none());
    assert!(store.selected_slide().is_none());
}

#[test]
fn test_add_slide_appends_and_selects() {
    let (mut store, ids) = store_with_slides(2);
    let id = store.add_slide(None);

    assert_eq!(slide_order(&store), vec![ids[0], ids[1], id]);
    assert_eq!(store.selected_slide_id(), Some(id));
    assert_eq!(store.history_len(), 2);

    let slide = store.slide(id).unwrap();
    assert!(slide.elements.is_empty());
    assert_eq!(slide.background, Background::color("#ffffff"));
}

#[test]
fn test_add_slide_at_index() {
    let (mut store, ids) = store_with_slides(2);
    let id = store.add_slide(Some(1));
    assert_eq!(slide_order(&store), vec![ids[0], id, ids[1]]);
}

#[test]
fn test_add_slide_index_past_end_appends() {
    let (mut store, ids) = store_with_slides(1);
    let id = store.add_slide(Some(10));
    assert_eq!(slide_order(&store), vec![ids[0], id]);
}

#[test]
fn test_add_slide_uses_theme_background() {
    let config = slidekit_settings::EditorConfig {
        default_background: "#101820".to_string(),
        ..Default::default()
    };
    let mut store = EditorStore::with_config(config).unwrap();
    let id = store.add_slide(None);
    assert_eq!(
        store.slide(id).unwrap().background,
        Background::color("#101820")
    );
}

#[test]
fn test_delete_selected_slide_moves_selection_forward() {
    let (mut store, ids) = store_with_slides(3);
    store.select_slide(ids[1]).unwrap();

    store.delete_slide(ids[1]).unwrap();
    assert_eq!(slide_order(&store), vec![ids[0], ids[2]]);
    assert_eq!(store.selected_slide_id(), Some(ids[2]));
}

#[test]
fn test_delete_last_selected_slide_moves_selection_back() {
    let (mut store, ids) = store_with_slides(3);
    store.select_slide(ids[2]).unwrap();

    store.delete_slide(ids[2]).unwrap();
    assert_eq!(store.selected_slide_id(), Some(ids[1]));
}

#[test]
fn test_delete_only_slide_clears_selection() {
    let (mut store, ids) = store_with_slides(1);
    store.delete_slide(ids[0]).unwrap();
    assert!(store.slides().is_empty());
    assert!(store.selected_slide_id().is_none());
}

#[test]
fn test_delete_unselected_slide_keeps_selection() {
    let (mut store, ids) = store_with_slides(3);
    store.add_element(text_at("keep", 0.0, 0.0)).unwrap();
    let element = *store.selected_element_ids().iter().next().unwrap();

    store.delete_slide(ids[2]).unwrap();
    assert_eq!(store.selected_slide_id(), Some(ids[0]));
    assert!(store.is_element_selected(element));
}

#[test]
fn test_delete_missing_slide_is_an_error_without_snapshot() {
    let (mut store, _) = store_with_slides(2);
    let missing = SlideId::new();

    let err = store.delete_slide(missing).unwrap_err();
    assert!(matches!(
        err,
        Error::Document(DocumentError::SlideNotFound { id }) if id == missing
    ));
    assert_eq!(store.slides().len(), 2);
    assert_eq!(store.history_len(), 1);
}

#[test]
fn test_duplicate_slide_inserts_after_source_with_fresh_ids() {
    let (mut store, ids) = store_with_slides(2);
    let a = store.add_element(text_at("a", 0.0, 0.0)).unwrap();
    let b = store.add_element(text_at("b", 10.0, 10.0)).unwrap();

    let copy = store.duplicate_slide(ids[0]).unwrap();
    assert_eq!(slide_order(&store), vec![ids[0], copy, ids[1]]);
    assert_eq!(store.selected_slide_id(), Some(copy));

    let source = store.slide(ids[0]).unwrap();
    let dup = store.slide(copy).unwrap();
    assert_eq!(dup.elements.len(), 2);
    assert!(!dup.contains_element(a));
    assert!(!dup.contains_element(b));
    for (orig, copied) in source.elements.iter().zip(&dup.elements) {
        assert_ne!(orig.id, copied.id);
        assert_eq!(orig.position, copied.position);
        assert_eq!(orig.content, copied.content);
    }
}

#[test]
fn test_duplicate_slide_is_independent_of_source() {
    let (mut store, ids) = store_with_slides(1);
    let original = store.add_element(text_at("a", 0.0, 0.0)).unwrap();
    let copy = store.duplicate_slide(ids[0]).unwrap();

    let copied_element = store.slide(copy).unwrap().elements[0].id;
    store
        .update_element(
            copied_element,
            slidekit_core::ElementPatch::new().rotation(45.0),
        )
        .unwrap();

    let source = store.slide(ids[0]).unwrap();
    assert_eq!(source.element(original).unwrap().rotation, 0.0);
}

#[test]
fn test_reorder_moves_slide() {
    let (mut store, ids) = store_with_slides(4);
    store.reorder_slides(0, 2).unwrap();
    assert_eq!(slide_order(&store), vec![ids[1], ids[2], ids[0], ids[3]]);

    store.reorder_slides(3, 0).unwrap();
    assert_eq!(slide_order(&store), vec![ids[3], ids[1], ids[2], ids[0]]);
    assert_eq!(store.history_len(), 3);
}

#[test]
fn test_reorder_same_index_records_snapshot() {
    let (mut store, ids) = store_with_slides(2);
    store.reorder_slides(1, 1).unwrap();
    assert_eq!(slide_order(&store), ids);
    assert_eq!(store.history_len(), 2);
}

#[test]
fn test_reorder_out_of_range_is_rejected() {
    let (mut store, ids) = store_with_slides(2);
    let err = store.reorder_slides(0, 2).unwrap_err();
    assert!(matches!(
        err,
        Error::Document(DocumentError::IndexOutOfRange { index: 2, len: 2 })
    ));
    assert_eq!(slide_order(&store), ids);
    assert_eq!(store.history_len(), 1);
}

#[test]
fn test_update_slide_background() {
    let (mut store, ids) = store_with_slides(2);
    let gradient = Background::Gradient {
        from: "#000000".to_string(),
        to: "#ffffff".to_string(),
        angle: 90.0,
    };
    store
        .update_slide_background(ids[1], gradient.clone())
        .unwrap();

    assert_eq!(store.slide(ids[1]).unwrap().background, gradient);
    assert_eq!(store.history_len(), 2);

    assert!(store.undo());
    assert_eq!(
        store.slide(ids[1]).unwrap().background,
        Background::color("#ffffff")
    );
}

#[test]
fn test_set_presentation_rejects_repeated_element_id() {
    let (mut store, ids) = store_with_slides(2);
    store.add_element(text_at("kept", 0.0, 0.0)).unwrap();
    let before = store.presentation();

    let theme = Theme::default();
    let repeated = ElementId::new();
    let mut slide = Slide::new(theme.slide_background());
    for y in [0.0, 50.0] {
        slide.elements.push(SlideElement::from_new(
            repeated,
            NewElement::text("twin", Position::new(0.0, y)),
        ));
    }
    let bad_slide = slide.id;

    let err = store
        .set_presentation(Presentation::new("Broken", theme).with_slide(slide))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Document(DocumentError::DuplicateElementId { slide, id })
            if slide == bad_slide && id == repeated
    ));

    assert_eq!(store.presentation(), before);
    assert_eq!(slide_order(&store), ids);
    assert_eq!(store.history_len(), 2);
}

#[test]
fn test_set_presentation_rejects_repeated_slide_id() {
    let (mut store, ids) = store_with_slides(1);
    let theme = Theme::default();
    let slide = Slide::new(theme.slide_background());

    let err = store
        .set_presentation(
            Presentation::new("Broken", theme)
                .with_slide(slide.clone())
                .with_slide(slide),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Document(DocumentError::DuplicateSlideId { .. })
    ));
    assert_eq!(slide_order(&store), ids);
}
