use crate::common::{store_with_slides, text_at};
use slidekit_core::{ElementId, Offset, Position};
use slidekit_editor::EditorStore;
use slidekit_settings::{ConfigError, EditorConfig};
use std::collections::HashSet;

#[test]
fn test_copy_keeps_z_order_and_records_nothing() {
    let (mut store, _) = store_with_slides(1);
    let a = store.add_element(text_at("a", 0.0, 0.0)).unwrap();
    let b = store.add_element(text_at("b", 0.0, 0.0)).unwrap();
    let c = store.add_element(text_at("c", 0.0, 0.0)).unwrap();
    store.select_element(c, false).unwrap();
    store.select_element(a, true).unwrap();
    let before = store.history_len();

    assert_eq!(store.copy_elements(), 2);
    let copied: Vec<ElementId> = store.clipboard().iter().map(|el| el.id).collect();
    assert_eq!(copied, vec![a, c]);
    assert!(!copied.contains(&b));
    assert_eq!(store.history_len(), before);
}

#[test]
fn test_copy_with_empty_selection_empties_clipboard() {
    let (mut store, _) = store_with_slides(1);
    store.add_element(text_at("a", 0.0, 0.0)).unwrap();
    store.copy_elements();
    assert_eq!(store.clipboard().len(), 1);

    store.clear_selection();
    assert_eq!(store.copy_elements(), 0);
    assert!(store.clipboard().is_empty());
}

#[test]
fn test_copy_is_a_value_snapshot() {
    let (mut store, _) = store_with_slides(1);
    let a = store.add_element(text_at("a", 0.0, 0.0)).unwrap();
    store.copy_elements();

    store
        .update_element(
            a,
            slidekit_core::ElementPatch::new().position(Position::new(500.0, 500.0)),
        )
        .unwrap();
    assert_eq!(store.clipboard()[0].position, Position::new(0.0, 0.0));
}

#[test]
fn test_paste_offsets_and_assigns_fresh_ids() {
    let (mut store, _) = store_with_slides(1);
    let a = store.add_element(text_at("a", 10.0, 10.0)).unwrap();
    let b = store.add_element(text_at("b", 100.0, 50.0)).unwrap();
    store.select_element(a, true).unwrap();
    store.copy_elements();
    let before = store.history_len();

    let pasted = store.paste_elements();
    assert_eq!(pasted.len(), 2);
    assert!(!pasted.contains(&a));
    assert!(!pasted.contains(&b));

    let slide = store.selected_slide().unwrap();
    assert_eq!(slide.elements.len(), 4);
    assert_eq!(slide.elements[2].position, Position::new(30.0, 30.0));
    assert_eq!(slide.elements[3].position, Position::new(120.0, 70.0));

    let selected: HashSet<ElementId> = pasted.iter().copied().collect();
    assert_eq!(store.selected_element_ids(), &selected);
    assert_eq!(store.history_len(), before + 1);
}

#[test]
fn test_paste_twice_keeps_clipboard_and_ids_unique() {
    let (mut store, _) = store_with_slides(1);
    store.add_element(text_at("a", 0.0, 0.0)).unwrap();
    store.copy_elements();

    let first = store.paste_elements();
    let second = store.paste_elements();
    assert_eq!(store.clipboard().len(), 1);
    assert_ne!(first, second);

    let ids: HashSet<ElementId> = store.selected_slide().unwrap().element_ids().collect();
    assert_eq!(ids.len(), 3);
}

#[test]
fn test_paste_onto_another_slide() {
    let (mut store, ids) = store_with_slides(2);
    store.add_element(text_at("a", 0.0, 0.0)).unwrap();
    store.copy_elements();

    store.select_slide(ids[1]).unwrap();
    let pasted = store.paste_elements();
    assert_eq!(pasted.len(), 1);
    assert!(store.slide(ids[1]).unwrap().contains_element(pasted[0]));
    assert_eq!(store.slide(ids[0]).unwrap().elements.len(), 1);
}

#[test]
fn test_paste_empty_clipboard_is_a_no_op() {
    let (mut store, _) = store_with_slides(1);
    assert!(store.paste_elements().is_empty());
    assert_eq!(store.history_len(), 1);
}

#[test]
fn test_cut_records_one_snapshot_per_element() {
    let (mut store, _) = store_with_slides(1);
    let a = store.add_element(text_at("a", 0.0, 0.0)).unwrap();
    let b = store.add_element(text_at("b", 0.0, 0.0)).unwrap();
    store.add_element(text_at("c", 0.0, 0.0)).unwrap();
    store.select_element(a, false).unwrap();
    store.select_element(b, true).unwrap();
    let before = store.history_len();

    assert_eq!(store.cut_elements(), 2);
    assert_eq!(store.history_len(), before + 2);
    assert_eq!(store.selected_slide().unwrap().elements.len(), 1);
    assert!(store.selected_element_ids().is_empty());
    assert_eq!(store.clipboard().len(), 2);

    let pasted = store.paste_elements();
    assert_eq!(pasted.len(), 2);
    assert_eq!(store.selected_slide().unwrap().elements.len(), 3);
}

#[test]
fn test_store_refuses_zero_nudge() {
    let config = EditorConfig::new().with_nudge_offset(Offset::new(0.0, 0.0));
    let err = EditorStore::with_config(config).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidSetting { ref key, .. } if key == "nudge_offset"
    ));
}

#[test]
fn test_paste_and_duplicate_move_off_source_with_custom_nudge() {
    let config = EditorConfig::new().with_nudge_offset(Offset::new(0.0, 8.0));
    let mut store = EditorStore::with_config(config).unwrap();
    store.add_slide(None);
    let id = store.add_element(text_at("a", 5.0, 5.0)).unwrap();

    store.copy_elements();
    let pasted = store.paste_elements();
    assert_eq!(
        store.element_by_id(pasted[0]).unwrap().position,
        Position::new(5.0, 13.0)
    );

    let dup = store.duplicate_element(id).unwrap();
    assert_ne!(
        store.element_by_id(dup).unwrap().position,
        Position::new(5.0, 5.0)
    );
}

#[test]
fn test_cut_without_selected_slide_leaves_clipboard() {
    let (mut store, ids) = store_with_slides(1);
    let a = store.add_element(text_at("a", 0.0, 0.0)).unwrap();
    store.copy_elements();
    store.delete_slide(ids[0]).unwrap();
    let before = store.history_len();

    assert_eq!(store.cut_elements(), 0);
    assert_eq!(store.history_len(), before);
    let held: Vec<ElementId> = store.clipboard().iter().map(|el| el.id).collect();
    assert_eq!(held, vec![a]);
}
