//! # SlideKit Editor
//!
//! The editor document store: the single source of truth for a presentation
//! while it is being edited.
//!
//! ## Core Components
//!
//! - **EditorStore**: owns the slides, the selection, the clipboard, and the
//!   undo history; every document change goes through one of its operations
//! - **History**: bounded, linear snapshot history with a cursor
//! - **StoreEvent**: change notifications delivered to subscribers so a host
//!   UI can re-render
//!
//! ## Architecture
//!
//! ```text
//! host loader ──set_presentation──▶ EditorStore ──presentation()──▶ host save
//!                                      │
//!              slide ops, element ops, clipboard, selection
//!                                      │
//!                         commit ──▶ History (snapshots)
//!                                      │
//!                         undo/redo ◀──┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use slidekit_core::{NewElement, Position, Presentation, Slide, Theme};
//! use slidekit_editor::EditorStore;
//!
//! let theme = Theme::default();
//! let presentation = Presentation::new("Demo", theme.clone())
//!     .with_slide(Slide::new(theme.slide_background()));
//!
//! let mut store = EditorStore::new();
//! store.set_presentation(presentation).unwrap();
//!
//! let id = store.add_element(NewElement::text("Hello", Position::new(0.0, 0.0))).unwrap();
//! let copy = store.duplicate_element(id).unwrap();
//! assert_eq!(store.element_by_id(copy).unwrap().position, Position::new(20.0, 20.0));
//!
//! assert!(store.undo());
//! assert!(store.element_by_id(copy).is_none());
//! ```
//!
//! Operations are synchronous and run to completion; a mutation is either
//! fully applied and recorded in history or, when it returns an error, not
//! applied at all.

pub mod events;
pub mod history;
pub mod store;

pub use events::{StoreEvent, SubscriptionId};
pub use history::History;
pub use store::{EditorStore, Snapshot};
