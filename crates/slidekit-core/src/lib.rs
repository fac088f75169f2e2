//! # SlideKit Core
//!
//! Core types for the SlideKit presentation editor.
//! Provides the document model (presentations, slides, positioned elements),
//! the strongly typed identifiers that address them, and the error types
//! shared by every layer of the workspace.
//!
//! ## Document Model
//!
//! ```text
//! Presentation
//!   ├── Theme (background colour, fonts)
//!   └── Slide*            (ordered, addressed by SlideId)
//!         ├── Background  (colour, gradient, image)
//!         └── SlideElement*  (z-ordered, addressed by ElementId)
//!               └── ElementContent (text, image, shape)
//! ```
//!
//! The model is plain data: it derives `serde` traits so a host application
//! can exchange it with a backend as JSON, and `Clone` so editor snapshots can
//! be taken cheaply.

pub mod error;
pub mod geometry;
pub mod ids;
pub mod model;

pub use error::{DocumentError, Error, Result};
pub use geometry::{Offset, Position, Size};
pub use ids::{ElementId, SlideId};
pub use model::{
    Background, ElementContent, ElementPatch, ImageContent, NewElement, Presentation, ShapeContent,
    ShapeKind, Slide, SlideElement, TextContent, Theme,
};
