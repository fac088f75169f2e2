//! Data models for presentations, slides, and slide elements
//!
//! This module provides:
//! - `Presentation`, the root document exchanged with the host application
//! - `Slide` with its background and z-ordered elements
//! - `SlideElement`, a closed set of content variants sharing a common
//!   position/size envelope
//! - `NewElement` and `ElementPatch`, the inputs of element creation and
//!   partial updates

mod element;
mod presentation;
mod slide;

pub use element::{
    ElementContent, ElementPatch, ImageContent, NewElement, ShapeContent, ShapeKind, SlideElement,
    TextContent,
};
pub use presentation::{Presentation, Theme};
pub use slide::{Background, Slide};
