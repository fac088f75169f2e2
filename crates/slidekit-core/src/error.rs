//! Error handling for SlideKit
//!
//! Provides the error types for every layer of the editor:
//! - Document errors (addressing slides and elements that are not there)
//! - Serialization errors (exchanging documents as JSON)
//!
//! All error types use `thiserror` for ergonomic error handling.

use crate::ids::{ElementId, SlideId};
use thiserror::Error;

/// Document error type
///
/// Raised when an editor operation addresses something that does not exist
/// in the current document, or when a loaded document repeats an id. An
/// operation that fails with one of these leaves
/// the document and its history untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// No slide with the given id
    #[error("Slide {id} not found")]
    SlideNotFound {
        /// The id that was looked up.
        id: SlideId,
    },

    /// No element with the given id on the selected slide
    #[error("Element {id} not found on the selected slide")]
    ElementNotFound {
        /// The id that was looked up.
        id: ElementId,
    },

    /// The operation works on the selected slide but none is selected
    #[error("No slide selected")]
    NoSlideSelected,

    /// A slide index outside the slide list
    #[error("Slide index {index} out of range for {len} slides")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of slides at the time of the call.
        len: usize,
    },

    /// Two slides of a document share an id
    #[error("Slide id {id} appears more than once")]
    DuplicateSlideId {
        /// The repeated id.
        id: SlideId,
    },

    /// Two elements of one slide share an id
    #[error("Element id {id} appears more than once on slide {slide}")]
    DuplicateElementId {
        /// The slide holding the repeated id.
        slide: SlideId,
        /// The repeated id.
        id: ElementId,
    },
}

/// Main error type for SlideKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Document error
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this error reports a missing slide or element
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::Document(DocumentError::SlideNotFound { .. })
                | Error::Document(DocumentError::ElementNotFound { .. })
        )
    }

    /// Check if this is a document error
    pub fn is_document_error(&self) -> bool {
        matches!(self, Error::Document(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
