//! # SlideKit
//!
//! Client-side document store for a slide presentation editor: an ordered
//! list of slides holding positioned text, image, and shape elements, with
//! selection, a clipboard, and a bounded linear undo/redo history.
//!
//! ## Architecture
//!
//! SlideKit is organized as a workspace with multiple crates:
//!
//! 1. **slidekit-core** - Document model, identifiers, error types, JSON wire form
//! 2. **slidekit-settings** - Editor configuration (history depth, nudge offset)
//! 3. **slidekit-editor** - `EditorStore`, snapshot history, change events
//! 4. **slidekit** - This facade, re-exporting the public API
//!
//! The host application loads a [`Presentation`] into an [`EditorStore`],
//! drives it through the store's operations, and reads the edited document
//! back with [`EditorStore::presentation`].

pub use slidekit_core::{
    Background, DocumentError, ElementContent, ElementId, ElementPatch, Error, ImageContent,
    NewElement, Offset, Position, Presentation, Result, ShapeContent, ShapeKind, Size, Slide,
    SlideElement, SlideId, TextContent, Theme,
};

pub use slidekit_settings::{ConfigError, ConfigResult, EditorConfig};

pub use slidekit_editor::{EditorStore, History, Snapshot, StoreEvent, SubscriptionId};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    tracing::debug!(version = VERSION, build_date = BUILD_DATE, "Logging initialized");
    Ok(())
}
