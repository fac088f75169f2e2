//! Editor document store.
//! Owns the document being edited and routes every change through history.
//!
//! This module is split into submodules by operation group:
//! - `slides`: Add, delete, duplicate, reorder, restyle slides
//! - `elements`: Add, update, delete, duplicate elements on the selected slide
//! - `selection`: Slide and element selection (no history)
//! - `clipboard`: Copy, cut, paste
//! - `history`: Undo, redo, saved-state tracking
//! - `query`: Read-only accessors

mod clipboard;
mod elements;
mod history;
mod query;
mod selection;
mod slides;

use crate::events::{StoreEvent, StoreListener, Subscribers, SubscriptionId};
use crate::history::History;
use slidekit_core::{
    DocumentError, ElementId, Presentation, Result, Slide, SlideElement, SlideId, Theme,
};
use slidekit_settings::{ConfigResult, EditorConfig};
use std::collections::HashSet;
use std::sync::Arc;

/// The state recorded at one point in history
///
/// Slides are shared with the live document and copied on write, so a
/// snapshot never changes after it is taken.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub slides: Vec<Arc<Slide>>,
    pub selected_slide_id: Option<SlideId>,
}

/// Editor state for UI integration
#[derive(Debug)]
pub struct EditorStore {
    config: EditorConfig,
    presentation_id: Option<String>,
    title: String,
    theme: Theme,
    slides: Vec<Arc<Slide>>,
    selected_slide_id: Option<SlideId>,
    selected_element_ids: HashSet<ElementId>,
    clipboard: Vec<SlideElement>,
    history: History<Snapshot>,
    subscribers: Subscribers,
}

impl EditorStore {
    /// Creates an empty store with default settings.
    pub fn new() -> Self {
        Self::from_valid_config(EditorConfig::default())
    }

    /// Creates an empty store with the given settings.
    ///
    /// Fails when the settings do not pass [`EditorConfig::validate`].
    pub fn with_config(config: EditorConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: EditorConfig) -> Self {
        let theme = Theme::with_background(config.default_background.clone());
        Self {
            history: History::new(config.history_limit),
            config,
            presentation_id: None,
            title: String::new(),
            theme,
            slides: Vec::new(),
            selected_slide_id: None,
            selected_element_ids: HashSet::new(),
            clipboard: Vec::new(),
            subscribers: Subscribers::default(),
        }
    }

    /// Replaces the whole document.
    ///
    /// The first slide becomes selected, history is reset to a single
    /// baseline snapshot, and the loaded state counts as saved. A document
    /// that repeats a slide id, or an element id within one slide, is
    /// rejected and the current document stays in place.
    pub fn set_presentation(&mut self, presentation: Presentation) -> Result<()> {
        if let Err(err) = presentation.validate() {
            tracing::warn!(error = %err, "Rejected presentation");
            return Err(err);
        }

        let Presentation {
            id,
            title,
            theme,
            slides,
        } = presentation;

        self.presentation_id = id;
        self.title = title;
        self.theme = theme;
        self.slides = slides.into_iter().map(Arc::new).collect();
        self.selected_slide_id = self.slides.first().map(|slide| slide.id);
        self.selected_element_ids.clear();

        let baseline = self.snapshot();
        self.history.clear();
        self.history.record(baseline);
        self.history.mark_saved();

        tracing::info!(
            slides = self.slides.len(),
            title = %self.title,
            "Loaded presentation"
        );
        self.subscribers.emit(StoreEvent::PresentationLoaded);
        Ok(())
    }

    /// The current document as an owned value, ready to hand back to the host.
    pub fn presentation(&self) -> Presentation {
        Presentation {
            id: self.presentation_id.clone(),
            title: self.title.clone(),
            theme: self.theme.clone(),
            slides: self.slides.iter().map(|slide| (**slide).clone()).collect(),
        }
    }

    /// Registers a change handler.
    pub fn subscribe(&mut self, handler: impl Fn(&StoreEvent) + 'static) -> SubscriptionId {
        let handler: StoreListener = Box::new(handler);
        self.subscribers.subscribe(handler)
    }

    /// Removes a change handler; returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            slides: self.slides.clone(),
            selected_slide_id: self.selected_slide_id,
        }
    }

    /// Records the current state as a new history entry and notifies
    /// subscribers. Called exactly once by every successful mutation.
    fn commit(&mut self, action: &'static str) {
        let snapshot = self.snapshot();
        let evicted = self.history.record(snapshot);
        tracing::debug!(
            action,
            history_len = self.history.len(),
            evicted,
            "Committed document change"
        );
        self.subscribers.emit(StoreEvent::SlidesChanged);
    }

    fn emit(&self, event: StoreEvent) {
        self.subscribers.emit(event);
    }

    fn require_slide_index(&self, id: SlideId) -> Result<usize> {
        self.slide_index(id)
            .ok_or_else(|| DocumentError::SlideNotFound { id }.into())
    }

    fn selected_slide_index(&self) -> Result<usize> {
        let id = self
            .selected_slide_id
            .ok_or(DocumentError::NoSlideSelected)?;
        self.require_slide_index(id)
    }

    /// Writable access to a slide; clones it first if history still shares it.
    fn slide_mut(&mut self, index: usize) -> &mut Slide {
        Arc::make_mut(&mut self.slides[index])
    }

    fn set_selected_slide(&mut self, id: Option<SlideId>) {
        self.selected_slide_id = id;
        self.selected_element_ids.clear();
    }
}

impl Default for EditorStore {
    fn default() -> Self {
        Self::new()
    }
}
