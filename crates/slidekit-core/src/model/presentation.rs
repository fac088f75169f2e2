use super::slide::{Background, Slide};
use crate::error::{DocumentError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const DEFAULT_BACKGROUND: &str = "#ffffff";

fn default_background_color() -> String {
    DEFAULT_BACKGROUND.to_string()
}

/// Presentation-wide styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Background colour given to newly added slides
    #[serde(default = "default_background_color")]
    pub background_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
}

impl Theme {
    pub fn with_background(background_color: impl Into<String>) -> Self {
        Self {
            background_color: background_color.into(),
            ..Self::default()
        }
    }

    /// Background for a slide created under this theme
    pub fn slide_background(&self) -> Background {
        Background::color(self.background_color.clone())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background_color: default_background_color(),
            font_family: None,
            accent_color: None,
        }
    }
}

/// Root document exchanged with the host application
///
/// The backend id and title are carried through editing untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl Presentation {
    /// Create an empty presentation
    pub fn new(title: impl Into<String>, theme: Theme) -> Self {
        Self {
            id: None,
            title: title.into(),
            theme,
            slides: Vec::new(),
        }
    }

    /// Add a slide at the end
    pub fn with_slide(mut self, slide: Slide) -> Self {
        self.slides.push(slide);
        self
    }

    /// Parse a presentation from its JSON wire form
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to the JSON wire form
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Total number of elements over all slides
    pub fn element_count(&self) -> usize {
        self.slides.iter().map(|s| s.elements.len()).sum()
    }

    /// Check that slide ids are unique and that element ids are unique
    /// within each slide
    pub fn validate(&self) -> Result<()> {
        let mut slide_ids = HashSet::with_capacity(self.slides.len());
        for slide in &self.slides {
            if !slide_ids.insert(slide.id) {
                return Err(DocumentError::DuplicateSlideId { id: slide.id }.into());
            }

            let mut element_ids = HashSet::with_capacity(slide.elements.len());
            for id in slide.element_ids() {
                if !element_ids.insert(id) {
                    return Err(DocumentError::DuplicateElementId {
                        slide: slide.id,
                        id,
                    }
                    .into());
                }
            }
        }
        Ok(())
    }
}
