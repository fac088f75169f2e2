use super::element::SlideElement;
use crate::ids::{ElementId, SlideId};
use serde::{Deserialize, Serialize};

/// Slide fill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Background {
    /// Flat colour
    Color { value: String },
    /// Linear gradient between two colours, angle in degrees
    Gradient { from: String, to: String, angle: f64 },
    /// Picture stretched over the slide
    Image { url: String },
}

impl Background {
    pub fn color(value: impl Into<String>) -> Self {
        Background::Color {
            value: value.into(),
        }
    }
}

/// One slide of a presentation
///
/// Elements are stored back to front: the last element is drawn on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: SlideId,
    #[serde(default)]
    pub elements: Vec<SlideElement>,
    pub background: Background,
}

impl Slide {
    /// Creates an empty slide with a fresh id
    pub fn new(background: Background) -> Self {
        Self {
            id: SlideId::new(),
            elements: Vec::new(),
            background,
        }
    }

    /// Gets a reference to an element by id.
    pub fn element(&self, id: ElementId) -> Option<&SlideElement> {
        self.elements.iter().find(|el| el.id == id)
    }

    /// Gets a mutable reference to an element by id.
    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut SlideElement> {
        self.elements.iter_mut().find(|el| el.id == id)
    }

    /// Position of an element in the z-order.
    pub fn element_index(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|el| el.id == id)
    }

    pub fn contains_element(&self, id: ElementId) -> bool {
        self.element_index(id).is_some()
    }

    /// Appends an element on top of the others.
    pub fn push_element(&mut self, element: SlideElement) {
        debug_assert!(
            !self.contains_element(element.id),
            "duplicate element id {} on slide {}",
            element.id,
            self.id
        );
        self.elements.push(element);
    }

    /// Removes and returns an element.
    pub fn remove_element(&mut self, id: ElementId) -> Option<SlideElement> {
        let index = self.element_index(id)?;
        Some(self.elements.remove(index))
    }

    /// Deep copy under a fresh slide id; every element gets a fresh id too
    /// and the z-order is preserved.
    pub fn duplicate(&self) -> Self {
        Self {
            id: SlideId::new(),
            elements: self
                .elements
                .iter()
                .map(|el| SlideElement {
                    id: ElementId::new(),
                    ..el.clone()
                })
                .collect(),
            background: self.background.clone(),
        }
    }

    pub fn element_ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.elements.iter().map(|el| el.id)
    }
}
