use crate::geometry::{Offset, Position, Size};
use crate::ids::ElementId;
use serde::{Deserialize, Serialize};

const DEFAULT_FONT_SIZE: f64 = 24.0;
const DEFAULT_TEXT_COLOR: &str = "#000000";
const DEFAULT_SHAPE_FILL: &str = "#cccccc";

fn default_font_size() -> f64 {
    DEFAULT_FONT_SIZE
}

fn default_text_color() -> String {
    DEFAULT_TEXT_COLOR.to_string()
}

fn default_shape_fill() -> String {
    DEFAULT_SHAPE_FILL.to_string()
}

/// Text box content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    pub text: String,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default = "default_text_color")]
    pub color: String,
}

/// Picture content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageContent {
    /// Image source, usually a URL handed out by the backend
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

/// Geometric primitive kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    Triangle,
    Line,
}

/// Vector shape content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeContent {
    pub kind: ShapeKind,
    #[serde(default = "default_shape_fill")]
    pub fill: String,
    #[serde(default)]
    pub stroke: Option<String>,
}

/// What an element shows. The set of variants is closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementContent {
    Text(TextContent),
    Image(ImageContent),
    Shape(ShapeContent),
}

impl ElementContent {
    /// Short name of the variant, matching the JSON `type` tag
    pub fn kind_name(&self) -> &'static str {
        match self {
            ElementContent::Text(_) => "text",
            ElementContent::Image(_) => "image",
            ElementContent::Shape(_) => "shape",
        }
    }
}

/// A positioned object on a slide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideElement {
    pub id: ElementId,
    pub position: Position,
    #[serde(default)]
    pub size: Size,
    /// Clockwise rotation in degrees
    #[serde(default)]
    pub rotation: f64,
    #[serde(flatten)]
    pub content: ElementContent,
}

impl SlideElement {
    /// Materialize a new element under the given id
    pub fn from_new(id: ElementId, element: NewElement) -> Self {
        Self {
            id,
            position: element.position,
            size: element.size,
            rotation: element.rotation,
            content: element.content,
        }
    }

    /// Copy this element under a fresh id, moved by `offset`
    pub fn duplicate_with_offset(&self, offset: Offset) -> Self {
        Self {
            id: ElementId::new(),
            position: self.position.translated(offset),
            ..self.clone()
        }
    }

    /// Merge the fields set in `patch` into this element
    pub fn apply_patch(&mut self, patch: ElementPatch) {
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(size) = patch.size {
            self.size = size;
        }
        if let Some(rotation) = patch.rotation {
            self.rotation = rotation;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
    }
}

/// An element that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewElement {
    pub position: Position,
    #[serde(default)]
    pub size: Size,
    #[serde(default)]
    pub rotation: f64,
    #[serde(flatten)]
    pub content: ElementContent,
}

impl NewElement {
    /// Create an element draft with the given content
    pub fn new(content: ElementContent, position: Position, size: Size) -> Self {
        Self {
            position,
            size,
            rotation: 0.0,
            content,
        }
    }

    /// A text box with default font settings
    pub fn text(text: impl Into<String>, position: Position) -> Self {
        Self::new(
            ElementContent::Text(TextContent {
                text: text.into(),
                font_size: DEFAULT_FONT_SIZE,
                color: default_text_color(),
            }),
            position,
            Size::new(320.0, 48.0),
        )
    }

    /// A picture
    pub fn image(src: impl Into<String>, position: Position, size: Size) -> Self {
        Self::new(
            ElementContent::Image(ImageContent {
                src: src.into(),
                alt: String::new(),
            }),
            position,
            size,
        )
    }

    /// A filled shape without outline
    pub fn shape(kind: ShapeKind, position: Position, size: Size) -> Self {
        Self::new(
            ElementContent::Shape(ShapeContent {
                kind,
                fill: default_shape_fill(),
                stroke: None,
            }),
            position,
            size,
        )
    }

    /// Set the rotation in degrees
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }
}

/// Partial update of an element; `None` fields are left untouched
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ElementContent>,
}

impl ElementPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn rotation(mut self, rotation: f64) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn content(mut self, content: ElementContent) -> Self {
        self.content = Some(content);
        self
    }

    /// True when the patch would not change anything
    pub fn is_empty(&self) -> bool {
        self.position.is_none()
            && self.size.is_none()
            && self.rotation.is_none()
            && self.content.is_none()
    }
}
