//! Geometry primitives for positioned elements.
//!
//! Coordinates are slide units with the origin at the top-left corner and
//! `y` growing downwards.

use serde::{Deserialize, Serialize};

/// Top-left corner of an element
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Position {
    /// Create a new position
    pub fn new(x: f64, y: f64) -> Self {
        debug_assert!(
            x.is_finite() && y.is_finite(),
            "Position must be finite: x={x}, y={y}"
        );
        Self { x, y }
    }

    /// Return this position moved by `offset`
    pub fn translated(self, offset: Offset) -> Self {
        Self {
            x: self.x + offset.dx,
            y: self.y + offset.dy,
        }
    }
}

/// Width and height of an element
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl Size {
    /// Create a new size
    pub fn new(width: f64, height: f64) -> Self {
        debug_assert!(
            width.is_finite() && height.is_finite(),
            "Size must be finite: width={width}, height={height}"
        );
        Self { width, height }
    }
}

/// A displacement applied to positions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    /// Horizontal displacement
    pub dx: f64,
    /// Vertical displacement
    pub dy: f64,
}

impl Offset {
    /// The nudge applied to duplicated and pasted elements
    pub const NUDGE: Offset = Offset { dx: 20.0, dy: 20.0 };

    /// Create a new offset
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// True when applying this offset moves a position
    pub fn is_nonzero(&self) -> bool {
        self.dx != 0.0 || self.dy != 0.0
    }
}

impl Default for Offset {
    fn default() -> Self {
        Self::NUDGE
    }
}
