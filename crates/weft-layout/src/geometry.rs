//! Geometric primitives shared by every layout strategy.
//!
//! All values are in device-independent units. Positions are relative to the
//! top-left corner of the immediate parent.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Types that can act as a two-component coordinate vector.
pub trait Vector2 {
    /// The X and Y (or width and height) components.
    fn components(&self) -> (f32, f32);

    /// Whether both components are zero.
    fn is_zero(&self) -> bool {
        let (x, y) = self.components();
        x == 0.0 && y == 0.0
    }
}

/// A movement along the X and Y axes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Delta {
    pub dx: f32,
    pub dy: f32,
}

impl Delta {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

impl Vector2 for Delta {
    fn components(&self) -> (f32, f32) {
        (self.dx, self.dy)
    }
}

/// A coordinate relative to the parent element's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Distance from the parent's left edge.
    pub x: f32,
    /// Distance from the parent's top edge.
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Offset this position by any vector.
    pub fn add(self, v: impl Vector2) -> Self {
        let (x, y) = v.components();
        Self::new(self.x + x, self.y + y)
    }

    pub fn add_xy(self, x: f32, y: f32) -> Self {
        Self::new(self.x + x, self.y + y)
    }

    /// Offset this position by the negation of any vector.
    pub fn subtract(self, v: impl Vector2) -> Self {
        let (x, y) = v.components();
        Self::new(self.x - x, self.y - y)
    }

    pub fn subtract_xy(self, x: f32, y: f32) -> Self {
        Self::new(self.x - x, self.y - y)
    }
}

impl Vector2 for Position {
    fn components(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::add(self, rhs)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        self.subtract(rhs)
    }
}

/// Something with a width and a height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Grow this size by any vector.
    pub fn add(self, v: impl Vector2) -> Self {
        let (w, h) = v.components();
        Self::new(self.width + w, self.height + h)
    }

    pub fn add_width_height(self, width: f32, height: f32) -> Self {
        Self::new(self.width + width, self.height + height)
    }

    /// Shrink this size by any vector. The result may be negative.
    pub fn subtract(self, v: impl Vector2) -> Self {
        let (w, h) = v.components();
        Self::new(self.width - w, self.height - h)
    }

    pub fn subtract_width_height(self, width: f32, height: f32) -> Self {
        Self::new(self.width - width, self.height - height)
    }

    /// Component-wise maximum.
    pub fn max(self, v: impl Vector2) -> Self {
        let (w, h) = v.components();
        Self::new(max(self.width, w), max(self.height, h))
    }

    /// Component-wise minimum.
    pub fn min(self, v: impl Vector2) -> Self {
        let (w, h) = v.components();
        Self::new(min(self.width, w), min(self.height, h))
    }
}

impl Vector2 for Size {
    fn components(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

impl Add for Size {
    type Output = Size;

    fn add(self, rhs: Size) -> Size {
        Size::add(self, rhs)
    }
}

impl Sub for Size {
    type Output = Size;

    fn sub(self, rhs: Size) -> Size {
        self.subtract(rhs)
    }
}

/// The larger of two values.
#[inline]
pub fn max(a: f32, b: f32) -> f32 {
    if a > b {
        a
    } else {
        b
    }
}

/// The smaller of two values.
#[inline]
pub fn min(a: f32, b: f32) -> f32 {
    if a < b {
        a
    } else {
        b
    }
}
