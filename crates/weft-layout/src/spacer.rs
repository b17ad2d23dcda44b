//! Flexible empty space for box layouts.

use crate::element::{Element, SpacerObject};
use crate::geometry::{Position, Size};

/// An invisible element that soaks up free space in a box layout.
///
/// A spacer expands along every axis it is not fixed on. Its minimum size is
/// always zero, so it never makes a container larger.
#[derive(Debug, Clone, Default)]
pub struct Spacer {
    /// Don't expand when stacked horizontally.
    pub fix_horizontal: bool,
    /// Don't expand when stacked vertically.
    pub fix_vertical: bool,

    size: Size,
    position: Position,
    hidden: bool,
}

impl Spacer {
    /// A spacer that expands in both directions.
    pub fn new() -> Self {
        Self::default()
    }

    /// A spacer that only expands inside horizontal boxes.
    pub fn horizontal() -> Self {
        Self {
            fix_vertical: true,
            ..Self::default()
        }
    }

    /// A spacer that only expands inside vertical boxes.
    pub fn vertical() -> Self {
        Self {
            fix_horizontal: true,
            ..Self::default()
        }
    }
}

impl SpacerObject for Spacer {
    fn expand_horizontal(&self) -> bool {
        !self.fix_horizontal
    }

    fn expand_vertical(&self) -> bool {
        !self.fix_vertical
    }
}

impl Element for Spacer {
    fn min_size(&self) -> Size {
        Size::zero()
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn move_to(&mut self, position: Position) {
        self.position = position;
    }

    fn visible(&self) -> bool {
        !self.hidden
    }

    fn size(&self) -> Size {
        self.size
    }

    fn position(&self) -> Position {
        self.position
    }

    fn show(&mut self) {
        self.hidden = false;
    }

    fn hide(&mut self) {
        self.hidden = true;
    }

    fn as_spacer(&self) -> Option<&dyn SpacerObject> {
        Some(self)
    }
}
