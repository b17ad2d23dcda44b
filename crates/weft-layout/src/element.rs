//! The element contract shared by everything that takes part in layout.
//!
//! Layout strategies only talk to children through [`Element`]; they know
//! nothing about concrete widget types. Two classification hooks let a strategy
//! recognise the few element kinds it treats specially: spacers (box layout)
//! and plain text labels (form layout).

use crate::geometry::{Position, Size};

/// Anything that can be measured, sized and positioned by a layout.
pub trait Element {
    /// The smallest size this element can be drawn at without clipping.
    fn min_size(&self) -> Size;

    /// Set the element's size. Called by layouts only.
    fn resize(&mut self, size: Size);

    /// Set the element's position relative to its parent. Called by layouts only.
    fn move_to(&mut self, position: Position);

    /// Whether the element takes part in layout.
    fn visible(&self) -> bool;

    /// The size last set by [`Element::resize`].
    fn size(&self) -> Size;

    /// The position last set by [`Element::move_to`].
    fn position(&self) -> Position;

    fn show(&mut self);

    fn hide(&mut self);

    /// Redraw in the current state. Containers re-run their layout here.
    fn refresh(&mut self) {}

    /// Spacer flags, if this element is a spacer.
    fn as_spacer(&self) -> Option<&dyn SpacerObject> {
        None
    }

    /// Whether this element is a plain run of text.
    ///
    /// Form layout insets text labels so they line up with the content column.
    fn is_text(&self) -> bool {
        false
    }

    /// Nested children, for elements that contain others.
    fn children(&self) -> &[Box<dyn Element>] {
        &[]
    }
}

/// Flags advertised by elements that soak up free space in a box layout.
pub trait SpacerObject {
    fn expand_horizontal(&self) -> bool;
    fn expand_vertical(&self) -> bool;
}

/// A content-free element with a caller-chosen minimum size.
///
/// Useful as a stand-in for widgets whose rendering lives elsewhere.
#[derive(Debug, Clone, Default)]
pub struct Placeholder {
    min: Size,
    size: Size,
    position: Position,
    hidden: bool,
}

impl Placeholder {
    pub fn new(min: Size) -> Self {
        Self {
            min,
            ..Default::default()
        }
    }

    pub fn set_min_size(&mut self, min: Size) {
        self.min = min;
    }
}

impl Element for Placeholder {
    fn min_size(&self) -> Size {
        self.min
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
}

/// A plain text element.
///
/// Text measurement belongs to the rendering backend, so the caller supplies
/// the measured minimum size.
#[derive(Debug, Clone, Default)]
pub struct TextLabel {
    text: String,
    min: Size,
    size: Size,
    position: Position,
    hidden: bool,
}

impl TextLabel {
    pub fn new(text: impl Into<String>, measured: Size) -> Self {
        Self {
            text: text.into(),
            min: measured,
            ..Default::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text along with its new measured size.
    pub fn set_text(&mut self, text: impl Into<String>, measured: Size) {
        self.text = text.into();
        self.min = measured;
    }
}

impl Element for TextLabel {
    fn min_size(&self) -> Size {
        self.min
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

    fn is_text(&self) -> bool {
        true
    }
}
