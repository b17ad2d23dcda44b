//! Padded layout: every child fills the container, inset by one padding unit.

use crate::element::Element;
use crate::geometry::{Position, Size};
use crate::{Layout, LayoutContext};

/// Like [`MaxLayout`](crate::MaxLayout) with a padding unit of inset on every side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaddedLayout;

impl PaddedLayout {
    pub fn new() -> Self {
        Self
    }
}

impl Layout for PaddedLayout {
    fn layout(&mut self, elements: &mut [Box<dyn Element>], size: Size, ctx: &LayoutContext) {
        let padding = ctx.padding;
        let inner = size.subtract_width_height(2.0 * padding, 2.0 * padding);
        let position = Position::new(padding, padding);
        for child in elements.iter_mut().filter(|child| child.visible()) {
            child.resize(inner);
            child.move_to(position);
        }
    }

    fn min_size(&self, elements: &[Box<dyn Element>], ctx: &LayoutContext) -> Size {
        let padding = ctx.padding;
        crate::visible_min_size(elements).add_width_height(2.0 * padding, 2.0 * padding)
    }

    fn name(&self) -> &'static str {
        "padded"
    }
}
