//! Max layout: every child fills the whole container.

use crate::element::Element;
use crate::geometry::{Position, Size};
use crate::{Layout, LayoutContext};

/// Stacks every child on top of the others at the container's full size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaxLayout;

impl MaxLayout {
    pub fn new() -> Self {
        Self
    }
}

impl Layout for MaxLayout {
    fn layout(&mut self, elements: &mut [Box<dyn Element>], size: Size, _ctx: &LayoutContext) {
        for child in elements.iter_mut().filter(|child| child.visible()) {
            child.resize(size);
            child.move_to(Position::zero());
        }
    }

    fn min_size(&self, elements: &[Box<dyn Element>], _ctx: &LayoutContext) -> Size {
        crate::visible_min_size(elements)
    }

    fn name(&self) -> &'static str {
        "max"
    }
}
