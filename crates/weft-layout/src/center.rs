//! Center layout: every child at its minimum size, centered in the container.

use tracing::trace;

use crate::element::Element;
use crate::geometry::{Position, Size};
use crate::{Layout, LayoutContext};

/// Centers each child independently; children may overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CenterLayout;

impl CenterLayout {
    pub fn new() -> Self {
        Self
    }
}

impl Layout for CenterLayout {
    fn layout(&mut self, elements: &mut [Box<dyn Element>], size: Size, _ctx: &LayoutContext) {
        for child in elements.iter_mut().filter(|child| child.visible()) {
            let min = child.min_size();
            let position = Position::new(
                (size.width - min.width) / 2.0,
                (size.height - min.height) / 2.0,
            );
            trace!(x = position.x, y = position.y, "centered child");
            child.resize(min);
            child.move_to(position);
        }
    }

    fn min_size(&self, elements: &[Box<dyn Element>], _ctx: &LayoutContext) -> Size {
        crate::visible_min_size(elements)
    }

    fn name(&self) -> &'static str {
        "center"
    }
}
