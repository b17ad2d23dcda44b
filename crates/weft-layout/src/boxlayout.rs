//! Box layout: a single horizontal or vertical stack.
//!
//! The algorithm:
//! 1. Skip invisible children entirely
//! 2. Split the rest into fixed children and spacers that expand along the stack axis
//! 3. Sum the fixed children's minimum extents along the stack axis
//! 4. Share whatever is left over (after padding gaps) equally between the spacers
//! 5. Walk the children in order, advancing a cursor along the stack axis
//!
//! Fixed children keep their minimum extent on the stack axis and are
//! stretched to the container on the cross axis. There is no shrinking: when
//! the container is smaller than the minimum, children overflow.

use tracing::{debug, trace};

use crate::element::Element;
use crate::geometry::{Position, Size};
use crate::{Layout, LayoutContext};

/// The stacking direction of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Get the perpendicular axis.
    pub fn cross(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Extent of `size` along this axis.
    pub fn extent(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// Build a size from extents along this axis and its cross axis.
    pub fn size(self, main: f32, cross: f32) -> Size {
        match self {
            Axis::Horizontal => Size::new(main, cross),
            Axis::Vertical => Size::new(cross, main),
        }
    }

    /// Build a position from offsets along this axis and its cross axis.
    pub fn position(self, main: f32, cross: f32) -> Position {
        match self {
            Axis::Horizontal => Position::new(main, cross),
            Axis::Vertical => Position::new(cross, main),
        }
    }
}

/// Stacks children left to right or top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxLayout {
    axis: Axis,
}

impl BoxLayout {
    pub fn new(axis: Axis) -> Self {
        Self { axis }
    }

    /// Children placed left to right, each at full height.
    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// Children placed top to bottom, each at full width.
    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Whether `child` is a visible spacer that expands along our axis.
    fn is_spacer(&self, child: &dyn Element) -> bool {
        // invisible spacers don't take part
        if !child.visible() {
            return false;
        }
        child.as_spacer().is_some_and(|spacer| match self.axis {
            Axis::Horizontal => spacer.expand_horizontal(),
            Axis::Vertical => spacer.expand_vertical(),
        })
    }
}

impl Layout for BoxLayout {
    fn layout(&mut self, elements: &mut [Box<dyn Element>], size: Size, ctx: &LayoutContext) {
        let padding = ctx.padding;
        let axis = self.axis;

        let mut visible = 0usize;
        let mut spacers = 0usize;
        let mut total = 0.0f32;
        for child in elements.iter() {
            if !child.visible() {
                continue;
            }
            visible += 1;
            if self.is_spacer(child.as_ref()) {
                spacers += 1;
                continue;
            }
            total += axis.extent(child.min_size());
        }

        let fixed = visible - spacers;
        let gaps = fixed.saturating_sub(1) as f32;
        let extra = axis.extent(size) - total - padding * gaps;
        let extra_cell = if spacers > 0 && extra > 0.0 {
            extra / spacers as f32
        } else {
            0.0
        };

        debug!(
            axis = ?axis,
            width = size.width,
            height = size.height,
            visible,
            spacers,
            extra,
            "box layout"
        );

        let cross = axis.cross().extent(size);
        let mut cursor = 0.0f32;
        for child in elements.iter_mut() {
            if !child.visible() {
                continue;
            }
            if self.is_spacer(child.as_ref()) {
                cursor += extra_cell;
                continue;
            }

            let main = axis.extent(child.min_size());
            let position = axis.position(cursor, 0.0);
            trace!(x = position.x, y = position.y, main, cross, "box child");

            child.move_to(position);
            child.resize(axis.size(main, cross));
            cursor += padding + main;
        }
    }

    fn min_size(&self, elements: &[Box<dyn Element>], ctx: &LayoutContext) -> Size {
        let axis = self.axis;
        let mut main = 0.0f32;
        let mut cross = 0.0f32;
        let mut add_padding = false;

        for child in elements {
            if !child.visible() || self.is_spacer(child.as_ref()) {
                continue;
            }

            let min = child.min_size();
            cross = cross.max(axis.cross().extent(min));
            main += axis.extent(min);
            if add_padding {
                main += ctx.padding;
            }
            add_padding = true;
        }

        axis.size(main, cross)
    }

    fn name(&self) -> &'static str {
        match self.axis {
            Axis::Horizontal => "hbox",
            Axis::Vertical => "vbox",
        }
    }
}
