//! Border layout: up to four children pinned to the edges around a center.
//!
//! Edge children are referred to by their index in the element sequence.
//! Every visible child that is not an edge is a center child; all center
//! children are maximised into the same middle rectangle and may overlap.
//!
//! Top and bottom span the full width at their minimum height. Left and right
//! fill the band between them at their minimum width. Every present edge is
//! separated from the center by one padding unit.

use tracing::{debug, trace};

use crate::element::Element;
use crate::geometry::{Position, Size};
use crate::{Layout, LayoutContext};

/// Indices of the edge children within the container's elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderSlots {
    pub top: Option<usize>,
    pub bottom: Option<usize>,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

impl BorderSlots {
    /// Whether `index` is one of the edge children.
    pub fn contains(&self, index: usize) -> bool {
        [self.top, self.bottom, self.left, self.right].contains(&Some(index))
    }

    fn slots_mut(&mut self) -> [&mut Option<usize>; 4] {
        [
            &mut self.top,
            &mut self.bottom,
            &mut self.left,
            &mut self.right,
        ]
    }
}

/// Arranges edge children around a flexible center region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderLayout {
    slots: BorderSlots,
}

impl BorderLayout {
    pub fn new(slots: BorderSlots) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> BorderSlots {
        self.slots
    }

    /// The minimum size of the edge child in `slot`, if it exists and is visible.
    fn edge_min(elements: &[Box<dyn Element>], slot: Option<usize>) -> Option<Size> {
        let child = elements.get(slot?)?;
        child.visible().then(|| child.min_size())
    }
}

impl Layout for BorderLayout {
    fn layout(&mut self, elements: &mut [Box<dyn Element>], size: Size, ctx: &LayoutContext) {
        let padding = ctx.padding;
        let (mut top_height, mut bottom_height) = (0.0f32, 0.0f32);
        let (mut left_width, mut right_width) = (0.0f32, 0.0f32);

        if let Some(min) = Self::edge_min(elements, self.slots.top) {
            if let Some(top) = self.slots.top.and_then(|i| elements.get_mut(i)) {
                top.resize(Size::new(size.width, min.height));
                top.move_to(Position::zero());
            }
            top_height = min.height + padding;
        }
        if let Some(min) = Self::edge_min(elements, self.slots.bottom) {
            if let Some(bottom) = self.slots.bottom.and_then(|i| elements.get_mut(i)) {
                bottom.resize(Size::new(size.width, min.height));
                bottom.move_to(Position::new(0.0, size.height - min.height));
            }
            bottom_height = min.height + padding;
        }

        let band = size.height - top_height - bottom_height;
        if let Some(min) = Self::edge_min(elements, self.slots.left) {
            if let Some(left) = self.slots.left.and_then(|i| elements.get_mut(i)) {
                left.resize(Size::new(min.width, band));
                left.move_to(Position::new(0.0, top_height));
            }
            left_width = min.width + padding;
        }
        if let Some(min) = Self::edge_min(elements, self.slots.right) {
            if let Some(right) = self.slots.right.and_then(|i| elements.get_mut(i)) {
                right.resize(Size::new(min.width, band));
                right.move_to(Position::new(size.width - min.width, top_height));
            }
            right_width = min.width + padding;
        }

        let middle_size = Size::new(size.width - left_width - right_width, band);
        let middle_pos = Position::new(left_width, top_height);
        debug!(
            x = middle_pos.x,
            y = middle_pos.y,
            width = middle_size.width,
            height = middle_size.height,
            "border layout center"
        );

        for (i, child) in elements.iter_mut().enumerate() {
            if !child.visible() || self.slots.contains(i) {
                continue;
            }
            trace!(index = i, "border center child");
            child.resize(middle_size);
            child.move_to(middle_pos);
        }
    }

    fn min_size(&self, elements: &[Box<dyn Element>], ctx: &LayoutContext) -> Size {
        let padding = ctx.padding;
        let mut min = elements
            .iter()
            .enumerate()
            .filter(|(i, child)| child.visible() && !self.slots.contains(*i))
            .fold(Size::zero(), |acc, (_, child)| acc.max(child.min_size()));

        for slot in [self.slots.left, self.slots.right] {
            if let Some(edge) = Self::edge_min(elements, slot) {
                min = Size::new(
                    min.width + edge.width + padding,
                    min.height.max(edge.height),
                );
            }
        }
        for slot in [self.slots.top, self.slots.bottom] {
            if let Some(edge) = Self::edge_min(elements, slot) {
                min = Size::new(
                    min.width.max(edge.width),
                    min.height + edge.height + padding,
                );
            }
        }

        min
    }

    fn element_removed(&mut self, index: usize) {
        for slot in self.slots.slots_mut() {
            match *slot {
                Some(i) if i == index => *slot = None,
                Some(i) if i > index => *slot = Some(i - 1),
                _ => {}
            }
        }
    }

    fn name(&self) -> &'static str {
        "border"
    }
}
