//! Grid wrap layout: fixed-size cells that reflow to the available width.
//!
//! Unlike the other strategies this one carries state between calls. The
//! number of rows depends on how many columns fit, which is only known once a
//! width is supplied to [`Layout::layout`]. [`Layout::min_size`] reports the
//! height of the rows produced by the most recent layout pass; before the
//! first pass it assumes a single row.
//!
//! Callers that size a parent from this layout should therefore run a layout
//! pass at the width of interest before trusting the minimum height.
//!
//! A row is counted each time the cursor wraps past the first cell, so a
//! completely filled last row with two or more columns reserves room for one
//! more empty row below it.

use tracing::{debug, trace};

use crate::element::Element;
use crate::geometry::{Position, Size};
use crate::{Layout, LayoutContext};

/// Lays children out in rows of equally sized cells, wrapping as needed.
#[derive(Debug, Clone, PartialEq)]
pub struct GridWrapLayout {
    cell_size: Size,
    col_count: usize,
    row_count: usize,
}

impl GridWrapLayout {
    pub fn new(cell_size: Size) -> Self {
        Self {
            cell_size,
            col_count: 1,
            row_count: 1,
        }
    }

    /// The size every child is given.
    pub fn cell_size(&self) -> Size {
        self.cell_size
    }

    /// Columns used by the last layout pass.
    pub fn col_count(&self) -> usize {
        self.col_count
    }

    /// Rows used by the last layout pass.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    fn columns_for(&self, width: f32, padding: f32) -> usize {
        let stride = self.cell_size.width + padding;
        if width <= self.cell_size.width || stride <= 0.0 {
            return 1;
        }
        (((width + padding) / stride).floor() as usize).max(1)
    }
}

impl Layout for GridWrapLayout {
    fn layout(&mut self, elements: &mut [Box<dyn Element>], size: Size, ctx: &LayoutContext) {
        let padding = ctx.padding;
        self.col_count = self.columns_for(size.width, padding);
        self.row_count = 1;

        let (mut x, mut y) = (0.0f32, 0.0f32);
        let mut placed = 0usize;
        for child in elements.iter_mut().filter(|child| child.visible()) {
            trace!(x, y, "grid wrap cell");
            child.move_to(Position::new(x, y));
            child.resize(self.cell_size);

            placed += 1;
            if placed % self.col_count == 0 {
                x = 0.0;
                y += self.cell_size.height + padding;
                // every wrap after the first cell opens a row, even a trailing one
                if placed > 1 {
                    self.row_count += 1;
                }
            } else {
                x += self.cell_size.width + padding;
            }
        }

        debug!(
            width = size.width,
            cols = self.col_count,
            rows = self.row_count,
            "grid wrap layout"
        );
    }

    fn min_size(&self, _elements: &[Box<dyn Element>], ctx: &LayoutContext) -> Size {
        let rows = self.row_count as f32;
        Size::new(
            self.cell_size.width,
            self.cell_size.height * rows + (rows - 1.0) * ctx.padding,
        )
    }

    fn name(&self) -> &'static str {
        "grid-wrap"
    }
}
