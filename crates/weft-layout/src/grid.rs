//! # Grid Layout
//!
//! Uniform cells arranged in a fixed number of columns (or rows).
//!
//! ## Overview
//!
//! The number of rows follows from the number of visible children. Every
//! cell gets the same ideal size: the available space minus the padding gaps,
//! divided by the cell count along that axis.
//!
//! Cell edges are computed from the ideal size with [`leading_edge`] and
//! [`trailing_edge`]. Both round the *accumulated* offset rather than the cell
//! size, so adjacent cells always touch and the last cell ends exactly at the
//! container edge. A 100 unit row of three cells becomes 33, 34, 33.
//!
//! An adaptive grid uses its count as columns while the device is horizontal
//! and as rows while it is vertical.

use tracing::{debug, trace, warn};

use crate::element::Element;
use crate::geometry::{Position, Size};
use crate::{Layout, LayoutContext};

/// Leading (left or top) edge of the cell at `offset`.
pub fn leading_edge(cell: f64, offset: usize, padding: f32) -> f32 {
    let edge = (cell + f64::from(padding)) * offset as f64;
    edge.round() as f32
}

/// Trailing (right or bottom) edge of the cell at `offset`.
pub fn trailing_edge(cell: f64, offset: usize, padding: f32) -> f32 {
    leading_edge(cell, offset + 1, padding) - padding
}

/// A grid with a fixed number of columns or rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    count: usize,
    vertical: bool,
    adaptive: bool,
}

impl GridLayout {
    fn new(count: usize, vertical: bool, adaptive: bool) -> Self {
        let count = if count == 0 {
            warn!("grid created with zero columns/rows, using 1");
            1
        } else {
            count
        };
        Self {
            count,
            vertical,
            adaptive,
        }
    }

    /// `cols` columns; rows are added as needed.
    pub fn with_columns(cols: usize) -> Self {
        Self::new(cols, false, false)
    }

    /// `rows` rows; columns are added as needed.
    pub fn with_rows(rows: usize) -> Self {
        Self::new(rows, true, false)
    }

    /// `rowcols` columns on a horizontal device, `rowcols` rows on a vertical one.
    pub fn adaptive(rowcols: usize) -> Self {
        Self::new(rowcols, false, true)
    }

    /// The configured column (or row) count.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_adaptive(&self) -> bool {
        self.adaptive
    }

    /// Whether `count` is the number of columns for this pass.
    fn horizontal(&self, ctx: &LayoutContext) -> bool {
        if self.adaptive {
            return ctx.orientation.is_horizontal();
        }
        !self.vertical
    }

    /// Number of lines needed along the open-ended axis.
    fn count_lines(&self, elements: &[Box<dyn Element>]) -> usize {
        let visible = elements.iter().filter(|child| child.visible()).count();
        visible.div_ceil(self.count)
    }
}

impl Layout for GridLayout {
    fn layout(&mut self, elements: &mut [Box<dyn Element>], size: Size, ctx: &LayoutContext) {
        let lines = self.count_lines(elements);
        if lines == 0 {
            return;
        }

        let padding = ctx.padding;
        let horizontal = self.horizontal(ctx);
        let (cols, rows) = if horizontal {
            (self.count, lines)
        } else {
            (lines, self.count)
        };

        let pad_width = (cols - 1) as f32 * padding;
        let pad_height = (rows - 1) as f32 * padding;
        let cell_width = f64::from(size.width - pad_width) / cols as f64;
        let cell_height = f64::from(size.height - pad_height) / rows as f64;

        debug!(
            cols,
            rows,
            cell_width,
            cell_height,
            adaptive = self.adaptive,
            "grid layout"
        );

        let (mut row, mut col) = (0usize, 0usize);
        for (i, child) in elements
            .iter_mut()
            .filter(|child| child.visible())
            .enumerate()
        {
            let x1 = leading_edge(cell_width, col, padding);
            let y1 = leading_edge(cell_height, row, padding);
            let x2 = trailing_edge(cell_width, col, padding);
            let y2 = trailing_edge(cell_height, row, padding);

            trace!(row, col, x1, y1, x2, y2, "grid cell");
            child.move_to(Position::new(x1, y1));
            child.resize(Size::new(x2 - x1, y2 - y1));

            let line_done = (i + 1) % self.count == 0;
            if horizontal {
                if line_done {
                    row += 1;
                    col = 0;
                } else {
                    col += 1;
                }
            } else if line_done {
                col += 1;
                row = 0;
            } else {
                row += 1;
            }
        }
    }

    fn min_size(&self, elements: &[Box<dyn Element>], ctx: &LayoutContext) -> Size {
        let lines = self.count_lines(elements);
        if lines == 0 {
            return Size::zero();
        }

        let lines = lines as f32;
        let count = self.count as f32;
        let cell = crate::visible_min_size(elements);
        let gaps = |n: f32| ctx.padding * (n - 1.0).max(0.0);

        if self.horizontal(ctx) {
            Size::new(cell.width * count, cell.height * lines)
                .add_width_height(gaps(count), gaps(lines))
        } else {
            Size::new(cell.width * lines, cell.height * count)
                .add_width_height(gaps(lines), gaps(count))
        }
    }

    fn name(&self) -> &'static str {
        "grid"
    }
}
