//! Form layout: a two-column table of label/content pairs.
//!
//! Children are read as consecutive pairs, label first. A row takes part in
//! layout while either of its two children is visible.
//!
//! Column widths are shared by every row: the label column is as wide as the
//! widest label, and the content column is as wide as the widest content or
//! whatever horizontal space remains, whichever is larger. Each row keeps its
//! own height, the taller of its two children.
//!
//! Plain text labels are inset by two padding units on each side so their
//! glyphs line up with the content column's text.
//!
//! Callers must supply an even number of children. A trailing unpaired child
//! is left untouched and logged once per layout pass.

use tracing::{debug, trace, warn};

use crate::element::Element;
use crate::geometry::{Position, Size};
use crate::{Layout, LayoutContext};

const FORM_COLUMNS: usize = 2;

/// Resolved cell sizes for one visible row.
#[derive(Debug, Clone, Copy, PartialEq)]
struct FormRow {
    label: Size,
    content: Size,
}

/// Lays out label/content pairs as a two-column table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormLayout;

impl FormLayout {
    pub fn new() -> Self {
        Self
    }

    fn row_visible(pair: &[Box<dyn Element>]) -> bool {
        pair.iter().any(|child| child.visible())
    }

    /// Size every cell of the table for a container `container_width` wide.
    fn table_cells(
        elements: &[Box<dyn Element>],
        container_width: f32,
        ctx: &LayoutContext,
    ) -> Vec<FormRow> {
        let padding = ctx.padding;
        let pairs = elements.chunks_exact(FORM_COLUMNS);

        let mut label_max_width = 0.0f32;
        let mut content_max_width = 0.0f32;
        let mut table: Vec<FormRow> = pairs
            .filter(|pair| Self::row_visible(pair))
            .map(|pair| {
                let mut label = pair[0].min_size();
                if pair[0].is_text() {
                    label.width += padding * 4.0;
                }
                let mut content = pair[1].min_size();

                label_max_width = label_max_width.max(label.width);
                content_max_width = content_max_width.max(content.width);

                let row_height = label.height.max(content.height);
                label.height = row_height;
                content.height = row_height;
                FormRow { label, content }
            })
            .collect();

        let content_width = content_max_width.max(container_width - label_max_width - padding);
        for row in &mut table {
            row.label.width = label_max_width;
            row.content.width = content_width;
        }

        table
    }
}

impl Layout for FormLayout {
    fn layout(&mut self, elements: &mut [Box<dyn Element>], size: Size, ctx: &LayoutContext) {
        let padding = ctx.padding;
        if elements.len() % FORM_COLUMNS != 0 {
            warn!(
                count = elements.len(),
                "form layout given an odd number of children, ignoring the last"
            );
        }
        let table = Self::table_cells(elements, size.width, ctx);
        debug!(rows = table.len(), width = size.width, "form layout");

        let mut rows = table.iter();
        let mut y = 0.0f32;
        let mut previous: Option<&FormRow> = None;
        for pair in elements.chunks_exact_mut(FORM_COLUMNS) {
            if !Self::row_visible(pair) {
                continue;
            }
            let Some(row) = rows.next() else {
                break;
            };
            if let Some(prev) = previous {
                y += prev.label.height + padding;
            }
            previous = Some(row);
            trace!(y, height = row.label.height, "form row");

            let (label_cell, content_cell) = pair.split_at_mut(1);
            let label = &mut label_cell[0];
            if label.visible() {
                if label.is_text() {
                    let height = label.min_size().height;
                    label.move_to(Position::new(padding * 2.0, y + padding * 2.0));
                    label.resize(Size::new(row.label.width - padding * 4.0, height));
                } else {
                    label.move_to(Position::new(0.0, y));
                    label.resize(row.label);
                }
            }

            let content = &mut content_cell[0];
            if content.visible() {
                content.move_to(Position::new(padding + row.label.width, y));
                content.resize(Size::new(row.content.width, row.label.height));
            }
        }
    }

    fn min_size(&self, elements: &[Box<dyn Element>], ctx: &LayoutContext) -> Size {
        let table = Self::table_cells(elements, 0.0, ctx);
        let Some(first) = table.first() else {
            return Size::zero();
        };

        let width = first.label.width + first.content.width + ctx.padding;
        let gaps = (table.len() - 1) as f32 * ctx.padding;
        let height = table.iter().map(|row| row.label.height).sum::<f32>() + gaps;
        Size::new(width, height)
    }

    fn name(&self) -> &'static str {
        "form"
    }
}
