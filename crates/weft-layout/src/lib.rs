//! # Weft Layout
//!
//! Layout engine for the Weft GUI toolkit.
//! Computes the size and position of every child in a container, and the
//! minimum size of the container itself.
//!
//! ## Strategies
//!
//! 1. **Box**: stack children horizontally or vertically, sharing free space between spacers
//! 2. **Grid**: uniform cells in a fixed number of columns (or rows)
//! 3. **Grid wrap**: fixed-size cells that reflow into as many columns as fit
//! 4. **Border**: children pinned to the edges around a flexible center
//! 5. **Form**: two-column label/content table with harmonised column widths
//! 6. **Center**, **Max**, **Padded**: single-pass transforms
//!
//! Every strategy implements [`Layout`]. Strategies are stateless apart from
//! [`GridWrapLayout`], which remembers the row count of its last pass.
//!
//! The padding unit and device orientation come from an explicit
//! [`LayoutContext`] handed to every call; there is no global theme.

pub mod border;
pub mod boxlayout;
pub mod center;
pub mod container;
pub mod context;
pub mod element;
pub mod form;
pub mod geometry;
pub mod grid;
pub mod grid_wrap;
pub mod max;
pub mod padded;
pub mod snapshot;
pub mod spacer;

pub use border::{BorderLayout, BorderSlots};
pub use boxlayout::{Axis, BoxLayout};
pub use center::CenterLayout;
pub use container::Container;
pub use context::{
    Environment, LayoutContext, Orientation, ThemeConfig, ThemeSettings, DEFAULT_PADDING,
};
pub use element::{Element, Placeholder, SpacerObject, TextLabel};
pub use form::FormLayout;
pub use geometry::{Delta, Position, Size, Vector2};
pub use grid::GridLayout;
pub use grid_wrap::GridWrapLayout;
pub use max::MaxLayout;
pub use padded::PaddedLayout;
pub use snapshot::ElementSnapshot;
pub use spacer::Spacer;

use thiserror::Error;

/// Errors from the fallible edges of the engine.
///
/// Layout passes themselves never fail; these cover configuration and export.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Padding must be finite and non-negative, got {0}")]
    InvalidPadding(f32),

    #[error("Padding is not a number: {0:?}")]
    InvalidPaddingValue(String),

    #[error("Unknown orientation: {0:?}")]
    InvalidOrientation(String),

    #[error("Invalid theme configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Failed to serialize layout snapshot: {0}")]
    Snapshot(#[source] serde_json::Error),
}

/// A layout strategy: arranges a sequence of children and reports the
/// smallest size that fits them.
///
/// Children are owned by the caller; a strategy only calls
/// [`Element::resize`] and [`Element::move_to`] on the ones it is given.
pub trait Layout {
    /// Size and position every visible child within `size`.
    fn layout(&mut self, elements: &mut [Box<dyn Element>], size: Size, ctx: &LayoutContext);

    /// The smallest size that fits every visible child.
    fn min_size(&self, elements: &[Box<dyn Element>], ctx: &LayoutContext) -> Size;

    /// Called by a container after it removed the child at `index`.
    ///
    /// Strategies that refer to children by index adjust their references here.
    fn element_removed(&mut self, _index: usize) {}

    /// Short name used in tracing output.
    fn name(&self) -> &'static str;
}

/// Component-wise maximum of the minimum sizes of all visible children.
pub(crate) fn visible_min_size(elements: &[Box<dyn Element>]) -> Size {
    elements
        .iter()
        .filter(|child| child.visible())
        .fold(Size::zero(), |acc, child| acc.max(child.min_size()))
}
