//! # Container
//!
//! An element that owns other elements and arranges them with a [`Layout`].
//!
//! A container re-runs its layout whenever its size changes or its children
//! are added or removed. Because it implements [`Element`] itself, containers
//! nest: a child container's `resize` triggers its own layout pass.
//!
//! Every pass takes a fresh [`LayoutContext`] from the container's
//! [`Environment`], so theme changes show up on the next resize or refresh.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::border::{BorderLayout, BorderSlots};
use crate::boxlayout::BoxLayout;
use crate::center::CenterLayout;
use crate::context::{Environment, LayoutContext, ThemeSettings};
use crate::element::Element;
use crate::form::FormLayout;
use crate::geometry::{Position, Size};
use crate::grid::GridLayout;
use crate::grid_wrap::GridWrapLayout;
use crate::max::MaxLayout;
use crate::padded::PaddedLayout;
use crate::Layout;

/// A group of elements arranged by an optional layout strategy.
pub struct Container {
    elements: Vec<Box<dyn Element>>,
    layout: Option<Box<dyn Layout>>,
    env: Arc<dyn Environment>,
    size: Size,
    position: Position,
    hidden: bool,
}

impl Container {
    /// A container without a layout. Children keep whatever geometry they have.
    pub fn new(elements: Vec<Box<dyn Element>>) -> Self {
        let mut container = Self::empty(elements);
        container.size = container.min_size();
        container
    }

    /// A container sized to its layout's minimum, laid out immediately.
    pub fn with_layout(layout: Box<dyn Layout>, elements: Vec<Box<dyn Element>>) -> Self {
        let mut container = Self::empty(elements);
        container.layout = Some(layout);
        container.size = container.min_size();
        container.relayout();
        container
    }

    fn empty(elements: Vec<Box<dyn Element>>) -> Self {
        Self {
            elements,
            layout: None,
            env: Arc::new(ThemeSettings::default()),
            size: Size::zero(),
            position: Position::zero(),
            hidden: false,
        }
    }

    pub fn hbox(elements: Vec<Box<dyn Element>>) -> Self {
        Self::with_layout(Box::new(BoxLayout::horizontal()), elements)
    }

    pub fn vbox(elements: Vec<Box<dyn Element>>) -> Self {
        Self::with_layout(Box::new(BoxLayout::vertical()), elements)
    }

    pub fn grid_with_columns(cols: usize, elements: Vec<Box<dyn Element>>) -> Self {
        Self::with_layout(Box::new(GridLayout::with_columns(cols)), elements)
    }

    pub fn grid_with_rows(rows: usize, elements: Vec<Box<dyn Element>>) -> Self {
        Self::with_layout(Box::new(GridLayout::with_rows(rows)), elements)
    }

    pub fn adaptive_grid(rowcols: usize, elements: Vec<Box<dyn Element>>) -> Self {
        Self::with_layout(Box::new(GridLayout::adaptive(rowcols)), elements)
    }

    pub fn grid_wrap(cell_size: Size, elements: Vec<Box<dyn Element>>) -> Self {
        Self::with_layout(Box::new(GridWrapLayout::new(cell_size)), elements)
    }

    /// A border layout. Edge elements are appended after `center`.
    pub fn border(
        top: Option<Box<dyn Element>>,
        bottom: Option<Box<dyn Element>>,
        left: Option<Box<dyn Element>>,
        right: Option<Box<dyn Element>>,
        center: Vec<Box<dyn Element>>,
    ) -> Self {
        let mut elements = center;
        let mut place = |edge: Option<Box<dyn Element>>| {
            edge.map(|edge| {
                elements.push(edge);
                elements.len() - 1
            })
        };
        let slots = BorderSlots {
            top: place(top),
            bottom: place(bottom),
            left: place(left),
            right: place(right),
        };
        Self::with_layout(Box::new(BorderLayout::new(slots)), elements)
    }

    pub fn center(elements: Vec<Box<dyn Element>>) -> Self {
        Self::with_layout(Box::new(CenterLayout::new()), elements)
    }

    pub fn max(elements: Vec<Box<dyn Element>>) -> Self {
        Self::with_layout(Box::new(MaxLayout::new()), elements)
    }

    pub fn padded(elements: Vec<Box<dyn Element>>) -> Self {
        Self::with_layout(Box::new(PaddedLayout::new()), elements)
    }

    /// A form layout. `elements` alternate label, content, label, content...
    pub fn form(elements: Vec<Box<dyn Element>>) -> Self {
        Self::with_layout(Box::new(FormLayout::new()), elements)
    }

    /// Use `env` for padding and orientation. The container is resized to its
    /// minimum under the new environment and laid out again.
    pub fn with_environment(mut self, env: Arc<dyn Environment>) -> Self {
        self.env = env;
        self.size = self.min_size();
        self.relayout();
        self
    }

    /// Swap the environment of a live container, keeping its current size.
    pub fn set_environment(&mut self, env: Arc<dyn Environment>) {
        self.env = env;
        self.relayout();
    }

    pub fn environment(&self) -> &Arc<dyn Environment> {
        &self.env
    }

    /// The values the next layout pass will see.
    pub fn context(&self) -> LayoutContext {
        LayoutContext::from_env(self.env.as_ref())
    }

    pub fn layout(&self) -> Option<&dyn Layout> {
        self.layout.as_deref()
    }

    /// Replace the layout strategy and re-run it at the current size.
    pub fn set_layout(&mut self, layout: Box<dyn Layout>) {
        self.layout = Some(layout);
        self.relayout();
    }

    pub fn elements(&self) -> &[Box<dyn Element>] {
        &self.elements
    }

    /// Mutable access to the children. Call [`Element::refresh`] afterwards
    /// if a change affects layout.
    pub fn elements_mut(&mut self) -> &mut [Box<dyn Element>] {
        &mut self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Append `element` and re-run the layout.
    pub fn add(&mut self, element: Box<dyn Element>) {
        self.elements.push(element);
        self.relayout();
    }

    /// Remove the element at `index` and re-run the layout.
    pub fn remove(&mut self, index: usize) -> Option<Box<dyn Element>> {
        if index >= self.elements.len() {
            return None;
        }
        let removed = self.elements.remove(index);
        if let Some(layout) = self.layout.as_mut() {
            layout.element_removed(index);
        }
        self.relayout();
        Some(removed)
    }

    fn relayout(&mut self) {
        let Some(layout) = self.layout.as_mut() else {
            return;
        };
        let ctx = LayoutContext::from_env(self.env.as_ref());
        debug!(
            layout = layout.name(),
            width = self.size.width,
            height = self.size.height,
            children = self.elements.len(),
            padding = ctx.padding,
            "container layout"
        );
        layout.layout(&mut self.elements, self.size, &ctx);
    }
}

impl Element for Container {
    fn min_size(&self) -> Size {
        match &self.layout {
            Some(layout) => layout.min_size(&self.elements, &self.context()),
            None => crate::visible_min_size(&self.elements),
        }
    }

    fn resize(&mut self, size: Size) {
        if self.size == size {
            trace!(width = size.width, height = size.height, "container size unchanged");
            return;
        }
        self.size = size;
        self.relayout();
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

    fn refresh(&mut self) {
        self.relayout();
        for child in &mut self.elements {
            child.refresh();
        }
    }

    fn children(&self) -> &[Box<dyn Element>] {
        &self.elements
    }
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("layout", &self.layout.as_ref().map(|layout| layout.name()))
            .field("children", &self.elements.len())
            .field("size", &self.size)
            .field("position", &self.position)
            .field("hidden", &self.hidden)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ThemeConfig;
    use crate::spacer::Spacer;
    use crate::test_util::*;

    fn theme() -> Arc<ThemeSettings> {
        Arc::new(
            ThemeSettings::new(ThemeConfig {
                padding: PAD,
                ..ThemeConfig::default()
            })
            .unwrap(),
        )
    }

    #[test]
    fn test_without_layout_takes_visible_max() {
        let container = Container::new(vec![rect(10.0, 40.0), rect(30.0, 20.0), hidden_rect(99.0, 99.0)]);

        assert_eq!(container.min_size(), Size::new(30.0, 40.0));
        assert_eq!(container.size(), Size::new(30.0, 40.0));
        // No layout, so children are left alone.
        assert_eq!(container.elements()[0].size(), Size::zero());
    }

    #[test]
    fn test_with_layout_starts_at_min_size() {
        let container = Container::hbox(vec![rect(50.0, 50.0), rect(50.0, 50.0)])
            .with_environment(theme());

        assert_eq!(container.size(), Size::new(100.0 + 4.0, 50.0));
        assert_eq!(container.elements()[1].position(), Position::new(54.0, 0.0));
    }

    #[test]
    fn test_with_environment_sizes_with_its_padding() {
        let env = Arc::new(
            ThemeSettings::new(ThemeConfig {
                padding: 10.0,
                ..ThemeConfig::default()
            })
            .unwrap(),
        );
        let container =
            Container::hbox(vec![rect(50.0, 50.0), rect(50.0, 50.0)]).with_environment(env);

        assert_eq!(container.size(), Size::new(110.0, 50.0));
        assert_eq!(container.size(), container.min_size());
        let last = &container.elements()[1];
        assert_eq!(last.position(), Position::new(60.0, 0.0));
        assert_eq!(last.position().x + last.size().width, container.size().width);
    }

    #[test]
    fn test_set_environment_keeps_size() {
        let mut container = Container::max(vec![rect(10.0, 10.0)]);
        container.resize(Size::new(80.0, 60.0));

        container.set_environment(theme());

        assert_eq!(container.size(), Size::new(80.0, 60.0));
        assert_eq!(container.elements()[0].size(), Size::new(80.0, 60.0));
    }

    #[test]
    fn test_resize_runs_layout() {
        let mut container = Container::hbox(vec![
            rect(50.0, 50.0),
            rect(50.0, 50.0),
            rect(50.0, 50.0),
        ])
        .with_environment(theme());

        container.resize(Size::new(150.0 + 2.0 * PAD, 50.0));

        let positions: Vec<_> = container.elements().iter().map(|e| e.position()).collect();
        assert_eq!(
            positions,
            vec![
                Position::new(0.0, 0.0),
                Position::new(50.0 + PAD, 0.0),
                Position::new(100.0 + 2.0 * PAD, 0.0),
            ]
        );
    }

    #[test]
    fn test_add_relays_out() {
        let mut container = Container::hbox(vec![rect(50.0, 50.0)]).with_environment(theme());
        container.resize(Size::new(200.0, 50.0));

        container.add(Box::new(Spacer::new()));
        container.add(rect(50.0, 50.0));

        assert_eq!(container.len(), 3);
        assert_eq!(container.elements()[2].position(), Position::new(150.0, 0.0));
    }

    #[test]
    fn test_remove_returns_element_and_relays_out() {
        let mut container = Container::vbox(vec![rect(10.0, 10.0), rect(10.0, 20.0), rect(10.0, 30.0)])
            .with_environment(theme());

        let removed = container.remove(0).unwrap();
        assert_eq!(removed.min_size(), Size::new(10.0, 10.0));
        assert_eq!(container.elements()[0].position(), Position::zero());
        assert_eq!(container.elements()[1].position(), Position::new(0.0, 20.0 + PAD));

        assert!(container.remove(5).is_none());
        assert_eq!(container.len(), 2);
    }

    #[test]
    fn test_border_edges_follow_center() {
        let container = Container::border(
            Some(rect(10.0, 10.0)),
            None,
            Some(rect(20.0, 10.0)),
            None,
            vec![rect(30.0, 30.0)],
        );

        let layout = container.layout().unwrap();
        assert_eq!(layout.name(), "border");
        assert_eq!(container.len(), 3);
        // Top is appended right after the single center element.
        assert_eq!(container.elements()[1].size().height, 10.0);
    }

    #[test]
    fn test_border_remove_shifts_edges() {
        let mut container = Container::border(
            Some(rect(10.0, 10.0)),
            None,
            None,
            None,
            vec![rect(30.0, 30.0)],
        )
        .with_environment(theme());

        container.remove(0);
        container.resize(Size::new(100.0, 100.0));

        // The top edge is now index 0 and still pinned to the top.
        assert_eq!(container.elements()[0].position(), Position::zero());
        assert_eq!(container.elements()[0].size(), Size::new(100.0, 10.0));
    }

    #[test]
    fn test_resize_to_same_size_is_noop() {
        let mut container = Container::max(vec![rect(10.0, 10.0)]);
        container.resize(Size::new(40.0, 40.0));
        container.elements_mut()[0].resize(Size::new(1.0, 1.0));

        container.resize(Size::new(40.0, 40.0));
        assert_eq!(container.elements()[0].size(), Size::new(1.0, 1.0));

        container.refresh();
        assert_eq!(container.elements()[0].size(), Size::new(40.0, 40.0));
    }

    #[test]
    fn test_set_layout_rearranges() {
        let mut container = Container::hbox(vec![rect(10.0, 10.0), rect(10.0, 10.0)]);
        container.resize(Size::new(100.0, 100.0));

        container.set_layout(Box::new(MaxLayout::new()));

        for child in container.elements() {
            assert_eq!(child.size(), Size::new(100.0, 100.0));
        }
    }

    #[test]
    fn test_padding_change_applies_on_refresh() {
        let env = theme();
        let mut container = Container::padded(vec![rect(10.0, 10.0)]).with_environment(env.clone());
        container.resize(Size::new(100.0, 100.0));
        assert_eq!(container.elements()[0].position(), Position::new(PAD, PAD));

        env.set_padding(10.0).unwrap();
        container.refresh();

        assert_eq!(container.elements()[0].position(), Position::new(10.0, 10.0));
        assert_eq!(container.min_size(), Size::new(30.0, 30.0));
    }

    #[test]
    fn test_hidden_container() {
        let mut container = Container::vbox(vec![]);
        assert!(container.is_empty());
        container.hide();
        assert!(!container.visible());
        container.show();
        assert!(container.visible());
    }
}
