//! End-to-end behaviour of containers and the strategies behind them.

mod support;

use std::sync::Arc;

use support::*;
use weft_layout::{
    BorderLayout, BorderSlots, BoxLayout, CenterLayout, Container, Element, Environment,
    FormLayout, GridLayout, GridWrapLayout, Layout, LayoutContext, MaxLayout, Orientation,
    PaddedLayout, Position, Size, Spacer,
};

fn toolbar_and_content(env: Arc<dyn Environment>) -> Container {
    let toolbar = Container::hbox(vec![
        rect(20.0, 10.0),
        Box::new(Spacer::horizontal()),
        rect(20.0, 10.0),
    ])
    .with_environment(env.clone());
    let content = Container::vbox(vec![rect(40.0, 20.0), rect(40.0, 20.0)])
        .with_environment(env.clone());

    Container::border(Some(Box::new(toolbar)), None, None, None, vec![Box::new(content)])
        .with_environment(env)
}

#[test]
fn test_nested_containers_lay_out_recursively() {
    init_tracing();
    let mut root = toolbar_and_content(theme(PAD));

    root.resize(Size::new(200.0, 150.0));

    let content = &root.elements()[0];
    let toolbar = &root.elements()[1];
    assert_size_near(toolbar.size(), Size::new(200.0, 10.0));
    assert_position_near(content.position(), Position::new(0.0, 10.0 + PAD));
    assert_size_near(content.size(), Size::new(200.0, 140.0 - PAD));

    // The trailing toolbar button is pushed against the right edge.
    assert_position_near(toolbar.children()[2].position(), Position::new(180.0, 0.0));
    assert_position_near(content.children()[1].position(), Position::new(0.0, 20.0 + PAD));
    for child in content.children() {
        assert_within(child.as_ref(), content.size());
    }
}

#[test]
fn test_padding_change_between_passes() {
    init_tracing();
    let env = theme(PAD);
    let mut root = toolbar_and_content(env.clone());
    root.resize(Size::new(200.0, 150.0));

    env.set_padding(10.0).unwrap();
    root.refresh();

    let content = &root.elements()[0];
    assert_position_near(content.position(), Position::new(0.0, 20.0));
    assert_position_near(content.children()[1].position(), Position::new(0.0, 30.0));
    assert_position_near(root.elements()[1].children()[2].position(), Position::new(180.0, 0.0));
    // The toolbar is wider than the content column.
    assert_size_near(root.min_size(), Size::new(20.0 + 10.0 + 20.0, 10.0 + 10.0 + 50.0));
}

#[test]
fn test_orientation_change_flips_adaptive_grid() {
    let env = theme(PAD);
    let mut grid = Container::adaptive_grid(2, vec![rect(10.0, 10.0), rect(10.0, 10.0)])
        .with_environment(env.clone());
    grid.resize(Size::new(100.0, 100.0));
    assert_position_near(grid.elements()[1].position(), Position::new(50.0 + PAD / 2.0, 0.0));

    env.set_orientation(Orientation::Vertical);
    grid.refresh();

    assert_position_near(grid.elements()[1].position(), Position::new(0.0, 50.0 + PAD / 2.0));
}

#[test]
fn test_grid_wrap_min_size_after_initial_pass() {
    let container = Container::grid_wrap(
        Size::new(50.0, 50.0),
        vec![rect(0.0, 0.0), rect(0.0, 0.0), rect(0.0, 0.0)],
    );

    // Created at its one-row minimum, which forced a single column.
    assert_size_near(container.min_size(), Size::new(50.0, 150.0 + 2.0 * 4.0));
}

#[test]
fn test_add_and_remove_relayout() {
    let mut container = Container::grid_with_columns(2, vec![rect(10.0, 10.0)])
        .with_environment(theme(PAD));
    container.resize(Size::new(100.0 + PAD, 100.0 + PAD));
    assert_size_near(container.elements()[0].size(), Size::new(50.0, 100.0 + PAD));

    container.add(rect(10.0, 10.0));
    container.add(rect(10.0, 10.0));
    assert_position_near(container.elements()[2].position(), Position::new(0.0, 50.0 + PAD));

    let removed = container.remove(0);
    assert!(removed.is_some());
    assert_eq!(container.len(), 2);
    assert_size_near(container.elements()[0].size(), Size::new(50.0, 100.0 + PAD));
    assert_position_near(container.elements()[1].position(), Position::new(50.0 + PAD, 0.0));
}

#[test]
fn test_hiding_child_then_refresh_reclaims_space() {
    let mut container = Container::hbox(vec![rect(50.0, 20.0), rect(50.0, 20.0), rect(50.0, 20.0)])
        .with_environment(theme(PAD));
    container.resize(Size::new(200.0, 20.0));

    container.elements_mut()[1].hide();
    container.refresh();

    assert_position_near(container.elements()[2].position(), Position::new(50.0 + PAD, 0.0));
    assert_size_near(container.min_size(), Size::new(100.0 + PAD, 20.0));
}

fn every_strategy() -> Vec<Box<dyn Layout>> {
    vec![
        Box::new(BoxLayout::horizontal()),
        Box::new(BoxLayout::vertical()),
        Box::new(GridLayout::with_columns(2)),
        Box::new(GridLayout::adaptive(2)),
        Box::new(GridWrapLayout::new(Size::new(30.0, 30.0))),
        Box::new(BorderLayout::new(BorderSlots {
            top: Some(2),
            bottom: Some(1),
            ..BorderSlots::default()
        })),
        Box::new(FormLayout::new()),
        Box::new(CenterLayout::new()),
        Box::new(MaxLayout::new()),
        Box::new(PaddedLayout::new()),
    ]
}

#[test]
fn test_hidden_elements_are_never_touched() {
    init_tracing();
    let ctx = LayoutContext::with_padding(PAD);

    for mut layout in every_strategy() {
        let (a, a_calls) = Recorder::visible(20.0, 20.0);
        let (b, b_calls) = Recorder::hidden(20.0, 20.0);
        let (c, c_calls) = Recorder::visible(20.0, 20.0);
        let (d, d_calls) = Recorder::visible(20.0, 20.0);
        let mut elements = vec![a, b, c, d];

        layout.layout(&mut elements, Size::new(200.0, 200.0), &ctx);

        assert!(!b_calls.touched(), "{} touched a hidden element", layout.name());
        for calls in [&a_calls, &c_calls, &d_calls] {
            assert!(calls.touched(), "{} skipped a visible element", layout.name());
        }
    }
}

#[test]
fn test_hidden_elements_do_not_grow_min_size() {
    let ctx = LayoutContext::with_padding(PAD);

    for layout in every_strategy() {
        // Form rows stay visible while either member is, so hide a whole pair.
        let elements = vec![
            rect(20.0, 20.0),
            rect(20.0, 20.0),
            hidden_rect(500.0, 500.0),
            hidden_rect(500.0, 500.0),
        ];
        let min = layout.min_size(&elements, &ctx);
        assert!(
            min.width < 500.0 && min.height < 500.0,
            "{} min size {:?} includes hidden elements",
            layout.name(),
            min
        );
    }
}

fn hidden_rect(width: f32, height: f32) -> Box<dyn Element> {
    let mut rect = rect(width, height);
    rect.hide();
    rect
}

#[test]
fn test_snapshot_of_laid_out_tree() {
    let mut root = toolbar_and_content(theme(PAD));
    root.resize(Size::new(200.0, 150.0));

    let snapshot = weft_layout::ElementSnapshot::capture(&root);

    assert_eq!(snapshot.count(), 1 + 2 + 3 + 2);
    assert_eq!(snapshot.children[1].children[2].path, "1/2");
    assert_size_near(snapshot.size, Size::new(200.0, 150.0));
}
