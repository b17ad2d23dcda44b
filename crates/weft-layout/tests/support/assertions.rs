//! Custom assertions for layout geometry.

use weft_layout::{Element, Position, Size};

const TOLERANCE: f32 = 1e-3;

/// Assert that two sizes match within a small float tolerance.
#[track_caller]
pub fn assert_size_near(actual: Size, expected: Size) {
    assert!(
        (actual.width - expected.width).abs() <= TOLERANCE
            && (actual.height - expected.height).abs() <= TOLERANCE,
        "Size mismatch: expected {}x{}, got {}x{}",
        expected.width,
        expected.height,
        actual.width,
        actual.height
    );
}

/// Assert that two positions match within a small float tolerance.
#[track_caller]
pub fn assert_position_near(actual: Position, expected: Position) {
    assert!(
        (actual.x - expected.x).abs() <= TOLERANCE && (actual.y - expected.y).abs() <= TOLERANCE,
        "Position mismatch: expected ({}, {}), got ({}, {})",
        expected.x,
        expected.y,
        actual.x,
        actual.y
    );
}

/// Assert that `child` lies entirely inside a parent of `size`.
#[track_caller]
pub fn assert_within(child: &dyn Element, size: Size) {
    let pos = child.position();
    let end = child.size();
    assert!(
        pos.x >= -TOLERANCE
            && pos.y >= -TOLERANCE
            && pos.x + end.width <= size.width + TOLERANCE
            && pos.y + end.height <= size.height + TOLERANCE,
        "Element at ({}, {}) sized {}x{} overflows {}x{}",
        pos.x,
        pos.y,
        end.width,
        end.height,
        size.width,
        size.height
    );
}
