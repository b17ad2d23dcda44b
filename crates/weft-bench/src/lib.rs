//! Fixtures shared by the Weft layout benchmarks.
//!
//! Builders return fresh element vectors so each measurement starts from the
//! same state.

use weft_layout::{Element, Placeholder, Size, Spacer, TextLabel};

/// Children counts every strategy is measured at.
pub const SIZES: [usize; 3] = [10, 100, 1000];

/// `n` placeholders with slightly varying minimum sizes.
pub fn placeholders(n: usize) -> Vec<Box<dyn Element>> {
    (0..n)
        .map(|i| {
            let step = (i % 7) as f32;
            Box::new(Placeholder::new(Size::new(20.0 + step * 3.0, 16.0 + step)))
                as Box<dyn Element>
        })
        .collect()
}

/// `n` placeholders with a spacer after every fourth one.
pub fn with_spacers(n: usize) -> Vec<Box<dyn Element>> {
    let mut elements = Vec::with_capacity(n + n / 4);
    for (i, child) in placeholders(n).into_iter().enumerate() {
        elements.push(child);
        if i % 4 == 3 {
            elements.push(Box::new(Spacer::new()));
        }
    }
    elements
}

/// `rows` label/content pairs for a form.
pub fn form_rows(rows: usize) -> Vec<Box<dyn Element>> {
    let mut elements: Vec<Box<dyn Element>> = Vec::with_capacity(rows * 2);
    for i in 0..rows {
        let label = format!("Field {i}");
        let width = label.len() as f32 * 7.0;
        elements.push(Box::new(TextLabel::new(label, Size::new(width, 16.0))));
        elements.push(Box::new(Placeholder::new(Size::new(160.0, 24.0))));
    }
    elements
}
