use std::cell::Cell;
use std::rc::Rc;

use weft_layout::{Element, Position, Size};

/// Counts of layout calls seen by a [`Recorder`].
#[derive(Debug, Default)]
pub struct Calls {
    resizes: Cell<usize>,
    moves: Cell<usize>,
}

impl Calls {
    pub fn resizes(&self) -> usize {
        self.resizes.get()
    }

    pub fn moves(&self) -> usize {
        self.moves.get()
    }

    pub fn touched(&self) -> bool {
        self.resizes() + self.moves() > 0
    }
}

/// An element that remembers how often a layout resized or moved it.
pub struct Recorder {
    min: Size,
    size: Size,
    position: Position,
    hidden: bool,
    calls: Rc<Calls>,
}

impl Recorder {
    pub fn visible(width: f32, height: f32) -> (Box<dyn Element>, Rc<Calls>) {
        Self::build(width, height, false)
    }

    pub fn hidden(width: f32, height: f32) -> (Box<dyn Element>, Rc<Calls>) {
        Self::build(width, height, true)
    }

    fn build(width: f32, height: f32, hidden: bool) -> (Box<dyn Element>, Rc<Calls>) {
        let calls = Rc::new(Calls::default());
        let recorder = Self {
            min: Size::new(width, height),
            size: Size::zero(),
            position: Position::zero(),
            hidden,
            calls: Rc::clone(&calls),
        };
        (Box::new(recorder), calls)
    }
}

impl Element for Recorder {
    fn min_size(&self) -> Size {
        self.min
    }

    fn resize(&mut self, size: Size) {
        self.calls.resizes.set(self.calls.resizes.get() + 1);
        self.size = size;
    }

    fn move_to(&mut self, position: Position) {
        self.calls.moves.set(self.calls.moves.get() + 1);
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
}
