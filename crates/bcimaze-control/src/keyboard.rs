use std::rc::Rc;

use bcimaze_core::Action;
use bcimaze_level::Level;

use crate::controller::{Controller, ControllerKind};
use crate::input::{InputSource, intended_action};

/// Moves in the first held, available direction.
pub struct KeyboardController {
    input: Rc<dyn InputSource>,
}

impl KeyboardController {
    pub fn new(input: Rc<dyn InputSource>) -> Self {
        Self { input }
    }
}

impl Controller for KeyboardController {
    fn reset(&mut self) {}

    fn action(&mut self, level: &Level) -> Action {
        intended_action(self.input.as_ref(), level)
    }

    fn kind(&self) -> ControllerKind {
        ControllerKind::Keyboard
    }
}
