//! Directional input as seen by the manual controllers.

use std::cell::Cell;

use bcimaze_core::Action;
use bcimaze_level::Level;

/// Order in which held directions are tried: right, left, down, up.
pub const KEY_PRIORITY: [Action; 4] = [Action::Right, Action::Left, Action::Down, Action::Up];

/// Source of the currently held directional intents.
pub trait InputSource {
    /// Whether the key for direction `dir` is held down.
    fn is_held(&self, dir: Action) -> bool;
}

/// An input source with nothing ever held.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn is_held(&self, _dir: Action) -> bool {
        false
    }
}

/// Held-key state updated by the driver between ticks.
///
/// Uses interior mutability so the driver and a controller can share one
/// instance behind an `Rc`.
#[derive(Debug, Default)]
pub struct HeldKeys {
    mask: Cell<u8>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&self, dir: Action) {
        self.set(dir, true);
    }

    pub fn release(&self, dir: Action) {
        self.set(dir, false);
    }

    pub fn set(&self, dir: Action, held: bool) {
        let bit = bit(dir);
        let mask = self.mask.get();
        self.mask.set(if held { mask | bit } else { mask & !bit });
    }

    /// Release every key.
    pub fn clear(&self) {
        self.mask.set(0);
    }
}

impl InputSource for HeldKeys {
    fn is_held(&self, dir: Action) -> bool {
        self.mask.get() & bit(dir) != 0
    }
}

#[inline]
fn bit(dir: Action) -> u8 {
    match dir {
        Action::Up => 1,
        Action::Right => 2,
        Action::Down => 4,
        Action::Left => 8,
        Action::Stop => 0,
    }
}

/// The first held direction in [`KEY_PRIORITY`] whose destination is
/// available, or [`Action::Stop`].
pub fn intended_action(input: &dyn InputSource, level: &Level) -> Action {
    KEY_PRIORITY
        .into_iter()
        .find(|&a| input.is_held(a) && level.is_available(a.apply(level.player())))
        .unwrap_or(Action::Stop)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testlevel::level;

    #[test]
    fn held_keys_track_presses() {
        let keys = HeldKeys::new();
        keys.press(Action::Up);
        keys.press(Action::Left);
        assert!(keys.is_held(Action::Up));
        assert!(keys.is_held(Action::Left));
        assert!(!keys.is_held(Action::Down));
        keys.release(Action::Up);
        assert!(!keys.is_held(Action::Up));
        keys.clear();
        assert!(!keys.is_held(Action::Left));
        keys.press(Action::Stop);
        assert!(!keys.is_held(Action::Stop));
    }

    #[test]
    fn priority_is_right_left_down_up() {
        let lvl = level("-----\n-   -\n- X -\n-   -\n-----");
        let keys = HeldKeys::new();
        for a in Action::MOVES {
            keys.press(a);
        }
        assert_eq!(intended_action(&keys, &lvl), Action::Right);
        keys.release(Action::Right);
        assert_eq!(intended_action(&keys, &lvl), Action::Left);
        keys.release(Action::Left);
        assert_eq!(intended_action(&keys, &lvl), Action::Down);
        keys.release(Action::Down);
        assert_eq!(intended_action(&keys, &lvl), Action::Up);
        keys.release(Action::Up);
        assert_eq!(intended_action(&keys, &lvl), Action::Stop);
    }

    #[test]
    fn blocked_keys_fall_through() {
        let lvl = level("----\n-X -\n----");
        let keys = HeldKeys::new();
        keys.press(Action::Left);
        keys.press(Action::Up);
        assert_eq!(intended_action(&keys, &lvl), Action::Stop);
        keys.press(Action::Right);
        assert_eq!(intended_action(&keys, &lvl), Action::Right);
        assert_eq!(intended_action(&NoInput, &lvl), Action::Stop);
    }
}
