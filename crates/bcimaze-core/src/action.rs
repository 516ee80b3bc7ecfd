//! The movement decision returned by a controller each tick.

use std::fmt;

use crate::geom::Point;

/// A single movement decision: one cardinal step, or no move at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Up,
    Right,
    Down,
    Left,
    #[default]
    Stop,
}

impl Action {
    /// The four movements, in declaration order.
    pub const MOVES: [Action; 4] = [Action::Up, Action::Right, Action::Down, Action::Left];

    /// Offset applied to the player position by this action.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Action::Up => Point::new(0, -1),
            Action::Right => Point::new(1, 0),
            Action::Down => Point::new(0, 1),
            Action::Left => Point::new(-1, 0),
            Action::Stop => Point::ZERO,
        }
    }

    /// The cell reached from `p` by taking this action.
    #[inline]
    pub fn apply(self, p: Point) -> Point {
        p + self.delta()
    }

    /// Whether this action moves the player.
    #[inline]
    pub const fn is_move(self) -> bool {
        !matches!(self, Action::Stop)
    }

    /// The action stepping from `from` to the adjacent cell `to`, if the two
    /// cells are cardinal neighbours.
    pub fn between(from: Point, to: Point) -> Option<Action> {
        let d = to - from;
        Action::MOVES.into_iter().find(|a| a.delta() == d)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Up => "up",
            Action::Right => "right",
            Action::Down => "down",
            Action::Left => "left",
            Action::Stop => "stop",
        };
        f.write_str(s)
    }
}
