use bcimaze_core::{Point, Range};

/// Minimal search interface: the grid extent and neighbour enumeration.
pub trait Pather {
    /// The rectangle searches operate in. Points outside are never visited.
    fn bounds(&self) -> Range;

    /// Append the passable cardinal neighbours of `p` into `buf`, in the
    /// order they should be expanded. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}
