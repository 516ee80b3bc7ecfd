//! Unbounded reachability walk.

use std::collections::HashSet;

use bcimaze_core::Point;

use crate::traits::Pather;

/// Flood-fill from `p` and return every cell reachable through the pather's
/// neighbours, `p` included. Returns an empty set when `p` is outside the
/// pather's bounds.
///
/// Unlike [`Router`](crate::Router) searches this walk has no expansion
/// budget, which makes it the reference check for maze connectivity.
pub fn flood_fill<P: Pather>(pather: &P, p: Point) -> HashSet<Point> {
    let mut seen = HashSet::new();
    if !pather.bounds().contains(p) {
        return seen;
    }

    let mut stack = vec![p];
    let mut nbuf = Vec::with_capacity(4);
    seen.insert(p);

    while let Some(cp) = stack.pop() {
        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            if pather.bounds().contains(np) && seen.insert(np) {
                stack.push(np);
            }
        }
    }

    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testmap::TestMap;

    #[test]
    fn fills_open_room() {
        let map = TestMap::open_room(5, 4);
        let cells = flood_fill(&map, Point::new(1, 1));
        assert_eq!(cells.len(), 6);
        assert!(cells.contains(&Point::new(3, 2)));
    }

    #[test]
    fn stops_at_walls() {
        let map = TestMap::new(
            "\
#######
#..#..#
#######",
        );
        let cells = flood_fill(&map, Point::new(1, 1));
        assert_eq!(cells.len(), 2);
        assert!(!cells.contains(&Point::new(4, 1)));
    }

    #[test]
    fn outside_is_empty() {
        let map = TestMap::open_room(3, 3);
        assert!(flood_fill(&map, Point::new(5, 5)).is_empty());
    }
}
