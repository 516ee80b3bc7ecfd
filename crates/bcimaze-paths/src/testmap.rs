//! Small ASCII grid used by the search tests: `#` is a wall, anything else
//! is open floor.

use bcimaze_core::{Action, Point, Range};

use crate::Pather;

pub(crate) struct TestMap {
    rows: Vec<Vec<bool>>,
    rng: Range,
}

impl TestMap {
    pub(crate) fn new(s: &str) -> Self {
        let rows: Vec<Vec<bool>> = s
            .lines()
            .map(|l| l.chars().map(|c| c != '#').collect())
            .collect();
        let w = rows.iter().map(|r| r.len()).max().unwrap_or(0) as i32;
        let h = rows.len() as i32;
        Self {
            rows,
            rng: Range::of_size(w, h),
        }
    }

    /// Every cell of the map is open, with a wall border.
    pub(crate) fn open_room(w: usize, h: usize) -> Self {
        let mut s = String::new();
        for y in 0..h {
            for x in 0..w {
                let border = x == 0 || y == 0 || x == w - 1 || y == h - 1;
                s.push(if border { '#' } else { '.' });
            }
            s.push('\n');
        }
        Self::new(&s)
    }

    pub(crate) fn open(&self, p: Point) -> bool {
        self.rng.contains(p) && self.rows[p.y as usize].get(p.x as usize) == Some(&true)
    }

    /// Walk `route` from `from`, returning `None` if it ever enters a wall.
    pub(crate) fn walk(&self, from: Point, route: &[Action]) -> Option<Point> {
        let mut p = from;
        for a in route {
            p = a.apply(p);
            if !self.open(p) {
                return None;
            }
        }
        Some(p)
    }
}

impl Pather for TestMap {
    fn bounds(&self) -> Range {
        self.rng
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for a in [Action::Left, Action::Up, Action::Right, Action::Down] {
            let n = a.apply(p);
            if self.open(n) {
                buf.push(n);
            }
        }
    }
}
