use std::collections::BinaryHeap;

use bcimaze_core::{Action, Point, Range};

/// Maximum number of nodes a single search may expand.
pub const MAX_ITERATIONS: usize = 1000;

/// Hop count reported by [`Router::distance_to`] when nothing matched.
pub const NO_ROUTE_DISTANCE: i32 = 10_000_000;

/// Route reported by [`Router::compute_route`] when start equals goal or
/// when no route was found.
pub const NO_ROUTE: [Action; 1] = [Action::Stop];

/// Whether a route returned by [`Router::compute_route`] actually moves.
#[inline]
pub fn route_found(route: &[Action]) -> bool {
    route.first().is_some_and(|a| a.is_move())
}

// ---------------------------------------------------------------------------
// Internal search node and open-list entry
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) parent: usize,
    pub(crate) hops: i32,
    pub(crate) generation: u32,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            parent: usize::MAX,
            hops: 0,
            generation: 0,
        }
    }
}

/// Open-list entry. The heap pops the highest `priority` first; equal
/// priorities pop in insertion order.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct Entry {
    pub(crate) idx: usize,
    pub(crate) priority: i32,
    pub(crate) seq: u64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Bounded priority search over a maze grid.
///
/// `Router` owns its node array, open list and neighbour buffer so that
/// repeated queries on same-sized grids incur no allocations. Visited cells
/// are tracked by generation stamp: a cell is visited when its node carries
/// the current search's generation.
pub struct Router {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) open: BinaryHeap<Entry>,
    pub(crate) seq: u64,
    pub(crate) nbuf: Vec<Point>,
    pub(crate) iterations: usize,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Range::default())
    }
}

impl Router {
    /// Create a router for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            nodes: vec![Node::default(); rng.len()],
            generation: 0,
            open: BinaryHeap::new(),
            seq: 0,
            nbuf: Vec::with_capacity(4),
            iterations: 0,
        }
    }

    /// Replace the underlying range. Node storage is kept when it is large
    /// enough and reallocated otherwise.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;

        if new_len <= self.nodes.len() {
            self.generation = self.generation.wrapping_add(1);
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Number of nodes expanded by the most recent search.
    #[inline]
    pub fn last_iterations(&self) -> usize {
        self.iterations
    }

    // -----------------------------------------------------------------------
    // Search helpers
    // -----------------------------------------------------------------------

    /// Adopt `rng` if it differs from the current range.
    pub(crate) fn fit(&mut self, rng: Range) {
        if rng != self.rng {
            self.set_range(rng);
        }
    }

    /// Start a new search: invalidate all nodes and empty the open list.
    pub(crate) fn begin(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Stamps wrapped around; old stamps could alias the new one.
            for n in self.nodes.iter_mut() {
                n.generation = 0;
            }
            self.generation = 1;
        }
        self.open.clear();
        self.seq = 0;
        self.iterations = 0;
        self.generation
    }

    /// Mark `idx` visited in the current search and queue it.
    pub(crate) fn enqueue(&mut self, idx: usize, parent: usize, hops: i32, priority: i32) {
        let node = &mut self.nodes[idx];
        node.generation = self.generation;
        node.parent = parent;
        node.hops = hops;
        self.open.push(Entry {
            idx,
            priority,
            seq: self.seq,
        });
        self.seq += 1;
    }

    #[inline]
    pub(crate) fn visited(&self, idx: usize) -> bool {
        self.nodes[idx].generation == self.generation
    }

    /// Walk parent links back from `idx` and return the actions leading to it.
    pub(crate) fn trace(&self, idx: usize) -> Vec<Action> {
        let mut actions = Vec::with_capacity(self.nodes[idx].hops.max(0) as usize);
        let mut ci = idx;
        while self.nodes[ci].parent != usize::MAX {
            let pi = self.nodes[ci].parent;
            if let Some(a) = Action::between(self.point(pi), self.point(ci)) {
                actions.push(a);
            }
            ci = pi;
        }
        actions.reverse();
        actions
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}
