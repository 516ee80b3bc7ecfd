use bcimaze_core::{Action, Point};

use crate::Router;
use crate::distance::manhattan;
use crate::router::{MAX_ITERATIONS, NO_ROUTE};
use crate::traits::Pather;

impl Router {
    /// Compute a route from `from` to `to` by greedy best-first search.
    ///
    /// Nodes closer to `to` (by Manhattan distance) are expanded first, ties
    /// in insertion order. A cell is marked visited when it is queued, so the
    /// first path that discovers a cell is the one kept: the result is always
    /// a valid walk but not necessarily a shortest one.
    ///
    /// Returns the actions leading from `from` to `to`, or [`NO_ROUTE`]
    /// (`[Stop]`) when `from == to`, when either end lies outside the grid, or
    /// when [`MAX_ITERATIONS`] expansions pass without reaching `to`.
    pub fn compute_route<P: Pather>(&mut self, pather: &P, from: Point, to: Point) -> Vec<Action> {
        if from == to {
            return NO_ROUTE.to_vec();
        }
        self.fit(pather.bounds());
        let (Some(start_idx), Some(goal_idx)) = (self.idx(from), self.idx(to)) else {
            return NO_ROUTE.to_vec();
        };

        self.begin();
        self.enqueue(start_idx, usize::MAX, 0, 0);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: {
            for _ in 0..MAX_ITERATIONS {
                let Some(current) = self.open.pop() else {
                    break 'search false;
                };
                self.iterations += 1;

                let ci = current.idx;
                let hops = self.nodes[ci].hops + 1;

                nbuf.clear();
                pather.neighbors(self.point(ci), &mut nbuf);

                for &np in nbuf.iter() {
                    let Some(ni) = self.idx(np) else {
                        continue;
                    };
                    if self.visited(ni) {
                        continue;
                    }
                    self.enqueue(ni, ci, hops, -manhattan(np, to));
                    if ni == goal_idx {
                        break 'search true;
                    }
                }
            }
            false
        };

        self.nbuf = nbuf;

        if !found {
            log::trace!(
                "no route {from} -> {to} after {} expansions",
                self.iterations
            );
            return NO_ROUTE.to_vec();
        }
        self.trace(goal_idx)
    }

    /// Whether `to` can be reached from `from` within the search budget.
    pub fn is_reachable<P: Pather>(&mut self, pather: &P, from: Point, to: Point) -> bool {
        from == to || crate::route_found(&self.compute_route(pather, from, to))
    }
}
