use bcimaze_core::Point;

use crate::Router;
use crate::router::{MAX_ITERATIONS, NO_ROUTE_DISTANCE};
use crate::traits::Pather;

impl Router {
    /// Number of hops from `from` to the nearest cell satisfying `is_target`.
    ///
    /// Uses the same bounded priority search as
    /// [`compute_route`](Self::compute_route) with the hop count as (negated)
    /// priority, so cells are expanded in breadth-first order. The target
    /// test happens when a cell is expanded, which means `from` itself
    /// counts: a matching start cell yields `0`.
    ///
    /// Returns [`NO_ROUTE_DISTANCE`] if the search exhausts the reachable
    /// area or [`MAX_ITERATIONS`] expansions without a match.
    pub fn distance_to<P, F>(&mut self, pather: &P, from: Point, is_target: F) -> i32
    where
        P: Pather,
        F: Fn(Point) -> bool,
    {
        self.fit(pather.bounds());
        let Some(start_idx) = self.idx(from) else {
            return NO_ROUTE_DISTANCE;
        };

        self.begin();
        self.enqueue(start_idx, usize::MAX, 0, 0);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let distance = 'search: {
            for _ in 0..MAX_ITERATIONS {
                let Some(current) = self.open.pop() else {
                    break 'search NO_ROUTE_DISTANCE;
                };
                self.iterations += 1;

                let ci = current.idx;
                let cp = self.point(ci);
                let hops = self.nodes[ci].hops;
                if is_target(cp) {
                    break 'search hops;
                }

                nbuf.clear();
                pather.neighbors(cp, &mut nbuf);

                for &np in nbuf.iter() {
                    let Some(ni) = self.idx(np) else {
                        continue;
                    };
                    if self.visited(ni) {
                        continue;
                    }
                    self.enqueue(ni, ci, hops + 1, -(hops + 1));
                }
            }
            NO_ROUTE_DISTANCE
        };

        self.nbuf = nbuf;
        distance
    }
}
