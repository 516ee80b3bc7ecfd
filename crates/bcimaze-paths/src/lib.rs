//! Route search for maze grids.
//!
//! All searches run through [`Router`], which owns and reuses its node
//! arrays and open list so that the generator's many reachability checks
//! do not allocate after warm-up:
//!
//! - **Greedy best-first** route to a fixed cell ([`Router::compute_route`])
//! - **Hop distance** to the nearest cell matching a predicate
//!   ([`Router::distance_to`])
//!
//! Both searches expand at most [`MAX_ITERATIONS`] nodes and report failure
//! through sentinels ([`NO_ROUTE`], [`NO_ROUTE_DISTANCE`]) rather than errors.
//!
//! [`flood_fill`] is a separate, unbounded depth-first reachability walk.

mod distance;
mod flood;
mod greedy;
mod nearest;
mod router;
mod traits;

#[cfg(test)]
pub(crate) mod testmap;

pub use distance::manhattan;
pub use flood::flood_fill;
pub use router::{MAX_ITERATIONS, NO_ROUTE, NO_ROUTE_DISTANCE, Router, route_found};
pub use traits::Pather;
