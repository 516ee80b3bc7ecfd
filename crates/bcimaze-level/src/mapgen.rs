//! Random lattice maze generation.
//!
//! The grid starts as a lattice of isolated 1×1 rooms at odd coordinates,
//! separated by walls on every even row and column. Walls between rooms are
//! then knocked down, one per unconnected room per pass, until every room
//! is reachable from the player start or the pass budget runs out.

use bcimaze_core::{Action, Point};
use bcimaze_paths::Router;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{LevelError, Result};
use crate::level::Level;
use crate::tile::Tile;

/// Upper bound on connection passes over the unconnected rooms.
pub const MAX_GENERATION_PASSES: usize = 20;

/// Size bounds and pass budget for [`MazeGen`].
///
/// Bounds are inclusive. An even pick is bumped to the next odd number, so
/// a generated side may exceed an even maximum by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenConfig {
    pub min_width: i32,
    pub max_width: i32,
    pub min_height: i32,
    pub max_height: i32,
    /// Connection passes before the generator gives up on leftover rooms.
    pub max_passes: usize,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            min_width: 9,
            max_width: 21,
            min_height: 9,
            max_height: 21,
            max_passes: MAX_GENERATION_PASSES,
        }
    }
}

impl GenConfig {
    /// Bounds with the default pass budget.
    pub fn new(min_width: i32, max_width: i32, min_height: i32, max_height: i32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
            max_passes: MAX_GENERATION_PASSES,
        }
    }

    /// Check that each minimum is at least 3 and not above its maximum.
    pub fn validate(&self) -> Result<()> {
        let ok = self.min_width >= 3
            && self.min_height >= 3
            && self.min_width <= self.max_width
            && self.min_height <= self.max_height;
        if ok {
            Ok(())
        } else {
            Err(LevelError::InvalidBounds {
                min_width: self.min_width,
                max_width: self.max_width,
                min_height: self.min_height,
                max_height: self.max_height,
            })
        }
    }
}

/// Outcome of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenReport {
    /// Connection passes actually run.
    pub passes: usize,
    /// Rooms reachable from the player start.
    pub connected: usize,
    /// Rooms still cut off when the pass budget ran out.
    pub unconnected: Vec<Point>,
}

impl GenReport {
    /// Whether every room ended up reachable.
    pub fn is_complete(&self) -> bool {
        self.unconnected.is_empty()
    }
}

/// Random maze generator.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    router: Router,
}

impl MazeGen<StdRng> {
    /// A generator with a reproducible random source.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            router: Router::default(),
        }
    }

    /// Generate a maze within `cfg`'s bounds.
    pub fn generate(&mut self, cfg: &GenConfig) -> Result<Level> {
        self.generate_with_report(cfg).map(|(level, _)| level)
    }

    /// Generate a maze and report how far connection got.
    ///
    /// Leftover rooms after [`GenConfig::max_passes`] are not an error: the
    /// level is still returned and the rooms are listed in the report.
    pub fn generate_with_report(&mut self, cfg: &GenConfig) -> Result<(Level, GenReport)> {
        cfg.validate()?;

        let width = odd(self.rng.random_range(cfg.min_width..=cfg.max_width));
        let height = odd(self.rng.random_range(cfg.min_height..=cfg.max_height));
        let mut level = lattice(width, height);

        let rooms: Vec<Point> = level.bounds().iter().filter(|p| p.is_lattice_room()).collect();
        let start = Point::new(width - 2, height - 2);
        level.set_player(start);

        let others: Vec<Point> = rooms.iter().copied().filter(|&r| r != start).collect();
        let goal = if others.is_empty() {
            start
        } else {
            others[self.rng.random_range(0..others.len())]
        };
        level.set_tile(goal, Tile::Goal);

        let interior = level.bounds().interior();
        let mut unconnected = rooms.clone();
        let mut candidates: Vec<Point> = Vec::with_capacity(4);
        let mut passes = 0;

        while !unconnected.is_empty() && passes < cfg.max_passes {
            passes += 1;
            let mut remaining = Vec::with_capacity(unconnected.len());

            for &room in &unconnected {
                if self.router.is_reachable(&level, start, room) {
                    continue;
                }
                remaining.push(room);

                candidates.clear();
                for a in Action::MOVES {
                    let wall = a.apply(room);
                    let far = a.apply(wall);
                    if interior.contains(wall)
                        && level.tile(wall) == Some(Tile::Wall)
                        && interior.contains(far)
                        && level.is_available(far)
                        && !self.router.is_reachable(&level, room, far)
                    {
                        candidates.push(wall);
                    }
                }
                if candidates.is_empty() {
                    continue;
                }
                let wall = candidates[self.rng.random_range(0..candidates.len())];
                level.set_tile(wall, Tile::Blank);
            }

            log::trace!("pass {passes}: {} room(s) left", remaining.len());
            unconnected = remaining;
        }

        unconnected.retain(|&room| !self.router.is_reachable(&level, start, room));
        let report = GenReport {
            passes,
            connected: rooms.len() - unconnected.len(),
            unconnected,
        };

        log::debug!(
            "generated {:?}: {} room(s) connected in {} pass(es)",
            level.name,
            report.connected,
            report.passes
        );
        if !report.is_complete() {
            log::warn!(
                "{:?}: {} room(s) left unconnected after {} passes",
                level.name,
                report.unconnected.len(),
                report.passes
            );
        }

        Ok((level, report))
    }
}

/// Generate a maze with the thread-local random source.
pub fn generate_random_level(
    min_width: i32,
    max_width: i32,
    min_height: i32,
    max_height: i32,
) -> Result<Level> {
    MazeGen::new(rand::rng()).generate(&GenConfig::new(min_width, max_width, min_height, max_height))
}

#[inline]
fn odd(n: i32) -> i32 {
    if n % 2 == 0 { n + 1 } else { n }
}

/// A blank grid with walls on the border and on every even row and column.
fn lattice(width: i32, height: i32) -> Level {
    let mut level = Level::new(format!("Random {width} by {height}"), width, height, Tile::Blank);
    for p in level.bounds().iter() {
        let border = p.x == 0 || p.y == 0 || p.x == width - 1 || p.y == height - 1;
        if border || p.x % 2 == 0 || p.y % 2 == 0 {
            level.set_tile(p, Tile::Wall);
        }
    }
    level
}
