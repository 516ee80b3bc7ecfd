//! Route hints: painting the goal route into a level and saving it.

use std::fs;
use std::path::Path;

use bcimaze_core::{Action, Point};
use bcimaze_paths::{NO_ROUTE, Router, route_found};

use crate::error::{LevelError, Result};
use crate::level::Level;
use crate::tile::Tile;

impl Level {
    /// Where an annotated route starts: the bottom-right interior cell when
    /// open, otherwise the current player cell.
    pub fn route_start(&self) -> Point {
        let corner = Point::new(self.width() - 2, self.height() - 2);
        if self.is_available(corner) { corner } else { self.player() }
    }

    /// Route from `from` to the goal, or [`NO_ROUTE`] when the level has no
    /// goal or the search fails.
    pub fn route_to_goal(&self, router: &mut Router, from: Point) -> Vec<Action> {
        match self.find(Tile::Goal) {
            Some(goal) => router.compute_route(self, from, goal),
            None => NO_ROUTE.to_vec(),
        }
    }

    /// A copy of this level with the goal route painted as [`Tile::Route`]
    /// and the player placed on [`route_start`](Self::route_start).
    ///
    /// Only blank cells are painted; goal and error tiles already on the
    /// route keep their kind. Without a route the copy differs from `self`
    /// only in the player position.
    pub fn annotate(&self, router: &mut Router) -> Level {
        let mut out = self.copy();
        let start = self.route_start();
        out.set_player(start);

        let route = self.route_to_goal(router, start);
        if !route_found(&route) {
            log::warn!("{:?}: no route to goal from {start}, saving without hints", self.name);
            return out;
        }

        let mut p = start;
        for a in route {
            p = a.apply(p);
            if out.tile(p) == Some(Tile::Blank) {
                out.set_tile(p, Tile::Route);
            }
        }
        out
    }

    /// Write the annotated level to `path` in maze text format.
    pub fn save(&self, path: impl AsRef<Path>, router: &mut Router) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.annotate(router).to_text()).map_err(|source| LevelError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("saved {:?} to {}", self.name, path.display());
        Ok(())
    }

    /// Hops from `p` to the nearest goal, route or error tile.
    pub fn distance_to_route(&self, router: &mut Router, p: Point) -> i32 {
        router.distance_to(self, p, |q| self.tile(q).is_some_and(Tile::is_on_route))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_levels;
    use crate::mapgen::{GenConfig, MazeGen};
    use bcimaze_paths::NO_ROUTE_DISTANCE;

    const ROOM: &str = "\
Room
-------
-G    -
-     -
-   X -
-------
";

    #[test]
    fn annotate_paints_route_to_goal() {
        let level = Level::parse(ROOM).unwrap();
        let mut router = Router::default();
        let annotated = level.annotate(&mut router);

        assert_eq!(annotated.player(), Point::new(5, 3));
        assert_eq!(annotated.count(Tile::Route), 5);
        assert_eq!(annotated.count(Tile::Goal), 1);
        // Every route cell is within one step of another route cell or an end.
        let route = level.route_to_goal(&mut router, Point::new(5, 3));
        let mut p = Point::new(5, 3);
        for a in &route[..route.len() - 1] {
            p = a.apply(p);
            assert_eq!(annotated.tile(p), Some(Tile::Route));
        }
        // The source level is untouched.
        assert_eq!(level.count(Tile::Route), 0);
        assert_eq!(level.player(), Point::new(4, 3));
    }

    #[test]
    fn annotate_keeps_error_tiles() {
        let level = Level::parse("Err\n-------\n-G E X-\n-------\n").unwrap();
        let annotated = level.annotate(&mut Router::default());
        let row: String = annotated.row(1).unwrap().iter().map(|t| t.glyph()).collect();
        assert_eq!(row, "-G+E+ -");
    }

    #[test]
    fn annotate_without_goal_only_moves_player() {
        let level = Level::parse("NoGoal\n-----\n-X  -\n-   -\n-----\n").unwrap();
        let annotated = level.annotate(&mut Router::default());
        assert_eq!(annotated.count(Tile::Route), 0);
        assert_eq!(annotated.player(), Point::new(3, 2));
    }

    #[test]
    fn save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let level = Level::parse(ROOM).unwrap();
        let mut router = Router::default();
        level.save(dir.path().join("room.maze"), &mut router).unwrap();

        let loaded = load_levels(dir.path()).unwrap();
        assert_eq!(loaded.len(), 1);
        let back = &loaded[0];
        assert_eq!(back.name, level.name);
        assert_eq!((back.width(), back.height()), (level.width(), level.height()));
        assert_eq!(back.player(), level.route_start());
        for (p, t) in level.iter() {
            let saved = back.tile(p).unwrap();
            if saved != Tile::Route {
                assert_eq!(saved, t, "{p}");
            }
        }
        assert_eq!(back.to_text(), level.annotate(&mut router).to_text());
    }

    #[test]
    fn generated_level_saves_a_full_route() {
        let dir = tempfile::tempdir().unwrap();
        let level = MazeGen::seeded(11).generate(&GenConfig::default()).unwrap();
        let mut router = Router::default();
        let path = dir.path().join("gen.maze");
        level.save(&path, &mut router).unwrap();

        let route = level.route_to_goal(&mut router, level.player());
        assert!(route_found(&route));
        let back = Level::parse(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back.count(Tile::Route), route.len() - 1);
        assert_eq!(back.count(Tile::Goal), 1);
    }

    #[test]
    fn save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let level = Level::parse(ROOM).unwrap();
        let err = level
            .save(dir.path().join("missing").join("room.maze"), &mut Router::default())
            .unwrap_err();
        assert!(matches!(err, LevelError::Write { .. }));
    }

    #[test]
    fn distance_to_route_counts_hops() {
        let level = Level::parse("Dist\n--------\n-X   +G-\n--------\n").unwrap();
        let mut router = Router::default();
        assert_eq!(level.distance_to_route(&mut router, Point::new(1, 1)), 4);
        assert_eq!(level.distance_to_route(&mut router, Point::new(5, 1)), 0);

        let plain = Level::parse("Plain\n-----\n-X  -\n-----\n").unwrap();
        assert_eq!(plain.distance_to_route(&mut router, Point::new(1, 1)), NO_ROUTE_DISTANCE);
    }
}
