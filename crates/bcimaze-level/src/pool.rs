//! The set of template levels a driver plays from.

use std::path::Path;

use rand::Rng;

use crate::error::{LevelError, Result};
use crate::level::Level;
use crate::loader::LevelLoader;
use crate::mapgen::{GenConfig, MazeGen};

/// Template levels, handed out as deep copies so replays always start from
/// a pristine grid.
#[derive(Debug, Clone, Default)]
pub struct LevelPool {
    levels: Vec<Level>,
}

impl LevelPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every maze file of `dir` into a new pool.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        Self::from_dir_with(&LevelLoader::default(), dir.as_ref())
    }

    /// Like [`from_dir`](Self::from_dir) with a custom loader.
    pub fn from_dir_with(loader: &LevelLoader, dir: &Path) -> Result<Self> {
        Ok(Self {
            levels: loader.load(dir)?,
        })
    }

    /// Add a template and return its id.
    pub fn push(&mut self, level: Level) -> u64 {
        let id = level.id();
        self.levels.push(level);
        id
    }

    /// Generate a fresh level into the pool and return its id.
    pub fn generate<R: Rng>(&mut self, mapgen: &mut MazeGen<R>, cfg: &GenConfig) -> Result<u64> {
        let level = mapgen.generate(cfg)?;
        Ok(self.push(level))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The template at `index`, without copying.
    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    /// Iterate over the templates in pool order.
    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }

    /// A deep copy of the template at `index`, ready to be played.
    pub fn checkout(&self, index: usize) -> Result<Level> {
        if self.is_empty() {
            return Err(LevelError::PoolEmpty);
        }
        self.get(index)
            .map(Level::copy)
            .ok_or(LevelError::UnknownLevel(index as u64))
    }

    /// A deep copy of the template with id `id`.
    pub fn checkout_id(&self, id: u64) -> Result<Level> {
        if self.is_empty() {
            return Err(LevelError::PoolEmpty);
        }
        self.iter()
            .find(|l| l.id() == id)
            .map(Level::copy)
            .ok_or(LevelError::UnknownLevel(id))
    }
}

impl FromIterator<Level> for LevelPool {
    fn from_iter<I: IntoIterator<Item = Level>>(iter: I) -> Self {
        Self {
            levels: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Tile;
    use bcimaze_core::Point;

    fn sample() -> Level {
        Level::parse("Sample\n-----\n-X G-\n-----\n").unwrap()
    }

    #[test]
    fn checkout_is_a_deep_copy() {
        let mut pool = LevelPool::new();
        let id = pool.push(sample());

        let mut live = pool.checkout(0).unwrap();
        live.set_tile(Point::new(2, 1), Tile::Error);
        live.set_player(Point::new(3, 1));

        let template = pool.get(0).unwrap();
        assert_eq!(template.tile(Point::new(2, 1)), Some(Tile::Blank));
        assert_eq!(template.player(), Point::new(1, 1));
        assert_eq!(pool.checkout_id(id).unwrap().player(), Point::new(1, 1));
    }

    #[test]
    fn lookup_errors() {
        let empty = LevelPool::new();
        assert!(matches!(empty.checkout(0), Err(LevelError::PoolEmpty)));
        assert!(matches!(empty.checkout_id(1), Err(LevelError::PoolEmpty)));

        let pool: LevelPool = [sample()].into_iter().collect();
        assert!(matches!(pool.checkout(3), Err(LevelError::UnknownLevel(3))));
        assert!(matches!(pool.checkout_id(0), Err(LevelError::UnknownLevel(0))));
    }

    #[test]
    fn generate_pushes_new_level() {
        let mut pool = LevelPool::new();
        let mut mapgen = MazeGen::seeded(5);
        let id = pool.generate(&mut mapgen, &GenConfig::default()).unwrap();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.checkout_id(id).unwrap().count(Tile::Goal), 1);
    }

    #[test]
    fn from_dir_loads_templates() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.maze"), sample().to_text()).unwrap();
        let pool = LevelPool::from_dir(dir.path()).unwrap();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.iter().next().unwrap().name, "Sample");
    }
}
