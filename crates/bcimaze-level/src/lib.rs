//! Maze levels for the BCI maze game.
//!
//! - [`Tile`] / [`Level`]: the maze data model and its invariants.
//! - [`Level::parse`] / [`Level::to_text`]: the flat one-glyph-per-cell text
//!   format, and [`LevelLoader`] for reading a directory of such files.
//! - [`MazeGen`]: random lattice mazes that keep every room reachable.
//! - [`Level::annotate`] / [`Level::save`]: painting the route hint and
//!   writing the level back out.
//! - [`LevelPool`]: the set of template levels a driver plays from.

pub mod error;
pub mod level;
pub mod loader;
pub mod mapgen;
pub mod pool;
pub mod route;
pub mod text;
pub mod tile;

pub use error::{LevelError, Result};
pub use level::Level;
pub use loader::{LevelLoader, load_levels};
pub use mapgen::{GenConfig, GenReport, MAX_GENERATION_PASSES, MazeGen, generate_random_level};
pub use pool::LevelPool;
pub use tile::Tile;
