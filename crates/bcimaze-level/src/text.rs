//! The flat maze text format.
//!
//! ```text
//! Level name
//! -------
//! -X  +G-
//! -------
//! ```
//!
//! Line 1 is the level name; every following line is one grid row, one
//! glyph per column (see [`Tile::glyph`]). Rows shorter than the longest row
//! are padded with blank floor, trailing empty lines are ignored and `\r\n`
//! line endings are accepted.

use std::fmt::Write as _;
use std::str::FromStr;

use bcimaze_core::Point;

use crate::error::{LevelError, Result};
use crate::level::Level;
use crate::tile::Tile;

impl Level {
    /// Parse a level from maze text.
    ///
    /// The `X` glyph sets the player start and is stored as blank floor.
    /// Without one the player starts at `(width-2, height-2)` when that cell
    /// is open, otherwise at the first open cell in row-major order.
    pub fn parse(s: &str) -> Result<Level> {
        let mut lines = s.lines();
        let name = lines.next().ok_or(LevelError::Empty)?.trim_end().to_string();

        let mut rows: Vec<Vec<Tile>> = lines.map(|l| l.chars().map(Tile::from_glyph).collect()).collect();
        while rows.last().is_some_and(Vec::is_empty) {
            rows.pop();
        }
        if rows.is_empty() {
            return Err(LevelError::NoGrid { name });
        }

        let mut start = None;
        for (y, row) in rows.iter_mut().enumerate() {
            for (x, tile) in row.iter_mut().enumerate() {
                if *tile == Tile::Player {
                    start.get_or_insert(Point::new(x as i32, y as i32));
                    *tile = Tile::Blank;
                }
            }
        }

        let mut level = Level::from_rows(name, rows);
        let start = start
            .or_else(|| default_start(&level))
            .ok_or_else(|| LevelError::NoStart { name: level.name.clone() })?;
        level.set_player(start);
        Ok(level)
    }

    /// Render the level as maze text: the name line, then one line per row
    /// with the player cell written as `X`. Every line ends in `\n`.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(((self.width() + 1) * (self.height() + 1)) as usize);
        let _ = writeln!(out, "{}", self.name);
        for (y, row) in self.rows().enumerate() {
            for (x, tile) in row.iter().enumerate() {
                if Point::new(x as i32, y as i32) == self.player() {
                    out.push(Tile::Player.glyph());
                } else {
                    out.push(tile.glyph());
                }
            }
            out.push('\n');
        }
        out
    }
}

/// Where the player starts when the text carries no `X`.
fn default_start(level: &Level) -> Option<Point> {
    let corner = Point::new(level.width() - 2, level.height() - 2);
    if level.is_available(corner) {
        return Some(corner);
    }
    level.iter().find(|&(_, t)| t.is_passable()).map(|(p, _)| p)
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self> {
        Level::parse(s)
    }
}
