//! The [`Level`] type: one maze instance.

use std::sync::atomic::{AtomicU64, Ordering};

use bcimaze_core::{Action, Point, Range};
use bcimaze_paths::Pather;

use crate::tile::Tile;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// A rectangular maze grid with a player position.
///
/// Cells are stored row-major. The player cell is kept in bounds and off
/// walls by every mutator on this type.
///
/// `Clone` is a deep copy: the clone gets its own grid, so a template level
/// stays untouched while its copy is played.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Level {
    id: u64,
    /// Display name. Loaded levels take it from the first line of the file.
    pub name: String,
    width: i32,
    height: i32,
    cells: Vec<Tile>,
    player: Point,
}

impl Level {
    /// Create a `width` × `height` level filled with `fill`, with a fresh id
    /// and the player at the origin.
    pub fn new(name: impl Into<String>, width: i32, height: i32, fill: Tile) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            name: name.into(),
            width,
            height,
            cells: vec![fill; (width * height) as usize],
            player: Point::ZERO,
        }
    }

    /// Build a level from rows of tiles. Short rows are padded with
    /// [`Tile::Blank`] up to the longest row.
    pub fn from_rows(name: impl Into<String>, rows: Vec<Vec<Tile>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0) as i32;
        let mut level = Self::new(name, width, rows.len() as i32, Tile::Blank);
        for (y, row) in rows.into_iter().enumerate() {
            for (x, tile) in row.into_iter().enumerate() {
                level.set_tile(Point::new(x as i32, y as i32), tile);
            }
        }
        level
    }

    /// Identifier assigned at creation. Copies share their template's id;
    /// `0` marks the uninitialized default level.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Whether this level was actually created rather than defaulted.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.id != 0
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The grid rectangle.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::of_size(self.width, self.height)
    }

    /// Current player cell.
    #[inline]
    pub fn player(&self) -> Point {
        self.player
    }

    /// Move the player to `p`. Refused (returning `false`) when `p` is out of
    /// bounds or a wall.
    pub fn set_player(&mut self, p: Point) -> bool {
        if !self.is_available(p) {
            return false;
        }
        self.player = p;
        true
    }

    /// Whether the player could stand on `p`: in bounds and not a wall.
    #[inline]
    pub fn is_available(&self, p: Point) -> bool {
        self.tile(p).is_some_and(Tile::is_passable)
    }

    /// The tile at `p`, or `None` outside the grid.
    #[inline]
    pub fn tile(&self, p: Point) -> Option<Tile> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Overwrite the tile at `p`. No-op outside the grid.
    pub fn set_tile(&mut self, p: Point, tile: Tile) {
        if let Some(i) = self.index(p) {
            self.cells[i] = tile;
        }
    }

    /// The tile the player is standing on.
    #[inline]
    pub fn player_tile(&self) -> Tile {
        self.tile(self.player).unwrap_or_default()
    }

    /// The tile one step from the player in direction `action`.
    #[inline]
    pub fn tile_towards(&self, action: Action) -> Option<Tile> {
        self.tile(action.apply(self.player))
    }

    /// Row `y` of the grid.
    pub fn row(&self, y: i32) -> Option<&[Tile]> {
        if y < 0 || y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = y as usize * w;
        Some(&self.cells[start..start + w])
    }

    /// Iterate over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Row-major iterator over `(Point, Tile)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }

    /// Position of the last `tile` in row-major order.
    pub fn find(&self, tile: Tile) -> Option<Point> {
        self.iter().filter(|&(_, t)| t == tile).map(|(p, _)| p).last()
    }

    /// Number of cells holding `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|&&t| t == tile).count()
    }

    /// An independent deep copy of this level.
    pub fn copy(&self) -> Level {
        self.clone()
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds().contains(p) {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }
}

/// Neighbours are expanded left, up, right, down.
impl Pather for Level {
    fn bounds(&self) -> Range {
        Level::bounds(self)
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for a in [Action::Left, Action::Up, Action::Right, Action::Down] {
            let n = a.apply(p);
            if self.is_available(n) {
                buf.push(n);
            }
        }
    }
}
