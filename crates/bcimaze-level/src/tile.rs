//! Cell kinds and their one-character glyphs.

use std::fmt;

/// The semantic kind of one maze cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// Player start marker. Only appears in text; loaded grids store the
    /// start cell as [`Tile::Blank`].
    Player,
    Wall,
    #[default]
    Blank,
    Goal,
    /// Part of the hinted correct path.
    Route,
    /// Forces the player off the hinted path without being shown.
    HiddenError,
    /// A visible point of error.
    Error,
}

impl Tile {
    /// Every tile kind, in declaration order.
    pub const ALL: [Tile; 7] = [
        Tile::Player,
        Tile::Wall,
        Tile::Blank,
        Tile::Goal,
        Tile::Route,
        Tile::HiddenError,
        Tile::Error,
    ];

    /// The character used for this tile in maze files.
    pub const fn glyph(self) -> char {
        match self {
            Tile::Player => 'X',
            Tile::Wall => '-',
            Tile::Blank => ' ',
            Tile::Goal => 'G',
            Tile::Route => '+',
            Tile::HiddenError => 'H',
            Tile::Error => 'E',
        }
    }

    /// Decode a glyph. Unknown characters are blank floor.
    pub const fn from_glyph(ch: char) -> Tile {
        match ch {
            'X' => Tile::Player,
            '-' => Tile::Wall,
            'G' => Tile::Goal,
            '+' => Tile::Route,
            'H' => Tile::HiddenError,
            'E' => Tile::Error,
            _ => Tile::Blank,
        }
    }

    /// Whether the player may stand on this tile.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Tile::Wall)
    }

    /// Whether this tile lies on, or marks, the intended path: the
    /// destinations a careful player is expected to step onto.
    #[inline]
    pub const fn is_on_route(self) -> bool {
        matches!(self, Tile::Goal | Tile::Route | Tile::Error)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
