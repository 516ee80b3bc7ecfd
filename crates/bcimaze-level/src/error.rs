use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for level operations.
pub type Result<T> = std::result::Result<T, LevelError>;

/// Errors raised while reading, writing or generating levels.
#[derive(Debug, Error)]
pub enum LevelError {
    /// The level directory itself could not be listed.
    #[error("cannot list level directory {path}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single maze file could not be read.
    #[error("cannot read maze file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A level could not be written.
    #[error("cannot write maze file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The text contained no name line.
    #[error("maze text is empty")]
    Empty,

    /// The text had a name line but no grid rows.
    #[error("maze {name:?} has no grid rows")]
    NoGrid { name: String },

    /// Every cell of the grid is a wall, so the player has nowhere to stand.
    #[error("maze {name:?} has no open cell for the player")]
    NoStart { name: String },

    /// Generator size bounds are inconsistent or too small.
    #[error(
        "invalid maze bounds: width {min_width}..={max_width}, height {min_height}..={max_height} (minimum 3)"
    )]
    InvalidBounds {
        min_width: i32,
        max_width: i32,
        min_height: i32,
        max_height: i32,
    },

    /// A pool lookup was made on a pool with no levels.
    #[error("level pool is empty")]
    PoolEmpty,

    /// No level in the pool matched the requested index or id.
    #[error("no level {0} in the pool")]
    UnknownLevel(u64),
}
