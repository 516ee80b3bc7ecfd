//! Reading a directory of maze files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LevelError, Result};
use crate::level::Level;

/// Default extension of maze files.
pub const MAZE_EXTENSION: &str = "maze";

/// Loads every maze file of a directory.
#[derive(Debug, Clone)]
pub struct LevelLoader {
    /// File extension (without the dot) that marks a maze file. Matched
    /// case-sensitively; files without an extension are never loaded.
    pub extension: String,
}

impl Default for LevelLoader {
    fn default() -> Self {
        Self {
            extension: MAZE_EXTENSION.to_string(),
        }
    }
}

impl LevelLoader {
    /// Load every maze file directly inside `dir`, in file-name order.
    ///
    /// Files that cannot be read or parsed are logged and skipped. Only a
    /// failure to list `dir` itself is an error.
    pub fn load(&self, dir: &Path) -> Result<Vec<Level>> {
        let entries = fs::read_dir(dir).map_err(|source| LevelError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| match entry {
                Ok(e) => Some(e.path()),
                Err(err) => {
                    log::warn!("skipping unreadable entry in {}: {err}", dir.display());
                    None
                }
            })
            .filter(|p| p.is_file() && self.matches(p))
            .collect();
        files.sort();

        let mut levels = Vec::with_capacity(files.len());
        for file in files {
            match self.load_file(&file) {
                Ok(level) => {
                    log::debug!(
                        "loaded level {:?} ({}x{}) from {}",
                        level.name,
                        level.width(),
                        level.height(),
                        file.display()
                    );
                    levels.push(level);
                }
                Err(err) => log::warn!("skipping maze file {}: {err}", file.display()),
            }
        }

        log::info!("loaded {} level(s) from {}", levels.len(), dir.display());
        Ok(levels)
    }

    /// Read and parse a single maze file.
    pub fn load_file(&self, path: &Path) -> Result<Level> {
        let content = fs::read_to_string(path).map_err(|source| LevelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Level::parse(&content)
    }

    fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == self.extension)
    }
}

/// Load every `.maze` file in `dir` with the default [`LevelLoader`].
pub fn load_levels(dir: impl AsRef<Path>) -> Result<Vec<Level>> {
    LevelLoader::default().load(dir.as_ref())
}
