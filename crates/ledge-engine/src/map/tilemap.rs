//! Immutable tile grid with per-symbol solidity and appearance lookup.
//!
//! The grid is validated once at load time ([`TileMap::from_level`]) and is
//! read-only during gameplay. Queries are bounds-checked: indexing outside
//! the grid is a [`GridError`], never a silent clamp — callers clamp indices
//! derived from continuous coordinates before querying.

use std::collections::HashMap;

use thiserror::Error;

use crate::map::level::{LevelData, LevelError, TileDef};

/// Tile query outside the grid bounds. This is a programming error on the
/// caller's side and is surfaced immediately rather than recovered from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("tile query ({row}, {col}) outside {height}x{width} grid")]
pub struct GridError {
    pub row: usize,
    pub col: usize,
    pub width: usize,
    pub height: usize,
}

/// Inclusive range of tile indices overlapped by the pixel interval
/// `[pixel_min, pixel_max]`: floor division for the lower bound, floor
/// division of the inclusive upper pixel for the upper bound. An interval
/// whose upper edge sits exactly on a tile boundary covers the boundary
/// tile as well — collision resolution depends on this exact rounding.
pub fn cell_range(pixel_min: f32, pixel_max: f32, tile_size: f32) -> (i32, i32) {
    (
        (pixel_min / tile_size).floor() as i32,
        (pixel_max / tile_size).floor() as i32,
    )
}

/// Tile grid in row-major order, each cell a symbol with a registered
/// [`TileDef`] (solidity + color).
#[derive(Debug, Clone)]
pub struct TileMap {
    width: usize,
    height: usize,
    tile_size: f32,
    rows: Vec<Vec<char>>,
    defs: HashMap<char, TileDef>,
}

impl TileMap {
    /// Build a map from level data, validating every invariant up front:
    /// positive tile size, non-empty grid, equal-width rows, and a
    /// registered definition for every symbol appearing in the grid.
    pub fn from_level(level: &LevelData) -> Result<Self, LevelError> {
        if level.tile_size == 0 {
            return Err(LevelError::ZeroTileSize);
        }
        let rows: Vec<Vec<char>> = level.rows.iter().map(|r| r.chars().collect()).collect();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        if width == 0 {
            return Err(LevelError::EmptyGrid);
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(LevelError::RaggedRow {
                    row: i,
                    expected: width,
                    got: row.len(),
                });
            }
            for (j, &symbol) in row.iter().enumerate() {
                if !level.tiles.contains_key(&symbol) {
                    return Err(LevelError::UnknownSymbol {
                        row: i,
                        col: j,
                        symbol,
                    });
                }
            }
        }
        Ok(Self {
            width,
            height: rows.len(),
            tile_size: level.tile_size as f32,
            rows,
            defs: level.tiles.clone(),
        })
    }

    /// Width in tiles.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in tiles.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Edge length of one tile in pixels.
    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// The symbol at (row, col). Bounds-checked.
    pub fn tile_at(&self, row: usize, col: usize) -> Result<char, GridError> {
        if row >= self.height || col >= self.width {
            return Err(GridError {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.rows[row][col])
    }

    /// Whether the tile at (row, col) blocks movement. Bounds-checked.
    /// Unknown symbols cannot occur here — they are rejected at load time.
    pub fn is_solid(&self, row: usize, col: usize) -> Result<bool, GridError> {
        let id = self.tile_at(row, col)?;
        Ok(self.defs.get(&id).is_some_and(|d| d.solid))
    }

    /// Fill color registered for a symbol.
    pub fn color_of(&self, id: char) -> Option<&str> {
        self.defs.get(&id).map(|d| d.color.as_str())
    }
}
