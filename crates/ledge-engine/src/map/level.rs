//! Level data loaded from JSON at startup.
//!
//! A level bundles the tile grid, the per-symbol tile table, and actor
//! spawns. Malformed data (ragged rows, symbols without a definition) is a
//! fatal load-time error — nothing is validated lazily at query time.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fatal configuration error: the level cannot be loaded.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("tile_size must be greater than zero")]
    ZeroTileSize,
    #[error("level grid has no rows or zero-width rows")]
    EmptyGrid,
    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("grid cell ({row}, {col}) uses unregistered symbol {symbol:?}")]
    UnknownSymbol {
        row: usize,
        col: usize,
        symbol: char,
    },
}

/// Solidity and appearance of one tile symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileDef {
    /// Whether physics treats this tile as an obstacle.
    pub solid: bool,
    /// Fill color for the host renderer (CSS color name or hex).
    pub color: String,
}

/// Player spawn parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSpawn {
    /// Top-left corner in pixels.
    pub pos: [f32; 2],
    /// Box width and height in pixels.
    pub size: [f32; 2],
    /// Horizontal speed in pixels per step.
    pub speed: f32,
    /// Upward impulse applied on jump.
    pub jump_impulse: f32,
}

impl Default for PlayerSpawn {
    fn default() -> Self {
        Self {
            pos: [50.0, 50.0],
            size: [16.0, 32.0],
            speed: 2.0,
            jump_impulse: 10.0,
        }
    }
}

/// A static collectible box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinSpawn {
    pub pos: [f32; 2],
    pub size: [f32; 2],
}

/// Enemy spawn parameters (data representation only — no AI).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub pos: [f32; 2],
    pub size: [f32; 2],
    pub speed: f32,
}

/// Complete level description as loaded from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelData {
    /// Pixels per tile edge. Must be > 0.
    pub tile_size: u32,
    /// Grid rows, top to bottom. Every row must have the same length.
    pub rows: Vec<String>,
    /// Symbol → solidity/appearance table. Every symbol appearing in
    /// `rows` must be present.
    pub tiles: HashMap<char, TileDef>,
    #[serde(default)]
    pub player: PlayerSpawn,
    #[serde(default)]
    pub coins: Vec<CoinSpawn>,
    #[serde(default)]
    pub enemies: Vec<EnemySpawn>,
}

impl LevelData {
    /// Parse a level from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// 3x5 fixture with a solid floor on the bottom row.
#[cfg(test)]
pub fn test_level() -> LevelData {
    let mut tiles = HashMap::new();
    tiles.insert(
        ' ',
        TileDef {
            solid: false,
            color: "black".to_string(),
        },
    );
    tiles.insert(
        'W',
        TileDef {
            solid: true,
            color: "green".to_string(),
        },
    );
    LevelData {
        tile_size: 16,
        rows: vec![
            "     ".to_string(),
            "     ".to_string(),
            "WWWWW".to_string(),
        ],
        tiles,
        player: PlayerSpawn::default(),
        coins: Vec::new(),
        enemies: Vec::new(),
    }
}
