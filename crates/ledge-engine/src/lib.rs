pub mod core;
pub mod map;
pub mod input;
pub mod actors;
pub mod game;
pub mod render;

// Re-export key types at crate root for convenience
pub use core::aabb::Aabb;
pub use core::body::{PhysicsBody, GRAVITY_STEP};
pub use core::time::FixedTimestep;
pub use map::tilemap::{TileMap, GridError, cell_range};
pub use map::level::{LevelData, TileDef, PlayerSpawn, CoinSpawn, EnemySpawn, LevelError};
pub use input::queue::{InputEvent, InputQueue};
pub use input::state::{InputState, KeyBinding, Action};
pub use actors::player::PlayerState;
pub use actors::enemy::EnemyState;
pub use actors::coin::Coin;
pub use game::{GameState, GameConfig};
pub use render::{RectInstance, tile_instances, actor_instances, display_scale};
