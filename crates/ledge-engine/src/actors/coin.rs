use glam::Vec2;

use crate::core::aabb::Aabb;
use crate::map::level::CoinSpawn;

/// A static collectible box. Coins never move and are never resolved
/// against the grid; they only answer overlap queries.
#[derive(Debug, Clone)]
pub struct Coin {
    pub aabb: Aabb,
    pub collected: bool,
}

impl Coin {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            aabb: Aabb::new(pos, size),
            collected: false,
        }
    }

    pub fn from_spawn(spawn: &CoinSpawn) -> Self {
        Self::new(Vec2::from(spawn.pos), Vec2::from(spawn.size))
    }

    /// Collect on first overlap with the given box. Returns true only on
    /// the transition from uncollected to collected.
    pub fn try_collect(&mut self, other: &Aabb) -> bool {
        if self.collected || !self.aabb.intersects(other) {
            return false;
        }
        self.collected = true;
        true
    }
}
