use glam::Vec2;

use crate::core::body::PhysicsBody;
use crate::map::level::EnemySpawn;

/// Enemy actor. Data representation only: enemies share the physics body
/// contract but no behavior drives them.
#[derive(Debug)]
pub struct EnemyState {
    pub body: PhysicsBody,
    /// Horizontal speed in pixels per step.
    pub speed: f32,
    pub alive: bool,
}

impl EnemyState {
    pub fn new(pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            body: PhysicsBody::new(pos, size),
            speed,
            alive: true,
        }
    }

    pub fn from_spawn(spawn: &EnemySpawn) -> Self {
        Self::new(Vec2::from(spawn.pos), Vec2::from(spawn.size), spawn.speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enemies_spawn_alive() {
        let e = EnemyState::new(Vec2::new(10.0, 20.0), Vec2::new(16.0, 16.0), 1.0);
        assert!(e.alive);
        assert!((e.body.pos.x - 10.0).abs() < 0.001);
        assert!(!e.body.on_ground);
    }
}
