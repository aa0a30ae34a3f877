//! Player controller: translates held input into velocity intent.

use glam::Vec2;

use crate::core::body::PhysicsBody;
use crate::input::state::{Action, InputState};
use crate::map::level::PlayerSpawn;
use crate::map::tilemap::{GridError, TileMap};

/// Player actor: a physics body plus movement tuning. Behavior lives in
/// free-standing update functions over shared body data, not a type
/// hierarchy.
#[derive(Debug)]
pub struct PlayerState {
    pub body: PhysicsBody,
    /// Horizontal speed in pixels per step.
    pub speed: f32,
    /// Upward impulse applied to `dy` on jump.
    pub jump_impulse: f32,
}

impl PlayerState {
    pub fn new(pos: Vec2, size: Vec2, speed: f32, jump_impulse: f32) -> Self {
        Self {
            body: PhysicsBody::new(pos, size),
            speed,
            jump_impulse,
        }
    }

    pub fn from_spawn(spawn: &PlayerSpawn) -> Self {
        Self::new(
            Vec2::from(spawn.pos),
            Vec2::from(spawn.size),
            spawn.speed,
            spawn.jump_impulse,
        )
    }

    /// Reset `dx` and apply every active action in activation order.
    /// Simultaneous left+right cannot happen with opposite-declaring
    /// bindings, but the controller does not assume it: the last-applied
    /// action wins.
    pub fn apply_input(&mut self, input: &InputState) {
        self.body.dx = 0.0;
        for action in input.actions() {
            match action {
                Action::MoveRight => self.body.dx = self.speed,
                Action::MoveLeft => self.body.dx = -self.speed,
                Action::Jump => {
                    if self.body.on_ground {
                        self.body.dy = self.jump_impulse;
                        self.body.on_ground = false;
                    }
                }
            }
        }
    }

    /// One frame: controller then physics.
    pub fn update(
        &mut self,
        input: &InputState,
        map: &TileMap,
        gravity_step: f32,
    ) -> Result<(), GridError> {
        self.apply_input(input);
        self.body.step(map, gravity_step)
    }
}
