//! Grid-collision physics body.
//!
//! Sign convention, used consistently throughout the crate: the y axis
//! grows downward (screen coordinates), while `dy` is positive when the
//! body moves up. Vertical integration is therefore `pos.y -= dy`, and
//! gravity decays `dy` by a fixed amount per step, pulling it toward
//! negative values (downward motion).
//!
//! Each step resolves one axis at a time: integrate x, clamp against solid
//! tiles, then — only while airborne — integrate y, apply gravity, and
//! clamp again. Resting bodies (`on_ground`) skip the vertical phase
//! entirely until a jump clears the flag.

use glam::Vec2;

use crate::core::aabb::Aabb;
use crate::map::tilemap::{cell_range, GridError, TileMap};

/// Default per-step decrement applied to `dy` while airborne.
pub const GRAVITY_STEP: f32 = 0.1;

enum Axis {
    X,
    Y,
}

/// Axis-aligned box with velocity, resolved against the tile grid one axis
/// at a time. One instance per moving actor; owned by the gameplay layer.
#[derive(Debug, Clone)]
pub struct PhysicsBody {
    /// Top-left corner in pixels.
    pub pos: Vec2,
    /// Box width and height in pixels. Fixed after creation.
    pub size: Vec2,
    /// Horizontal velocity, set by the controller each step and never
    /// decayed or zeroed by physics.
    pub dx: f32,
    /// Vertical velocity; positive = moving up.
    pub dy: f32,
    /// Resting on a solid tile. Cleared only by a jump.
    pub on_ground: bool,
}

impl PhysicsBody {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            dx: 0.0,
            dy: 0.0,
            on_ground: false,
        }
    }

    /// The body's current bounding box.
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Advance one physics step: horizontal integrate + resolve, then the
    /// vertical phase while airborne.
    pub fn step(&mut self, map: &TileMap, gravity_step: f32) -> Result<(), GridError> {
        self.pos.x += self.dx;
        self.resolve(map, Axis::X)?;

        if !self.on_ground {
            self.pos.y -= self.dy;
            self.dy -= gravity_step;
            self.resolve(map, Axis::Y)?;
        }
        Ok(())
    }

    /// Clamp the box against every solid tile in the range it covers.
    ///
    /// The range is recomputed from the moved box on both axes and clamped
    /// to the grid before querying (indices derived from continuous
    /// coordinates must never reach `tile_at` out of range). Each solid
    /// cell re-clamps the position; clamps for a single direction of
    /// travel are idempotent, so visiting order does not matter.
    fn resolve(&mut self, map: &TileMap, axis: Axis) -> Result<(), GridError> {
        let ts = map.tile_size();
        let (row_lo, row_hi) = cell_range(self.pos.y, self.pos.y + self.size.y, ts);
        let (col_lo, col_hi) = cell_range(self.pos.x, self.pos.x + self.size.x, ts);

        let last_row = (map.height() - 1) as i32;
        let last_col = (map.width() - 1) as i32;
        let row_lo = row_lo.clamp(0, last_row);
        let row_hi = row_hi.clamp(0, last_row);
        let col_lo = col_lo.clamp(0, last_col);
        let col_hi = col_hi.clamp(0, last_col);

        for row in row_lo..=row_hi {
            for col in col_lo..=col_hi {
                if !map.is_solid(row as usize, col as usize)? {
                    continue;
                }
                match axis {
                    Axis::X => {
                        if self.dx > 0.0 {
                            // Right edge flush with the blocking column's
                            // left edge.
                            self.pos.x = col as f32 * ts - self.size.x;
                        }
                        if self.dx < 0.0 {
                            self.pos.x = (col + 1) as f32 * ts;
                        }
                    }
                    Axis::Y => {
                        if self.dy > 0.0 {
                            // Moving up: top edge flush with the blocking
                            // row's bottom edge.
                            self.pos.y = (row + 1) as f32 * ts;
                            self.dy = 0.0;
                        }
                        if self.dy < 0.0 {
                            // Moving down: bottom edge flush with the
                            // blocking row's top edge — the body lands.
                            self.pos.y = row as f32 * ts - self.size.y;
                            self.dy = 0.0;
                            self.on_ground = true;
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
