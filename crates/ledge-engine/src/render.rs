//! Per-frame render output: flat lists of colored rectangles the host
//! renderer fills. The renderer iterates tiles and actors independently and
//! reads nothing but position, size, and color; simulation coordinates are
//! always tile-grid pixel units, scaling is the host's concern.

use crate::game::GameState;
use crate::map::tilemap::TileMap;

const PLAYER_COLOR: &str = "red";
const ENEMY_COLOR: &str = "purple";
const COIN_COLOR: &str = "gold";

/// One filled rectangle, in tile-grid pixel units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectInstance<'a> {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub color: &'a str,
}

/// Build one instance per grid cell, row-major.
pub fn tile_instances(map: &TileMap) -> Vec<RectInstance<'_>> {
    let ts = map.tile_size();
    let mut instances = Vec::with_capacity(map.width() * map.height());
    for row in 0..map.height() {
        for col in 0..map.width() {
            // Indices iterate the grid bounds, so the queries cannot fail.
            let Ok(id) = map.tile_at(row, col) else {
                continue;
            };
            let Some(color) = map.color_of(id) else {
                continue;
            };
            instances.push(RectInstance {
                x: col as f32 * ts,
                y: row as f32 * ts,
                w: ts,
                h: ts,
                color,
            });
        }
    }
    instances
}

/// Build instances for the player, live enemies, and uncollected coins.
/// Call only after the frame's physics steps have completed.
pub fn actor_instances(state: &GameState) -> Vec<RectInstance<'static>> {
    let mut instances = Vec::with_capacity(1 + state.enemies.len() + state.coins.len());

    let body = &state.player.body;
    instances.push(RectInstance {
        x: body.pos.x,
        y: body.pos.y,
        w: body.size.x,
        h: body.size.y,
        color: PLAYER_COLOR,
    });

    for enemy in state.enemies.iter().filter(|e| e.alive) {
        instances.push(RectInstance {
            x: enemy.body.pos.x,
            y: enemy.body.pos.y,
            w: enemy.body.size.x,
            h: enemy.body.size.y,
            color: ENEMY_COLOR,
        });
    }

    for coin in state.coins.iter().filter(|c| !c.collected) {
        instances.push(RectInstance {
            x: coin.aabb.pos.x,
            y: coin.aabb.pos.y,
            w: coin.aabb.size.x,
            h: coin.aabb.size.y,
            color: COIN_COLOR,
        });
    }

    instances
}

/// Presentation scale factor fitting the whole map height into the
/// viewport. Recomputed on resize; never fed back into the simulation.
pub fn display_scale(viewport_height: f32, map: &TileMap) -> f32 {
    viewport_height / (map.height() as f32 * map.tile_size())
}
