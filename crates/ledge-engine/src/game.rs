//! Explicit game state, constructed once at startup and threaded through
//! the frame loop: pump queued key events, step physics, then let the host
//! read positions for rendering. Single-threaded, frame-stepped; no state
//! lives outside this struct.

use crate::actors::coin::Coin;
use crate::actors::enemy::EnemyState;
use crate::actors::player::PlayerState;
use crate::core::body::GRAVITY_STEP;
use crate::input::queue::{InputEvent, InputQueue};
use crate::input::state::InputState;
use crate::map::level::{LevelData, LevelError};
use crate::map::tilemap::{GridError, TileMap};

/// Simulation tuning, provided by the host.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Per-step decrement applied to `dy` while airborne.
    pub gravity_step: f32,
    /// Fixed timestep in seconds for the host's loop.
    pub fixed_dt: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity_step: GRAVITY_STEP,
            fixed_dt: 1.0 / 60.0,
        }
    }
}

/// All mutable game state: the immutable map plus input and actors.
pub struct GameState {
    pub map: TileMap,
    pub input: InputState,
    pub player: PlayerState,
    pub enemies: Vec<EnemyState>,
    pub coins: Vec<Coin>,
    config: GameConfig,
}

impl GameState {
    /// Build the world from validated level data. Level errors are fatal:
    /// the game does not start.
    pub fn from_level(level: &LevelData, config: GameConfig) -> Result<Self, LevelError> {
        let map = TileMap::from_level(level)?;
        let player = PlayerState::from_spawn(&level.player);
        let enemies = level.enemies.iter().map(EnemyState::from_spawn).collect();
        let coins = level.coins.iter().map(Coin::from_spawn).collect();
        log::info!(
            "level loaded: {}x{} tiles ({} px), {} coins, {} enemies",
            map.width(),
            map.height(),
            map.tile_size(),
            level.coins.len(),
            level.enemies.len(),
        );
        Ok(Self {
            map,
            input: InputState::with_default_bindings(),
            player,
            enemies,
            coins,
            config,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Apply one key event to the input state machine.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown { code } => self.input.press(code),
            InputEvent::KeyUp { code } => self.input.release(code),
        }
    }

    /// Drain the host's event queue into the input state. Runs
    /// synchronously at the start of a frame, before any physics step.
    pub fn pump_input(&mut self, queue: &mut InputQueue) {
        for event in queue.drain() {
            self.handle_event(&event);
        }
    }

    /// One simulation frame: player controller + physics, then collectible
    /// overlap queries. Render output must be built only after this
    /// returns, so the host observes fully-resolved positions.
    pub fn step(&mut self) -> Result<(), GridError> {
        self.player
            .update(&self.input, &self.map, self.config.gravity_step)?;

        let player_box = self.player.body.aabb();
        for coin in &mut self.coins {
            if coin.try_collect(&player_box) {
                log::info!("coin collected at {:?}", coin.aabb.pos);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::level::{test_level, CoinSpawn};

    #[test]
    fn player_falls_and_rests_on_the_floor() {
        let mut level = test_level();
        // 8x8 body dropped from the top-left corner.
        level.player.pos = [0.0, 0.0];
        level.player.size = [8.0, 8.0];
        let mut game = GameState::from_level(&level, GameConfig::default()).unwrap();

        for _ in 0..600 {
            game.step().unwrap();
            if game.player.body.on_ground {
                break;
            }
        }

        assert!(game.player.body.on_ground);
        assert!((game.player.body.pos.y - 24.0).abs() < 0.001);
    }

    #[test]
    fn queued_events_drive_the_player() {
        let mut level = test_level();
        // Held above flush so the box's row range stays clear of the floor.
        level.player.pos = [0.0, 20.0];
        level.player.size = [8.0, 8.0];
        let mut game = GameState::from_level(&level, GameConfig::default()).unwrap();
        game.player.body.on_ground = true;

        let mut queue = InputQueue::new();
        queue.push(InputEvent::KeyDown {
            code: "KeyD".to_string(),
        });
        game.pump_input(&mut queue);
        assert!(queue.is_empty());
        game.step().unwrap();

        assert!(game.player.body.pos.x > 0.0);
    }

    #[test]
    fn coin_is_picked_up_exactly_once() {
        let mut level = test_level();
        level.player.pos = [0.0, 24.0];
        level.player.size = [8.0, 8.0];
        level.coins.push(CoinSpawn {
            pos: [2.0, 26.0],
            size: [4.0, 4.0],
        });
        let mut game = GameState::from_level(&level, GameConfig::default()).unwrap();
        game.player.body.on_ground = true;

        game.step().unwrap();
        assert!(game.coins[0].collected);

        // Staying overlapped does not "collect" again.
        game.step().unwrap();
        assert!(game.coins[0].collected);
    }

    #[test]
    fn jump_lifts_the_player_off_the_ground() {
        let mut level = test_level();
        level.player.pos = [0.0, 24.0];
        level.player.size = [8.0, 8.0];
        let mut game = GameState::from_level(&level, GameConfig::default()).unwrap();
        game.player.body.on_ground = true;

        game.handle_event(&InputEvent::KeyDown {
            code: "Space".to_string(),
        });
        game.step().unwrap();

        assert!(!game.player.body.on_ground);
        assert!(game.player.body.pos.y < 24.0, "y = {}", game.player.body.pos.y);
    }

    #[test]
    fn levels_with_bad_grids_do_not_start() {
        let mut level = test_level();
        level.rows[0] = "_____".to_string();
        assert!(GameState::from_level(&level, GameConfig::default()).is_err());
    }
}
