//! Headless launcher for a small bordered level.
//!
//! Drives the runtime the way a windowed host would: queue key events,
//! pump them, run fixed steps, read back render instances. Run with
//! `RUST_LOG=info` to watch the player drop, land, and jump.

use anyhow::Result;
use ledge_engine::{
    actor_instances, display_scale, tile_instances, FixedTimestep, GameConfig, GameState,
    InputEvent, InputQueue, LevelData,
};

const LEVEL_JSON: &str = r#"{
    "tile_size": 16,
    "rows": [
        "WWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWW",
        "W                              W",
        "W                              W",
        "WW       WWWWWWWWWWWW          W",
        "W                              W",
        "W                              W",
        "W                              W",
        "WWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWW"
    ],
    "tiles": {
        "W": { "solid": true, "color": "green" },
        " ": { "solid": false, "color": "black" }
    },
    "coins": [
        { "pos": [80.0, 80.0], "size": [8.0, 8.0] }
    ]
}"#;

fn main() -> Result<()> {
    env_logger::init();

    let level = LevelData::from_json(LEVEL_JSON)?;
    let mut game = GameState::from_level(&level, GameConfig::default())?;
    let mut queue = InputQueue::new();
    let mut timestep = FixedTimestep::new(game.config().fixed_dt);

    log::info!(
        "display scale for a 720px viewport: {:.2}",
        display_scale(720.0, &game.map)
    );
    log::info!("{} tile instances", tile_instances(&game.map).len());

    // Scripted session: fall to the floor, then jump.
    let mut jumped = false;
    for frame in 0..600 {
        if game.player.body.on_ground && !jumped {
            queue.push(InputEvent::KeyDown {
                code: "Space".to_string(),
            });
            jumped = true;
        }

        game.pump_input(&mut queue);
        for _ in 0..timestep.accumulate(1.0 / 60.0) {
            game.step()?;
        }

        if frame % 60 == 0 {
            let body = &game.player.body;
            log::info!(
                "frame {frame}: pos=({:.1}, {:.1}) dy={:.2} on_ground={}",
                body.pos.x,
                body.pos.y,
                body.dy,
                body.on_ground
            );
        }
    }

    let body = &game.player.body;
    log::info!(
        "done: pos=({:.1}, {:.1}), {} actors drawn",
        body.pos.x,
        body.pos.y,
        actor_instances(&game).len()
    );
    Ok(())
}
