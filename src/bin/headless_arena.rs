//! Headless arena runner.
//!
//! Drives the full simulation loop without a graphics backend: a
//! scripted input source walks the player right and fires, the null
//! asset provider stands in for the atlas, and a counting renderer
//! tallies draw calls so the run has something observable. Useful for
//! smoke-testing the frame loop and for profiling.
//!
//! Usage:
//!   headless-arena [frames] [config.json]
//!
//! `config.json`, when given, deserializes into [`WorldConfig`] and
//! overrides the default world bounds.

use std::env;
use std::fs;
use std::process::ExitCode;

use log::{error, info};

use zombie_rush_engine::clock::{Clock, ManualClock};
use zombie_rush_engine::game::GameWorld;
use zombie_rush_engine::input::{ActionState, ScriptedInput};
use zombie_rush_engine::render::{NullAssets, Renderer, Rgb, Sprite};
use zombie_rush_engine::world::WorldConfig;

/// Frames simulated when none are requested.
const DEFAULT_FRAMES: u64 = 600;

/// Renderer that only counts what it is asked to draw.
#[derive(Default)]
struct CountingRenderer {
    sprites: u64,
    rects: u64,
}

impl Renderer for CountingRenderer {
    fn draw_sprite(&mut self, _sprite: &Sprite, _x: f32, _y: f32, _flipped: bool) {
        self.sprites += 1;
    }

    fn draw_rect(&mut self, _color: Rgb, _x: f32, _y: f32, _w: f32, _h: f32) {
        self.rects += 1;
    }
}

/// Walk right for a second, then alternate shooting and walking.
fn demo_script(frames: u64) -> ScriptedInput {
    let walk = ActionState {
        move_right: true,
        ..Default::default()
    };
    let walk_and_shoot = ActionState {
        move_right: true,
        shoot: true,
        ..Default::default()
    };
    let jump_and_lob = ActionState {
        move_right: true,
        jump: true,
        throw_grenade: true,
        ..Default::default()
    };

    let mut states = Vec::with_capacity(frames as usize);
    for frame in 0..frames {
        states.push(match frame {
            0..=59 => walk,
            f if f % 180 < 60 => walk_and_shoot,
            f if f % 180 < 90 => jump_and_lob,
            _ => walk,
        });
    }
    ScriptedInput::new(states)
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1);
    let frames: u64 = match args.next() {
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("frame count must be a number, got {:?}", raw))?,
        None => DEFAULT_FRAMES,
    };

    let config = match args.next() {
        Some(path) => {
            let raw = fs::read_to_string(&path)
                .map_err(|e| format!("cannot read config {}: {}", path, e))?;
            serde_json::from_str(&raw).map_err(|e| format!("bad config {}: {}", path, e))?
        }
        None => WorldConfig::default(),
    };

    let mut assets = NullAssets::new();
    let mut world =
        GameWorld::new(config, &mut assets).map_err(|e| format!("asset setup failed: {}", e))?;
    let mut input = demo_script(frames);
    let mut clock = ManualClock::new(config.frame_ms());
    let mut renderer = CountingRenderer::default();

    info!(
        "running {} frames in a {}x{} world",
        frames,
        config.width(),
        config.height()
    );

    for _ in 0..frames {
        world.step(&input, clock.now_ms());
        world.render(&mut renderer);
        input.advance();
        clock.tick();
    }

    info!(
        "done: player at {}, {} zombies, {} projectiles, {} live particles, \
         {} sprite draws, {} rect draws",
        world.player.position,
        world.zombies.len(),
        world.projectiles.active_count(),
        world.particles.particle_count(),
        renderer.sprites,
        renderer.rects
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{}", message);
            ExitCode::FAILURE
        }
    }
}
