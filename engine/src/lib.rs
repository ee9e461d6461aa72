//! Zombie Rush Engine Library
//!
//! Simulation and collision core for a 2D side-scrolling shooter.
//! The library owns entity lifecycle, kinematics, and collision
//! resolution; rendering, asset decoding, raw input polling, and frame
//! timing are reached through narrow traits so platform backends stay
//! out of the simulation.
//!
//! # Modules
//!
//! - [`physics`] - Kinematic integration and the AABB collision predicate
//! - [`world`] - World bounds configuration derived from one scale factor
//! - [`input`] - Logical action state and the [`input::InputSource`] trait
//! - [`clock`] - Monotonic time and frame pacing
//! - [`render`] - [`render::Renderer`] / [`render::AssetProvider`] traits
//!
//! # Example
//!
//! ```ignore
//! use zombie_rush_engine::game::GameWorld;
//! use zombie_rush_engine::world::WorldConfig;
//! use zombie_rush_engine::clock::{Clock, SystemClock};
//! use zombie_rush_engine::input::InputSource;
//!
//! let config = WorldConfig::default();
//! let mut world = GameWorld::new(config, &mut assets)?;
//! let mut clock = SystemClock::new(config.target_fps);
//!
//! loop {
//!     world.step(&input, clock.now_ms());
//!     world.render(&mut renderer);
//!     clock.tick();
//! }
//! ```

pub mod clock;
pub mod input;
pub mod physics;
pub mod render;
pub mod world;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export world types for convenience
pub use world::WorldConfig;
// Re-export commonly used input types
pub use input::{ActionState, InputSource, ScriptedInput};
// Re-export the trait surface consumed by platform backends
pub use render::{AssetError, AssetProvider, Renderer, Rgb, Sprite};
