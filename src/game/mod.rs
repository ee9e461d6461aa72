//! Game simulation modules.
//!
//! Everything above the engine primitives: agents, projectiles,
//! particles, the collision resolver, and the composition root that
//! steps them in order each frame.

pub mod player;
pub mod scenery;
pub mod sprites;
pub mod state;
pub mod systems;
pub mod types;
pub mod zombies;

pub use player::Player;
pub use state::GameWorld;
pub use types::Facing;
pub use zombies::{Zombie, ZombieKind, ZombieManager};
