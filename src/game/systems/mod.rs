//! Per-frame simulation systems.
//!
//! Each system owns exactly one kind of transient entity and is the
//! only writer of its collection; the collision system borrows the
//! others for a single resolution step after all movement is done.

pub mod collision_system;
pub mod particle_system;
pub mod projectile_system;

pub use collision_system::CollisionSystem;
pub use particle_system::{Emitter, Particle, ParticleSystem};
pub use projectile_system::{Projectile, ProjectileKind, ProjectileSystem};
