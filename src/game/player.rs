//! Player agent.
//!
//! Horizontal velocity is set directly from the sampled input each
//! frame - no acceleration or friction. Vertical motion follows the
//! shared integration policy with a ground clamp. The two weapons are
//! gated by independent cooldowns; firing the gun also spawns a muzzle
//! burst at a facing-dependent offset.

use glam::Vec2;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::game::systems::particle_system::ParticleSystem;
use crate::game::systems::projectile_system::{ProjectileKind, ProjectileSystem};
use crate::game::types::{Cooldown, Facing};
use crate::input::ActionState;
use crate::physics::collision::{Aabb, BoundingBox};
use crate::render::{Renderer, Sprite};
use crate::world::WorldConfig;

/// Movement and weapon tuning for the player.
///
/// Speeds are per-frame quantities tuned against the fixed step rate;
/// delays are wall-clock milliseconds compared against the [`Clock`]
/// (crate::clock::Clock).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerTuning {
    /// Walk speed in pixels per frame.
    pub speed: f32,
    /// Upward velocity applied on jump (negative is up).
    pub jump_speed: f32,
    /// Downward acceleration while airborne.
    pub gravity: f32,
    /// Re-arm delay of the gun.
    pub shoot_delay_ms: u64,
    /// Re-arm delay of the grenade throw.
    pub grenade_delay_ms: u64,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: 5.0,
            jump_speed: -15.0,
            gravity: 2.0,
            shoot_delay_ms: 200,
            grenade_delay_ms: 750,
        }
    }
}

/// The player agent.
pub struct Player {
    /// Top-left position
    pub position: Vec2,
    /// Per-frame displacement
    pub velocity: Vec2,
    /// Direction the player (and any shot fired) faces
    pub facing: Facing,
    /// Set while standing on the ground line
    pub on_ground: bool,
    /// Remaining health; the agent is alive while this is positive
    pub health: i32,
    /// Bounding width (sprite-derived)
    pub width: f32,
    /// Bounding height (sprite-derived)
    pub height: f32,
    shoot: Cooldown,
    grenade: Cooldown,
    tuning: PlayerTuning,
    sprite: Sprite,
}

impl Player {
    /// Create a player at the top-left corner with default tuning.
    pub fn new(sprite: Sprite) -> Self {
        Self::with_tuning(sprite, PlayerTuning::default())
    }

    /// Create a player with custom tuning.
    pub fn with_tuning(sprite: Sprite, tuning: PlayerTuning) -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            facing: Facing::Right,
            on_ground: false,
            health: 3,
            width: sprite.width,
            height: sprite.height,
            shoot: Cooldown::new(tuning.shoot_delay_ms),
            grenade: Cooldown::new(tuning.grenade_delay_ms),
            tuning,
            sprite,
        }
    }

    /// Whether the agent still takes part in the simulation.
    #[inline]
    pub fn alive(&self) -> bool {
        self.health > 0
    }

    /// Whether the gun may fire right now.
    pub fn can_shoot(&self) -> bool {
        self.shoot.armed()
    }

    /// Whether a grenade may be thrown right now.
    pub fn can_throw_grenade(&self) -> bool {
        self.grenade.armed()
    }

    /// Advance one frame: re-arm elapsed cooldowns, apply the sampled
    /// input (firing gated weapons), then integrate motion.
    pub fn update(
        &mut self,
        actions: ActionState,
        now_ms: u64,
        config: &WorldConfig,
        projectiles: &mut ProjectileSystem,
        particles: &mut ParticleSystem,
    ) {
        self.shoot.update(now_ms);
        self.grenade.update(now_ms);
        self.apply_controls(actions, now_ms, config, projectiles, particles);
        self.integrate(config);
    }

    /// Translate held actions into velocity and weapon fire.
    fn apply_controls(
        &mut self,
        actions: ActionState,
        now_ms: u64,
        config: &WorldConfig,
        projectiles: &mut ProjectileSystem,
        particles: &mut ParticleSystem,
    ) {
        // Instantaneous horizontal velocity; facing follows the last
        // nonzero input
        let axis = actions.horizontal_axis();
        self.velocity.x = axis as f32 * self.tuning.speed;
        self.facing = Facing::from_velocity(self.velocity.x, self.facing);

        if actions.jump && self.on_ground {
            self.velocity.y = self.tuning.jump_speed;
            self.on_ground = false;
        }

        if actions.shoot && self.shoot.try_use(now_ms) {
            let muzzle = self.projectile_spawn(config);
            projectiles.fire(ProjectileKind::Bullet, muzzle, self.facing);
            particles.muzzle_flash(self.muzzle_flash_origin(config), self.facing);
            debug!("player shot from {}", muzzle);
        }

        if actions.throw_grenade && self.grenade.try_use(now_ms) {
            let muzzle = self.projectile_spawn(config);
            projectiles.fire(ProjectileKind::Grenade, muzzle, self.facing);
            debug!("player threw grenade from {}", muzzle);
        }
    }

    /// Spawn point of a projectile, at the weapon muzzle for either
    /// facing.
    fn projectile_spawn(&self, config: &WorldConfig) -> Vec2 {
        let x = match self.facing {
            Facing::Right => self.position.x + self.width,
            Facing::Left => self.position.x - config.scale,
        };
        Vec2::new(x, self.position.y + 2.0 * config.scale)
    }

    /// Origin of the muzzle burst, just inside the barrel.
    fn muzzle_flash_origin(&self, config: &WorldConfig) -> Vec2 {
        let x = match self.facing {
            Facing::Right => self.position.x + self.width - config.scale,
            Facing::Left => self.position.x + config.scale - 1.0,
        };
        Vec2::new(x, self.position.y + 2.0 * config.scale)
    }

    /// Shared integration policy plus the ground clamp.
    fn integrate(&mut self, config: &WorldConfig) {
        self.position += self.velocity;

        if self.on_ground {
            self.velocity.y = 0.0;
        } else {
            self.velocity.y += self.tuning.gravity;
        }

        if self.position.y + self.height >= config.ground_y() {
            self.position.y = config.ground_y() - self.height;
            self.velocity.y = 0.0;
            self.on_ground = true;
        }
    }

    /// Draw the player, mirrored when facing left.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.draw_sprite(
            &self.sprite,
            self.position.x,
            self.position.y,
            self.facing == Facing::Left,
        );
    }
}

impl BoundingBox for Player {
    fn bounds(&self) -> Aabb {
        Aabb::from_pos(self.position, self.width, self.height)
    }
}
