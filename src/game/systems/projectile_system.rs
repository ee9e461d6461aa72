//! Projectile lifecycle management system.
//!
//! Owns the collection of active projectiles, providing fire / update /
//! remove operations with no rendering coupling. Bullets fly level at a
//! fixed speed; grenades arc under gravity. The direction sign is used
//! only at spawn to set the initial velocity.

use glam::Vec2;
use log::debug;

use crate::game::types::Facing;
use crate::physics::collision::{Aabb, BoundingBox};
use crate::physics::kinematics::KinematicBody;
use crate::render::Sprite;
use crate::world::WorldConfig;

/// Horizontal speed of both projectile kinds (pixels per frame).
const PROJECTILE_SPEED: f32 = 8.0;
/// Initial upward velocity of a grenade lob.
const GRENADE_LAUNCH_VY: f32 = -10.0;
/// Downward acceleration on a grenade (pixels per frame squared).
const GRENADE_GRAVITY: f32 = 1.0;

/// Projectile archetype used for gameplay behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileKind {
    /// Straight shot, no gravity
    Bullet,
    /// Lobbed arc under constant gravity
    Grenade,
}

/// A live projectile in flight.
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    /// Gameplay type of this projectile
    pub kind: ProjectileKind,
    /// Position, velocity, and gravity state
    pub body: KinematicBody,
    /// Bounding width (sprite-derived)
    pub width: f32,
    /// Bounding height (sprite-derived)
    pub height: f32,
    /// Facing at the moment of firing
    pub facing: Facing,
}

impl Projectile {
    /// Direction sign the projectile was fired with.
    #[inline]
    pub fn direction(&self) -> f32 {
        self.facing.sign()
    }
}

impl BoundingBox for Projectile {
    fn bounds(&self) -> Aabb {
        Aabb::from_pos(self.body.position, self.width, self.height)
    }
}

/// Manages the full lifecycle of player-fired projectiles.
///
/// The system integrates and despawns on its own; removal driven by
/// collision results comes back through [`ProjectileSystem::remove_many`]
/// so indices stay valid for a full resolution pass.
#[derive(Debug)]
pub struct ProjectileSystem {
    projectiles: Vec<Projectile>,
    bullet_size: Vec2,
    grenade_size: Vec2,
}

impl ProjectileSystem {
    /// Create an empty system with sprite-derived projectile sizes.
    pub fn new(bullet_sprite: &Sprite, grenade_sprite: &Sprite) -> Self {
        Self {
            projectiles: Vec::new(),
            bullet_size: Vec2::new(bullet_sprite.width, bullet_sprite.height),
            grenade_size: Vec2::new(grenade_sprite.width, grenade_sprite.height),
        }
    }

    /// Spawn a projectile at the given muzzle position.
    pub fn fire(&mut self, kind: ProjectileKind, origin: Vec2, facing: Facing) {
        let sign = facing.sign();
        let (body, size) = match kind {
            ProjectileKind::Bullet => (
                KinematicBody::ballistic_free(origin, Vec2::new(PROJECTILE_SPEED * sign, 0.0)),
                self.bullet_size,
            ),
            ProjectileKind::Grenade => (
                KinematicBody::new(
                    origin,
                    Vec2::new(PROJECTILE_SPEED * sign, GRENADE_LAUNCH_VY),
                    GRENADE_GRAVITY,
                ),
                self.grenade_size,
            ),
        };

        debug!("fired {:?} at {} facing {:?}", kind, origin, facing);
        self.projectiles.push(Projectile {
            kind,
            body,
            width: size.x,
            height: size.y,
            facing,
        });
    }

    /// Integrate every projectile one frame and despawn leavers.
    ///
    /// All projectiles despawn once entirely outside the horizontal
    /// range; grenades additionally despawn once they fall below the
    /// world rectangle, so one lobbed into the ground cannot live
    /// forever.
    pub fn update(&mut self, config: &WorldConfig) {
        for projectile in &mut self.projectiles {
            projectile.body.integrate();
        }

        self.projectiles.retain(|p| {
            let off_side = config.outside_horizontal(p.body.position.x, p.width);
            let below = p.kind == ProjectileKind::Grenade && p.body.position.y > config.height();
            if off_side || below {
                debug!("{:?} left the world at {}", p.kind, p.body.position);
            }
            !(off_side || below)
        });
    }

    /// Remove the projectiles at the given indices in one compaction.
    ///
    /// Indices refer to the current iteration order; out-of-range
    /// entries are ignored.
    pub fn remove_many(&mut self, indices: &[usize]) {
        if indices.is_empty() {
            return;
        }
        let mut keep = vec![true; self.projectiles.len()];
        for &i in indices {
            if let Some(slot) = keep.get_mut(i) {
                *slot = false;
            }
        }
        let mut cursor = 0;
        self.projectiles.retain(|_| {
            let kept = keep[cursor];
            cursor += 1;
            kept
        });
    }

    /// Number of currently active projectiles.
    pub fn active_count(&self) -> usize {
        self.projectiles.len()
    }

    /// Iterate over active projectiles.
    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter()
    }
}
