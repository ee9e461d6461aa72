//! Collision resolution system.
//!
//! Runs once per frame, strictly after every entity has moved. Two
//! independent passes cross-reference the live collections through the
//! shared AABB predicate and apply the consequences: removal plus a
//! debris burst for zombie/projectile hits, an attack-cooldown reset
//! plus a burst for zombie/player contact. Pure game logic with no
//! rendering coupling.
//!
//! Removal is never performed mid-iteration: each pass collects the
//! consumed indices and both owners compact once at the end, so an
//! entity can be matched at most once per frame and no live member is
//! skipped.

use glam::Vec2;
use log::debug;

use crate::game::player::Player;
use crate::game::systems::particle_system::ParticleSystem;
use crate::game::systems::projectile_system::ProjectileSystem;
use crate::game::types::DEBRIS_RED;
use crate::game::zombies::ZombieManager;
use crate::physics::collision::BoundingBox;
use crate::world::WorldConfig;

/// Particles in a debris burst.
const DEBRIS_COUNT: usize = 20;
/// Render size of debris particles.
const DEBRIS_PARTICLE_SIZE: f32 = 2.0;
/// Horizontal debris speed per projectile direction sign.
const DEBRIS_SPEED: f32 = 6.0;
/// Upward bias of every debris burst.
const DEBRIS_LIFT: f32 = -6.0;
/// Upward velocity of the burst marking a zombie attack.
const ATTACK_BURST_LIFT: f32 = -8.0;

/// Stateless resolver over the live collections.
pub struct CollisionSystem;

impl CollisionSystem {
    /// Run both resolution passes for this frame.
    ///
    /// Pass order is fixed: projectiles consume zombies first, then the
    /// survivors get their chance at the player. Calling this again on
    /// the already-resolved collections is a no-op.
    pub fn resolve(
        player: &Player,
        zombies: &mut ZombieManager,
        projectiles: &mut ProjectileSystem,
        particles: &mut ParticleSystem,
        config: &WorldConfig,
        now_ms: u64,
    ) {
        Self::zombies_projectiles(zombies, projectiles, particles, config);
        Self::zombies_player(player, zombies, particles, now_ms);
    }

    /// Pass 1: every colliding (zombie, projectile) pair removes both
    /// members and spawns one debris burst.
    ///
    /// Consumed entities are flagged so neither side can match twice
    /// within the pass; the owning collections compact after the scan.
    fn zombies_projectiles(
        zombies: &mut ZombieManager,
        projectiles: &mut ProjectileSystem,
        particles: &mut ParticleSystem,
        config: &WorldConfig,
    ) {
        let mut consumed_zombies: Vec<usize> = Vec::new();
        let mut consumed_projectiles: Vec<usize> = Vec::new();
        let mut projectile_used = vec![false; projectiles.active_count()];

        for (zi, zombie) in zombies.iter().enumerate() {
            for (pi, projectile) in projectiles.iter().enumerate() {
                if projectile_used[pi] {
                    continue;
                }
                if !zombie.bounds().overlaps(&projectile.bounds()) {
                    continue;
                }

                projectile_used[pi] = true;
                consumed_zombies.push(zi);
                consumed_projectiles.push(pi);

                // Debris spawns one cell behind the hit, opposite the
                // zombie's facing, and sprays back along the shot
                let origin = Vec2::new(
                    projectile.body.position.x - zombie.facing().sign() * config.scale,
                    projectile.body.position.y,
                );
                let velocity = Vec2::new(-DEBRIS_SPEED * projectile.direction(), DEBRIS_LIFT);
                particles.add_burst(
                    origin,
                    velocity,
                    DEBRIS_COUNT,
                    DEBRIS_RED,
                    DEBRIS_PARTICLE_SIZE,
                );
                debug!(
                    "{:?} zombie destroyed by {:?} at {}",
                    zombie.kind, projectile.kind, projectile.body.position
                );

                // This zombie is consumed; move on to the next one
                break;
            }
        }

        zombies.remove_many(&consumed_zombies);
        projectiles.remove_many(&consumed_projectiles);
    }

    /// Pass 2: an armed zombie touching the player spends its attack
    /// and sprays a burst from the player's center.
    ///
    /// Nothing is removed and no health changes; the pass only starts
    /// the attack cooldown and provides the visual feedback.
    fn zombies_player(
        player: &Player,
        zombies: &mut ZombieManager,
        particles: &mut ParticleSystem,
        now_ms: u64,
    ) {
        let player_bounds = player.bounds();
        let center = player_bounds.center();

        for zombie in zombies.iter_mut() {
            if !zombie.bounds().overlaps(&player_bounds) {
                continue;
            }
            if !zombie.attack.try_use(now_ms) {
                continue;
            }
            particles.add_burst(
                center,
                Vec2::new(0.0, ATTACK_BURST_LIFT),
                DEBRIS_COUNT,
                DEBRIS_RED,
                DEBRIS_PARTICLE_SIZE,
            );
            debug!("{:?} zombie attacked the player", zombie.kind);
        }
    }
}
