//! Particle and burst-emitter system.
//!
//! Debris and muzzle effects are one-shot bursts: an emitter generates
//! its whole particle set the moment it is created and never emits
//! again. Each particle falls under gravity and retires on its own once
//! it leaves the world rectangle; siblings and the emitter itself are
//! unaffected. The manager owns every emitter and the RNG used for
//! spawn jitter, so a seeded manager is fully deterministic.

use glam::Vec2;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::types::{Facing, MUZZLE_YELLOW};
use crate::physics::kinematics::KinematicBody;
use crate::render::{Renderer, Rgb};
use crate::world::WorldConfig;

/// Downward acceleration on every particle (pixels per frame squared).
const PARTICLE_GRAVITY: f32 = 1.0;
/// Position jitter half-width around the emitter origin.
const POSITION_JITTER: f32 = 2.0;
/// Velocity jitter half-width around the emitter base velocity.
const VELOCITY_JITTER: f32 = 1.0;
/// Particles in a muzzle burst.
const MUZZLE_BURST_COUNT: usize = 20;
/// Recoil velocity of the muzzle burst, per direction sign.
const MUZZLE_RECOIL: Vec2 = Vec2::new(-4.0, -5.0);
/// Render size of muzzle particles.
const MUZZLE_PARTICLE_SIZE: f32 = 2.0;

/// A single short-lived debris square.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    /// Position, velocity, and gravity state
    pub body: KinematicBody,
    /// Fill color shared with the rest of the burst
    pub color: Rgb,
    /// Square render size in pixels
    pub size: f32,
    /// Cleared once the particle exits the world rectangle
    pub alive: bool,
}

impl Particle {
    /// Integrate one frame and retire on world exit.
    fn update(&mut self, config: &WorldConfig) {
        self.body.integrate();
        if !config.contains(self.body.position) {
            self.alive = false;
        }
    }
}

/// One-shot burst emitter.
///
/// Owns its particles for their entire lifetime. Becoming empty does
/// not destroy it; the manager prunes empty emitters on its next pass.
#[derive(Debug, Clone)]
pub struct Emitter {
    particles: Vec<Particle>,
}

impl Emitter {
    /// Generate a full burst around `origin`.
    ///
    /// Positions jitter within ±2 units of the origin on both axes.
    /// Velocities draw from a ±1 window around the base velocity whose
    /// upper bound is made non-negative before the draw; if the bounds
    /// then coincide the lower bound is nudged down by 1 so the range
    /// is never degenerate.
    pub fn burst(
        origin: Vec2,
        base_velocity: Vec2,
        count: usize,
        color: Rgb,
        size: f32,
        rng: &mut StdRng,
    ) -> Self {
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            let position = Vec2::new(
                rng.gen_range(origin.x - POSITION_JITTER..origin.x + POSITION_JITTER),
                rng.gen_range(origin.y - POSITION_JITTER..origin.y + POSITION_JITTER),
            );
            let velocity = Vec2::new(
                draw_jittered(base_velocity.x, rng),
                draw_jittered(base_velocity.y, rng),
            );
            particles.push(Particle {
                body: KinematicBody::new(position, velocity, PARTICLE_GRAVITY),
                color,
                size,
                alive: true,
            });
        }
        Self { particles }
    }

    /// Particles still alive in this burst.
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Whether every particle of the burst has retired.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Iterate over the live particles.
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    fn update(&mut self, config: &WorldConfig) {
        for particle in &mut self.particles {
            particle.update(config);
        }
        self.particles.retain(|p| p.alive);
    }
}

/// Draw one velocity component from the normalized jitter window.
fn draw_jittered(base: f32, rng: &mut StdRng) -> f32 {
    let (low, high) = jitter_window(base);
    rng.gen_range(low..high)
}

/// Jitter window around a base velocity component.
///
/// The upper bound is forced non-negative before the draw and the
/// lower bound nudged down when the window would be degenerate.
fn jitter_window(base: f32) -> (f32, f32) {
    let mut low = base - VELOCITY_JITTER;
    let mut high = base + VELOCITY_JITTER;
    if high < 0.0 {
        high = -high;
    }
    if low == high {
        low -= 1.0;
    }
    (low, high)
}

/// Owns every live emitter and the jitter RNG.
#[derive(Debug)]
pub struct ParticleSystem {
    emitters: Vec<Emitter>,
    rng: StdRng,
}

impl ParticleSystem {
    /// Create a system with an entropy-seeded RNG.
    pub fn new() -> Self {
        Self {
            emitters: Vec::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a deterministic system for tests and replays.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a system around an existing RNG.
    pub fn from_rng(rng: StdRng) -> Self {
        Self {
            emitters: Vec::new(),
            rng,
        }
    }

    /// Spawn a one-shot burst emitter.
    pub fn add_burst(
        &mut self,
        origin: Vec2,
        base_velocity: Vec2,
        count: usize,
        color: Rgb,
        size: f32,
    ) {
        debug!("burst of {} particles at {}", count, origin);
        self.emitters.push(Emitter::burst(
            origin,
            base_velocity,
            count,
            color,
            size,
            &mut self.rng,
        ));
    }

    /// Spawn the muzzle burst for a shot fired in the given direction.
    ///
    /// The burst recoils opposite the shot with a slight upward bias.
    pub fn muzzle_flash(&mut self, origin: Vec2, facing: Facing) {
        let velocity = Vec2::new(MUZZLE_RECOIL.x * facing.sign(), MUZZLE_RECOIL.y);
        self.add_burst(
            origin,
            velocity,
            MUZZLE_BURST_COUNT,
            MUZZLE_YELLOW,
            MUZZLE_PARTICLE_SIZE,
        );
    }

    /// Integrate every particle one frame; retire world-leavers and
    /// prune burnt-out emitters.
    pub fn update(&mut self, config: &WorldConfig) {
        for emitter in &mut self.emitters {
            emitter.update(config);
        }
        self.emitters.retain(|e| !e.is_empty());
    }

    /// Number of live emitters.
    pub fn emitter_count(&self) -> usize {
        self.emitters.len()
    }

    /// Total live particles across all emitters.
    pub fn particle_count(&self) -> usize {
        self.emitters.iter().map(Emitter::particle_count).sum()
    }

    /// Iterate over live emitters.
    pub fn iter(&self) -> impl Iterator<Item = &Emitter> {
        self.emitters.iter()
    }

    /// Draw every live particle as a filled square.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        for emitter in &self.emitters {
            for particle in emitter.iter() {
                renderer.draw_rect(
                    particle.color,
                    particle.body.position.x,
                    particle.body.position.y,
                    particle.size,
                    particle.size,
                );
            }
        }
    }
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new()
    }
}
