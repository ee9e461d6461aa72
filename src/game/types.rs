//! Shared game-level value types.

use crate::render::Rgb;

/// Horizontal facing of an agent or projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    /// Positive x direction
    #[default]
    Right,
    /// Negative x direction
    Left,
}

impl Facing {
    /// Direction sign: +1.0 for right, -1.0 for left.
    #[inline]
    pub fn sign(&self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    /// The opposite facing.
    pub fn flipped(&self) -> Facing {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }

    /// Facing implied by a velocity sign; zero keeps the given fallback.
    pub fn from_velocity(vx: f32, fallback: Facing) -> Facing {
        if vx > 0.0 {
            Facing::Right
        } else if vx < 0.0 {
            Facing::Left
        } else {
            fallback
        }
    }
}

/// Gating flag paired with a fixed re-arm delay.
///
/// Every timed action (shoot, grenade, zombie attack) follows the same
/// pattern: the flag starts armed, firing disarms it, and it re-arms
/// once the delay has elapsed since that use - never before. Timestamps
/// come from the [`Clock`](crate::clock::Clock) in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cooldown {
    armed: bool,
    delay_ms: u64,
    used_at_ms: u64,
}

impl Cooldown {
    /// Create an armed cooldown with the given re-arm delay.
    pub fn new(delay_ms: u64) -> Self {
        Self {
            armed: true,
            delay_ms,
            used_at_ms: 0,
        }
    }

    /// Whether the gated action may fire right now.
    #[inline]
    pub fn armed(&self) -> bool {
        self.armed
    }

    /// Configured re-arm delay in milliseconds.
    #[inline]
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Consume the flag if armed. Returns whether the action fires.
    pub fn try_use(&mut self, now_ms: u64) -> bool {
        if self.armed {
            self.armed = false;
            self.used_at_ms = now_ms;
            true
        } else {
            false
        }
    }

    /// Re-arm once the delay has fully elapsed since the last use.
    pub fn update(&mut self, now_ms: u64) {
        if !self.armed && now_ms.saturating_sub(self.used_at_ms) >= self.delay_ms {
            self.armed = true;
        }
    }
}

/// Background clear color (dusk purple).
pub const CLEAR_COLOR: Rgb = Rgb::new(116, 109, 199);

/// Debris and blood particles.
pub const DEBRIS_RED: Rgb = Rgb::new(255, 0, 0);

/// Muzzle-flash particles.
pub const MUZZLE_YELLOW: Rgb = Rgb::new(255, 255, 0);
