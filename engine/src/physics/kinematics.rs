//! Kinematic integration for gravity-affected bodies.
//!
//! One shared integration policy reused by particles and projectiles:
//! position advances by velocity, then velocity accumulates gravity,
//! once per frame tick. Bodies with a zero gravity term move at constant
//! velocity. There is no sub-stepping; the frame rate is fixed
//! externally and every constant is expressed in per-frame units, so a
//! reimplementation must hold the step rate or rescale.

use glam::Vec2;

/// Position, velocity, and gravity state shared by transient bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicBody {
    /// Top-left position in pixel space
    pub position: Vec2,
    /// Displacement applied per frame
    pub velocity: Vec2,
    /// Downward acceleration added to `velocity.y` each frame
    pub gravity: f32,
}

impl KinematicBody {
    /// Create a body with the given initial state.
    pub fn new(position: Vec2, velocity: Vec2, gravity: f32) -> Self {
        Self {
            position,
            velocity,
            gravity,
        }
    }

    /// Create a body unaffected by gravity (constant velocity).
    pub fn ballistic_free(position: Vec2, velocity: Vec2) -> Self {
        Self::new(position, velocity, 0.0)
    }

    /// Advance one frame tick.
    ///
    /// Position moves by the current velocity first; gravity is folded
    /// into the velocity afterwards, so a freshly spawned body travels
    /// exactly its initial velocity on its first step.
    pub fn integrate(&mut self) {
        self.position += self.velocity;
        self.velocity.y += self.gravity;
    }
}
