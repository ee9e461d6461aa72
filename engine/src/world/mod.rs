//! World Configuration Module
//!
//! World-space bounds for the side-scrolling arena, derived from a
//! single scale factor. The playfield is a 64x18 cell grid where one
//! cell is `scale` pixels; the ground line sits four cells above the
//! bottom edge. Physics constants across the crate are tuned against
//! the fixed step rate carried here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Immutable world-bounds configuration.
///
/// Constructed once at startup and passed by reference to everything
/// that needs bounds or timing; nothing mutates it after creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Pixel size of one world cell. Every sprite dimension and spawn
    /// offset in the game is a multiple of this.
    pub scale: f32,
    /// Fixed simulation step rate (steps per second). Velocities and
    /// gravity are per-frame quantities tuned against this rate.
    pub target_fps: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            scale: 8.0,     // 512x144 playfield
            target_fps: 60, // physics constants assume this rate
        }
    }
}

impl WorldConfig {
    /// Create a config with a custom scale factor at the default rate.
    pub fn with_scale(scale: f32) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    /// Playfield width in pixels (64 cells).
    #[inline]
    pub fn width(&self) -> f32 {
        64.0 * self.scale
    }

    /// Playfield height in pixels (18 cells).
    #[inline]
    pub fn height(&self) -> f32 {
        18.0 * self.scale
    }

    /// Y-coordinate of the ground line agents stand on (4 cells above
    /// the bottom edge).
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.height() - 4.0 * self.scale
    }

    /// Milliseconds per simulation step at the target rate.
    #[inline]
    pub fn frame_ms(&self) -> u64 {
        1000 / self.target_fps as u64
    }

    /// Whether a point lies inside the world rectangle.
    ///
    /// Points exactly on the boundary count as inside; leaving on any
    /// axis is the retirement signal for particles.
    pub fn contains(&self, point: Vec2) -> bool {
        !(point.x < 0.0 || point.x > self.width() || point.y < 0.0 || point.y > self.height())
    }

    /// Whether an entity of the given width has left the horizontal
    /// patrol span `[0, width() - entity_width]`.
    ///
    /// Used by zombies as the bounce signal; the flip happens on the
    /// update that moves the entity past the span, not when it lands
    /// exactly on the edge.
    pub fn outside_patrol_span(&self, x: f32, entity_width: f32) -> bool {
        x < 0.0 || x + entity_width > self.width()
    }

    /// Whether a projectile of the given width is entirely outside the
    /// horizontal range `[-width, width()]`.
    pub fn outside_horizontal(&self, x: f32, entity_width: f32) -> bool {
        x + entity_width < 0.0 || x > self.width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WorldConfig::default();
        assert_eq!(config.scale, 8.0);
        assert_eq!(config.width(), 512.0);
        assert_eq!(config.height(), 144.0);
        assert_eq!(config.ground_y(), 112.0);
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.frame_ms(), 16);
    }

    #[test]
    fn test_dimensions_follow_scale() {
        let config = WorldConfig::with_scale(4.0);
        assert_eq!(config.width(), 256.0);
        assert_eq!(config.height(), 72.0);
        assert_eq!(config.ground_y(), 56.0);
    }

    #[test]
    fn test_contains_boundary_is_inside() {
        let config = WorldConfig::default();
        assert!(config.contains(Vec2::new(0.0, 0.0)));
        assert!(config.contains(Vec2::new(512.0, 144.0)));
        assert!(config.contains(Vec2::new(100.0, 50.0)));

        assert!(!config.contains(Vec2::new(-0.5, 50.0)));
        assert!(!config.contains(Vec2::new(512.5, 50.0)));
        assert!(!config.contains(Vec2::new(100.0, -0.5)));
        assert!(!config.contains(Vec2::new(100.0, 144.5)));
    }

    #[test]
    fn test_patrol_span_edges() {
        let config = WorldConfig::default();
        // Exactly on the right edge: still inside the span
        assert!(!config.outside_patrol_span(512.0 - 40.0, 40.0));
        // One step past it: outside
        assert!(config.outside_patrol_span(512.0 - 40.0 + 2.0, 40.0));
        // Left edge
        assert!(!config.outside_patrol_span(0.0, 40.0));
        assert!(config.outside_patrol_span(-2.0, 40.0));
    }

    #[test]
    fn test_horizontal_despawn_range() {
        let config = WorldConfig::default();
        // Partially off the left edge: still alive
        assert!(!config.outside_horizontal(-4.0, 8.0));
        // Entirely off the left edge
        assert!(config.outside_horizontal(-9.0, 8.0));
        // Past the right edge
        assert!(config.outside_horizontal(513.0, 8.0));
        assert!(!config.outside_horizontal(511.0, 8.0));
    }
}
