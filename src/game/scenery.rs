//! Static backdrop: moon, star field, and the ground wall.
//!
//! Pure draw data with no physics. Star positions are rolled once at
//! construction; everything else is anchored off the world bounds.

use glam::Vec2;
use rand::Rng;
use rand::rngs::StdRng;

use crate::game::sprites::SpriteSheet;
use crate::render::{Renderer, Sprite};
use crate::world::WorldConfig;

/// Number of stars in the night sky.
const STAR_COUNT: usize = 20;

/// One-time generated backdrop.
pub struct Scenery {
    star_sprite: Sprite,
    moon_sprite: Sprite,
    wall_sprite: Sprite,
    stars: Vec<Vec2>,
    moon_pos: Vec2,
    wall_pos: Vec2,
}

impl Scenery {
    /// Roll the star field and anchor the fixed pieces.
    pub fn generate(sheet: &SpriteSheet, config: &WorldConfig, rng: &mut StdRng) -> Self {
        let wall_height = sheet.wall.height;
        let star = sheet.star;

        // Stars fill the sky above the wall line
        let mut stars = Vec::with_capacity(STAR_COUNT);
        for _ in 0..STAR_COUNT {
            stars.push(Vec2::new(
                rng.gen_range(0.0..config.width() - star.width),
                rng.gen_range(0.0..config.height() - wall_height - star.height),
            ));
        }

        Self {
            star_sprite: star,
            moon_sprite: sheet.moon,
            wall_sprite: sheet.wall,
            stars,
            moon_pos: Vec2::new(
                config.width() - sheet.moon.width * 4.0,
                2.0 * config.scale,
            ),
            wall_pos: Vec2::new(0.0, config.height() - wall_height),
        }
    }

    /// Draw the sky pieces (before any entity).
    pub fn render_backdrop(&self, renderer: &mut dyn Renderer) {
        renderer.draw_sprite(&self.moon_sprite, self.moon_pos.x, self.moon_pos.y, false);
        for star in &self.stars {
            renderer.draw_sprite(&self.star_sprite, star.x, star.y, false);
        }
    }

    /// Draw the ground wall (after every entity).
    pub fn render_ground(&self, renderer: &mut dyn Renderer) {
        renderer.draw_sprite(&self.wall_sprite, self.wall_pos.x, self.wall_pos.y, false);
    }

    /// Star positions (for tests).
    pub fn stars(&self) -> &[Vec2] {
        &self.stars
    }
}
