//! Game World
//!
//! Composition root for the simulation: owns the player, every entity
//! manager, and the loaded sprites, and steps them in a fixed order
//! each frame. Control flows strictly top-down within a frame - no
//! system calls back into an earlier stage.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::game::player::Player;
use crate::game::scenery::Scenery;
use crate::game::sprites::SpriteSheet;
use crate::game::systems::collision_system::CollisionSystem;
use crate::game::systems::particle_system::ParticleSystem;
use crate::game::systems::projectile_system::ProjectileSystem;
use crate::game::types::Facing;
use crate::game::zombies::{ZombieKind, ZombieManager};
use crate::input::InputSource;
use crate::render::{AssetError, AssetProvider, Renderer};
use crate::world::WorldConfig;

/// X-coordinate of the opening zombie spawn.
const FIRST_ZOMBIE_X: f32 = 100.0;

/// Central simulation state holding all systems.
pub struct GameWorld {
    config: WorldConfig,

    // === Agents ===
    /// The player agent
    pub player: Player,
    /// The horde and its collection
    pub zombies: ZombieManager,

    // === Transients ===
    /// Live projectiles
    pub projectiles: ProjectileSystem,
    /// Live burst emitters and their particles
    pub particles: ParticleSystem,

    // === Presentation data ===
    sheet: SpriteSheet,
    scenery: Scenery,
}

impl GameWorld {
    /// Build a world with entropy-seeded randomness.
    ///
    /// Fails fast if the asset provider cannot slice the atlas; the
    /// simulation never starts on partial assets.
    pub fn new(config: WorldConfig, assets: &mut dyn AssetProvider) -> Result<Self, AssetError> {
        Self::build(config, assets, StdRng::from_entropy())
    }

    /// Build a fully deterministic world for tests and replays.
    pub fn with_seed(
        config: WorldConfig,
        assets: &mut dyn AssetProvider,
        seed: u64,
    ) -> Result<Self, AssetError> {
        Self::build(config, assets, StdRng::seed_from_u64(seed))
    }

    fn build(
        config: WorldConfig,
        assets: &mut dyn AssetProvider,
        mut rng: StdRng,
    ) -> Result<Self, AssetError> {
        let sheet = SpriteSheet::load(assets, &config)?;
        let scenery = Scenery::generate(&sheet, &config, &mut rng);

        let mut zombies = ZombieManager::new(&sheet);
        zombies.spawn(ZombieKind::Normal, FIRST_ZOMBIE_X, Facing::Right, &config);

        // The construction RNG carries over so a seeded world is
        // deterministic end to end
        let particles = ParticleSystem::from_rng(rng);

        Ok(Self {
            config,
            player: Player::new(sheet.player),
            zombies,
            projectiles: ProjectileSystem::new(&sheet.bullet, &sheet.grenade),
            particles,
            sheet,
            scenery,
        })
    }

    /// World bounds and timing shared by every system.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Advance the simulation one frame.
    ///
    /// Fixed order: input is sampled once, agents move, transients
    /// integrate and despawn, and collision resolution runs last over
    /// the settled positions.
    pub fn step(&mut self, input: &dyn InputSource, now_ms: u64) {
        let actions = input.actions();

        self.player.update(
            actions,
            now_ms,
            &self.config,
            &mut self.projectiles,
            &mut self.particles,
        );
        self.zombies.update(now_ms, &self.config);
        self.projectiles.update(&self.config);
        self.particles.update(&self.config);

        CollisionSystem::resolve(
            &self.player,
            &mut self.zombies,
            &mut self.projectiles,
            &mut self.particles,
            &self.config,
            now_ms,
        );
    }

    /// Draw the current state back to front.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        self.scenery.render_backdrop(renderer);
        self.player.render(renderer);
        self.render_projectiles(renderer);
        self.zombies.render(renderer);
        self.particles.render(renderer);
        self.scenery.render_ground(renderer);
    }

    fn render_projectiles(&self, renderer: &mut dyn Renderer) {
        use crate::game::systems::projectile_system::ProjectileKind;

        for projectile in self.projectiles.iter() {
            let sprite = match projectile.kind {
                ProjectileKind::Bullet => &self.sheet.bullet,
                ProjectileKind::Grenade => &self.sheet.grenade,
            };
            renderer.draw_sprite(
                sprite,
                projectile.body.position.x,
                projectile.body.position.y,
                projectile.facing == Facing::Left,
            );
        }
    }
}
