//! Zombie-family agents and their owning manager.
//!
//! Zombies patrol at a constant speed and bounce off the horizontal
//! world edges; there is no player-seeking. Three variants share the
//! behavior and differ only in sprite and body size. The manager is the
//! sole owner of the live collection and compacts out non-alive members
//! after its update loop, never mid-iteration.

use glam::Vec2;
use log::debug;

use crate::game::sprites::SpriteSheet;
use crate::game::types::{Cooldown, Facing};
use crate::physics::collision::{Aabb, BoundingBox};
use crate::render::{Renderer, Sprite};
use crate::world::WorldConfig;

/// Patrol speed in pixels per frame.
const WALK_SPEED: f32 = 2.0;
/// Starting health of every zombie.
const STARTING_HEALTH: i32 = 3;
/// Re-arm delay of the melee attack.
const ATTACK_DELAY_MS: u64 = 500;

/// Zombie variant. Behavior is shared; sprite and body size differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZombieKind {
    /// The basic shambler (5x5 cells)
    Normal,
    /// Low and long (7x5 cells)
    Dog,
    /// Twice the height of a shambler (6x10 cells)
    Big,
}

/// A live zombie agent.
#[derive(Debug, Clone, Copy)]
pub struct Zombie {
    /// Variant of this zombie
    pub kind: ZombieKind,
    /// Top-left position
    pub position: Vec2,
    /// Horizontal patrol velocity; sign flips at world edges
    pub vx: f32,
    /// Remaining health; the agent is alive while this is positive
    pub health: i32,
    /// Gating flag for the melee attack
    pub attack: Cooldown,
    /// Bounding width (sprite-derived)
    pub width: f32,
    /// Bounding height (sprite-derived)
    pub height: f32,
}

impl Zombie {
    /// Whether the agent still takes part in the simulation.
    #[inline]
    pub fn alive(&self) -> bool {
        self.health > 0
    }

    /// Current facing, derived from the patrol velocity.
    pub fn facing(&self) -> Facing {
        Facing::from_velocity(self.vx, Facing::Right)
    }

    /// Apply damage; health never recovers.
    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    /// Advance one frame: walk, bounce at the world edges, re-arm the
    /// attack once its delay has elapsed.
    fn update(&mut self, now_ms: u64, config: &WorldConfig) {
        self.position.x += self.vx;

        if config.outside_patrol_span(self.position.x, self.width) {
            self.vx = -self.vx;
            debug!("{:?} zombie bounced at x={}", self.kind, self.position.x);
        }

        self.attack.update(now_ms);
    }
}

impl BoundingBox for Zombie {
    fn bounds(&self) -> Aabb {
        Aabb::from_pos(self.position, self.width, self.height)
    }
}

/// Owns the live zombie collection.
pub struct ZombieManager {
    zombies: Vec<Zombie>,
    normal_sprite: Sprite,
    dog_sprite: Sprite,
    big_sprite: Sprite,
}

impl ZombieManager {
    /// Create an empty manager with the variant sprites.
    pub fn new(sheet: &SpriteSheet) -> Self {
        Self {
            zombies: Vec::new(),
            normal_sprite: sheet.normal_zombie,
            dog_sprite: sheet.zombie_dog,
            big_sprite: sheet.big_zombie,
        }
    }

    /// Sprite used for a variant.
    fn sprite(&self, kind: ZombieKind) -> &Sprite {
        match kind {
            ZombieKind::Normal => &self.normal_sprite,
            ZombieKind::Dog => &self.dog_sprite,
            ZombieKind::Big => &self.big_sprite,
        }
    }

    /// Spawn a zombie standing on the ground line at the given x.
    pub fn spawn(&mut self, kind: ZombieKind, x: f32, facing: Facing, config: &WorldConfig) {
        let sprite = *self.sprite(kind);
        let y = config.ground_y() - sprite.height;
        debug!("spawning {:?} zombie at ({}, {})", kind, x, y);
        self.zombies.push(Zombie {
            kind,
            position: Vec2::new(x, y),
            vx: WALK_SPEED * facing.sign(),
            health: STARTING_HEALTH,
            attack: Cooldown::new(ATTACK_DELAY_MS),
            width: sprite.width,
            height: sprite.height,
        });
    }

    /// Advance every zombie one frame, then compact out the dead.
    ///
    /// Removal is deferred until after the loop so no live member is
    /// skipped or visited twice.
    pub fn update(&mut self, now_ms: u64, config: &WorldConfig) {
        for zombie in &mut self.zombies {
            zombie.update(now_ms, config);
        }

        let before = self.zombies.len();
        self.zombies.retain(Zombie::alive);
        if self.zombies.len() < before {
            debug!("removed {} dead zombies", before - self.zombies.len());
        }
    }

    /// Remove the zombies at the given indices in one compaction.
    ///
    /// Indices refer to the current iteration order; out-of-range
    /// entries are ignored.
    pub fn remove_many(&mut self, indices: &[usize]) {
        if indices.is_empty() {
            return;
        }
        let mut keep = vec![true; self.zombies.len()];
        for &i in indices {
            if let Some(slot) = keep.get_mut(i) {
                *slot = false;
            }
        }
        let mut cursor = 0;
        self.zombies.retain(|_| {
            let kept = keep[cursor];
            cursor += 1;
            kept
        });
    }

    /// Number of live zombies.
    pub fn len(&self) -> usize {
        self.zombies.len()
    }

    /// Whether the horde is empty.
    pub fn is_empty(&self) -> bool {
        self.zombies.is_empty()
    }

    /// Iterate over the live zombies.
    pub fn iter(&self) -> impl Iterator<Item = &Zombie> {
        self.zombies.iter()
    }

    /// Iterate mutably (used by the collision resolver to disarm
    /// attack flags).
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Zombie> {
        self.zombies.iter_mut()
    }

    /// Draw every zombie, mirrored when walking left.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        for zombie in &self.zombies {
            renderer.draw_sprite(
                self.sprite(zombie.kind),
                zombie.position.x,
                zombie.position.y,
                zombie.facing() == Facing::Left,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::NullAssets;

    fn manager_with_config() -> (ZombieManager, WorldConfig) {
        let config = WorldConfig::default();
        let mut assets = NullAssets::new();
        let sheet = SpriteSheet::load(&mut assets, &config).unwrap();
        (ZombieManager::new(&sheet), config)
    }

    #[test]
    fn test_spawn_stands_on_ground_line() {
        let (mut manager, config) = manager_with_config();
        manager.spawn(ZombieKind::Normal, 100.0, Facing::Right, &config);
        manager.spawn(ZombieKind::Big, 200.0, Facing::Left, &config);

        let zombies: Vec<&Zombie> = manager.iter().collect();
        // Normal: 40px tall, Big: 80px tall, both feet on ground_y
        assert_eq!(zombies[0].position.y + zombies[0].height, config.ground_y());
        assert_eq!(zombies[1].position.y + zombies[1].height, config.ground_y());
        assert_eq!(zombies[0].vx, WALK_SPEED);
        assert_eq!(zombies[1].vx, -WALK_SPEED);
    }

    #[test]
    fn test_patrol_bounce_happens_on_the_crossing_update() {
        let (mut manager, config) = manager_with_config();
        manager.spawn(ZombieKind::Normal, 0.0, Facing::Right, &config);

        // Park the zombie one step short of the patrol span's right end
        let width = manager.iter().next().unwrap().width;
        let edge = config.width() - width;
        manager.iter_mut().next().unwrap().position.x = edge - WALK_SPEED;

        // This update lands exactly on the edge: no flip yet
        manager.update(0, &config);
        let zombie = manager.iter().next().unwrap();
        assert_eq!(zombie.position.x, edge);
        assert_eq!(zombie.vx, WALK_SPEED, "flip must not happen at the edge");

        // The next update steps past the span and flips
        manager.update(16, &config);
        let zombie = manager.iter().next().unwrap();
        assert_eq!(zombie.vx, -WALK_SPEED);
        assert_eq!(zombie.facing(), Facing::Left);
    }

    #[test]
    fn test_left_edge_bounce() {
        let (mut manager, config) = manager_with_config();
        manager.spawn(ZombieKind::Dog, 1.0, Facing::Left, &config);

        // x = -1 after one step: outside, flips
        manager.update(0, &config);
        assert_eq!(manager.iter().next().unwrap().vx, WALK_SPEED);
    }

    #[test]
    fn test_dead_zombie_removed_on_next_update() {
        let (mut manager, config) = manager_with_config();
        manager.spawn(ZombieKind::Normal, 100.0, Facing::Right, &config);
        manager.spawn(ZombieKind::Normal, 200.0, Facing::Right, &config);

        manager.iter_mut().next().unwrap().take_damage(STARTING_HEALTH);
        assert_eq!(manager.len(), 2, "removal waits for the manager update");

        manager.update(0, &config);
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.iter().next().unwrap().position.x, 202.0);
    }

    #[test]
    fn test_attack_rearm_delay() {
        let (mut manager, config) = manager_with_config();
        manager.spawn(ZombieKind::Normal, 100.0, Facing::Right, &config);

        let zombie = manager.iter_mut().next().unwrap();
        assert!(zombie.attack.armed());
        assert!(zombie.attack.try_use(1000));

        manager.update(1400, &config);
        assert!(!manager.iter().next().unwrap().attack.armed());

        manager.update(1500, &config);
        assert!(manager.iter().next().unwrap().attack.armed());
    }

    #[test]
    fn test_remove_many_ignores_out_of_range() {
        let (mut manager, config) = manager_with_config();
        for i in 0..3 {
            manager.spawn(ZombieKind::Normal, 100.0 * (i + 1) as f32, Facing::Right, &config);
        }

        manager.remove_many(&[1, 7]);
        assert_eq!(manager.len(), 2);
        let xs: Vec<f32> = manager.iter().map(|z| z.position.x).collect();
        assert_eq!(xs, vec![100.0, 300.0]);
    }
}
