//! Sprite atlas layout and the loaded sprite set.
//!
//! All art lives in one atlas laid out on the world cell grid; regions
//! are addressed in cell coordinates and multiplied out by the world
//! scale when sliced. Slicing happens once at startup through the
//! [`AssetProvider`]; a failure there aborts construction before the
//! simulation loop ever runs.

use crate::render::{AssetError, AssetProvider, Sprite};
use crate::world::WorldConfig;

/// Atlas region in cell units: (x, y, width, height).
type CellRegion = (f32, f32, f32, f32);

const PLAYER_REGION: CellRegion = (0.0, 0.0, 6.0, 5.0);
const NORMAL_ZOMBIE_REGION: CellRegion = (6.0, 0.0, 5.0, 5.0);
const ZOMBIE_DOG_REGION: CellRegion = (11.0, 0.0, 7.0, 5.0);
const BIG_ZOMBIE_REGION: CellRegion = (18.0, 0.0, 6.0, 10.0);
const BULLET_REGION: CellRegion = (6.0, 5.0, 1.0, 1.0);
const GRENADE_REGION: CellRegion = (7.0, 5.0, 1.0, 1.0);
const STAR_REGION: CellRegion = (3.0, 5.0, 3.0, 3.0);
const MOON_REGION: CellRegion = (0.0, 5.0, 3.0, 6.0);
const WALL_REGION: CellRegion = (0.0, 12.0, 64.0, 6.0);

/// Every sprite the simulation draws, sliced once at startup.
#[derive(Debug, Clone, Copy)]
pub struct SpriteSheet {
    pub player: Sprite,
    pub normal_zombie: Sprite,
    pub zombie_dog: Sprite,
    pub big_zombie: Sprite,
    pub bullet: Sprite,
    pub grenade: Sprite,
    pub star: Sprite,
    pub moon: Sprite,
    pub wall: Sprite,
}

impl SpriteSheet {
    /// Slice all regions out of the atlas at the configured scale.
    pub fn load(
        assets: &mut dyn AssetProvider,
        config: &WorldConfig,
    ) -> Result<Self, AssetError> {
        let mut slice = |region: CellRegion| {
            let (x, y, w, h) = region;
            assets.slice(
                x * config.scale,
                y * config.scale,
                w * config.scale,
                h * config.scale,
            )
        };

        Ok(Self {
            player: slice(PLAYER_REGION)?,
            normal_zombie: slice(NORMAL_ZOMBIE_REGION)?,
            zombie_dog: slice(ZOMBIE_DOG_REGION)?,
            big_zombie: slice(BIG_ZOMBIE_REGION)?,
            bullet: slice(BULLET_REGION)?,
            grenade: slice(GRENADE_REGION)?,
            star: slice(STAR_REGION)?,
            moon: slice(MOON_REGION)?,
            wall: slice(WALL_REGION)?,
        })
    }
}
