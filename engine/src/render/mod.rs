//! Render Interface Module
//!
//! The trait surface the simulation consumes from a platform backend,
//! independent of any graphics API. The core never decodes images or
//! touches a framebuffer: it asks an [`AssetProvider`] to slice sprite
//! regions out of the atlas at startup, then issues [`Renderer`] calls
//! each frame. Backends (a real blitter, a test recorder, a null sink)
//! live outside the simulation.

use thiserror::Error;

/// 8-bit RGB color used for rectangle fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Opaque backend identifier for a sliced sprite.
pub type SpriteHandle = u32;

/// A drawable sub-region of the sprite atlas.
///
/// The handle is meaningful only to the backend that produced it; the
/// simulation keeps the dimensions because entity bounding boxes are
/// derived from their sprites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    /// Backend identifier returned by [`AssetProvider::slice`]
    pub handle: SpriteHandle,
    /// Width of the region in pixels
    pub width: f32,
    /// Height of the region in pixels
    pub height: f32,
}

/// Failure at the asset boundary.
///
/// Always fatal: the provider must fail fast during startup, before the
/// simulation loop runs. The core never sees partially loaded assets.
#[derive(Debug, Error)]
pub enum AssetError {
    /// Requested region falls outside the atlas surface.
    #[error("atlas region ({x}, {y}) {width}x{height} is out of bounds")]
    RegionOutOfBounds {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    /// The backend could not produce a drawable image for the region.
    #[error("failed to slice atlas region: {0}")]
    SliceFailed(String),
}

/// Supplier of drawable sprites sliced from the atlas.
///
/// Image decoding happens outside the simulation; the core only relies
/// on this rectangular slicing contract.
pub trait AssetProvider {
    /// Slice a rectangular sub-region (pixel coordinates) out of the
    /// atlas and return a drawable sprite for it.
    fn slice(&mut self, x: f32, y: f32, width: f32, height: f32) -> Result<Sprite, AssetError>;
}

/// Draw sink for one frame of simulation state.
///
/// Positions are top-left corners in the same pixel space as the world
/// bounds. `flipped` mirrors the sprite horizontally for left-facing
/// entities.
pub trait Renderer {
    /// Draw a sprite at a position.
    fn draw_sprite(&mut self, sprite: &Sprite, x: f32, y: f32, flipped: bool);

    /// Draw a filled rectangle.
    fn draw_rect(&mut self, color: Rgb, x: f32, y: f32, width: f32, height: f32);
}

/// Asset provider that hands out sprites without a backing image.
///
/// Regions are validated against a nominal atlas size; handles are
/// sequential. Lets tests and the headless binary build a full game
/// state without decoding anything.
#[derive(Debug, Default)]
pub struct NullAssets {
    next_handle: SpriteHandle,
}

impl NullAssets {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AssetProvider for NullAssets {
    fn slice(&mut self, x: f32, y: f32, width: f32, height: f32) -> Result<Sprite, AssetError> {
        if x < 0.0 || y < 0.0 || width <= 0.0 || height <= 0.0 {
            return Err(AssetError::RegionOutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        let sprite = Sprite {
            handle: self.next_handle,
            width,
            height,
        };
        self.next_handle += 1;
        Ok(sprite)
    }
}

/// One recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCall {
    /// Sprite blit: handle, position, mirrored flag
    Sprite {
        handle: SpriteHandle,
        x: f32,
        y: f32,
        flipped: bool,
    },
    /// Rectangle fill: color, position, extent
    Rect {
        color: Rgb,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

/// Renderer that records every call for assertions.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    /// Calls in issue order since the last [`RecordingRenderer::clear`]
    pub calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Number of rectangle fills recorded.
    pub fn rect_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Rect { .. }))
            .count()
    }

    /// Number of sprite blits recorded.
    pub fn sprite_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Sprite { .. }))
            .count()
    }
}

impl Renderer for RecordingRenderer {
    fn draw_sprite(&mut self, sprite: &Sprite, x: f32, y: f32, flipped: bool) {
        self.calls.push(DrawCall::Sprite {
            handle: sprite.handle,
            x,
            y,
            flipped,
        });
    }

    fn draw_rect(&mut self, color: Rgb, x: f32, y: f32, width: f32, height: f32) {
        self.calls.push(DrawCall::Rect {
            color,
            x,
            y,
            width,
            height,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_assets_hands_out_distinct_handles() {
        let mut assets = NullAssets::new();
        let a = assets.slice(0.0, 0.0, 48.0, 40.0).unwrap();
        let b = assets.slice(48.0, 0.0, 40.0, 40.0).unwrap();
        assert_ne!(a.handle, b.handle);
        assert_eq!(a.width, 48.0);
        assert_eq!(b.height, 40.0);
    }

    #[test]
    fn test_null_assets_rejects_bad_region() {
        let mut assets = NullAssets::new();
        assert!(assets.slice(-1.0, 0.0, 8.0, 8.0).is_err());
        assert!(assets.slice(0.0, 0.0, 0.0, 8.0).is_err());
    }

    #[test]
    fn test_recording_renderer_counts() {
        let mut renderer = RecordingRenderer::new();
        let sprite = Sprite {
            handle: 7,
            width: 8.0,
            height: 8.0,
        };
        renderer.draw_sprite(&sprite, 1.0, 2.0, false);
        renderer.draw_rect(Rgb::new(255, 0, 0), 0.0, 0.0, 2.0, 2.0);
        renderer.draw_rect(Rgb::new(255, 0, 0), 4.0, 0.0, 2.0, 2.0);

        assert_eq!(renderer.sprite_count(), 1);
        assert_eq!(renderer.rect_count(), 2);

        renderer.clear();
        assert!(renderer.calls.is_empty());
    }
}
