//! The shared quad buffer the layer submits each frame.
//!
//! Quad i is always the one described by slot i of the atlas index, so the
//! mutation entry points are crate-private: the only way to put a quad
//! here is through a tracked grid cell.

use macroquad::prelude::*;

/// One batched tile quad.
#[derive(Debug, Clone, Copy)]
pub struct TileQuad {
    /// Source rectangle within the atlas texture.
    pub src: Rect,
    pub dest: Vec2,
    pub size: Vec2,
    pub color: Color,
    /// Degrees, about the quad center.
    pub rotation: f32,
    pub flip_x: bool,
    pub flip_y: bool,
    pub visible: bool,
}

/// Contiguous quad storage plus the atlas texture they all sample.
#[derive(Default, Debug)]
pub struct QuadBatch {
    texture: Option<Texture2D>,
    quads: Vec<TileQuad>,
}

impl QuadBatch {
    pub(crate) fn new() -> Self {
        QuadBatch {
            texture: None,
            quads: Vec::new(),
        }
    }

    #[inline] pub fn len(&self) -> usize { self.quads.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.quads.is_empty() }

    pub fn texture(&self) -> Option<&Texture2D> {
        self.texture.as_ref()
    }

    pub(crate) fn set_texture(&mut self, texture: Texture2D) {
        self.texture = Some(texture);
    }

    pub(crate) fn insert(&mut self, index: usize, quad: TileQuad) {
        self.quads.insert(index, quad);
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> TileQuad {
        self.quads.remove(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> &mut TileQuad {
        &mut self.quads[index]
    }

    pub(crate) fn set_alpha(&mut self, alpha: f32) {
        for quad in &mut self.quads {
            quad.color.a = alpha;
        }
    }

    /// Submits every visible quad in buffer order. A batch without a
    /// texture draws nothing.
    pub fn draw(&self) {
        let Some(texture) = &self.texture else {
            return;
        };
        for quad in &self.quads {
            if !quad.visible {
                continue;
            }
            draw_texture_ex(
                texture,
                quad.dest.x,
                quad.dest.y,
                quad.color,
                DrawTextureParams {
                    dest_size: Some(quad.size),
                    source: Some(quad.src),
                    rotation: quad.rotation.to_radians(),
                    flip_x: quad.flip_x,
                    flip_y: quad.flip_y,
                    ..Default::default()
                },
            );
        }
    }
}
