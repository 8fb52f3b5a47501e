//! The tile layer: grid, batch and sprite lifecycle in one place.

use std::collections::HashMap;

use log::warn;
use macroquad::prelude::*;

use crate::atlas::{AtlasIndex, AtlasSlot};
use crate::batch::{QuadBatch, TileQuad};
use crate::coords::{Orientation, Projection};
use crate::descriptor::{LayerInfo, MapInfo};
use crate::error::Error;
use crate::gid::{TileFlags, TileGid, GID_MASK};
use crate::grid::TileGrid;
use crate::properties::{Properties, PropertyValue};
use crate::sprite::{FlipTransform, TileSprite};
use crate::tileset::Tileset;
use crate::vertexz::{alpha_func, VertexZ};

/// One batched tile layer.
///
/// Every non-empty cell is a quad in the shared batch; the grid remains
/// the source of truth for what sits where, the atlas index for where each
/// quad sits in the buffer. Individual cells become [`TileSprite`]s only
/// when touched through [`tile_at`](TileLayer::tile_at); everything else
/// renders straight from the grid with no per-tile object.
#[derive(Debug)]
pub struct TileLayer {
    name: String,
    visible: bool,
    opacity: f32,
    /// Pixel offset of the whole layer, from the authored tile offset.
    offset: Vec2,
    projection: Projection,
    tileset: Tileset,
    grid: TileGrid,
    properties: Properties,
    vertex_z: VertexZ,
    alpha_func: f32,
    min_gid: u32,
    max_gid: u32,
    atlas: AtlasIndex,
    batch: QuadBatch,
    sprites: HashMap<u32, TileSprite>,
}

impl TileLayer {
    /// Builds the layer and populates one quad per non-empty cell, in
    /// ascending draw order.
    pub fn new(tileset: Tileset, layer: LayerInfo, map: &MapInfo) -> Result<TileLayer, Error> {
        let expected = layer.width as usize * layer.height as usize;
        if expected == 0 || layer.data.len() != expected {
            return Err(Error::InvalidLayerSize {
                layer: layer.name,
                len: layer.data.len(),
                width: layer.width,
                height: layer.height,
            });
        }

        let projection = Projection {
            layer_width: layer.width,
            layer_height: layer.height,
            tile_width: map.tile_width as f32,
            tile_height: map.tile_height as f32,
            orientation: map.orientation,
        };
        let vertex_z = VertexZ::from_properties(&layer.properties, map.orientation);
        let offset = projection.layer_offset(vec2(layer.offsetx, layer.offsety));

        let mut this = TileLayer {
            name: layer.name,
            visible: layer.visible,
            opacity: layer.opacity,
            offset,
            projection,
            tileset,
            grid: TileGrid::new(layer.width, layer.height, layer.data),
            alpha_func: alpha_func(&layer.properties),
            properties: layer.properties,
            vertex_z,
            min_gid: 0,
            max_gid: 0,
            atlas: AtlasIndex::new(),
            batch: QuadBatch::new(),
            sprites: HashMap::new(),
        };
        this.setup_tiles();
        Ok(this)
    }

    fn setup_tiles(&mut self) {
        let mut min_gid = u32::MAX;
        let mut max_gid = 0;
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                let gid = TileGid(self.grid.raw_at(x, y));
                if gid.is_empty() {
                    continue;
                }
                if !self.tileset.contains(gid.clean()) {
                    warn!(
                        "layer '{}': gid {} at ({}, {}) is outside tileset '{}', skipping",
                        self.name,
                        gid.clean(),
                        x,
                        y,
                        self.tileset.name()
                    );
                    continue;
                }
                min_gid = min_gid.min(gid.clean());
                max_gid = max_gid.max(gid.clean());
                self.insert_tile(gid, x, y);
            }
        }
        self.min_gid = if min_gid == u32::MAX { 0 } else { min_gid };
        self.max_gid = max_gid;
    }

    /// Clean gid at a coordinate; 0 for empty, out-of-range or released.
    pub fn tile_gid_at(&self, x: u32, y: u32) -> u32 {
        self.grid.gid_at(x, y)
    }

    /// Gid plus its flip flags.
    pub fn tile_gid_and_flags_at(&self, x: u32, y: u32) -> (u32, TileFlags) {
        self.grid.gid_and_flags_at(x, y)
    }

    /// The sprite for a cell, materializing it on first access.
    ///
    /// Returns `None` for empty cells, coordinates out of range, released
    /// maps and gids no tileset covers. The sprite stays bound to its quad;
    /// transform, opacity and color changes take effect next draw.
    pub fn tile_at(&mut self, x: u32, y: u32) -> Option<&mut TileSprite> {
        let gid = TileGid(self.grid.raw_at(x, y));
        if gid.is_empty() || !self.tileset.contains(gid.clean()) {
            return None;
        }
        let cell = self.cell(x, y);
        let position = self.projection.position_at(x, y);
        let opacity = self.opacity;
        Some(
            self.sprites
                .entry(cell)
                .or_insert_with(|| TileSprite::new(cell, gid, position, opacity)),
        )
    }

    /// Sets the gid of a cell, clearing its flip flags.
    pub fn set_tile_gid(&mut self, x: u32, y: u32, gid: u32) {
        self.set_tile_gid_with_flags(x, y, gid, TileFlags::NONE);
    }

    /// Sets the gid and flip flags of a cell.
    ///
    /// Out-of-range coordinates are ignored. Setting gid 0 removes the
    /// tile; setting the current gid and flags is a no-op. The grid always
    /// receives the new packed value, whether or not the cell renders.
    pub fn set_tile_gid_with_flags(&mut self, x: u32, y: u32, gid: u32, flags: TileFlags) {
        if !self.grid.in_bounds(x, y) {
            return;
        }
        if self.grid.is_released() {
            warn!("layer '{}': setting a tile on a released map", self.name);
            return;
        }
        let gid = gid & GID_MASK;
        let (current_gid, current_flags) = self.grid.gid_and_flags_at(x, y);
        if current_gid == gid && current_flags == flags {
            return;
        }
        if gid == 0 {
            self.remove_tile_at(x, y);
            return;
        }

        let packed = TileGid::compose(gid, flags);
        if !self.tileset.contains(gid) {
            warn!(
                "layer '{}': gid {} is outside tileset '{}', tile at ({}, {}) will not render",
                self.name,
                gid,
                self.tileset.name(),
                x,
                y
            );
            self.drop_quad_at(x, y);
        } else if current_gid == 0 || !self.tileset.contains(current_gid) {
            self.insert_tile(packed, x, y);
        } else {
            self.update_tile(packed, x, y);
        }
        self.grid.set_raw(x, y, packed.raw());
    }

    /// Clears a cell: grid entry back to 0, quad gone, sprite destroyed.
    pub fn remove_tile_at(&mut self, x: u32, y: u32) {
        if !self.grid.in_bounds(x, y) {
            return;
        }
        if self.grid.is_released() {
            warn!("layer '{}': removing a tile on a released map", self.name);
            return;
        }
        if self.grid.gid_at(x, y) == 0 {
            return;
        }
        self.drop_quad_at(x, y);
        self.grid.set_raw(x, y, 0);
    }

    /// Pixel position of a tile coordinate under the layer's orientation.
    pub fn position_at(&self, x: u32, y: u32) -> Vec2 {
        self.projection.position_at(x, y)
    }

    /// Frees the gid buffer to save memory. Queries by coordinate stop
    /// working permanently; drawing and existing sprites are unaffected.
    pub fn release_map(&mut self) {
        self.grid.release();
    }

    pub fn is_released(&self) -> bool {
        self.grid.is_released()
    }

    pub fn property_named(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Alpha-test cutoff for the render step, as authored.
    pub fn alpha_func(&self) -> f32 {
        self.alpha_func
    }

    pub fn vertex_z(&self) -> VertexZ {
        self.vertex_z
    }

    pub fn orientation(&self) -> Orientation {
        self.projection.orientation
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Smallest non-zero gid seen at setup, 0 when the layer started empty.
    pub fn min_gid(&self) -> u32 {
        self.min_gid
    }

    pub fn max_gid(&self) -> u32 {
        self.max_gid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Layer opacity; sprites already materialized keep their own.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
        self.batch.set_alpha(opacity);
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Number of quads currently in the batch.
    pub fn quad_count(&self) -> usize {
        self.atlas.len()
    }

    /// Number of cells promoted to sprites.
    pub fn sprite_count(&self) -> usize {
        self.sprites.len()
    }

    pub fn texture(&self) -> Option<&Texture2D> {
        self.batch.texture()
    }

    pub fn set_texture(&mut self, texture: Texture2D) {
        self.batch.set_texture(texture);
    }

    /// Folds sprite state into the batch and submits every quad in draw
    /// order. Without a texture this is a no-op.
    pub fn draw(&mut self) {
        if !self.visible {
            return;
        }
        self.sync_sprites();
        self.batch.draw();
    }

    fn cell(&self, x: u32, y: u32) -> u32 {
        y * self.grid.width() + x
    }

    /// Inserts the quad for a brand-new cell at its key's position.
    fn insert_tile(&mut self, gid: TileGid, x: u32, y: u32) {
        let Some(src) = self.tileset.rect_for_gid(gid.clean()) else {
            return;
        };
        let quad = self.quad(gid, src, x, y);
        let cell = self.cell(x, y);
        let key = self.vertex_z.key_for(&self.projection, x, y);
        let index = self.atlas.index_for_new(key);
        self.atlas.insert(index, AtlasSlot { key, cell });
        self.batch.insert(index, quad);
    }

    /// Rewrites the quad of an occupied cell in place; the key is
    /// position-derived, so the slot does not move.
    fn update_tile(&mut self, gid: TileGid, x: u32, y: u32) {
        let Some(src) = self.tileset.rect_for_gid(gid.clean()) else {
            return;
        };
        let cell = self.cell(x, y);
        let key = self.vertex_z.key_for(&self.projection, x, y);
        match self.atlas.index_for_existing(key, cell) {
            Some(index) => {
                let flip = FlipTransform::for_gid(gid);
                let quad = self.batch.get_mut(index);
                quad.src = src;
                quad.rotation = flip.rotation;
                quad.flip_x = flip.flip_x;
                quad.flip_y = flip.flip_y;
                if let Some(sprite) = self.sprites.get_mut(&cell) {
                    sprite.set_gid(gid);
                }
            }
            // the previous gid never produced a quad
            None => self.insert_tile(gid, x, y),
        }
    }

    /// Removes a cell's quad and sprite without touching the grid.
    fn drop_quad_at(&mut self, x: u32, y: u32) {
        let cell = self.cell(x, y);
        let key = self.vertex_z.key_for(&self.projection, x, y);
        if let Some(index) = self.atlas.index_for_existing(key, cell) {
            self.atlas.remove_at(index);
            self.batch.remove_at(index);
        }
        self.sprites.remove(&cell);
    }

    fn quad(&self, gid: TileGid, src: Rect, x: u32, y: u32) -> TileQuad {
        let flip = FlipTransform::for_gid(gid);
        TileQuad {
            src,
            dest: self.offset + self.projection.position_at(x, y),
            size: self.tileset.tile_size(),
            color: Color::new(1.0, 1.0, 1.0, self.opacity),
            rotation: flip.rotation,
            flip_x: flip.flip_x,
            flip_y: flip.flip_y,
            visible: true,
        }
    }

    fn sync_sprites(&mut self) {
        let width = self.grid.width();
        let offset = self.offset;
        let tile_size = self.tileset.tile_size();
        for (&cell, sprite) in &self.sprites {
            let (x, y) = (cell % width, cell / width);
            let key = self.vertex_z.key_for(&self.projection, x, y);
            let Some(index) = self.atlas.index_for_existing(key, cell) else {
                continue;
            };
            let flip = FlipTransform::for_gid(sprite.gid());
            let quad = self.batch.get_mut(index);
            quad.dest = offset + sprite.position;
            quad.size = tile_size * sprite.scale;
            quad.rotation = sprite.rotation;
            quad.flip_x = flip.flip_x;
            quad.flip_y = flip.flip_y;
            quad.color = Color::new(
                sprite.color.r,
                sprite.color.g,
                sprite.color.b,
                sprite.color.a * sprite.opacity,
            );
            quad.visible = sprite.visible;
        }
    }
}
