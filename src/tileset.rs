//! Gid range and atlas geometry of one tileset.

use macroquad::prelude::*;

use crate::descriptor::TilesetInfo;
use crate::error::Error;

/// Runtime tileset: a contiguous gid range laid out as a regular grid in
/// the atlas image. Pure data; the texture itself lives on the layer's
/// quad batch.
#[derive(Debug, Clone)]
pub struct Tileset {
    name: String,
    first_gid: u32,
    tile_count: u32,
    columns: u32,
    tile_width: u32,
    tile_height: u32,
    spacing: u32,
    margin: u32,
}

impl Tileset {
    pub fn new(info: TilesetInfo) -> Result<Self, Error> {
        if info.tile_count == 0 || info.columns == 0 {
            return Err(Error::EmptyTileset { name: info.name });
        }
        Ok(Tileset {
            name: info.name,
            first_gid: info.first_gid,
            tile_count: info.tile_count,
            columns: info.columns,
            tile_width: info.tile_width,
            tile_height: info.tile_height,
            spacing: info.spacing,
            margin: info.margin,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn first_gid(&self) -> u32 {
        self.first_gid
    }

    pub fn last_gid(&self) -> u32 {
        self.first_gid + self.tile_count - 1
    }

    #[inline]
    pub fn contains(&self, gid: u32) -> bool {
        gid >= self.first_gid && gid <= self.last_gid()
    }

    /// Tile size in pixels (may differ from the map tile size).
    pub fn tile_size(&self) -> Vec2 {
        vec2(self.tile_width as f32, self.tile_height as f32)
    }

    /// Source rectangle of `gid` within the atlas, honoring spacing and
    /// margin. `None` when the gid is outside this tileset's range.
    pub fn rect_for_gid(&self, gid: u32) -> Option<Rect> {
        if !self.contains(gid) {
            return None;
        }
        let local = gid - self.first_gid;
        let col = local % self.columns;
        let row = local / self.columns;
        let x = self.margin + col * (self.tile_width + self.spacing);
        let y = self.margin + row * (self.tile_height + self.spacing);
        Some(Rect::new(
            x as f32,
            y as f32,
            self.tile_width as f32,
            self.tile_height as f32,
        ))
    }
}
