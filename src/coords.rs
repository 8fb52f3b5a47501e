//! Tile-coordinate to pixel-position transforms.
//!
//! Tile row 0 is the topmost row while render space has Y growing upward,
//! so every transform inverts the row axis.

use log::warn;
use macroquad::prelude::*;
use serde::Deserialize;

/// Map orientation; the layer inherits it from the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Orthogonal,
    Isometric,
    /// Staggered honeycomb packing, odd columns shifted half a tile.
    Hexagonal,
}

/// Pure tile-to-pixel projection for one layer.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pub layer_width: u32,
    pub layer_height: u32,
    /// Map tile size in pixels; may differ from the tileset's tile size.
    pub tile_width: f32,
    pub tile_height: f32,
    pub orientation: Orientation,
}

impl Projection {
    /// Pixel position of the tile at `(x, y)`.
    pub fn position_at(&self, x: u32, y: u32) -> Vec2 {
        match self.orientation {
            Orientation::Orthogonal => self.ortho(x, y),
            Orientation::Isometric => self.iso(x, y),
            Orientation::Hexagonal => self.hex(x, y),
        }
    }

    fn ortho(&self, x: u32, y: u32) -> Vec2 {
        vec2(
            x as f32 * self.tile_width,
            (self.layer_height - 1 - y) as f32 * self.tile_height,
        )
    }

    fn iso(&self, x: u32, y: u32) -> Vec2 {
        let (x, y) = (x as f32, y as f32);
        vec2(
            self.tile_width / 2.0 * (self.layer_width as f32 + x - y - 1.0),
            self.tile_height / 2.0 * (2.0 * self.layer_height as f32 - x - y - 2.0),
        )
    }

    fn hex(&self, x: u32, y: u32) -> Vec2 {
        let stagger = if x % 2 == 1 {
            self.tile_height / 2.0
        } else {
            0.0
        };
        vec2(
            x as f32 * self.tile_width * 3.0 / 4.0,
            (self.layer_height - 1 - y) as f32 * self.tile_height + stagger,
        )
    }

    /// Pixel offset for a layer authored with an offset in tiles.
    pub fn layer_offset(&self, offset: Vec2) -> Vec2 {
        match self.orientation {
            Orientation::Orthogonal => {
                vec2(offset.x * self.tile_width, -offset.y * self.tile_height)
            }
            Orientation::Isometric => vec2(
                self.tile_width / 2.0 * (offset.x - offset.y),
                self.tile_height / 2.0 * (-offset.x - offset.y),
            ),
            Orientation::Hexagonal => {
                if offset != Vec2::ZERO {
                    warn!("layer offsets are not supported on hexagonal maps, ignoring");
                }
                Vec2::ZERO
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proj(orientation: Orientation) -> Projection {
        Projection {
            layer_width: 4,
            layer_height: 10,
            tile_width: 32.0,
            tile_height: 32.0,
            orientation,
        }
    }

    #[test]
    fn ortho_inverts_rows() {
        let p = proj(Orientation::Orthogonal);
        assert_eq!(p.position_at(0, 0), vec2(0.0, 288.0));
        assert_eq!(p.position_at(0, 9), vec2(0.0, 0.0));
        assert_eq!(p.position_at(3, 4), vec2(96.0, 160.0));
    }

    #[test]
    fn position_is_pure() {
        let p = proj(Orientation::Isometric);
        assert_eq!(p.position_at(2, 3), p.position_at(2, 3));
    }

    #[test]
    fn iso_projects_the_diamond() {
        let p = proj(Orientation::Isometric);
        // x' = 16 * (4 + x - y - 1), y' = 16 * (20 - x - y - 2)
        assert_eq!(p.position_at(0, 0), vec2(48.0, 288.0));
        assert_eq!(p.position_at(1, 0), vec2(64.0, 272.0));
        assert_eq!(p.position_at(0, 1), vec2(32.0, 272.0));
    }

    #[test]
    fn hex_staggers_odd_columns() {
        let p = proj(Orientation::Hexagonal);
        assert_eq!(p.position_at(0, 9), vec2(0.0, 0.0));
        assert_eq!(p.position_at(1, 9), vec2(24.0, 16.0));
        assert_eq!(p.position_at(2, 9), vec2(48.0, 0.0));
    }

    #[test]
    fn layer_offset_per_orientation() {
        let ortho = proj(Orientation::Orthogonal);
        assert_eq!(ortho.layer_offset(vec2(1.0, 2.0)), vec2(32.0, -64.0));

        let iso = proj(Orientation::Isometric);
        assert_eq!(iso.layer_offset(vec2(1.0, 2.0)), vec2(-16.0, -48.0));

        let hex = proj(Orientation::Hexagonal);
        assert_eq!(hex.layer_offset(vec2(1.0, 2.0)), Vec2::ZERO);
    }
}
