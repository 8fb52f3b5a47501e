//! Tiles promoted to individually transformable objects.

use macroquad::prelude::*;

use crate::gid::TileGid;

/// A cell that has been materialized into its own sprite.
///
/// The sprite owns its transform, opacity and color from the moment it is
/// created; the layer keeps its gid in sync with the grid and folds the
/// sprite state back into the batched quad every draw.
#[derive(Debug, Clone)]
pub struct TileSprite {
    cell: u32,
    gid: TileGid,
    pub position: Vec2,
    /// Degrees, about the tile center.
    pub rotation: f32,
    pub scale: Vec2,
    pub opacity: f32,
    pub color: Color,
    pub visible: bool,
}

impl TileSprite {
    pub(crate) fn new(cell: u32, gid: TileGid, position: Vec2, opacity: f32) -> Self {
        TileSprite {
            cell,
            gid,
            position,
            rotation: FlipTransform::for_gid(gid).rotation,
            scale: vec2(1.0, 1.0),
            opacity,
            color: WHITE,
            visible: true,
        }
    }

    /// Row-major index of the grid cell this sprite is bound to.
    pub fn cell(&self) -> u32 {
        self.cell
    }

    pub fn gid(&self) -> TileGid {
        self.gid
    }

    pub(crate) fn set_gid(&mut self, gid: TileGid) {
        self.gid = gid;
        self.rotation = FlipTransform::for_gid(gid).rotation;
    }
}

/// How a packed gid's flip bits render on a quad.
///
/// The diagonal bit turns into a quarter rotation; its four combinations
/// with the horizontal and vertical bits each map to one of the states
/// below. Without the diagonal bit the flags are plain axis flips.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct FlipTransform {
    pub rotation: f32,
    pub flip_x: bool,
    pub flip_y: bool,
}

impl FlipTransform {
    pub fn for_gid(gid: TileGid) -> Self {
        if gid.flip_d() {
            match (gid.flip_h(), gid.flip_v()) {
                (true, false) => FlipTransform {
                    rotation: 90.0,
                    ..Default::default()
                },
                (false, true) => FlipTransform {
                    rotation: 270.0,
                    ..Default::default()
                },
                (true, true) => FlipTransform {
                    rotation: 90.0,
                    flip_x: true,
                    ..Default::default()
                },
                (false, false) => FlipTransform {
                    rotation: 270.0,
                    flip_x: true,
                    ..Default::default()
                },
            }
        } else {
            FlipTransform {
                rotation: 0.0,
                flip_x: gid.flip_h(),
                flip_y: gid.flip_v(),
            }
        }
    }
}
