#![warn(missing_docs)]

//! Batched TMX tile layer engine for Macroquad.
//!
//! A [`TileLayer`] keeps a flat grid of packed gids and renders every
//! non-empty cell as one quad in a shared atlas batch. Cells touched
//! through [`TileLayer::tile_at`] are promoted to [`TileSprite`]s that can
//! be moved, scaled and tinted individually without breaking batching for
//! the rest of the layer. Map, layer and tileset descriptors arrive
//! pre-parsed; this crate owns no file format.

mod atlas;
mod batch;
mod coords;
mod descriptor;
mod error;
mod gid;
mod grid;
mod layer;
mod properties;
mod sprite;
mod texture;
mod tileset;
mod vertexz;

pub use atlas::{AtlasIndex, AtlasSlot};
pub use batch::{QuadBatch, TileQuad};
pub use coords::{Orientation, Projection};
pub use descriptor::{LayerInfo, MapInfo, TilesetInfo};
pub use error::Error;
pub use gid::{TileFlags, TileGid, FLAG_MASK, FLIP_D, FLIP_H, FLIP_V, GID_MASK};
pub use grid::TileGrid;
pub use layer::TileLayer;
pub use properties::{Properties, PropertyValue};
pub use sprite::TileSprite;
pub use texture::{atlas_texture, decode, load_atlas_texture, DecodedImage, ImageFormat};
pub use tileset::Tileset;
pub use vertexz::VertexZ;
