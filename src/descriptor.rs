//! Pre-parsed map, layer and tileset descriptors.
//!
//! A map-file parser (or a test fixture) produces these; the engine never
//! reads map files itself. Everything optional defaults, so partial JSON
//! fragments deserialize cleanly.

use serde::Deserialize;

use crate::coords::Orientation;
use crate::properties::Properties;

fn default_true() -> bool {
    true
}
fn one() -> f32 {
    1.0
}

/// Map-level facts every layer of a map shares.
#[derive(Debug, Clone, Deserialize)]
pub struct MapInfo {
    #[serde(rename = "tilewidth")]
    pub tile_width: u32,
    #[serde(rename = "tileheight")]
    pub tile_height: u32,
    #[serde(default)]
    pub orientation: Orientation,
}

/// One tile layer as authored: raw packed gids plus metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct LayerInfo {
    #[serde(default)]
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// Row-major packed gids, `width * height` entries.
    #[serde(default)]
    pub data: Vec<u32>,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default = "one")]
    pub opacity: f32,
    /// Layer offset in tiles.
    #[serde(default)]
    pub offsetx: f32,
    #[serde(default)]
    pub offsety: f32,
    #[serde(default)]
    pub properties: Properties,
}

/// One tileset: gid range plus the geometry of its atlas image.
#[derive(Debug, Clone, Deserialize)]
pub struct TilesetInfo {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "firstgid")]
    pub first_gid: u32,
    #[serde(rename = "tilewidth")]
    pub tile_width: u32,
    #[serde(rename = "tileheight")]
    pub tile_height: u32,
    #[serde(rename = "tilecount")]
    pub tile_count: u32,
    pub columns: u32,
    #[serde(default)]
    pub spacing: u32,
    #[serde(default)]
    pub margin: u32,
    /// Atlas image path, resolved by the caller.
    #[serde(default)]
    pub image: String,
}
