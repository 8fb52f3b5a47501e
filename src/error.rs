use thiserror::Error;

/// Error type for layer and tileset construction.
#[derive(Debug, Error)]
pub enum Error {
    /// A layer's data length does not match width * height
    #[error("invalid layer size for layer '{layer}': {len} tiles, expected {width}x{height}")]
    InvalidLayerSize {
        layer: String,
        len: usize,
        width: u32,
        height: u32,
    },
    /// A tileset descriptor with no tiles or no columns
    #[error("tileset '{name}' declares no tiles")]
    EmptyTileset { name: String },
    /// Atlas image decode error
    #[error("failed to decode atlas image")]
    Image(#[from] image::ImageError),
}
