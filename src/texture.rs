//! Atlas image decoding and texture upload.
//!
//! The engine never interprets pixels; it only needs a flat, dimensioned
//! RGBA buffer to hand to the GPU. Decoding goes through the `image`
//! crate, so anything it can read (PNG, JPEG, TIFF, WEBP, ...) works as an
//! atlas.

use anyhow::Context;
use macroquad::prelude::*;

pub use image::ImageFormat;

use crate::error::Error;

/// A decoded atlas image: straight-alpha RGBA8 pixels plus the facts the
/// engine forwards to the render step.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub bits_per_component: u8,
    pub has_alpha: bool,
    /// Always straight alpha here; kept so callers that premultiply
    /// downstream can record it.
    pub premultiplied: bool,
}

/// Decodes an in-memory image. With `format` the bytes must match it;
/// without, the format is sniffed from the content.
pub fn decode(bytes: &[u8], format: Option<ImageFormat>) -> Result<DecodedImage, Error> {
    let dynamic = match format {
        Some(format) => image::load_from_memory_with_format(bytes, format)?,
        None => image::load_from_memory(bytes)?,
    };
    let color = dynamic.color();
    let bits_per_component = (color.bits_per_pixel() / color.channel_count() as u16) as u8;
    let has_alpha = color.has_alpha();
    let rgba = dynamic.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(DecodedImage {
        pixels: rgba.into_raw(),
        width,
        height,
        bits_per_component,
        has_alpha,
        premultiplied: false,
    })
}

/// Uploads a decoded image as a nearest-filtered atlas texture.
pub fn atlas_texture(image: &DecodedImage) -> Texture2D {
    let texture = Texture2D::from_rgba8(image.width as u16, image.height as u16, &image.pixels);
    texture.set_filter(FilterMode::Nearest);
    texture
}

/// Reads, decodes and uploads an atlas image in one go.
pub async fn load_atlas_texture(path: &str) -> anyhow::Result<Texture2D> {
    let bytes = load_file(path)
        .await
        .with_context(|| format!("Reading atlas image {}", path))?;
    let decoded =
        decode(&bytes, None).with_context(|| format!("Decoding atlas image {}", path))?;
    Ok(atlas_texture(&decoded))
}
