//! Per-tile draw-order keys.
//!
//! A layer can carry a `cc_vertexz` property: an integer fixes one key for
//! every tile, the string `"automatic"` derives the key from the tile
//! position so that tiles farther from the viewer paint later. Isometric
//! layers default to automatic when the property is absent.

use log::warn;

use crate::coords::{Orientation, Projection};
use crate::properties::{Properties, PropertyValue};

/// Draw-order policy, fixed once per layer at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexZ {
    /// One author-supplied key for the whole layer; ordering within the
    /// batch degenerates to insertion order.
    Manual(i32),
    /// Position-derived key per orientation.
    Automatic,
}

impl VertexZ {
    pub fn from_properties(props: &Properties, orientation: Orientation) -> VertexZ {
        let mode = match props.get("cc_vertexz") {
            Some(PropertyValue::String(s)) if s == "automatic" => VertexZ::Automatic,
            Some(v) => VertexZ::Manual(parse_z(v)),
            None if orientation == Orientation::Isometric => VertexZ::Automatic,
            None => VertexZ::Manual(0),
        };
        if mode == VertexZ::Automatic && orientation == Orientation::Hexagonal {
            warn!("automatic vertex-z has no rule for hexagonal maps, using 0");
            return VertexZ::Manual(0);
        }
        mode
    }

    /// Key for the tile at `(x, y)`. Farther tiles get greater keys.
    pub fn key_for(&self, proj: &Projection, x: u32, y: u32) -> i32 {
        match self {
            VertexZ::Manual(z) => *z,
            VertexZ::Automatic => match proj.orientation {
                Orientation::Isometric => {
                    let max = proj.layer_width + proj.layer_height;
                    -((max - (x + y)) as i32)
                }
                Orientation::Orthogonal => -((proj.layer_height - y) as i32),
                Orientation::Hexagonal => 0,
            },
        }
    }
}

fn parse_z(v: &PropertyValue) -> i32 {
    match v {
        PropertyValue::Int(i) => *i as i32,
        PropertyValue::Float(f) => *f as i32,
        PropertyValue::String(s) => s.parse().unwrap_or(0),
        PropertyValue::Bool(_) => 0,
    }
}

/// Alpha-test cutoff from `cc_alpha_func`, forwarded untouched to the
/// render step. Defaults to 0.
pub(crate) fn alpha_func(props: &Properties) -> f32 {
    match props.get("cc_alpha_func") {
        Some(PropertyValue::String(s)) => s.parse().unwrap_or(0.0),
        Some(v) => v.as_float().unwrap_or(0.0) as f32,
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(json: &str) -> Properties {
        serde_json::from_str(json).unwrap()
    }

    fn proj(orientation: Orientation) -> Projection {
        Projection {
            layer_width: 4,
            layer_height: 3,
            tile_width: 16.0,
            tile_height: 16.0,
            orientation,
        }
    }

    #[test]
    fn integer_property_selects_manual_mode() {
        let z = VertexZ::from_properties(&props(r#"{"cc_vertexz": -5}"#), Orientation::Orthogonal);
        assert_eq!(z, VertexZ::Manual(-5));
        assert_eq!(z.key_for(&proj(Orientation::Orthogonal), 3, 2), -5);
    }

    #[test]
    fn automatic_string_and_iso_default_select_automatic() {
        assert_eq!(
            VertexZ::from_properties(
                &props(r#"{"cc_vertexz": "automatic"}"#),
                Orientation::Orthogonal
            ),
            VertexZ::Automatic
        );
        assert_eq!(
            VertexZ::from_properties(&Properties::new(), Orientation::Isometric),
            VertexZ::Automatic
        );
        assert_eq!(
            VertexZ::from_properties(&Properties::new(), Orientation::Orthogonal),
            VertexZ::Manual(0)
        );
    }

    #[test]
    fn automatic_keys_grow_with_distance() {
        let iso = proj(Orientation::Isometric);
        let z = VertexZ::Automatic;
        assert_eq!(z.key_for(&iso, 0, 0), -7);
        assert_eq!(z.key_for(&iso, 3, 2), -2);
        assert!(z.key_for(&iso, 1, 1) > z.key_for(&iso, 0, 1));

        let ortho = proj(Orientation::Orthogonal);
        assert_eq!(z.key_for(&ortho, 0, 0), -3);
        assert_eq!(z.key_for(&ortho, 0, 2), -1);
        // equal keys within a row
        assert_eq!(z.key_for(&ortho, 0, 1), z.key_for(&ortho, 3, 1));
    }

    #[test]
    fn hexagonal_automatic_falls_back_to_manual_zero() {
        assert_eq!(
            VertexZ::from_properties(
                &props(r#"{"cc_vertexz": "automatic"}"#),
                Orientation::Hexagonal
            ),
            VertexZ::Manual(0)
        );
    }

    #[test]
    fn alpha_func_defaults_to_zero_and_passes_through() {
        assert_eq!(alpha_func(&Properties::new()), 0.0);
        assert_eq!(alpha_func(&props(r#"{"cc_alpha_func": 0.5}"#)), 0.5);
        assert_eq!(alpha_func(&props(r#"{"cc_alpha_func": "0.25"}"#)), 0.25);
    }
}
