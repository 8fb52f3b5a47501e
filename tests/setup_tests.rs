// tests/setup_tests.rs

use macroquad_tmx_layer::{
    Error, LayerInfo, MapInfo, Orientation, TileLayer, Tileset, TilesetInfo, VertexZ, FLIP_H,
};

fn tileset() -> Tileset {
    let info: TilesetInfo = serde_json::from_str(
        r#"{
            "name": "terrain",
            "firstgid": 1,
            "tilewidth": 16,
            "tileheight": 16,
            "tilecount": 8,
            "columns": 4,
            "image": "terrain.png"
        }"#,
    )
    .unwrap();
    Tileset::new(info).unwrap()
}

fn map(json: &str) -> MapInfo {
    serde_json::from_str(json).unwrap()
}

fn layer(json: &str) -> LayerInfo {
    serde_json::from_str(json).unwrap()
}

#[test]
fn error_on_layer_size_mismatch() {
    let info = layer(r#"{ "name": "oops", "width": 2, "height": 2, "data": [1, 2, 3] }"#);
    let err = TileLayer::new(tileset(), info, &map(r#"{ "tilewidth": 16, "tileheight": 16 }"#))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidLayerSize { layer, len: 3, .. } if layer == "oops"));
}

#[test]
fn bulk_setup_builds_one_quad_per_non_empty_cell() {
    let info = layer(r#"{ "width": 3, "height": 2, "data": [2, 0, 7, 0, 0, 3] }"#);
    let layer =
        TileLayer::new(tileset(), info, &map(r#"{ "tilewidth": 16, "tileheight": 16 }"#)).unwrap();
    assert_eq!(layer.quad_count(), 3);
    assert_eq!(layer.sprite_count(), 0);
    assert_eq!(layer.min_gid(), 2);
    assert_eq!(layer.max_gid(), 7);
}

#[test]
fn setup_skips_gids_no_tileset_covers() {
    // 99 is outside the tileset's 1..=8 range
    let info = layer(r#"{ "width": 2, "height": 1, "data": [99, 4] }"#);
    let mut tl =
        TileLayer::new(tileset(), info, &map(r#"{ "tilewidth": 16, "tileheight": 16 }"#)).unwrap();
    assert_eq!(tl.quad_count(), 1);
    // the authored value stays readable even though it cannot render
    assert_eq!(tl.tile_gid_at(0, 0), 99);
    assert!(tl.tile_at(0, 0).is_none());
}

#[test]
fn setup_keeps_flip_flags_packed_in_the_grid() {
    let flagged = FLIP_H | 5;
    let info = LayerInfo {
        data: vec![flagged],
        ..layer(r#"{ "width": 1, "height": 1 }"#)
    };
    let tl =
        TileLayer::new(tileset(), info, &map(r#"{ "tilewidth": 16, "tileheight": 16 }"#)).unwrap();
    let (gid, flags) = tl.tile_gid_and_flags_at(0, 0);
    assert_eq!(gid, 5);
    assert!(flags.contains(macroquad_tmx_layer::TileFlags::HORIZONTAL));
}

#[test]
fn isometric_maps_default_to_automatic_vertex_z() {
    let info = layer(r#"{ "width": 2, "height": 2, "data": [0, 0, 0, 0] }"#);
    let tl = TileLayer::new(
        tileset(),
        info,
        &map(r#"{ "tilewidth": 16, "tileheight": 16, "orientation": "isometric" }"#),
    )
    .unwrap();
    assert_eq!(tl.vertex_z(), VertexZ::Automatic);
    assert_eq!(tl.orientation(), Orientation::Isometric);
}

#[test]
fn cc_vertexz_property_overrides_the_default() {
    let info = layer(
        r#"{
            "width": 1, "height": 1, "data": [0],
            "properties": { "cc_vertexz": -3 }
        }"#,
    );
    let tl = TileLayer::new(
        tileset(),
        info,
        &map(r#"{ "tilewidth": 16, "tileheight": 16, "orientation": "isometric" }"#),
    )
    .unwrap();
    assert_eq!(tl.vertex_z(), VertexZ::Manual(-3));
}

#[test]
fn alpha_func_is_stored_and_exposed_untouched() {
    let info = layer(
        r#"{
            "width": 1, "height": 1, "data": [0],
            "properties": { "cc_alpha_func": 0.5, "kind": "background" }
        }"#,
    );
    let tl =
        TileLayer::new(tileset(), info, &map(r#"{ "tilewidth": 16, "tileheight": 16 }"#)).unwrap();
    assert_eq!(tl.alpha_func(), 0.5);
    assert_eq!(
        tl.property_named("kind").and_then(|p| p.as_str()),
        Some("background")
    );
    assert!(tl.property_named("missing").is_none());
}

#[test]
fn name_and_opacity_stay_mutable() {
    let info = layer(r#"{ "name": "ground", "width": 1, "height": 1, "data": [1], "opacity": 0.75 }"#);
    let mut tl =
        TileLayer::new(tileset(), info, &map(r#"{ "tilewidth": 16, "tileheight": 16 }"#)).unwrap();
    assert_eq!(tl.name(), "ground");
    assert_eq!(tl.opacity(), 0.75);
    tl.set_name("floor");
    tl.set_opacity(0.25);
    assert_eq!(tl.name(), "floor");
    assert_eq!(tl.opacity(), 0.25);
    assert!(tl.visible());
    tl.set_visible(false);
    assert!(!tl.visible());
}
