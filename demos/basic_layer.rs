use macroquad::prelude::*;
use macroquad_tmx_layer::{load_atlas_texture, LayerInfo, MapInfo, TileLayer, Tileset, TilesetInfo};

fn window_conf() -> Conf {
    Conf {
        window_title: "Basic Layer".into(),
        window_width: 1280,
        window_height: 720,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // In a real game these descriptors come from a map-file parser.
    let tileset_info: TilesetInfo = serde_json::from_str(
        r#"{
            "name": "terrain",
            "firstgid": 1,
            "tilewidth": 32,
            "tileheight": 32,
            "tilecount": 64,
            "columns": 8,
            "image": "assets/terrain.png"
        }"#,
    )
    .expect("tileset descriptor");

    let layer_info: LayerInfo = serde_json::from_str(
        r#"{
            "name": "ground",
            "width": 8,
            "height": 6,
            "data": [
                1, 1, 1, 1, 1, 1, 1, 1,
                1, 2, 2, 2, 2, 2, 2, 1,
                1, 2, 9, 9, 9, 9, 2, 1,
                1, 2, 9, 17, 17, 9, 2, 1,
                1, 2, 9, 9, 9, 9, 2, 1,
                1, 1, 1, 1, 1, 1, 1, 1
            ]
        }"#,
    )
    .expect("layer descriptor");

    let map_info: MapInfo =
        serde_json::from_str(r#"{ "tilewidth": 32, "tileheight": 32 }"#).expect("map descriptor");

    let tileset = Tileset::new(tileset_info).expect("tileset");
    let mut layer = TileLayer::new(tileset, layer_info, &map_info).expect("layer");

    let texture = load_atlas_texture("assets/terrain.png")
        .await
        .expect("atlas texture");
    layer.set_texture(texture);

    // Promote one cell and wiggle it to show sprites stay batched.
    let mut t = 0.0f32;
    loop {
        clear_background(BLACK);

        t += get_frame_time();
        if let Some(sprite) = layer.tile_at(3, 3) {
            sprite.rotation = t.sin() * 20.0;
        }

        layer.draw();

        draw_text(&format!("FPS: {}", get_fps()), 20.0, 30.0, 30.0, RED);
        next_frame().await;
    }
}
