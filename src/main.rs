use arboard::Clipboard;
use gridcast::config::Config;
use gridcast::mapfile::load_map_or_default;
use gridcast::project::{project_fan, WallStrip};
use gridcast::{Camera, FanParams, Grid, Ray, Simulation};
use macroquad::prelude::*;

/// Radius of the player marker on the top-down overlay, world units
const PLAYER_MARKER_RADIUS: f32 = 20.0;
/// Length of the player's heading line on the overlay, world units
const HEADING_LENGTH: f32 = 30.0;

/// Draw one shaded rectangle per projected wall strip, left to right
fn draw_projection(strips: &[WallStrip], strip_width: f32, wall_color: Color) {
    for (i, strip) in strips.iter().enumerate() {
        let color = Color::new(wall_color.r, wall_color.g, wall_color.b, strip.alpha);
        draw_rectangle(
            i as f32 * strip_width,
            strip.top_y,
            strip_width,
            strip.height,
            color,
        );
    }
}

/// Top-down overlay: tiles, the current ray fan, and the player marker
fn draw_minimap(sim: &Simulation, rays: &[Ray], scale: f32) {
    let tile = sim.grid.tile_size * scale;

    for y in 0..sim.grid.rows {
        for x in 0..sim.grid.cols {
            let color = if sim.grid.is_blocked(x, y) {
                Color::from_rgba(34, 34, 34, 255)
            } else {
                WHITE
            };
            draw_rectangle(x as f32 * tile, y as f32 * tile, tile, tile, color);
        }
    }

    let px = sim.camera.x * scale;
    let py = sim.camera.y * scale;

    for ray in rays {
        draw_line(px, py, ray.hit_x * scale, ray.hit_y * scale, 1.0, RED);
    }

    draw_circle(px, py, PLAYER_MARKER_RADIUS * scale, BLUE);
    draw_line(
        px,
        py,
        px + sim.camera.angle.cos() * HEADING_LENGTH * scale,
        py + sim.camera.angle.sin() * HEADING_LENGTH * scale,
        1.0,
        BLUE,
    );
}

/// Copy the current map layout to the clipboard
fn copy_layout_to_clipboard(grid: &Grid) {
    match Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(grid.to_layout()) {
                println!("Failed to copy to clipboard: {}", e);
            } else {
                println!("Map layout copied to clipboard!");
                // Keep clipboard alive for a moment to ensure clipboard managers can capture it
                std::thread::sleep(std::time::Duration::from_millis(100));
            }
        }
        Err(e) => {
            println!("Failed to access clipboard: {}", e);
        }
    }
}

#[macroquad::main("GridCast - Raycasting Demo")]
async fn main() {
    let config = Config::load();
    let tile_size = config.grid.tile_size;

    let (grid, spawn) = load_map_or_default(&config.map.path, tile_size);

    // Window covers the map's world extent
    request_new_screen_size(grid.world_width(), grid.world_height());

    let (spawn_x, spawn_y) =
        spawn.unwrap_or((grid.world_width() / 2.0, grid.world_height() / 2.0));
    let camera = Camera::new(
        spawn_x,
        spawn_y,
        std::f32::consts::FRAC_PI_2,
        config.camera.walk_speed,
        config.camera.turn_speed_deg.to_radians(),
    );

    // Strip width below one pixel would explode the ray count
    let strip_width = config.render.strip_width.max(1.0);
    let mut sim = Simulation::new(
        grid,
        camera,
        FanParams {
            fov: config.render.fov_deg.to_radians(),
            ray_count: 0,
        },
    );

    let background = Color::from_rgba(
        config.render.background_r,
        config.render.background_g,
        config.render.background_b,
        255,
    );
    let wall_color = Color::from_rgba(
        config.render.wall_r,
        config.render.wall_g,
        config.render.wall_b,
        255,
    );

    let mut show_minimap = config.render.show_minimap;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if is_key_pressed(KeyCode::M) {
            show_minimap = !show_minimap;
        }
        if is_key_pressed(KeyCode::C) {
            copy_layout_to_clipboard(&sim.grid);
        }

        // Arrow keys map directly onto the camera intents
        sim.camera.turn_dir = match (is_key_down(KeyCode::Left), is_key_down(KeyCode::Right)) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        };
        sim.camera.move_dir = match (is_key_down(KeyCode::Up), is_key_down(KeyCode::Down)) {
            (true, false) => 1,
            (false, true) => -1,
            _ => 0,
        };

        // One ray per wall strip at the current window width
        sim.fan.ray_count = (screen_width() / strip_width) as usize;

        let rays = sim.tick();
        let strips = project_fan(
            &rays,
            sim.camera.angle,
            screen_height(),
            tile_size,
            config.render.shade,
        );

        clear_background(background);
        draw_projection(&strips, strip_width, wall_color);

        if show_minimap {
            draw_minimap(&sim, &rays, config.render.minimap_scale);
        }

        draw_text(&format!("FPS: {}", get_fps()), 10.0, 20.0, 20.0, DARKGRAY);

        next_frame().await
    }
}
