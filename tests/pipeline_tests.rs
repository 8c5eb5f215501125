mod common;

use common::{grid_from_layout, TILE};
use gridcast::project::project_fan;
use gridcast::ray::MarchParams;
use gridcast::{Camera, FanParams, Ray, Simulation};

/// Open room with a full-height wall column at cell x=7
const WALLED_ROOM: &str = "\
111111111111111
100000010000001
100000010000001
100000010000001
100000010000001
100000010000001
100000010000001
100000010000001
100000010000001
100000010000001
111111111111111
";

const FOV: f32 = std::f32::consts::FRAC_PI_3; // 60 degrees
const SCREEN_HEIGHT: f32 = 704.0;

#[test]
fn single_ray_hits_wall_five_tiles_ahead() {
    let grid = grid_from_layout(WALLED_ROOM);
    let march = MarchParams::for_grid(&grid);

    // Camera on the cell-2 boundary of the middle row, facing right: the
    // wall's near face at x=448 is exactly five tiles ahead
    let ray = Ray::cast(&grid, 2.0 * TILE, 5.5 * TILE, 0.0, &march);

    let expected = 5.0 * TILE;
    assert!(
        (ray.distance - expected).abs() <= march.step,
        "distance {} not within one step of {}",
        ray.distance,
        expected
    );
    assert!(ray.hit_x >= 7.0 * TILE && ray.hit_x <= 7.0 * TILE + march.step);
    assert!((ray.hit_y - 5.5 * TILE).abs() < 1e-3);
}

#[test]
fn frame_pipeline_produces_one_finite_strip_per_ray() {
    let grid = grid_from_layout(WALLED_ROOM);
    let camera = Camera::new(2.0 * TILE, 5.5 * TILE, 0.0, 2.5, 0.05);
    let mut sim = Simulation::new(
        grid,
        camera,
        FanParams {
            fov: FOV,
            ray_count: 96,
        },
    );

    let rays = sim.tick();
    assert_eq!(rays.len(), 96);

    let strips = project_fan(&rays, sim.camera.angle, SCREEN_HEIGHT, TILE, 200.0);
    assert_eq!(strips.len(), rays.len());

    for strip in &strips {
        assert!(strip.height.is_finite());
        assert!(strip.top_y.is_finite());
        assert!(strip.alpha >= 0.0 && strip.alpha <= 1.0);
        assert!(strip.height > 0.0);
    }
}

#[test]
fn center_column_strip_matches_corrected_distance() {
    let grid = grid_from_layout(WALLED_ROOM);
    let camera = Camera::new(2.0 * TILE, 5.5 * TILE, 0.0, 2.5, 0.05);
    let mut sim = Simulation::new(
        grid,
        camera,
        FanParams {
            fov: FOV,
            ray_count: 96,
        },
    );

    let rays = sim.tick();
    let strips = project_fan(&rays, sim.camera.angle, SCREEN_HEIGHT, TILE, 200.0);

    // Ray 48 points along the facing direction; its corrected distance
    // is within marching tolerance of five tiles, so the strip height
    // follows the projection formula
    let center = &strips[48];
    let corrected = rays[48].distance * (rays[48].angle - sim.camera.angle).cos();
    assert!((corrected - 5.0 * TILE).abs() < 2.0);

    let expected_height = (SCREEN_HEIGHT / corrected) * TILE;
    assert!((center.height - expected_height).abs() < 1e-2);
    assert!((center.top_y - (SCREEN_HEIGHT / 2.0 - expected_height / 2.0)).abs() < 1e-2);
}

#[test]
fn flat_wall_projects_nearly_equal_heights() {
    // All hits are on the same wall plane, so edge rays travel farther
    // but fisheye correction keeps their corrected distance equal; strip
    // heights across the fan stay nearly constant
    let grid = grid_from_layout(WALLED_ROOM);
    let camera = Camera::new(2.0 * TILE, 5.5 * TILE, 0.0, 2.5, 0.05);
    let mut sim = Simulation::new(
        grid,
        camera,
        FanParams {
            fov: 0.5,
            ray_count: 51,
        },
    );

    let rays = sim.tick();

    let center = &rays[25];
    let edge = &rays[0];
    assert!(edge.distance > center.distance);

    let strips = project_fan(&rays, sim.camera.angle, SCREEN_HEIGHT, TILE, 200.0);
    let ratio = strips[0].height / strips[25].height;
    assert!(
        (ratio - 1.0).abs() < 0.02,
        "flat wall should project nearly equal heights, ratio {}",
        ratio
    );
}

#[test]
fn camera_cannot_walk_into_the_wall_column() {
    let grid = grid_from_layout(WALLED_ROOM);
    // Right next to the wall's near face, facing it
    let camera = Camera::new(7.0 * TILE - 1.0, 5.5 * TILE, 0.0, 2.5, 0.05);
    let mut sim = Simulation::new(
        grid,
        camera,
        FanParams {
            fov: FOV,
            ray_count: 8,
        },
    );

    sim.camera.move_dir = 1;
    for _ in 0..10 {
        sim.tick();
    }

    assert_eq!(sim.camera.x, 7.0 * TILE - 1.0);
    assert_eq!(sim.camera.y, 5.5 * TILE);
}

#[test]
fn turning_in_place_keeps_angle_normalized() {
    let grid = grid_from_layout(WALLED_ROOM);
    let camera = Camera::new(2.0 * TILE, 5.5 * TILE, 0.1, 2.5, 0.2);
    let mut sim = Simulation::new(
        grid,
        camera,
        FanParams {
            fov: FOV,
            ray_count: 8,
        },
    );

    sim.camera.turn_dir = -1;
    for _ in 0..100 {
        sim.tick();
        assert!(sim.camera.angle >= 0.0 && sim.camera.angle < std::f32::consts::TAU);
    }
}
