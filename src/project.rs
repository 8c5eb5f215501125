use crate::ray::Ray;

/// Smallest corrected distance allowed into the projection arithmetic
pub const MIN_CORRECTED_DISTANCE: f32 = 1e-4;

/// Floor a corrected distance away from zero before it is divided by
pub fn clamp_distance(distance: f32) -> f32 {
    distance.max(MIN_CORRECTED_DISTANCE)
}

/// Restrict a fog alpha to the valid [0, 1] opacity range
pub fn clamp_alpha(alpha: f32) -> f32 {
    alpha.clamp(0.0, 1.0)
}

/// One projected wall strip: where it sits on screen and how opaque it is
#[derive(Debug, Clone, Copy)]
pub struct WallStrip {
    /// Screen y of the strip's top edge; negative when a near wall
    /// overflows the screen
    pub top_y: f32,
    pub height: f32,
    /// Fog opacity in [0, 1]
    pub alpha: f32,
}

/// Project one ray's hit distance into a wall strip
///
/// The distance is first multiplied by the cosine of the angle between
/// the ray and the camera facing, which removes the bowl-shaped
/// distortion of equal-angle sampling. Strip height is inverse to the
/// corrected distance and the strip is centered on the horizon line.
pub fn project(
    ray: &Ray,
    camera_angle: f32,
    screen_height: f32,
    tile_size: f32,
    shade: f32,
) -> WallStrip {
    let corrected = clamp_distance(ray.distance * (ray.angle - camera_angle).cos());
    let height = (screen_height / corrected) * tile_size;

    WallStrip {
        top_y: screen_height / 2.0 - height / 2.0,
        height,
        alpha: clamp_alpha(shade / corrected),
    }
}

/// Project a whole fan, one strip per ray in fan order
pub fn project_fan(
    rays: &[Ray],
    camera_angle: f32,
    screen_height: f32,
    tile_size: f32,
    shade: f32,
) -> Vec<WallStrip> {
    rays.iter()
        .map(|ray| project(ray, camera_angle, screen_height, tile_size, shade))
        .collect()
}
