use rayon::prelude::*;

use crate::camera::Camera;
use crate::grid::Grid;
use crate::ray::{MarchParams, Ray};

/// Fan shape: the field of view and the number of columns sampling it
#[derive(Debug, Clone, Copy)]
pub struct FanParams {
    /// Field of view in radians
    pub fov: f32,
    /// One ray per wall strip across the screen
    pub ray_count: usize,
}

/// Cast the whole ray fan for one frame
///
/// Rays start at `facing - fov/2` and ascend by `fov / ray_count`, so the
/// left FOV edge is included and the right edge is not. Every ray reads
/// only shared grid and camera state, so the fan is cast in parallel;
/// collecting it completes before projection starts.
pub fn cast_all_rays(grid: &Grid, camera: &Camera, fan: &FanParams, march: &MarchParams) -> Vec<Ray> {
    let first_angle = camera.angle - fan.fov / 2.0;
    let step = fan.fov / fan.ray_count as f32;

    (0..fan.ray_count)
        .into_par_iter()
        .map(|i| Ray::cast(grid, camera.x, camera.y, first_angle + i as f32 * step, march))
        .collect()
}
