use crate::angle::normalize_angle;
use crate::grid::Grid;

/// Ratio of the march step to the tile size: 0.5 world units for the
/// default 64-unit tile
pub const MARCH_STEP_RATIO: f32 = 1.0 / 128.0;

/// Sampling parameters for the marching wall search
#[derive(Debug, Clone, Copy)]
pub struct MarchParams {
    /// Distance between consecutive samples along the ray
    pub step: f32,
    /// Upper bound on ray travel; must exceed the longest open sightline
    /// or far rays would report no hit
    pub max_travel: f32,
}

impl MarchParams {
    /// Derive sampling parameters from the grid: the step from the tile
    /// size, the travel bound from the world diagonal
    pub fn for_grid(grid: &Grid) -> Self {
        MarchParams {
            step: grid.tile_size * MARCH_STEP_RATIO,
            max_travel: grid.diagonal(),
        }
    }
}

/// One sampled direction and its nearest wall hit
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Direction in radians, normalized to [0, 2π)
    pub angle: f32,
    pub hit_x: f32,
    pub hit_y: f32,
    /// Euclidean distance from the origin to the hit point
    pub distance: f32,
}

impl Ray {
    /// March a sample point outward from the origin and record the first
    /// sample that lands in a wall as the hit
    ///
    /// The origin itself is the first sample, so casting from inside a
    /// wall yields the origin with distance 0. When nothing is hit within
    /// `max_travel` the hit is placed exactly at the travel bound.
    pub fn cast(grid: &Grid, origin_x: f32, origin_y: f32, angle: f32, march: &MarchParams) -> Self {
        let angle = normalize_angle(angle);
        let dir_x = angle.cos();
        let dir_y = angle.sin();

        let mut travelled = 0.0;
        while travelled <= march.max_travel {
            let x = origin_x + travelled * dir_x;
            let y = origin_y + travelled * dir_y;
            if grid.is_wall(x, y) {
                return Ray {
                    angle,
                    hit_x: x,
                    hit_y: y,
                    distance: compute_distance(origin_x, origin_y, x, y),
                };
            }
            travelled += march.step;
        }

        let x = origin_x + march.max_travel * dir_x;
        let y = origin_y + march.max_travel * dir_y;
        Ray {
            angle,
            hit_x: x,
            hit_y: y,
            distance: compute_distance(origin_x, origin_y, x, y),
        }
    }
}

/// Euclidean distance between two points
pub fn compute_distance(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}
