use crate::camera::Camera;
use crate::grid::Grid;
use crate::ray::{MarchParams, Ray};
use crate::raycast::{cast_all_rays, FanParams};

/// Simulation state for one running scene
///
/// Owns the immutable grid and the mutable camera. Every frame flows
/// through `tick`, so fan generation always reads the camera state the
/// update phase just finished writing.
pub struct Simulation {
    pub grid: Grid,
    pub camera: Camera,
    pub fan: FanParams,
    pub march: MarchParams,
}

impl Simulation {
    /// Build a simulation with march parameters derived from the grid
    pub fn new(grid: Grid, camera: Camera, fan: FanParams) -> Self {
        let march = MarchParams::for_grid(&grid);
        Simulation {
            grid,
            camera,
            fan,
            march,
        }
    }

    /// Advance one frame: apply the camera intents, then cast the fan
    ///
    /// The returned fan is this frame's projection input; the previous
    /// frame's fan is simply dropped by the caller.
    pub fn tick(&mut self) -> Vec<Ray> {
        self.camera.update(&self.grid);
        cast_all_rays(&self.grid, &self.camera, &self.fan, &self.march)
    }
}
