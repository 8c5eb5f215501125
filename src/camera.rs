use crate::angle::normalize_angle;
use crate::grid::Grid;

/// Player camera: continuous world position, facing angle and the
/// current input intents
#[derive(Debug, Clone)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
    /// Facing angle in radians, kept in [0, 2π)
    pub angle: f32,
    /// World units travelled per frame at full movement intent
    pub walk_speed: f32,
    /// Radians turned per frame at full turn intent
    pub turn_speed: f32,
    /// Movement intent: -1 backward, 0 idle, 1 forward
    pub move_dir: i32,
    /// Turn intent: -1 left, 0 idle, 1 right
    pub turn_dir: i32,
}

impl Camera {
    /// Create a camera at the given position with idle intents
    pub fn new(x: f32, y: f32, angle: f32, walk_speed: f32, turn_speed: f32) -> Self {
        Camera {
            x,
            y,
            angle: normalize_angle(angle),
            walk_speed,
            turn_speed,
            move_dir: 0,
            turn_dir: 0,
        }
    }

    /// Advance one fixed frame step: apply the turn intent, then attempt
    /// the move
    ///
    /// The candidate position is committed only when it is not inside a
    /// wall; a blocked candidate leaves the position untouched for the
    /// whole frame, so there is no sliding along the wall's free axis.
    pub fn update(&mut self, grid: &Grid) {
        self.angle = normalize_angle(self.angle + self.turn_dir as f32 * self.turn_speed);

        let step = self.move_dir as f32 * self.walk_speed;
        let next_x = self.x + self.angle.cos() * step;
        let next_y = self.y + self.angle.sin() * step;

        if !grid.is_wall(next_x, next_y) {
            self.x = next_x;
            self.y = next_y;
        }
    }
}
