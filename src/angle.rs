use std::f32::consts::TAU;

/// Normalize an angle to the [0, 2π) range
///
/// The angle is reduced modulo a full turn; negative remainders are
/// wrapped by adding 2π, so the result is always non-negative and less
/// than one full turn. Applying the function twice gives the same result.
pub fn normalize_angle(angle: f32) -> f32 {
    let mut a = angle % TAU;
    if a < 0.0 {
        a += TAU;
    }
    a
}
