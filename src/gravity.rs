//! Pairwise gravitational acceleration in screen-space units.
//!
//! All positions here are in pixels and the gravitational constant is the
//! screen-space `g_pixels` derived by [`crate::calibration::Calibration`]
//! (`G / m³`, where `m` is metres per pixel). With that substitution the
//! familiar `a = G·M/d²` holds unchanged in pixel units.

use bevy::math::DVec2;

/// Errors from degenerate force geometry.
///
/// Both variants share a root cause (zero separation); they are reported
/// explicitly instead of letting the arithmetic produce NaN or infinity.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GravityError {
    #[error("coincident bodies at ({x:.3}, {y:.3}); gravitational force is undefined")]
    CoincidentBodies { x: f64, y: f64 },

    #[error("unit vector of the zero vector is undefined")]
    DegenerateVector,
}

/// Unit vector of `v`, failing on the zero vector.
///
/// `DVec2::normalize` would silently return NaN components for a zero input;
/// force-direction callers must get an error instead.
pub fn try_unit(v: DVec2) -> Result<DVec2, GravityError> {
    let length = v.length();
    if length == 0.0 {
        return Err(GravityError::DegenerateVector);
    }
    Ok(v / length)
}

/// Gravitational acceleration at `pos` toward an attractor.
///
/// # Arguments
/// * `pos` - Position being accelerated (pixels)
/// * `attractor_pos` - Position of the attracting body (pixels)
/// * `attractor_mass` - Mass of the attracting body (kg)
/// * `g_pixels` - Screen-space gravitational constant (`G / m³`)
///
/// # Errors
/// [`GravityError::CoincidentBodies`] when the two positions are identical.
pub fn acceleration_toward(
    pos: DVec2,
    attractor_pos: DVec2,
    attractor_mass: f64,
    g_pixels: f64,
) -> Result<DVec2, GravityError> {
    let delta = attractor_pos - pos;
    let d_squared = delta.length_squared();
    if d_squared == 0.0 {
        return Err(GravityError::CoincidentBodies { x: pos.x, y: pos.y });
    }

    // a = G·M/d² in the direction of delta (toward the attractor)
    Ok(try_unit(delta)? * (g_pixels * attractor_mass / d_squared))
}
