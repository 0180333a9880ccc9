//! Common helpers for integration tests.

use bevy::math::DVec2;

use roche::calibration::Calibration;
use roche::environment::Environment;
use roche::scenario::EARTH_MOON;
use roche::types::Viewport;

/// Build the Earth-Moon preset against the default viewport.
pub fn earth_moon() -> (Environment, Calibration, Viewport) {
    let viewport = Viewport::default();
    let (environment, calibration) = EARTH_MOON
        .build(&viewport)
        .expect("preset scenario must build");
    (environment, calibration, viewport)
}

/// One forward-Euler step under a single fixed attractor.
///
/// Reference implementation for comparing against the core's integration:
/// `a = unit(r)·g_px·M/d²`, `v' = v + a·dt`, `p' = p + v'·dt`.
pub fn euler_step(
    pos: DVec2,
    vel: DVec2,
    attractor_pos: DVec2,
    attractor_mass: f64,
    g_pixels: f64,
    dt: f64,
) -> (DVec2, DVec2) {
    let r = attractor_pos - pos;
    let d = r.length();
    let acc = r / d * (g_pixels * attractor_mass / (d * d));
    let new_vel = vel + acc * dt;
    let new_pos = pos + new_vel * dt;
    (new_pos, new_vel)
}

/// Distance between the first two bodies, in pixels.
pub fn separation(env: &Environment) -> f64 {
    (env.bodies[0].pos - env.bodies[1].pos).length()
}
