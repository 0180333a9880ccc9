//! Test utilities: fixtures for two-body setups and physics assertions.

use bevy::math::DVec2;

use crate::body::Body;
use crate::environment::Environment;

/// Fixtures for building test environments.
pub mod fixtures {
    use super::*;

    /// Two free (non-fixed) bodies at rest, 300 px apart on the x-axis.
    pub fn free_pair() -> Environment {
        let mut env = Environment::new();
        env.bodies.push(
            Body::new("alpha", DVec2::new(500.0, 350.0), 5.0e24, 10.0)
                .expect("valid test body"),
        );
        env.bodies.push(
            Body::new("beta", DVec2::new(800.0, 350.0), 7.0e22, 5.0)
                .expect("valid test body"),
        );
        env
    }

    /// A fixed primary with a free satellite 250 px away, given a small
    /// tangential velocity.
    pub fn fixed_primary_pair() -> Environment {
        let mut env = Environment::new();
        env.bodies.push(
            Body::new("primary", DVec2::new(650.0, 350.0), 5.0e24, 20.0)
                .expect("valid test body")
                .fixed(),
        );
        env.bodies.push(
            Body::new("satellite", DVec2::new(400.0, 350.0), 7.0e22, 5.0)
                .expect("valid test body")
                .with_velocity(DVec2::new(0.0, -0.05)),
        );
        env
    }

    /// A fixed primary with a satellite on a circular orbit of radius
    /// `radius` px, using `v = sqrt(g_pixels·M / r)`.
    pub fn circular_pair(primary_mass: f64, g_pixels: f64, radius: f64) -> Environment {
        let center = DVec2::new(650.0, 350.0);
        let speed = (g_pixels * primary_mass / radius).sqrt();

        let mut env = Environment::new();
        env.bodies.push(
            Body::new("primary", center, primary_mass, 10.0)
                .expect("valid test body")
                .fixed(),
        );
        env.bodies.push(
            Body::new("satellite", center + DVec2::new(radius, 0.0), 1.0e10, 2.0)
                .expect("valid test body")
                .with_velocity(DVec2::new(0.0, speed)),
        );
        env
    }
}

/// Assertions over whole-environment physics state.
pub mod assertions {
    use super::*;

    /// Total linear momentum of all bodies, in kg·px/s.
    pub fn total_momentum(env: &Environment) -> DVec2 {
        env.bodies.iter().map(|b| b.vel * b.mass).sum()
    }

    /// Distance between the first two bodies, in pixels.
    pub fn separation(env: &Environment) -> f64 {
        (env.bodies[0].pos - env.bodies[1].pos).length()
    }

    /// Assert that `separation` never drifted outside `tolerance` relative
    /// to `reference` over a recorded run.
    ///
    /// # Panics
    /// Panics when any sample exceeds the bound.
    pub fn assert_separation_bounded(samples: &[f64], reference: f64, tolerance: f64) {
        for (i, &d) in samples.iter().enumerate() {
            let drift = ((d - reference) / reference).abs();
            assert!(
                drift <= tolerance,
                "separation drift {drift:.6} exceeds {tolerance} at sample {i} (d={d:.3}, reference={reference:.3})"
            );
        }
    }
}
