//! Property-based tests for the gravity core using proptest.
//!
//! These verify invariants across wide parameter ranges rather than single
//! hand-picked configurations.

use bevy::math::DVec2;
use proptest::prelude::*;

use crate::body::Body;
use crate::calibration::Calibration;
use crate::environment::Environment;
use crate::gravity::{self, GravityError};
use crate::types::Viewport;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Newton's third law: mutual per-tick momentum changes cancel for any
    /// valid free two-body configuration.
    #[test]
    fn prop_momentum_balance(
        mass_a in 1.0e20f64..1.0e25,
        mass_b in 1.0e20f64..1.0e25,
        dx in 50.0f64..1000.0,
        dy in -500.0f64..500.0,
    ) {
        let mut env = Environment::new();
        env.bodies.push(Body::new("a", DVec2::new(100.0, 100.0), mass_a, 1.0).unwrap());
        env.bodies.push(Body::new("b", DVec2::new(100.0 + dx, 100.0 + dy), mass_b, 1.0).unwrap());

        env.update(1.0e-15, 50.0).unwrap();

        let dp_a = env.bodies[0].vel * mass_a;
        let dp_b = env.bodies[1].vel * mass_b;
        let scale = dp_a.length().max(dp_b.length());
        prop_assert!(scale > 0.0);
        prop_assert!(
            (dp_a + dp_b).length() <= 1e-12 * scale,
            "momentum imbalance {:e} at scale {:e}",
            (dp_a + dp_b).length(),
            scale
        );
    }

    /// Collision is symmetric and boundary inclusive for any radii pair.
    #[test]
    fn prop_collision_symmetric(
        r_a in 0.0f64..50.0,
        r_b in 0.0f64..50.0,
        gap in -10.0f64..10.0,
    ) {
        let a = Body::new("a", DVec2::ZERO, 1.0e20, r_a).unwrap();
        let separation = (r_a + r_b + gap).max(0.0);
        let b = Body::new("b", DVec2::new(separation, 0.0), 1.0e20, r_b).unwrap();

        prop_assert_eq!(a.is_colliding(&b), b.is_colliding(&a));
        prop_assert_eq!(a.is_colliding(&b), separation <= r_a + r_b);
    }

    /// Calibration never lets the orbit's extents exceed the usable spans,
    /// whichever branch it takes, and never produces non-finite output.
    #[test]
    fn prop_calibration_fits(
        apoapsis in 1.0e6f64..1.0e10,
        ratio in 0.01f64..1.0,
    ) {
        let periapsis = apoapsis * ratio;
        let viewport = Viewport::default();
        let calibration = Calibration::fit(apoapsis, periapsis, &viewport).unwrap();

        prop_assert!(calibration.metres_per_pixel.is_finite());
        prop_assert!(calibration.g_pixels.is_finite());
        prop_assert!(calibration.metres_per_pixel > 0.0);

        let major_px = (apoapsis + periapsis) / calibration.metres_per_pixel;
        let minor_px = 2.0 * (apoapsis * periapsis).sqrt() / calibration.metres_per_pixel;
        prop_assert!(major_px <= viewport.width - 2.0 * calibration.hmargin + 1e-6);
        prop_assert!(minor_px <= viewport.usable_height() + 1e-6);
    }

    /// `try_unit` of a non-zero vector always has magnitude 1; the zero
    /// vector always fails.
    #[test]
    fn prop_unit_magnitude(x in -1.0e6f64..1.0e6, y in -1.0e6f64..1.0e6) {
        let v = DVec2::new(x, y);
        match gravity::try_unit(v) {
            Ok(unit) => {
                prop_assert!(v != DVec2::ZERO);
                prop_assert!((unit.length() - 1.0).abs() < 1e-9);
            }
            Err(GravityError::DegenerateVector) => prop_assert_eq!(v, DVec2::ZERO),
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    /// Trail sampling preserves call count and order for any cadence.
    #[test]
    fn prop_trail_append_only(samples in 1usize..200) {
        let mut body = Body::new("b", DVec2::ZERO, 1.0e20, 1.0).unwrap();
        for i in 0..samples {
            body.pos = DVec2::new(i as f64, 0.0);
            body.sample_trail(700.0);
        }
        prop_assert_eq!(body.trail().len(), samples);
        for (i, p) in body.trail().iter().enumerate() {
            prop_assert_eq!(p.x, i as f64);
        }
    }
}
