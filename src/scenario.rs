//! Preset scenario definitions.
//!
//! A scenario bundles the startup configuration the core consumes once:
//! apsis distances, body masses and physical radii, and presentation
//! colors. `build` runs the calibration and places the bodies, giving the
//! satellite the vis-viva speed for the requested orbit.

use bevy::math::DVec2;
use bevy::prelude::Color;

use crate::body::{Body, BodyError};
use crate::calibration::{Calibration, CalibrationError};
use crate::environment::Environment;
use crate::types::{self, G, Viewport};

/// Errors from building a scenario.
#[derive(thiserror::Error, Debug)]
pub enum ScenarioError {
    #[error(transparent)]
    Calibration(#[from] CalibrationError),

    #[error(transparent)]
    Body(#[from] BodyError),
}

/// A two-body startup configuration.
///
/// The primary is a fixed gravitational source at the apoapsis distance
/// from the left margin; the satellite starts at the apoapsis point on the
/// left, moving perpendicular to the line of apsides.
#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    /// Display name.
    pub name: &'static str,
    /// Farthest orbital distance, metres from the primary's center.
    pub apoapsis: f64,
    /// Nearest orbital distance, metres from the primary's center.
    pub periapsis: f64,
    /// Primary (central body) mass in kg.
    pub primary_mass: f64,
    /// Primary physical radius in metres.
    pub primary_radius: f64,
    /// Primary fill color (sRGB components).
    pub primary_color: [f32; 3],
    /// Satellite mass in kg.
    pub satellite_mass: f64,
    /// Satellite physical radius in metres.
    pub satellite_radius: f64,
    /// Satellite fill color (sRGB components).
    pub satellite_color: [f32; 3],
}

/// Earth–Moon system with a deliberately eccentric orbit.
///
/// The apsis distances are tighter than the real apogee (4.054e8 m) and
/// perigee (3.626e8 m) so the eccentricity is visible on screen.
pub static EARTH_MOON: Scenario = Scenario {
    name: "Earth-Moon",
    apoapsis: 1.00e8,
    periapsis: 1.00e7,
    primary_mass: types::EARTH_MASS,
    primary_radius: types::EARTH_RADIUS,
    primary_color: [0.39, 0.39, 1.0], // baby blue
    satellite_mass: types::MOON_MASS,
    satellite_radius: types::MOON_RADIUS,
    satellite_color: [0.39, 0.39, 0.39],
};

impl Scenario {
    /// Calibrate against `viewport` and place the bodies.
    ///
    /// The satellite's initial speed comes from the vis-viva equation at
    /// apoapsis, `v² = 2·G·(M+m)·(1/r_apo − 1/(r_apo+r_per))`, converted to
    /// pixels per second through the calibration scale.
    pub fn build(&self, viewport: &Viewport) -> Result<(Environment, Calibration), ScenarioError> {
        let calibration = Calibration::fit(self.apoapsis, self.periapsis, viewport)?;
        let mid_y = viewport.height / 2.0;

        let primary = Body::new(
            self.name.to_owned() + " primary",
            DVec2::new(
                calibration.hmargin + calibration.to_pixels(self.apoapsis),
                mid_y,
            ),
            self.primary_mass,
            calibration.to_pixels(self.primary_radius),
        )?
        .fixed()
        .with_colors(srgb(self.primary_color), srgb(self.primary_color));

        let speed = (2.0
            * G
            * (self.primary_mass + self.satellite_mass)
            * (1.0 / self.apoapsis - 1.0 / (self.apoapsis + self.periapsis)))
            .sqrt();

        let satellite = Body::new(
            self.name.to_owned() + " satellite",
            DVec2::new(calibration.hmargin, mid_y),
            self.satellite_mass,
            calibration.to_pixels(self.satellite_radius),
        )?
        .with_velocity(DVec2::new(0.0, -calibration.to_pixels(speed)))
        .with_colors(srgb(self.satellite_color), srgb(self.satellite_color));

        let mut environment = Environment::new();
        environment.bodies.push(primary);
        environment.bodies.push(satellite);
        Ok((environment, calibration))
    }
}

fn srgb([r, g, b]: [f32; 3]) -> Color {
    Color::srgb(r, g, b)
}
