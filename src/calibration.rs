//! Pixel-to-metre scale calibration.
//!
//! Runs once at startup: sizes the orbit's major axis to the usable
//! horizontal span of the viewport, falls back to the vertical span when the
//! orbit would be too tall, and derives the screen-space gravitational
//! constant from the resulting scale.

use crate::types::{G, Viewport};

/// Errors from invalid calibration inputs.
///
/// Calibration fails fast rather than propagating infinities into the
/// physics state.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CalibrationError {
    #[error("apsis distances must be positive (apoapsis {apoapsis}, periapsis {periapsis})")]
    NonPositiveApsis { apoapsis: f64, periapsis: f64 },

    #[error("usable horizontal span is not positive (width {width}, hmargin {hmargin})")]
    CollapsedHorizontalSpan { width: f64, hmargin: f64 },

    #[error("usable vertical span is not positive (height {height}, vmargin {vmargin})")]
    CollapsedVerticalSpan { height: f64, vmargin: f64 },
}

/// One-time unit calibration between physical and screen space.
#[derive(bevy::prelude::Resource, Clone, Copy, Debug, PartialEq)]
pub struct Calibration {
    /// Metres represented by one pixel.
    pub metres_per_pixel: f64,
    /// Gravitational constant in pixel units (`G / m³`).
    ///
    /// Acceleration in pixels scales with `1/m` and distance-squared with
    /// `m²`, so G picks up a factor of `1/m³` when lengths move from metres
    /// to pixels.
    pub g_pixels: f64,
    /// Horizontal margin in pixels, recentered when the vertical constraint
    /// narrows the orbit's footprint.
    pub hmargin: f64,
}

impl Calibration {
    /// Fit an orbit with the given apsis distances (metres) into `viewport`.
    ///
    /// Reversed inputs are accepted and swapped. The scale is chosen so the
    /// major axis (`apoapsis + periapsis`) exactly spans the usable
    /// horizontal space; if the semi-minor-derived vertical extent
    /// `2·sqrt(apoapsis·periapsis) / m` then exceeds the usable height, the
    /// scale is recomputed from the vertical constraint instead and the
    /// horizontal margin recentered.
    pub fn fit(
        apoapsis: f64,
        periapsis: f64,
        viewport: &Viewport,
    ) -> Result<Self, CalibrationError> {
        let (apoapsis, periapsis) = if apoapsis < periapsis {
            (periapsis, apoapsis)
        } else {
            (apoapsis, periapsis)
        };
        if periapsis <= 0.0 {
            return Err(CalibrationError::NonPositiveApsis {
                apoapsis,
                periapsis,
            });
        }
        if viewport.usable_width() <= 0.0 {
            return Err(CalibrationError::CollapsedHorizontalSpan {
                width: viewport.width,
                hmargin: viewport.hmargin,
            });
        }
        if viewport.usable_height() <= 0.0 {
            return Err(CalibrationError::CollapsedVerticalSpan {
                height: viewport.height,
                vmargin: viewport.vmargin,
            });
        }

        let major_axis = apoapsis + periapsis;
        let minor_axis = 2.0 * (apoapsis * periapsis).sqrt();

        let mut metres_per_pixel = major_axis / viewport.usable_width();
        let mut hmargin = viewport.hmargin;

        // Orbit too tall for the window: size from the vertical span and
        // recenter horizontally.
        if minor_axis / metres_per_pixel > viewport.usable_height() {
            metres_per_pixel = minor_axis / viewport.usable_height();
            hmargin = ((viewport.width - major_axis / metres_per_pixel) / 2.0).abs();
        }

        Ok(Self {
            metres_per_pixel,
            g_pixels: G / metres_per_pixel.powi(3),
            hmargin,
        })
    }

    /// Convert a length in metres to pixels.
    pub fn to_pixels(&self, metres: f64) -> f64 {
        metres / self.metres_per_pixel
    }

    /// Convert a length in pixels to metres.
    pub fn to_metres(&self, pixels: f64) -> f64 {
        pixels * self.metres_per_pixel
    }
}
