//! Core constants and shared resources for the orbit sandbox.

use bevy::prelude::*;

/// Physical constants (SI units)

/// Gravitational constant (m³·kg⁻¹·s⁻²)
pub const G: f64 = 6.674e-11;

/// Earth mass in kilograms
pub const EARTH_MASS: f64 = 5.972e24;

/// Earth radius in meters
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Moon mass in kilograms
pub const MOON_MASS: f64 = 7.348e22;

/// Moon radius in meters
pub const MOON_RADIUS: f64 = 1_737_500.0;

/// Default window width in pixels
pub const VIEWPORT_WIDTH: f64 = 1300.0;

/// Default window height in pixels
pub const VIEWPORT_HEIGHT: f64 = 700.0;

/// Default margin between the orbit and the window edges, in pixels
pub const VIEWPORT_MARGIN: f64 = 25.0;

/// Default simulation timestep in seconds
pub const DEFAULT_DT: f64 = 50.0;

/// Default trail sampling cadence: one trail point every this many ticks
pub const DEFAULT_TRAIL_INTERVAL: u64 = 10;

/// Fixed-update rate of the driving loop in Hz (one step per 5 ms).
pub const STEP_RATE_HZ: f64 = 200.0;

/// Screen geometry the orbit must fit into.
///
/// Positions use a Cartesian frame with the origin at the bottom-left and y
/// increasing upward; consumers that draw with a top-left origin apply
/// `render_y = height - y` (see [`crate::body::Body::sample_trail`]).
#[derive(Resource, Clone, Copy, Debug)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
    /// Horizontal margin in pixels on each side.
    pub hmargin: f64,
    /// Vertical margin in pixels on each side.
    pub vmargin: f64,
}

impl Viewport {
    /// Create a viewport with the given dimensions and margins.
    pub const fn new(width: f64, height: f64, hmargin: f64, vmargin: f64) -> Self {
        Self {
            width,
            height,
            hmargin,
            vmargin,
        }
    }

    /// Horizontal span available to the orbit, in pixels.
    pub fn usable_width(&self) -> f64 {
        self.width - 2.0 * self.hmargin
    }

    /// Vertical span available to the orbit, in pixels.
    pub fn usable_height(&self) -> f64 {
        self.height - 2.0 * self.vmargin
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(
            VIEWPORT_WIDTH,
            VIEWPORT_HEIGHT,
            VIEWPORT_MARGIN,
            VIEWPORT_MARGIN,
        )
    }
}

/// Stepping parameters for the driving loop.
#[derive(Resource, Clone, Debug)]
pub struct SimulationSettings {
    /// Simulated seconds per tick.
    pub dt: f64,
    /// A trail point is sampled every `trail_interval` ticks.
    pub trail_interval: u64,
    /// Whether stepping is suspended.
    pub paused: bool,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            trail_interval: DEFAULT_TRAIL_INTERVAL,
            paused: false,
        }
    }
}

/// Number of ticks stepped so far. Drives the trail sampling cadence.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct TickCount(pub u64);
