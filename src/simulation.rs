//! Fixed-timestep driving loop for the physics core.
//!
//! One tick per `FixedUpdate` run: the environment advances by `dt`
//! simulated seconds, then every Kth tick each body's position is sampled
//! into its trail. Rendering and collision reporting read the resulting
//! state afterwards in the same schedule; strict step ordering is the only
//! synchronization the single-writer state needs.

use bevy::prelude::*;

use crate::calibration::Calibration;
use crate::environment::Environment;
use crate::types::{STEP_RATE_HZ, SimulationSettings, TickCount, Viewport};

/// Plugin providing the simulation stepping system.
///
/// Expects `Environment`, `Calibration`, `Viewport` and
/// `SimulationSettings` resources to be inserted before startup.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TickCount>()
            .insert_resource(Time::<Fixed>::from_hz(STEP_RATE_HZ))
            .add_systems(FixedUpdate, step_simulation);
    }
}

/// Advance the environment one tick and sample trails on cadence.
///
/// A physics error (coincident bodies) pauses stepping instead of letting
/// NaN propagate; the state stays at the last valid tick.
fn step_simulation(
    mut environment: ResMut<Environment>,
    calibration: Res<Calibration>,
    viewport: Res<Viewport>,
    mut settings: ResMut<SimulationSettings>,
    mut ticks: ResMut<TickCount>,
) {
    if settings.paused {
        return;
    }

    if let Err(err) = environment.update(calibration.g_pixels, settings.dt) {
        warn!("physics step failed, pausing: {err}");
        settings.paused = true;
        return;
    }

    ticks.0 += 1;
    if ticks.0.is_multiple_of(settings.trail_interval) {
        environment.sample_trails(viewport.height);
    }
}
