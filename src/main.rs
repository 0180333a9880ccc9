//! Roche - Two-Body Orbit Sandbox
//!
//! A desktop application that integrates an Earth-Moon style orbit under
//! Newtonian gravity and draws the bodies, their outlines and motion
//! trails.

use bevy::prelude::*;

use roche::collision::CollisionPlugin;
use roche::render::RenderPlugin;
use roche::scenario::{self, ScenarioError};
use roche::simulation::SimulationPlugin;
use roche::types::{SimulationSettings, Viewport};

fn main() -> Result<(), ScenarioError> {
    let viewport = Viewport::default();
    let (environment, calibration) = scenario::EARTH_MOON.build(&viewport)?;

    App::new()
        .add_plugins(DefaultPlugins)
        // Insert resources before the plugins that depend on them
        .insert_resource(viewport)
        .insert_resource(environment)
        .insert_resource(calibration)
        .insert_resource(SimulationSettings::default())
        // Add simulation plugins
        .add_plugins((SimulationPlugin, CollisionPlugin, RenderPlugin))
        .run();

    Ok(())
}
