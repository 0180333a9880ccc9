//! Advisory collision reporting.
//!
//! Monitors body pairs after each physics step and records when they touch.
//! Collision is a valid physical state, not an error: nothing is paused,
//! removed, or bounced. The render layer reads [`CollisionState`] to decide
//! whether to display a terminal "collision" message while the simulation
//! keeps stepping underneath it.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::environment::Environment;
use crate::types::TickCount;

/// Event fired once when a pair of bodies first comes into contact.
#[derive(Message, Clone, Debug)]
pub struct CollisionEvent {
    /// Name of the first body of the pair.
    pub first: String,
    /// Name of the second body of the pair.
    pub second: String,
    /// Midpoint of the two centers at contact, in pixels.
    pub position: DVec2,
    /// Tick at which contact was first observed.
    pub tick: u64,
}

/// Resource tracking contact state for consumers.
#[derive(Resource, Default)]
pub struct CollisionState {
    /// Whether any pair is currently in contact.
    pub in_contact: bool,
    /// First contact observed this run, if any.
    pub first_impact: Option<CollisionEvent>,
}

impl CollisionState {
    /// Clear recorded contact (e.g. when resetting a scenario).
    pub fn clear(&mut self) {
        self.in_contact = false;
        self.first_impact = None;
    }
}

/// Check for contact between body pairs.
///
/// Runs in FixedUpdate after the physics step. Fires a [`CollisionEvent`]
/// on the tick contact is first observed and keeps `in_contact` current
/// every tick thereafter; separating bodies clear it again.
pub fn check_collisions(
    environment: Res<Environment>,
    ticks: Res<TickCount>,
    mut collision_events: MessageWriter<CollisionEvent>,
    mut collision_state: ResMut<CollisionState>,
) {
    let Some((i, j)) = environment.colliding_pair() else {
        collision_state.in_contact = false;
        return;
    };

    collision_state.in_contact = true;
    if collision_state.first_impact.is_some() {
        return;
    }

    let a = &environment.bodies[i];
    let b = &environment.bodies[j];
    let event = CollisionEvent {
        first: a.name.clone(),
        second: b.name.clone(),
        position: (a.pos + b.pos) / 2.0,
        tick: ticks.0,
    };

    info!(
        "IMPACT! {} hit {} at tick {}",
        event.first, event.second, event.tick
    );

    collision_events.write(event.clone());
    collision_state.first_impact = Some(event);
}

/// Plugin providing advisory collision detection.
pub struct CollisionPlugin;

impl Plugin for CollisionPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<CollisionEvent>()
            .insert_resource(CollisionState::default())
            // Runs in FixedUpdate after the step system; no explicit
            // ordering needed beyond the schedule.
            .add_systems(FixedUpdate, check_collisions);
    }
}
