//! The environment: the ordered set of bodies and the whole-system step.

use bevy::math::DVec2;
use bevy::prelude::{Color, Resource};

use crate::body::Body;
use crate::gravity::{self, GravityError};

/// Owns the simulated bodies and advances them one timestep at a time.
#[derive(Resource, Clone, Debug)]
pub struct Environment {
    /// Bodies in insertion order. Order carries no physical meaning; the
    /// update is order-independent by construction.
    pub bodies: Vec<Body>,
    /// Background color. Presentation only.
    pub color: Color,
}

impl Environment {
    /// Create an empty environment with a black background.
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            color: Color::BLACK,
        }
    }

    /// Advance every non-fixed body by one forward-Euler step.
    ///
    /// Staged accumulation: accelerations are computed for all bodies
    /// against a snapshot of tick-start positions, then applied in a second
    /// pass. No body sees another's already-updated state within a tick, so
    /// the result does not depend on insertion order and the scheme extends
    /// to N bodies unchanged.
    ///
    /// # Errors
    /// [`GravityError::CoincidentBodies`] when any interacting pair occupies
    /// the same position. No body is mutated in that case.
    pub fn update(&mut self, g_pixels: f64, dt: f64) -> Result<(), GravityError> {
        // Tick-start snapshot of every gravity source
        let sources: Vec<(DVec2, f64)> = self.bodies.iter().map(|b| (b.pos, b.mass)).collect();

        let mut accelerations = vec![DVec2::ZERO; self.bodies.len()];
        for (i, body) in self.bodies.iter().enumerate() {
            if body.fixed {
                continue;
            }
            for (j, &(source_pos, source_mass)) in sources.iter().enumerate() {
                if i == j {
                    continue;
                }
                accelerations[i] +=
                    gravity::acceleration_toward(body.pos, source_pos, source_mass, g_pixels)?;
            }
        }

        for (body, acc) in self.bodies.iter_mut().zip(accelerations) {
            body.integrate(acc, dt);
        }
        Ok(())
    }

    /// Append the current position of every body to its trail.
    ///
    /// Called by the driving loop at its chosen cadence, not every tick.
    pub fn sample_trails(&mut self, flip_height: f64) {
        for body in &mut self.bodies {
            body.sample_trail(flip_height);
        }
    }

    /// First pair of bodies currently in contact, as indices into `bodies`.
    pub fn colliding_pair(&self) -> Option<(usize, usize)> {
        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                if self.bodies[i].is_colliding(&self.bodies[j]) {
                    return Some((i, j));
                }
            }
        }
        None
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
