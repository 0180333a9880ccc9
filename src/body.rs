//! Physical bodies: state, integration, collision test, trail and outline
//! geometry.
//!
//! Positions and velocities are in screen-space units (pixels, pixels per
//! second) with y increasing upward. The trail and outline helpers are the
//! only places the render-space flip (`render_y = height - y`) is applied;
//! they take the reference height explicitly so the core never assumes a
//! window.

use bevy::math::DVec2;
use bevy::prelude::Color;

use crate::gravity::{self, GravityError};

/// Number of segments in a body's outline polygon.
const OUTLINE_SEGMENTS: usize = 48;

/// Errors from invalid body parameters, surfaced at construction time.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BodyError {
    #[error("body '{name}' has non-positive mass {mass} kg")]
    NonPositiveMass { name: String, mass: f64 },

    #[error("body '{name}' has negative radius {radius} px")]
    NegativeRadius { name: String, radius: f64 },
}

/// A gravitating body.
///
/// Uses f64 (DVec2) throughout; f32 loses precision over the pixel scales a
/// calibrated orbit produces.
#[derive(Clone, Debug)]
pub struct Body {
    /// Display name, used in logs and collision reports.
    pub name: String,
    /// Position in pixels (y up).
    pub pos: DVec2,
    /// Velocity in pixels per second.
    pub vel: DVec2,
    /// Mass in kilograms. Always positive.
    pub mass: f64,
    /// Radius in pixels. Never negative.
    pub radius: f64,
    /// Fixed bodies are immovable gravitational sources: the integrator
    /// never touches their velocity or position.
    pub fixed: bool,
    /// Fill color for rendering. Presentation metadata, not physics state.
    pub color: Color,
    /// Trail color for rendering.
    pub line_color: Color,
    /// Sampled positions in render space, oldest first.
    trail: Vec<DVec2>,
    /// Optional bound on the trail; the oldest point is dropped when full.
    trail_cap: Option<usize>,
}

impl Body {
    /// Create a body at rest.
    ///
    /// # Errors
    /// [`BodyError`] when `mass` is not positive or `radius` is negative.
    pub fn new(
        name: impl Into<String>,
        pos: DVec2,
        mass: f64,
        radius: f64,
    ) -> Result<Self, BodyError> {
        let name = name.into();
        if mass <= 0.0 {
            return Err(BodyError::NonPositiveMass { name, mass });
        }
        if radius < 0.0 {
            return Err(BodyError::NegativeRadius { name, radius });
        }
        Ok(Self {
            name,
            pos,
            vel: DVec2::ZERO,
            mass,
            radius,
            fixed: false,
            color: Color::WHITE,
            line_color: Color::WHITE,
            trail: Vec::new(),
            trail_cap: None,
        })
    }

    /// Set the initial velocity (pixels per second).
    pub fn with_velocity(mut self, vel: DVec2) -> Self {
        self.vel = vel;
        self
    }

    /// Mark the body as an immovable gravitational source.
    pub fn fixed(mut self) -> Self {
        self.fixed = true;
        self
    }

    /// Set fill and trail colors.
    pub fn with_colors(mut self, color: Color, line_color: Color) -> Self {
        self.color = color;
        self.line_color = line_color;
        self
    }

    /// Bound the trail to at most `cap` points, dropping the oldest.
    pub fn with_trail_cap(mut self, cap: usize) -> Self {
        self.trail_cap = Some(cap);
        self
    }

    /// Apply one forward-Euler step of another body's gravity.
    ///
    /// Computes `a = unit(r)·g_pixels·M/d²` toward the attractor, then
    /// `v += a·dt; p += v·dt`. No-op for fixed bodies.
    ///
    /// Explicit Euler trades energy conservation for simplicity; expect slow
    /// orbital-energy drift over long runs.
    ///
    /// # Errors
    /// [`GravityError::CoincidentBodies`] when the two bodies occupy the
    /// same position. The error is returned before any state is mutated.
    pub fn apply_gravity(
        &mut self,
        attractor_pos: DVec2,
        attractor_mass: f64,
        g_pixels: f64,
        dt: f64,
    ) -> Result<(), GravityError> {
        if self.fixed {
            return Ok(());
        }
        let acc = gravity::acceleration_toward(self.pos, attractor_pos, attractor_mass, g_pixels)?;
        self.integrate(acc, dt);
        Ok(())
    }

    /// Advance velocity and position under a known acceleration.
    ///
    /// Used by [`crate::environment::Environment::update`] after staged
    /// accumulation. No-op for fixed bodies.
    pub fn integrate(&mut self, acc: DVec2, dt: f64) {
        if self.fixed {
            return;
        }
        self.vel += acc * dt;
        self.pos += self.vel * dt;
    }

    /// Whether this body touches or overlaps `other`.
    ///
    /// Boundary inclusive: exact contact (`|Δp| == r_a + r_b`) counts.
    /// Purely geometric, symmetric, no side effects. Collision is advisory
    /// state for the render layer; it never stops the simulation.
    pub fn is_colliding(&self, other: &Body) -> bool {
        (self.pos - other.pos).length() <= self.radius + other.radius
    }

    /// Append the current position to the trail, in render space.
    ///
    /// `flip_height` is the viewport height used to reinterpret y so the
    /// render origin is at the bottom-left. Cadence is the caller's policy;
    /// sampling every tick produces dense, costly trails.
    pub fn sample_trail(&mut self, flip_height: f64) {
        if let Some(cap) = self.trail_cap
            && self.trail.len() >= cap
        {
            self.trail.remove(0);
        }
        self.trail
            .push(DVec2::new(self.pos.x, flip_height - self.pos.y));
    }

    /// Sampled trail points in render space, oldest first.
    pub fn trail(&self) -> &[DVec2] {
        &self.trail
    }

    /// Drop all sampled trail points.
    pub fn clear_trail(&mut self) {
        self.trail.clear();
    }

    /// Polygon approximating the body's circular boundary, in render space.
    ///
    /// `ring` offsets the radius by that many pixels; drawing rings 0 and 1
    /// on top of each other gives the double-outline effect. Pure function
    /// of position and radius.
    pub fn outline(&self, flip_height: f64, ring: u32) -> Vec<DVec2> {
        let r = self.radius + f64::from(ring);
        (0..OUTLINE_SEGMENTS)
            .map(|i| {
                let theta = std::f64::consts::TAU * i as f64 / OUTLINE_SEGMENTS as f64;
                DVec2::new(
                    self.pos.x + r * theta.cos(),
                    flip_height - (self.pos.y + r * theta.sin()),
                )
            })
            .collect()
    }
}
