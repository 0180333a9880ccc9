//! Roche - Two-Body Orbit Sandbox
//!
//! A library crate providing the gravitational simulation core (bodies,
//! forward-Euler integration, pixel/metre calibration, trails, advisory
//! collision detection) and the Bevy plugins that step and draw it.

pub mod body;
pub mod calibration;
pub mod collision;
pub mod environment;
pub mod gravity;
pub mod render;
pub mod scenario;
pub mod simulation;
pub mod types;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod proptest_physics;
