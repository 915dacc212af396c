//! The fixed point mass at the coordinate origin
//!
//! Newtonian inverse-square pull toward the origin, with a floor on the
//! distance so particles passing through the centre see a bounded force.

use super::constants::{G, MIN_DISTANCE};
use super::states::Particle;
use super::vector::{magnitude, scale, NVec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attractor {
    mass: f64,           // kg
    horizon_radius: f64, // m
    g: f64,              // gravitational constant
    min_distance: f64,   // distance clamp
}

impl Attractor {
    /// Attractor using the standard gravitational constant and distance clamp
    pub fn new(mass: f64, horizon_radius: f64) -> Self {
        Self::with_constants(mass, horizon_radius, G, MIN_DISTANCE)
    }

    pub fn with_constants(mass: f64, horizon_radius: f64, g: f64, min_distance: f64) -> Self {
        Self {
            mass,
            horizon_radius,
            g,
            min_distance,
        }
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn horizon_radius(&self) -> f64 {
        self.horizon_radius
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    /// G * M
    pub fn mu(&self) -> f64 {
        self.g * self.mass
    }

    /// G * M / d^2 with `d` clamped to the minimum distance
    pub fn acceleration_magnitude(&self, distance: f64) -> f64 {
        let d = distance.max(self.min_distance);
        self.mu() / (d * d)
    }

    /// Acceleration on a particle, directed toward the origin
    pub fn acceleration_for(&self, particle: &Particle) -> NVec3 {
        self.acceleration_at(&particle.x)
    }

    /// Acceleration at an arbitrary position
    ///
    /// The direction is divided by the clamped distance, so inside the clamp
    /// radius the vector is shorter than `acceleration_magnitude` and at the
    /// origin itself it is zero.
    pub fn acceleration_at(&self, position: &NVec3) -> NVec3 {
        // from the position toward the origin
        let direction = -position;
        let distance = magnitude(&direction).max(self.min_distance);

        let unit = scale(&direction, 1.0 / distance);
        scale(&unit, self.acceleration_magnitude(distance))
    }

    /// True when the particle is at or inside the horizon radius
    pub fn is_inside_event_horizon(&self, particle: &Particle) -> bool {
        magnitude(&particle.x) <= self.horizon_radius
    }
}
