//! Core state types for the simulation.
//!
//! `Particle` is a free test mass, `System` the ordered collection of
//! particles together with the elapsed simulation time `t`.

use super::vector::NVec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
}

impl Particle {
    pub fn new(x: NVec3, v: NVec3) -> Self {
        Self { x, v }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub particles: Vec<Particle>, // never grows or shrinks during a run
    pub t: f64, // time
}

impl System {
    pub fn new(particles: Vec<Particle>) -> Self {
        Self { particles, t: 0.0 }
    }
}
