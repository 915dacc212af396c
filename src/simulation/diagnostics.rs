//! Orbital diagnostics used by the run summary

use super::attractor::Attractor;
use super::states::Particle;
use super::vector::magnitude;

/// Specific orbital energy v^2/2 - G*M/r, with r clamped like the force law
pub fn specific_energy(particle: &Particle, attractor: &Attractor) -> f64 {
    let r = magnitude(&particle.x).max(attractor.min_distance());
    let speed = magnitude(&particle.v);

    0.5 * speed * speed - attractor.mu() / r
}

/// |(e - e0) / e0|, or the absolute difference when e0 is zero
pub fn relative_drift(e0: f64, e: f64) -> f64 {
    if e0 == 0.0 {
        (e - e0).abs()
    } else {
        ((e - e0) / e0).abs()
    }
}
