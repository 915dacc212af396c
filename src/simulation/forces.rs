//! Force / acceleration contributors for the engine
//!
//! Every contributor is a [`ForceSource`] variant. An [`AccelSet`] sums the
//! contributions of its sources into one acceleration vector per particle.
//! Particles never act on each other, only the sources act on particles.

use super::attractor::Attractor;
use super::states::Particle;
use super::vector::{accumulate, NVec3};

/// A single source of acceleration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForceSource {
    /// Newtonian point mass fixed at the origin
    PointMass(Attractor),
}

impl ForceSource {
    /// Acceleration this source produces at `position`
    pub fn acceleration_at(&self, position: &NVec3) -> NVec3 {
        match self {
            ForceSource::PointMass(attractor) => attractor.acceleration_at(position),
        }
    }
}

impl From<Attractor> for ForceSource {
    fn from(attractor: Attractor) -> Self {
        ForceSource::PointMass(attractor)
    }
}

/// Collection of acceleration sources
#[derive(Debug, Clone, Default)]
pub struct AccelSet {
    sources: Vec<ForceSource>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Add a source
    pub fn with(mut self, source: impl Into<ForceSource>) -> Self {
        self.sources.push(source.into());
        self
    }

    pub fn sources(&self) -> &[ForceSource] {
        &self.sources
    }

    /// Total acceleration at a single position
    pub fn acceleration_at(&self, position: &NVec3) -> NVec3 {
        let mut total = NVec3::zeros();
        for source in &self.sources {
            accumulate(&mut total, &source.acceleration_at(position));
        }
        total
    }

    /// Compute total accelerations for all particles
    /// - `out[i]` is overwritten with the sum of contributions for `particles[i]`
    pub fn accumulate_accels(&self, particles: &[Particle], out: &mut [NVec3]) {
        debug_assert_eq!(particles.len(), out.len());

        for (a, p) in out.iter_mut().zip(particles) {
            *a = self.acceleration_at(&p.x);
        }
    }
}
