//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing), validates it, and produces the
//! runtime bundle `Scenario` containing:
//! - engine settings (`Engine`)
//! - run parameters (`Parameters`)
//! - the attractor at the origin (`Attractor`)
//! - system state (`System` with particles at t = 0)
//! - active force set (`AccelSet`)
//!
//! A `Scenario` is handed to the [`Driver`](crate::simulation::driver::Driver)
//! which runs it.

use log::debug;

use crate::configuration::config::{ParticleConfig, ScenarioConfig};
use crate::configuration::error::ConfigError;
use crate::simulation::attractor::Attractor;
use crate::simulation::engine::Engine;
use crate::simulation::forces::AccelSet;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Particle, System};
use crate::simulation::vector::NVec3;

#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub attractor: Attractor,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    /// Validate `cfg` and map it into runtime types
    ///
    /// Rejects the configuration before anything runs, so a run never fails
    /// halfway through.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        validate(&cfg)?;

        // Particles: map `ParticleConfig` -> runtime `Particle` using nalgebra vectors
        let particles: Vec<Particle> = cfg
            .particles
            .iter()
            .map(|pc: &ParticleConfig| Particle {
                x: NVec3::from(pc.x),
                v: NVec3::from(pc.v),
            })
            .collect();

        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            steps: p_cfg.steps,
            g: p_cfg.g,
            min_distance: p_cfg.min_distance,
        };

        let engine = Engine {
            integrator: cfg.engine.integrator,
        };

        let attractor = Attractor::with_constants(
            cfg.attractor.mass,
            cfg.attractor.horizon_radius,
            parameters.g,
            parameters.min_distance,
        );

        // Forces: the attractor is the only source
        let forces = AccelSet::new().with(attractor);

        debug!(
            "built scenario: {} particles, {} steps of {} s, {:?}",
            particles.len(),
            parameters.steps,
            parameters.dt,
            engine.integrator
        );

        Ok(Self {
            engine,
            parameters,
            attractor,
            system: System::new(particles),
            forces,
        })
    }
}

fn validate(cfg: &ScenarioConfig) -> Result<(), ConfigError> {
    let p = &cfg.parameters;
    let a = &cfg.attractor;

    if !(a.mass.is_finite() && a.mass > 0.0) {
        return Err(ConfigError::InvalidMass(a.mass));
    }
    if !(a.horizon_radius.is_finite() && a.horizon_radius >= 0.0) {
        return Err(ConfigError::InvalidHorizonRadius(a.horizon_radius));
    }
    if !(p.dt.is_finite() && p.dt > 0.0) {
        return Err(ConfigError::InvalidTimeStep(p.dt));
    }
    if !(p.g.is_finite() && p.g > 0.0) {
        return Err(ConfigError::InvalidGravitationalConstant(p.g));
    }
    if !(p.min_distance.is_finite() && p.min_distance > 0.0) {
        return Err(ConfigError::InvalidMinDistance(p.min_distance));
    }

    for (index, pc) in cfg.particles.iter().enumerate() {
        if pc.x.iter().chain(pc.v.iter()).any(|c| !c.is_finite()) {
            return Err(ConfigError::NonFiniteParticle { index });
        }
    }

    Ok(())
}
