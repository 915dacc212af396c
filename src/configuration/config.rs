//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – engine options (which integrator advances the particles)
//! - [`ParametersConfig`] – run parameters and physical constants
//! - [`AttractorConfig`]  – the black hole at the origin
//! - [`ParticleConfig`]   – initial state for each free particle
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The reference scenario written out in full:
//!
//! ```yaml
//! engine:
//!   integrator: "symplectic_euler" # or "verlet"
//!
//! parameters:
//!   dt: 0.1                 # seconds per step
//!   steps: 120              # total number of steps
//!   G: 6.67430e-11          # gravitational constant (optional)
//!   min_distance: 1.0e-3    # distance clamp of the force law (optional)
//!
//! attractor:
//!   mass: 9.94235e30        # kg
//!   horizon_radius: 15000.0 # m
//!
//! particles:
//!   - x: [100000.0, 0.0, 0.0]
//!     v: [0.0, 2500.0, 0.0]
//! ```
//!
//! `engine`, `G` and `min_distance` may be omitted. Nothing here is checked;
//! validation happens when the config is turned into a runtime
//! [`Scenario`](crate::simulation::scenario::Scenario).

use serde::Deserialize;

use crate::simulation::constants::{G, MIN_DISTANCE, SOLAR_MASS};

/// Which integrator the engine uses
/// `integrator: "symplectic_euler"` or `integrator: "verlet"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegratorConfig {
    #[default]
    #[serde(rename = "symplectic_euler")] // Semi-implicit Euler, one force evaluation, defines the reference output
    SymplecticEuler,

    #[serde(rename = "verlet")] // Velocity Verlet (kick-drift-kick), two force evaluations per step
    Verlet,
}

/// Engine configuration
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub integrator: IntegratorConfig,
}

/// Run parameters and physical constants for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,    // time step size in seconds
    pub steps: u64, // total number of steps
    #[serde(rename = "G", default = "default_g")]
    pub g: f64, // gravitational constant
    #[serde(default = "default_min_distance")]
    pub min_distance: f64, // floor on the distance used by the force law
}

/// The fixed point mass at the origin
#[derive(Deserialize, Debug, Clone)]
pub struct AttractorConfig {
    pub mass: f64,           // kg
    pub horizon_radius: f64, // m
}

/// Initial state of a single particle
#[derive(Deserialize, Debug, Clone)]
pub struct ParticleConfig {
    pub x: [f64; 3], // position in meters
    pub v: [f64; 3], // velocity in meters per second
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub attractor: AttractorConfig,
    pub particles: Vec<ParticleConfig>,
}

fn default_g() -> f64 {
    G
}

fn default_min_distance() -> f64 {
    MIN_DISTANCE
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            dt: 0.1,
            steps: 120,
            g: G,
            min_distance: MIN_DISTANCE,
        }
    }
}

impl Default for AttractorConfig {
    /// Roughly a 5 solar mass stellar black hole
    fn default() -> Self {
        Self {
            mass: 5.0 * SOLAR_MASS,
            horizon_radius: 15_000.0,
        }
    }
}

impl Default for ScenarioConfig {
    /// Four particles seeded around the attractor with tangential velocities
    fn default() -> Self {
        let particles = [
            ([100_000.0, 0.0, 0.0], [0.0, 2_500.0, 0.0]),
            ([0.0, -120_000.0, 0.0], [3_200.0, 0.0, 0.0]),
            ([-140_000.0, 140_000.0, 0.0], [-2_100.0, -2_100.0, 0.0]),
            ([80_000.0, -80_000.0, 0.0], [1_800.0, 1_800.0, 0.0]),
        ]
        .into_iter()
        .map(|(x, v)| ParticleConfig { x, v })
        .collect();

        Self {
            engine: EngineConfig::default(),
            parameters: ParametersConfig::default(),
            attractor: AttractorConfig::default(),
            particles,
        }
    }
}
