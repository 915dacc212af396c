pub mod simulation;
pub mod configuration;
pub mod reporting;
pub mod benchmark;

pub use simulation::vector::NVec3;
pub use simulation::states::{Particle, System};
pub use simulation::attractor::Attractor;
pub use simulation::forces::{AccelSet, ForceSource};
pub use simulation::integrator::{step_simulation, symplectic_euler, verlet_integrator};
pub use simulation::scenario::Scenario;
pub use simulation::driver::{Driver, DriverState, RunSummary};

pub use configuration::config::{IntegratorConfig, EngineConfig, ParametersConfig, AttractorConfig, ParticleConfig, ScenarioConfig};
pub use configuration::error::ConfigError;

pub use benchmark::benchmark::bench_step;
