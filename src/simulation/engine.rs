//! Runtime engine settings
//!
//! Selects the integrator used when running a `Scenario`

use crate::configuration::config::IntegratorConfig;

#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    pub integrator: IntegratorConfig, // symplectic euler or verlet
}
