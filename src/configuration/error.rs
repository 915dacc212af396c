//! Errors raised while turning a [`ScenarioConfig`](super::config::ScenarioConfig)
//! into a runnable scenario

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("attractor mass must be positive and finite, got {0} kg")]
    InvalidMass(f64),

    #[error("horizon radius must be non-negative and finite, got {0} m")]
    InvalidHorizonRadius(f64),

    #[error("time step must be positive and finite, got {0} s")]
    InvalidTimeStep(f64),

    #[error("gravitational constant must be positive and finite, got {0}")]
    InvalidGravitationalConstant(f64),

    #[error("minimum distance must be positive and finite, got {0} m")]
    InvalidMinDistance(f64),

    #[error("particle {index} has a non-finite position or velocity")]
    NonFiniteParticle { index: usize },
}
