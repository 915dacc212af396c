//! Run parameters for the simulation
//!
//! `Parameters` holds the validated runtime settings:
//! - fixed step size `dt` and total step count,
//! - gravitational constant and the force law's distance clamp

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub dt: f64, // step size
    pub steps: u64, // total steps
    pub g: f64, // gravitational constant
    pub min_distance: f64, // distance clamp
}
