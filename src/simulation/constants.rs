//! Physical constants and numerical floors shared by the force law and the
//! reference scenario

/// Newton's gravitational constant in m^3 kg^-1 s^-2
pub const G: f64 = 6.67430e-11;

/// Mass of the sun in kg
pub const SOLAR_MASS: f64 = 1.98847e30;

/// Floor on the distance used by the force law, in meters
pub const MIN_DISTANCE: f64 = 1e-3;
