pub mod constants;
pub mod vector;
pub mod states;
pub mod params;
pub mod engine;
pub mod attractor;
pub mod forces;
pub mod integrator;
pub mod diagnostics;
pub mod scenario;
pub mod driver;
