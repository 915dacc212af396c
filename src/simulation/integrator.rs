//! Fixed-step time integrators
//!
//! Semi-implicit (symplectic) Euler is the default scheme and the one the
//! reference output is produced with. Velocity Verlet is kept as a second,
//! higher order option. Both update `sys.t` in-place.

use super::attractor::Attractor;
use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{Particle, System};
use super::vector::{accumulate, scale, NVec3};
use crate::configuration::config::IntegratorConfig;

/// One semi-implicit Euler update of a single particle
/// v_n+1 = v_n + dt * a_n, then x_n+1 = x_n + dt * v_n+1
#[inline]
fn kick_drift(p: &mut Particle, a: &NVec3, dt: f64) {
    accumulate(&mut p.v, &scale(a, dt));
    accumulate(&mut p.x, &scale(&p.v, dt));
}

/// Advance every particle by one step of semi-implicit Euler under the pull of
/// `attractor`. Particles are independent, so the update order does not matter.
pub fn step_simulation(attractor: &Attractor, particles: &mut [Particle], dt: f64) {
    for p in particles.iter_mut() {
        let a = attractor.acceleration_for(p);
        kick_drift(p, &a, dt);
    }
}

/// Advance the system by one semi-implicit Euler step using `forces`
pub fn symplectic_euler(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.particles.len();
    let dt = params.dt;

    if n > 0 {
        // a_n from x_n
        let mut a = vec![NVec3::zeros(); n];
        forces.accumulate_accels(&sys.particles, &mut a);

        for (p, a) in sys.particles.iter_mut().zip(a.iter()) {
            kick_drift(p, a, dt);
        }
    }

    sys.t += dt;
}

/// Advance the system by one step using velocity Verlet.
/// Uses two force evaluations per step.
pub fn verlet_integrator(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.particles.len();
    let dt = params.dt;
    let half_dt = 0.5 * dt;

    if n == 0 {
        sys.t += dt;
        return;
    }

    // a_n from x_n
    let mut a_old = vec![NVec3::zeros(); n];
    forces.accumulate_accels(&sys.particles, &mut a_old);

    // Kick: v_n+1/2 = v_n + (dt/2) * a_n
    // Drift: x_n+1 = x_n + dt * v_n+1/2
    for (p, a) in sys.particles.iter_mut().zip(a_old.iter()) {
        accumulate(&mut p.v, &scale(a, half_dt));
        accumulate(&mut p.x, &scale(&p.v, dt));
    }

    sys.t += dt;

    // a_n+1 from x_n+1
    let mut a_new = vec![NVec3::zeros(); n];
    forces.accumulate_accels(&sys.particles, &mut a_new);

    // Second kick: v_n+1 = v_n+1/2 + (dt/2) * a_n+1
    for (p, a) in sys.particles.iter_mut().zip(a_new.iter()) {
        accumulate(&mut p.v, &scale(a, half_dt));
    }
}

/// Advance the system by one step with the configured integrator
pub fn advance(
    integrator: IntegratorConfig,
    sys: &mut System,
    forces: &AccelSet,
    params: &Parameters,
) {
    match integrator {
        IntegratorConfig::SymplecticEuler => symplectic_euler(sys, forces, params),
        IntegratorConfig::Verlet => verlet_integrator(sys, forces, params),
    }
}
