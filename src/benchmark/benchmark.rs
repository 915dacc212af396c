use std::time::Instant;

use crate::simulation::attractor::Attractor;
use crate::simulation::constants::{G, MIN_DISTANCE, SOLAR_MASS};
use crate::simulation::forces::AccelSet;
use crate::simulation::integrator::{step_simulation, symplectic_euler, verlet_integrator};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Particle, System};
use crate::simulation::vector::NVec3;

/// Helper to build a ring of `n` particles around the attractor
fn make_system(n: usize) -> System {
    let mut particles = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec3::new(
            (i_f * 0.37).sin() * 1.0e5,
            (i_f * 0.13).cos() * 1.0e5,
            (i_f * 0.07).sin() * 1.0e4,
        );
        let v = NVec3::new(-x.y, x.x, 0.0) * 0.02;

        particles.push(Particle { x, v });
    }

    System::new(particles)
}

fn make_params() -> Parameters {
    Parameters {
        dt: 0.1,
        steps: 0,
        g: G,
        min_distance: MIN_DISTANCE,
    }
}

/// Time one integration step for growing particle counts
/// Paste output directly into a spreadsheet to graph
pub fn bench_step() {
    let attractor = Attractor::new(5.0 * SOLAR_MASS, 15_000.0);
    let forces = AccelSet::new().with(attractor);
    let params = make_params();

    println!("N,step_simulation_ms,symplectic_euler_ms,verlet_ms");

    for n in [1_000, 10_000, 100_000, 1_000_000] {
        // Small n: average over more steps to smooth noise
        let steps = if n <= 10_000 { 50 } else { 5 };

        let template = make_system(n);

        let mut particles = template.particles.clone();
        step_simulation(&attractor, &mut particles, params.dt); // warm-up
        let t0 = Instant::now();
        for _ in 0..steps {
            step_simulation(&attractor, &mut particles, params.dt);
        }
        let ms_direct = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        let mut sys = template.clone();
        let t1 = Instant::now();
        for _ in 0..steps {
            symplectic_euler(&mut sys, &forces, &params);
        }
        let ms_euler = t1.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        let mut sys = template.clone();
        let t2 = Instant::now();
        for _ in 0..steps {
            verlet_integrator(&mut sys, &forces, &params);
        }
        let ms_verlet = t2.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6},{:.6},{:.6}", n, ms_direct, ms_euler, ms_verlet);
    }
}
