//! The step/report loop
//!
//! A [`Driver`] owns a [`Scenario`] and moves through three states:
//! `Setup` (scenario built, nothing integrated), `Running` (integrate, report
//! the state, report captures, advance the counter) and `Done` once the
//! configured number of steps has been taken. Captured particles keep
//! integrating; the loop never stops early.

use std::io::{self, Write};

use log::{debug, info, warn};

use crate::reporting::reporter::{write_capture, write_state, write_summary};
use crate::simulation::diagnostics::{relative_drift, specific_energy};
use crate::simulation::integrator::advance;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::System;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Setup,
    Running { step: u64 },
    Done,
}

/// What a finished run looked like
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub steps: u64, // steps taken
    pub t: f64, // simulated time at the end of the run
    pub captured: Vec<usize>, // particles that were inside the horizon at least once, ascending
    pub max_energy_drift: f64, // largest relative change of specific orbital energy seen
}

pub struct Driver {
    scenario: Scenario,
    state: DriverState,
}

impl Driver {
    pub fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            state: DriverState::Setup,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn system(&self) -> &System {
        &self.scenario.system
    }

    /// Run every configured step, writing the report to `out`
    ///
    /// Calling `run` on a driver that is already `Done` writes only the
    /// summary line and integrates nothing.
    pub fn run<W: Write>(&mut self, out: &mut W) -> io::Result<RunSummary> {
        let total = self.scenario.parameters.steps;
        let integrator = self.scenario.engine.integrator;

        let energies: Vec<f64> = self
            .scenario
            .system
            .particles
            .iter()
            .map(|p| specific_energy(p, &self.scenario.attractor))
            .collect();

        let mut captured = vec![false; self.scenario.system.particles.len()];
        let mut max_energy_drift = 0.0_f64;
        let mut taken = 0;

        if self.state == DriverState::Setup {
            info!(
                "starting run: {} particles, {} steps, dt = {} s, {:?}",
                self.scenario.system.particles.len(),
                total,
                self.scenario.parameters.dt,
                integrator
            );
            self.state = if total == 0 {
                DriverState::Done
            } else {
                DriverState::Running { step: 0 }
            };
        }

        while let DriverState::Running { step } = self.state {
            let Scenario {
                parameters,
                attractor,
                system,
                forces,
                ..
            } = &mut self.scenario;

            advance(integrator, system, forces, parameters);
            write_state(out, &system.particles, step)?;

            for (i, p) in system.particles.iter().enumerate() {
                if attractor.is_inside_event_horizon(p) {
                    write_capture(out, i)?;
                    if !captured[i] {
                        warn!("particle {} crossed the event horizon at step {}", i, step);
                        captured[i] = true;
                    }
                }

                let drift = relative_drift(energies[i], specific_energy(p, attractor));
                max_energy_drift = max_energy_drift.max(drift);
            }

            debug!("step {} done, t = {} s", step, system.t);

            taken += 1;
            self.state = if step + 1 >= total {
                DriverState::Done
            } else {
                DriverState::Running { step: step + 1 }
            };
        }

        let captured: Vec<usize> = captured
            .iter()
            .enumerate()
            .filter_map(|(i, &c)| c.then_some(i))
            .collect();

        write_summary(out, taken, captured.len())?;

        info!(
            "run finished: {} steps, t = {} s, {} captured, max energy drift {:.3e}",
            taken,
            self.scenario.system.t,
            captured.len(),
            max_energy_drift
        );

        Ok(RunSummary {
            steps: taken,
            t: self.scenario.system.t,
            captured,
            max_energy_drift,
        })
    }
}
