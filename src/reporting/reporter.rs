//! Plain-text rendering of the simulation state
//!
//! One block per step:
//!
//! ```text
//! Step   0:
//!   Particle 0 | Position: (x, y, z) Velocity: (vx, vy, vz)
//!   -> Particle 0 has crossed the event horizon! (Capturing it in the black hole)
//! ```
//!
//! The capture lines are written by the driver after the state block.

use std::io::{self, Write};

use crate::simulation::states::Particle;

/// Write the `Step <n>:` header and one line per particle
pub fn write_state<W: Write>(out: &mut W, particles: &[Particle], step: u64) -> io::Result<()> {
    writeln!(out, "Step {:>3}:", step)?;
    for (i, p) in particles.iter().enumerate() {
        writeln!(
            out,
            "  Particle {} | Position: ({:.2}, {:.2}, {:.2}) Velocity: ({:.2}, {:.2}, {:.2})",
            i, p.x.x, p.x.y, p.x.z, p.v.x, p.v.y, p.v.z
        )?;
    }
    Ok(())
}

/// Write the notice for a particle inside the event horizon
pub fn write_capture<W: Write>(out: &mut W, index: usize) -> io::Result<()> {
    writeln!(
        out,
        "  -> Particle {} has crossed the event horizon! (Capturing it in the black hole)",
        index
    )
}

/// Write the closing line of a run
pub fn write_summary<W: Write>(out: &mut W, steps: u64, captured: usize) -> io::Result<()> {
    writeln!(
        out,
        "Simulation complete after {} steps, {} particle(s) inside the event horizon.",
        steps, captured
    )
}
