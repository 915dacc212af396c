use eventhorizon::{bench_step, Driver, IntegratorConfig, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

#[derive(ValueEnum, Debug, Clone, Copy)]
enum IntegratorArg {
    SymplecticEuler,
    Verlet,
}

impl From<IntegratorArg> for IntegratorConfig {
    fn from(arg: IntegratorArg) -> Self {
        match arg {
            IntegratorArg::SymplecticEuler => IntegratorConfig::SymplecticEuler,
            IntegratorArg::Verlet => IntegratorConfig::Verlet,
        }
    }
}

/// Particles falling around a black hole under Newtonian gravity
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// YAML scenario to run instead of the built-in reference scenario
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Override the number of steps
    #[arg(long)]
    steps: Option<u64>,

    /// Override the time step in seconds
    #[arg(long)]
    dt: Option<f64>,

    /// Override the integrator
    #[arg(long, value_enum)]
    integrator: Option<IntegratorArg>,

    /// Time the integrators instead of running a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    let mut scenario_cfg: ScenarioConfig = match &args.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open scenario {}", path.display()))?;
            let reader = BufReader::new(file);
            serde_yaml::from_reader(reader)
                .with_context(|| format!("failed to parse scenario {}", path.display()))?
        }
        None => ScenarioConfig::default(),
    };

    if let Some(steps) = args.steps {
        scenario_cfg.parameters.steps = steps;
    }
    if let Some(dt) = args.dt {
        scenario_cfg.parameters.dt = dt;
    }
    if let Some(integrator) = args.integrator {
        scenario_cfg.engine.integrator = integrator.into();
    }

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.bench {
        bench_step();
        return Ok(());
    }

    let scenario_cfg = load_scenario(&args)?;
    let scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    Driver::new(scenario).run(&mut out)?;
    out.flush()?;

    Ok(())
}
