mod scenario;

use anyhow::Result;
use clap::Parser;
use orrery::prelude::*;

use std::path::PathBuf;

use crate::scenario::Scenario;

#[derive(Parser, Debug)]
#[command(name = "orrery-trail")]
#[command(about = "Prints predicted trails while a tick driver commits projections")]
struct Args {
    /// YAML scenarios to load. The built-in three-body scenario is used when none is given.
    scenarios: Vec<PathBuf>,

    /// Number of chained projections in each trail.
    #[arg(long, default_value_t = DEFAULT_TRAIL_LEN)]
    steps: usize,

    /// Number of ticks committed to each live simulation.
    #[arg(long, default_value = "5")]
    ticks: usize,
}

fn print_bodies(label: &str, simulation: &Simulation) {
    println!("{label} t={}", simulation.time());
    for body in simulation.bodies() {
        println!(
            "  #{:<3} position=({:>10.3}, {:>10.3}) velocity=({:>8.3}, {:>8.3})",
            body.index(),
            body.position.x,
            body.position.y,
            body.velocity.x,
            body.velocity.y
        );
    }
}

// Draws one trail and commits its first projection, as a frame of a renderer would.
fn tick(simulation: &mut Simulation, steps: usize) -> Result<()> {
    let mut first = None;
    let mut last = None;
    for projection in simulation.trail(steps) {
        let projection = projection?;
        if first.is_none() {
            first = Some(projection.clone());
        }
        last = Some(projection);
    }

    if let Some(last) = &last {
        print_bodies("  trail end", last);
    }
    match first {
        Some(projection) => simulation.commit(&projection)?,
        None => simulation.advance()?,
    }
    Ok(())
}

fn run(name: &str, mut simulation: Simulation, args: &Args) -> Result<()> {
    log::info!("running {name} with {} bodies", simulation.len());
    print_bodies(name, &simulation);

    for _ in 0..args.ticks {
        if let Err(error) = tick(&mut simulation, args.steps) {
            log::warn!("{name} stopped at t={}: {error}", simulation.time());
            return Ok(());
        }
        print_bodies(name, &simulation);
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let scenarios = if args.scenarios.is_empty() {
        vec![("built-in".to_owned(), Scenario::default())]
    } else {
        args.scenarios
            .iter()
            .map(|path| Ok((path.display().to_string(), Scenario::from_path(path)?)))
            .collect::<Result<Vec<_>>>()?
    };

    let simulations = scenarios
        .iter()
        .map(|(_, scenario)| scenario.build())
        .collect::<Result<Vec<_>>>()?;

    // Look ahead in every scenario at once before driving them.
    for ((name, _), trail) in scenarios
        .iter()
        .zip(simulations.as_slice().par_predict(args.steps))
    {
        match trail {
            Ok(trail) => log::info!("{name}: {} projections ahead", trail.len()),
            Err(error) => log::warn!("{name}: prediction failed: {error}"),
        }
    }

    for ((name, _), simulation) in scenarios.iter().zip(simulations) {
        run(name, simulation, &args)?;
    }

    Ok(())
}
