//! Headless wildfire automaton demo
//!
//! Builds a uniform landscape (or loads a scenario file), ignites the center,
//! and prints ASCII frames while the fire runs.

use std::path::PathBuf;

use clap::Parser;
use wildfire_ca_core::{
    Cell, CellGrid, CellState, Scenario, Simulation, Vegetation, Wind, WindSpeed,
};

/// Wildfire cellular automaton demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "wildfire-demo")]
#[command(about = "Wildfire spread cellular automaton demo", long_about = None)]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = 32)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 32)]
    height: usize,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 80)]
    ticks: u64,

    /// Seed for the random stream
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Wind direction x component (-1, 0, 1; east is positive)
    #[arg(long, default_value_t = 1)]
    wind_x: i8,

    /// Wind direction y component (-1, 0, 1; south is positive)
    #[arg(long, default_value_t = 0)]
    wind_y: i8,

    /// Wind speed class (none, slow, moderate, fast, extreme)
    #[arg(long, default_value = "moderate")]
    wind_speed: String,

    /// Moisture fraction for the generated landscape (0-1)
    #[arg(short, long, default_value_t = 0.15)]
    moisture: f32,

    /// Vegetation letter for the generated landscape (B, S, G, F, A, N)
    #[arg(long, default_value = "G")]
    vegetation: String,

    /// Print a frame every N ticks (0 = only the final frame)
    #[arg(short, long, default_value_t = 10)]
    report_interval: u64,

    /// Load a scenario JSON file instead of generating a landscape
    #[arg(long)]
    scenario: Option<PathBuf>,
}

fn parse_wind_speed(name: &str) -> Result<WindSpeed, String> {
    match name.to_ascii_lowercase().as_str() {
        "none" => Ok(WindSpeed::None),
        "slow" => Ok(WindSpeed::Slow),
        "moderate" => Ok(WindSpeed::Moderate),
        "fast" => Ok(WindSpeed::Fast),
        "extreme" => Ok(WindSpeed::Extreme),
        other => Err(format!("unknown wind speed class '{other}'")),
    }
}

fn parse_vegetation(letter: &str) -> Result<Vegetation, String> {
    Vegetation::ALL
        .into_iter()
        .find(|veg| letter.eq_ignore_ascii_case(&veg.letter().to_string()))
        .ok_or_else(|| format!("unknown vegetation letter '{letter}'"))
}

fn build_simulation(args: &Args) -> Result<Simulation, Box<dyn std::error::Error>> {
    if let Some(path) = &args.scenario {
        return Ok(Scenario::load(path)?.into_simulation());
    }

    let vegetation = parse_vegetation(&args.vegetation)?;
    let speed = parse_wind_speed(&args.wind_speed)?;
    let wind = Wind::new(args.wind_x, args.wind_y, speed)?;
    let mut grid = CellGrid::new(args.width, args.height, Cell::new(vegetation, args.moisture))?;
    grid.get_mut(args.width / 2, args.height / 2).ignite();
    Ok(Simulation::new(grid, wind, args.seed))
}

fn render(grid: &CellGrid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let cell = grid.get(x, y);
            out.push(match cell.state {
                CellState::Normal => '.',
                CellState::OnFire => '*',
                CellState::Burnt => '#',
            });
        }
        out.push('\n');
    }
    out
}

fn render_vegetation(grid: &CellGrid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            out.push(grid.get(x, y).vegetation.letter());
        }
        out.push('\n');
    }
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut sim = build_simulation(&args)?;

    println!("vegetation map:");
    println!("{}", render_vegetation(sim.grid()));
    println!("tick 0:");
    println!("{}", render(sim.grid()));

    for t in 1..=args.ticks {
        sim.step();
        if args.report_interval > 0 && t % args.report_interval == 0 {
            println!("tick {t}:");
            println!("{}", render(sim.grid()));
        }
        if !sim.is_active() {
            println!("fire extinguished after {t} ticks");
            break;
        }
    }

    println!("final state after {} ticks:", sim.ticks());
    println!("{}", render(sim.grid()));
    let stats = sim.stats();
    println!(
        "normal: {}  on fire: {}  burnt: {}",
        stats.normal, stats.on_fire, stats.burnt
    );
    Ok(())
}
