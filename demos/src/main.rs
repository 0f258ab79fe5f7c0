//! riskgrid demo — route through an ASCII map and print the marked grid.
//!
//! Map glyphs: `.` free, `#` barrier, `~` risky, `S` start, `E` end,
//! `W` waypoint. Waypoints are visited in row-major order. Set `RUST_LOG`
//! to `debug` for per-leg statistics.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};
use riskgrid_core::{Grid, RiskConfig, RiskSampler, Role};
use riskgrid_paths::{PathRequest, find_route};

const DEFAULT_MAP: &str = "\
S.......#...........
........#...........
..~~....#.....~~~...
..~~....#.....~~~...
........#...........
........#######.....
....................
.....W..............
...........~~.......
#########..~~..#####
...........~~.......
....................
......~~~~~.........
......~~~~~.....W...
..........#.........
..........#.........
..........#..~~.....
..........#..~~.....
..........#.........
..........#........E";

#[derive(Parser, Debug)]
#[command(name = "riskgrid", about = "Risk-aware multi-waypoint A* on a grid")]
struct Args {
    /// ASCII map file. A built-in 20x20 map is used when omitted.
    #[arg(long)]
    map: Option<PathBuf>,
    /// Seed for risk sampling.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Number of extra free cells to turn risky at random.
    #[arg(long, default_value_t = 0)]
    risky: usize,
    /// Cell side length used to scale the risk range.
    #[arg(long, default_value_t = 1.0)]
    cell_size: f64,
    /// Print only the summary line.
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let text = match &args.map {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEFAULT_MAP.to_string(),
    };
    let mut grid = Grid::parse(&text)?;
    log::info!("loaded {} map", grid.bounds());

    let config = RiskConfig {
        cell_size: args.cell_size,
        ..RiskConfig::default()
    };
    let sampler = RiskSampler::new(grid.bounds(), &config);
    let mut rng = StdRng::seed_from_u64(args.seed);
    for p in grid.positions_with(Role::Risky) {
        grid.make_risky(p, &sampler, &mut rng);
    }
    scatter_risk(&mut grid, &sampler, &mut rng, args.risky);

    let request = PathRequest::from_grid(&grid);
    let mut expansions = 0usize;
    let result = find_route(&mut grid, &request, &mut || expansions += 1);

    if !args.quiet {
        println!("{grid}\n");
    }
    let route = result?;
    for (i, leg) in route.legs.iter().enumerate() {
        log::info!(
            "leg {}: {} -> {} cost {:.3} ({} cells, {} expanded)",
            i,
            leg.from,
            leg.to,
            leg.cost,
            leg.cells,
            leg.expanded
        );
    }
    println!(
        "cost {:.3} over {} cells, {} legs, {} expansions",
        route.cost,
        route.cells.len(),
        route.legs.len(),
        expansions
    );
    Ok(())
}

/// Turn `count` randomly chosen free cells risky.
fn scatter_risk<R: Rng + ?Sized>(grid: &mut Grid, sampler: &RiskSampler, rng: &mut R, count: usize) {
    let mut free = grid.positions_with(Role::Free);
    for _ in 0..count.min(free.len()) {
        let i = rng.random_range(0..free.len());
        let p = free.swap_remove(i);
        grid.make_risky(p, sampler, rng);
    }
}
