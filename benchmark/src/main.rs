use grid_pathfinder::prelude::*;
use grid_pathfinder::scenario::{MapFile, ScenarioFile};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use std::error::Error;
use std::time::Duration;

const SIZE: usize = 256;
const RANDOM_QUERIES: usize = 200;

struct Query {
    start: Point,
    goal: Point,
    optimal_length: f64,
}

struct Run {
    time: Duration,
    length: Option<f64>,
    timed_out: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = FinderConfig::NO_CORNER_CUTTING;
    let (grid, queries) = match args.as_slice() {
        [map, scen] => load(map, scen)?,
        [] => random(config)?,
        _ => {
            eprintln!("usage: benchmark [<file.map> <file.scen>]");
            std::process::exit(2);
        }
    };
    println!(
        "{}x{} Grid, {} queries",
        grid.width(),
        grid.height(),
        queries.len()
    );

    for algorithm in Algorithm::ALL {
        let config = FinderConfig {
            time_limit: Some(Duration::from_millis(200)),
            ..config
        };
        let finder = Finder::new(algorithm, config);

        let runs: Vec<Run> = queries
            .par_iter()
            .map(|query| {
                let report = finder.search(query.start, query.goal, &grid, &mut ());
                Run {
                    time: report.elapsed,
                    length: (report.outcome == Outcome::Found).then(|| report.path.cost),
                    timed_out: report.outcome == Outcome::TimedOut,
                }
            })
            .collect();

        let times = runs.iter().map(|r| r.time.as_secs_f64() * 1000.0);
        let min_time = times.clone().fold(f64::INFINITY, f64::min);
        let max_time = times.clone().fold(0.0, f64::max);
        let avg_time = times.sum::<f64>() / runs.len().max(1) as f64;

        let ratios: Vec<f64> = runs
            .iter()
            .zip(&queries)
            .filter_map(|(run, query)| run.length.map(|l| l / query.optimal_length.max(1.0)))
            .collect();
        let min_ratio = ratios.iter().cloned().fold(f64::INFINITY, f64::min);
        let max_ratio = ratios.iter().cloned().fold(0.0, f64::max);
        let avg_ratio = ratios.iter().sum::<f64>() / ratios.len().max(1) as f64;
        let missed = runs.iter().filter(|r| r.length.is_none()).count();
        let timed_out = runs.iter().filter(|r| r.timed_out).count();

        println!(
            "{:>16} | {:.3}ms - {:.3}ms; {:.3}ms | {:.3} - {:.3}; {:.3} | {} without Path ({} timed out)",
            algorithm.to_string(),
            min_time,
            max_time,
            avg_time,
            min_ratio,
            max_ratio,
            avg_ratio,
            missed,
            timed_out,
        );
    }
    Ok(())
}

fn load(map: &str, scen: &str) -> Result<(Grid, Vec<Query>), Box<dyn Error>> {
    let grid = MapFile::parse(&std::fs::read_to_string(map)?)?.to_grid()?;
    let scenarios = ScenarioFile::parse(&std::fs::read_to_string(scen)?)?;

    let queries = scenarios
        .scenarios
        .into_iter()
        .filter(|s| s.optimal_length > 0.0)
        .map(|s| Query {
            start: s.start,
            goal: s.goal,
            optimal_length: s.optimal_length,
        })
        .collect();
    Ok((grid, queries))
}

fn random(config: FinderConfig) -> Result<(Grid, Vec<Query>), Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(42);

    let matrix: Vec<Vec<bool>> = (0..SIZE)
        .map(|_| (0..SIZE).map(|_| rng.gen_bool(0.25)).collect())
        .collect();
    let grid = Grid::from_matrix(SIZE, SIZE, &matrix)?;
    println!("finished Grid gen");

    let mut random_point = || loop {
        let p = (rng.gen_range(0..SIZE), rng.gen_range(0..SIZE));
        if grid.is_walkable_at(p.0 as isize, p.1 as isize) {
            return p;
        }
    };
    let pairs: Vec<(Point, Point)> = (0..RANDOM_QUERIES)
        .map(|_| (random_point(), random_point()))
        .collect();

    let reference = Finder::new(Algorithm::BiDijkstra, config);
    let queries = reference
        .find_paths(&pairs, &grid)
        .into_iter()
        .zip(pairs)
        .filter(|(path, _)| path.len() > 1)
        .map(|(path, (start, goal))| Query {
            start,
            goal,
            optimal_length: path.cost,
        })
        .collect();
    Ok((grid, queries))
}
