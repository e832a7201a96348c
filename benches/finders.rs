extern crate grid_pathfinder;
use env_logger::Env;
use log::info;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use grid_pathfinder::prelude::*;
use nanorand::{Rng, WyRand};

// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "info") // Change this to debug to see every search.
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn random_grid(width: usize, height: usize, blocked_percent: u8, seed: u64) -> Grid {
    let mut rng = WyRand::new_seed(seed);
    let matrix: Vec<Vec<bool>> = (0..height)
        .map(|_| {
            (0..width)
                .map(|_| rng.generate_range(0_u8..100) < blocked_percent)
                .collect()
        })
        .collect();
    let mut grid = Grid::from_matrix(width, height, &matrix).unwrap();
    grid.set_walkable_at(0, 0, true).unwrap();
    grid.set_walkable_at(width as isize - 1, height as isize - 1, true)
        .unwrap();
    grid
}

/// A Grid of horizontal walls with alternating gaps
fn maze_grid(size: usize) -> Grid {
    let mut grid = Grid::new(size, size).unwrap();
    for y in (2..size - 1).step_by(4) {
        for x in 0..size {
            grid.set_walkable_at(x as isize, y as isize, false).unwrap();
        }
        let gap = if (y / 4) % 2 == 0 { size - 1 } else { 0 };
        grid.set_walkable_at(gap as isize, y as isize, true).unwrap();
    }
    grid
}

fn bench_single_path(c: &mut Criterion) {
    init();
    let mut group = c.benchmark_group("Single Path");

    let size = 128;
    let maps = [
        ("Uniform", Grid::new(size, size).unwrap()),
        ("Random", random_grid(size, size, 25, 4)),
        ("Maze", maze_grid(size)),
    ];
    let goal = (size - 1, size - 1);

    for (name, grid) in &maps {
        for algorithm in Algorithm::ALL {
            // IDA* does not scale to Grids of this size
            if algorithm == Algorithm::IdaStar {
                info!("skipping {} on {} {}x{}", algorithm, name, size, size);
                continue;
            }
            let finder = Finder::new(algorithm, FinderConfig::DIAGONAL);
            let id = BenchmarkId::new(algorithm.to_string(), format!("{} {}x{}", name, size, size));
            group.bench_with_input(id, grid, |b, grid| {
                b.iter(|| finder.find_path((0, 0), goal, grid))
            });
        }
    }
}

fn bench_diagonal_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("Jump Point Policies");

    let size = 256;
    let grid = random_grid(size, size, 20, 9);
    for policy in [
        DiagonalMovement::Never,
        DiagonalMovement::Always,
        DiagonalMovement::IfAtMostOneObstacle,
        DiagonalMovement::OnlyWhenNoObstacles,
    ] {
        let config = FinderConfig {
            diagonal_movement: policy,
            ..FinderConfig::default()
        };
        for algorithm in [Algorithm::AStar, Algorithm::JumpPoint] {
            let finder = Finder::new(algorithm, config);
            let id = BenchmarkId::new(algorithm.to_string(), format!("{:?}", policy));
            group.bench_function(id, |b| {
                b.iter(|| finder.find_path((0, 0), (size - 1, size - 1), &grid))
            });
        }
    }
}

fn bench_ida_star(c: &mut Criterion) {
    let mut group = c.benchmark_group("IDA*");
    group.sample_size(10);

    let grid = random_grid(16, 16, 15, 21);
    let finder = Finder::new(Algorithm::IdaStar, FinderConfig::DIAGONAL);
    group.bench_function("Random 16x16", |b| {
        b.iter(|| finder.find_path((0, 0), (15, 15), &grid))
    });
}

fn bench_many_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("Many Paths");
    group.sample_size(10);

    let size = 512;
    let grid = random_grid(size, size, 20, 77);
    let mut rng = WyRand::new_seed(3);
    let mut random_point = || loop {
        let p = (rng.generate_range(0..size), rng.generate_range(0..size));
        if grid.is_walkable_at(p.0 as isize, p.1 as isize) {
            return p;
        }
    };
    let queries: Vec<(Point, Point)> = (0..64).map(|_| (random_point(), random_point())).collect();

    let finder = Finder::new(Algorithm::AStar, FinderConfig::DIAGONAL);

    #[cfg(not(feature = "parallel"))]
    log::warn!("the parallel feature is disabled, the queries run on a single thread");

    #[cfg(feature = "parallel")]
    let id = "64 A* queries, Parallel";
    #[cfg(not(feature = "parallel"))]
    let id = "64 A* queries, Single Threaded";

    group.bench_function(id, |b| b.iter(|| finder.find_paths(&queries, &grid)));
}

criterion_group!(
    benches,
    bench_single_path,
    bench_diagonal_policies,
    bench_ida_star,
    bench_many_paths
);
criterion_main!(benches);
