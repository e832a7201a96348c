use grid_pathfinder::prelude::*;
use grid_pathfinder::{Recorder, SearchReport};
use nanorand::{Rng, WyRand};
use std::time::Duration;

const POLICIES: [DiagonalMovement; 4] = [
    DiagonalMovement::Never,
    DiagonalMovement::Always,
    DiagonalMovement::IfAtMostOneObstacle,
    DiagonalMovement::OnlyWhenNoObstacles,
];

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn config(diagonal_movement: DiagonalMovement) -> FinderConfig {
    FinderConfig {
        diagonal_movement,
        ..FinderConfig::default()
    }
}

fn random_grid(rng: &mut WyRand, width: usize, height: usize, blocked_percent: u8) -> Grid {
    let matrix: Vec<Vec<bool>> = (0..height)
        .map(|_| {
            (0..width)
                .map(|_| rng.generate_range(0_u8..100) < blocked_percent)
                .collect()
        })
        .collect();
    Grid::from_matrix(width, height, &matrix).unwrap()
}

fn random_walkable(rng: &mut WyRand, grid: &Grid) -> Point {
    loop {
        let x = rng.generate_range(0..grid.width());
        let y = rng.generate_range(0..grid.height());
        if grid.is_walkable_at(x as isize, y as isize) {
            return (x, y);
        }
    }
}

/// shortest distances from `from` by relaxing every edge until nothing changes
fn brute_force_distances(grid: &Grid, from: Point, policy: DiagonalMovement, hops: bool) -> Vec<f64> {
    let index = |(x, y): Point| y * grid.width() + x;
    let mut dist = vec![f64::INFINITY; grid.width() * grid.height()];
    dist[index(from)] = 0.0;

    let mut changed = true;
    while changed {
        changed = false;
        for cell in grid.cells().filter(|c| c.is_walkable()) {
            let here = dist[index(cell.pos())];
            if here.is_infinite() {
                continue;
            }
            for next in grid.neighbors(cell.pos(), policy) {
                let step = if hops || cell.x() == next.0 || cell.y() == next.1 {
                    1.0
                } else {
                    std::f64::consts::SQRT_2
                };
                if here + step < dist[index(next)] - 1e-9 {
                    dist[index(next)] = here + step;
                    changed = true;
                }
            }
        }
    }
    dist
}

fn assert_valid(path: &Path, start: Point, goal: Point, grid: &Grid, policy: DiagonalMovement, name: &str) {
    assert_eq!(path.start(), Some(start), "{}", name);
    assert_eq!(path.goal(), Some(goal), "{}", name);
    for step in path.windows(2) {
        assert!(
            grid.is_valid_step(step[0], step[1], policy),
            "{}: invalid step {:?} -> {:?} in {}",
            name,
            step[0],
            step[1],
            path
        );
    }
}

#[test]
fn open_grid_diagonal() {
    init();
    let grid = Grid::new(5, 5).unwrap();
    let finder = Finder::new(Algorithm::AStar, FinderConfig::DIAGONAL);
    let path = finder.find_path((0, 0), (4, 4), &grid);
    assert_eq!(path.path, vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
    assert!((path.cost - 4.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
}

#[test]
fn open_grid_orthogonal() {
    init();
    let grid = Grid::new(5, 5).unwrap();
    let finder = Finder::new(Algorithm::AStar, FinderConfig::ORTHOGONAL);
    let path = finder.find_path((0, 0), (4, 4), &grid);
    assert_eq!(path.len(), 9);
    assert_eq!(path.cost, 8.0);
    assert_valid(&path, (0, 0), (4, 4), &grid, DiagonalMovement::Never, "A*");
}

#[test]
fn no_corner_cutting_around_center() {
    init();
    let matrix = [[0, 0, 0], [0, 1, 0], [0, 0, 0]];
    let grid = Grid::from_matrix(3, 3, &matrix).unwrap();
    for algorithm in Algorithm::ALL {
        let finder = Finder::new(algorithm, FinderConfig::NO_CORNER_CUTTING);
        let path = finder.find_path((0, 0), (2, 2), &grid);
        assert_eq!(path.len(), 5, "{}: {}", algorithm, path);
        assert_valid(
            &path,
            (0, 0),
            (2, 2),
            &grid,
            DiagonalMovement::OnlyWhenNoObstacles,
            &algorithm.to_string(),
        );
    }
}

#[test]
fn sealed_wall() {
    init();
    // a narrow pocket on the left keeps the exhaustive IDA* search short
    let mut grid = Grid::new(7, 5).unwrap();
    for y in 0..5 {
        grid.set_walkable_at(1, y, false).unwrap();
    }
    for algorithm in Algorithm::ALL {
        for policy in POLICIES {
            let report = Finder::new(algorithm, config(policy)).search((0, 2), (6, 2), &grid, &mut ());
            assert!(report.path.is_empty(), "{}", algorithm);
            assert_eq!(report.outcome, Outcome::Unreachable, "{}", algorithm);
        }
    }
}

#[test]
fn optimal_finders_match_brute_force() {
    init();
    let mut rng = WyRand::new_seed(1234);
    for round in 0..30 {
        let grid = random_grid(&mut rng, 12, 10, 30);
        let policy = POLICIES[round % POLICIES.len()];
        let start = random_walkable(&mut rng, &grid);
        let goal = random_walkable(&mut rng, &grid);

        let distance = brute_force_distances(&grid, start, policy, false)[goal.1 * 12 + goal.0];
        let hops = brute_force_distances(&grid, start, policy, true)[goal.1 * 12 + goal.0];

        for algorithm in Algorithm::ALL.iter().filter(|a| a.is_optimal()) {
            let path = Finder::new(*algorithm, config(policy)).find_path(start, goal, &grid);
            if distance.is_infinite() {
                assert!(path.is_empty(), "{} found {} on a disconnected grid", algorithm, path);
                continue;
            }
            assert_valid(&path, start, goal, &grid, policy, &algorithm.to_string());

            match algorithm {
                Algorithm::BreadthFirst | Algorithm::BiBreadthFirst => {
                    assert_eq!((path.len() - 1) as f64, hops, "{} {:?}", algorithm, policy)
                }
                _ => assert!(
                    (path.cost - distance).abs() < 1e-9,
                    "{} {:?}: {} instead of {}",
                    algorithm,
                    policy,
                    path.cost,
                    distance
                ),
            }
        }
    }
}

#[test]
fn fast_finders_return_valid_paths() {
    init();
    let mut rng = WyRand::new_seed(99);
    let fast = [
        Algorithm::BestFirst,
        Algorithm::BiAStar,
        Algorithm::BiBestFirst,
        Algorithm::JumpPoint,
        Algorithm::ThetaStar,
    ];
    for round in 0..40 {
        let grid = random_grid(&mut rng, 16, 16, 25);
        let policy = POLICIES[round % POLICIES.len()];
        let start = random_walkable(&mut rng, &grid);
        let goal = random_walkable(&mut rng, &grid);
        let reachable =
            brute_force_distances(&grid, start, policy, true)[goal.1 * 16 + goal.0].is_finite();

        for algorithm in fast {
            let path = Finder::new(algorithm, config(policy)).find_path(start, goal, &grid);
            if reachable {
                assert_valid(&path, start, goal, &grid, policy, &algorithm.to_string());
            } else {
                assert!(path.is_empty(), "{}", algorithm);
            }
        }
    }
}

#[test]
fn jump_point_is_optimal_with_diagonals() {
    init();
    let mut rng = WyRand::new_seed(5);
    for _ in 0..30 {
        let grid = random_grid(&mut rng, 14, 14, 20);
        let start = random_walkable(&mut rng, &grid);
        let goal = random_walkable(&mut rng, &grid);
        let distance = brute_force_distances(&grid, start, DiagonalMovement::Always, false)
            [goal.1 * 14 + goal.0];

        let path = Finder::new(Algorithm::JumpPoint, FinderConfig::DIAGONAL).find_path(start, goal, &grid);
        if distance.is_finite() {
            assert!((path.cost - distance).abs() < 1e-9, "{} instead of {}", path.cost, distance);
        } else {
            assert!(path.is_empty());
        }
    }
}

#[test]
fn ida_star_on_small_grids() {
    init();
    let mut rng = WyRand::new_seed(77);
    for round in 0..20 {
        let grid = random_grid(&mut rng, 6, 6, 25);
        let policy = POLICIES[round % POLICIES.len()];
        let start = random_walkable(&mut rng, &grid);
        let goal = random_walkable(&mut rng, &grid);
        let distance = brute_force_distances(&grid, start, policy, false)[goal.1 * 6 + goal.0];
        if distance.is_infinite() {
            // proving unreachability means enumerating every route
            continue;
        }

        let report = Finder::new(Algorithm::IdaStar, config(policy)).search(start, goal, &grid, &mut ());
        assert_eq!(report.outcome, Outcome::Found);
        assert_valid(&report.path, start, goal, &grid, policy, "IDA*");
        assert!((report.path.cost - distance).abs() < 1e-9);
    }
}

#[test]
fn ida_star_time_limit() {
    init();
    let grid = Grid::new(30, 30).unwrap();
    let finder = Finder::new(
        Algorithm::IdaStar,
        FinderConfig {
            time_limit: Some(Duration::ZERO),
            ..FinderConfig::default()
        },
    );
    let report = finder.search((0, 0), (29, 29), &grid, &mut ());
    assert_eq!(report.outcome, Outcome::TimedOut);
    assert!(report.path.is_empty());

    // without limit the same search succeeds
    let finder = Finder::new(Algorithm::IdaStar, FinderConfig::default());
    let report = finder.search((0, 0), (5, 5), &grid, &mut ());
    assert_eq!(report.outcome, Outcome::Found);
    assert_eq!(report.path.len(), 11);
}

#[test]
fn searches_are_repeatable() {
    init();
    let mut rng = WyRand::new_seed(2024);
    let grid = random_grid(&mut rng, 20, 20, 20);
    let start = random_walkable(&mut rng, &grid);
    let goal = random_walkable(&mut rng, &grid);
    for algorithm in Algorithm::ALL.iter().filter(|a| **a != Algorithm::IdaStar) {
        let finder = Finder::new(*algorithm, FinderConfig::DIAGONAL);
        let first = finder.find_path(start, goal, &grid);
        let second = finder.find_path(start, goal, &grid);
        assert_eq!(first, second, "{}", algorithm);
    }
}

#[test]
fn ida_star_is_repeatable() {
    init();
    let matrix = [
        [0, 0, 0, 0, 0, 0],
        [0, 1, 1, 0, 1, 0],
        [0, 0, 1, 0, 0, 0],
        [1, 0, 0, 0, 1, 0],
        [0, 0, 1, 1, 0, 0],
        [0, 0, 0, 0, 0, 0],
    ];
    let grid = Grid::from_matrix(6, 6, &matrix).unwrap();
    for policy in POLICIES {
        let finder = Finder::new(Algorithm::IdaStar, config(policy));
        let mut first_events = Recorder::new();
        let mut second_events = Recorder::new();
        let first = finder.search((0, 0), (5, 5), &grid, &mut first_events);
        let second = finder.search((0, 0), (5, 5), &grid, &mut second_events);

        assert_eq!(first.outcome, Outcome::Found, "{:?}", policy);
        assert_eq!(first.path, second.path, "{:?}", policy);
        assert_eq!(first.nodes_expanded, second.nodes_expanded, "{:?}", policy);
        assert_eq!(first_events.events, second_events.events, "{:?}", policy);
        assert_valid(&first.path, (0, 0), (5, 5), &grid, policy, "IDA*");
    }
}

#[test]
fn batch_matches_single_searches() {
    init();
    let mut rng = WyRand::new_seed(3);
    let grid = random_grid(&mut rng, 24, 24, 25);
    let queries: Vec<(Point, Point)> = (0..32)
        .map(|_| (random_walkable(&mut rng, &grid), random_walkable(&mut rng, &grid)))
        .collect();

    let finder = Finder::new(Algorithm::AStar, FinderConfig::DIAGONAL);
    let batch = finder.find_paths(&queries, &grid);
    assert_eq!(batch.len(), queries.len());
    for (path, &(start, goal)) in batch.iter().zip(&queries) {
        assert_eq!(*path, finder.find_path(start, goal, &grid));
    }
}

#[test]
fn observer_sees_every_expansion() {
    init();
    let mut rng = WyRand::new_seed(8);
    let grid = random_grid(&mut rng, 10, 10, 20);
    let start = random_walkable(&mut rng, &grid);
    let goal = random_walkable(&mut rng, &grid);
    for algorithm in Algorithm::ALL.iter().filter(|a| **a != Algorithm::IdaStar) {
        let mut recorder = Recorder::new();
        let report: SearchReport =
            Finder::new(*algorithm, FinderConfig::DIAGONAL).search(start, goal, &grid, &mut recorder);

        if start != goal && report.outcome != Outcome::Unreachable {
            assert_eq!(recorder.closed_points().count(), report.nodes_expanded, "{}", algorithm);
        }
        // nothing is closed without being opened first
        let mut opened = std::collections::HashSet::new();
        for event in &recorder.events {
            match *event {
                grid_pathfinder::SearchEvent::Opened(p) => {
                    opened.insert(p);
                }
                grid_pathfinder::SearchEvent::Closed(p) => {
                    assert!(opened.contains(&p), "{}: {:?} closed before opened", algorithm, p)
                }
                _ => {}
            }
        }
    }
}
