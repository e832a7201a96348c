//! The search algorithms and their shared entry point

mod config;
pub use self::config::FinderConfig;

mod observer;
pub use self::observer::{Recorder, SearchEvent, SearchObserver};

mod context;
mod state;

mod a_star;
mod bidirectional;
mod breadth_first;
mod ida_star;
mod jump_point;

use self::bidirectional::Meeting;
use self::context::Context;
use crate::path::expand_path;
use crate::{Grid, Path, Point};
use std::time::{Duration, Instant};

/// The factor that turns the heuristic of A* into the greedy one of Best-First
const BEST_FIRST_SCALE: f64 = 1_000_000.0;

/// The available search algorithms
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
	/// A*: the shortest Path, guided by the heuristic
	AStar,
	/// Greedy best-first: follows the heuristic almost exclusively. Fast, but not optimal.
	BestFirst,
	/// Dijkstra: A* without heuristic. Always optimal, explores more Cells.
	Dijkstra,
	/// Breadth-First Search: the Path with the fewest steps, diagonal or not
	BreadthFirst,
	/// A* from both ends, stopping at the first meeting. Not optimal.
	BiAStar,
	/// Best-First from both ends, stopping at the first meeting. Not optimal.
	BiBestFirst,
	/// Dijkstra from both ends. Optimal.
	BiDijkstra,
	/// Breadth-First from both ends. Optimal in number of steps.
	BiBreadthFirst,
	/// Jump Point Search: A* that skips over symmetric straight lines
	JumpPoint,
	/// Theta*: A* with any-angle shortcuts along lines of sight
	ThetaStar,
	/// Iterative deepening A*: memory efficient, but slow on bigger Grids
	IdaStar,
}

impl Algorithm {
	/// all algorithms, in declaration order
	pub const ALL: [Algorithm; 11] = [
		Algorithm::AStar,
		Algorithm::BestFirst,
		Algorithm::Dijkstra,
		Algorithm::BreadthFirst,
		Algorithm::BiAStar,
		Algorithm::BiBestFirst,
		Algorithm::BiDijkstra,
		Algorithm::BiBreadthFirst,
		Algorithm::JumpPoint,
		Algorithm::ThetaStar,
		Algorithm::IdaStar,
	];

	/// `true` if the algorithm always returns a shortest Path (by length, or by number of steps
	/// for the breadth-first variants) when used with an admissible heuristic and a weight of `1`
	pub fn is_optimal(self) -> bool {
		matches!(
			self,
			Algorithm::AStar
				| Algorithm::Dijkstra
				| Algorithm::BreadthFirst
				| Algorithm::BiDijkstra
				| Algorithm::BiBreadthFirst
		)
	}

	/// the factor applied to the (weighted) heuristic
	fn heuristic_scale(self) -> f64 {
		match self {
			Algorithm::Dijkstra
			| Algorithm::BiDijkstra
			| Algorithm::BreadthFirst
			| Algorithm::BiBreadthFirst => 0.0,
			Algorithm::BestFirst | Algorithm::BiBestFirst => BEST_FIRST_SCALE,
			_ => 1.0,
		}
	}
}

impl std::fmt::Display for Algorithm {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			Algorithm::AStar => "A*",
			Algorithm::BestFirst => "Best-First",
			Algorithm::Dijkstra => "Dijkstra",
			Algorithm::BreadthFirst => "Breadth-First",
			Algorithm::BiAStar => "Bi-A*",
			Algorithm::BiBestFirst => "Bi-Best-First",
			Algorithm::BiDijkstra => "Bi-Dijkstra",
			Algorithm::BiBreadthFirst => "Bi-Breadth-First",
			Algorithm::JumpPoint => "Jump Point",
			Algorithm::ThetaStar => "Theta*",
			Algorithm::IdaStar => "IDA*",
		};
		f.write_str(name)
	}
}

/// How a search ended
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
	/// a Path was found
	Found,
	/// there is no Path between Start and Goal
	Unreachable,
	/// the time limit ran out before the search could decide (IDA* only)
	TimedOut,
}

/// The full result of [`Finder::search`]
#[derive(Clone, Debug, PartialEq)]
pub struct SearchReport {
	/// the Path, empty unless `outcome` is [`Outcome::Found`]
	pub path: Path,
	/// the route as the search produced it: the jump points of Jump Point Search, the any-angle
	/// corners of Theta*, and the same Points as `path` for every other algorithm
	pub waypoints: Vec<Point>,
	/// why the search ended
	pub outcome: Outcome,
	/// the number of Cells taken from the open list (or visited, for IDA*)
	pub nodes_expanded: usize,
	/// wall-clock time of the search
	pub elapsed: Duration,
}

/// A search algorithm together with its configuration.
///
/// A Finder holds no state between searches: every call allocates its own scratch state, so the
/// same Finder and the same Grid can be used for any number of searches, also from several
/// threads at once.
///
/// ## Examples
/// ```
/// use grid_pathfinder::{Algorithm, Finder, FinderConfig, Grid};
///
/// // 1 = blocked
/// let matrix = [
///     [0, 0, 0, 0, 0],
///     [1, 1, 1, 1, 0],
///     [0, 0, 0, 0, 0],
/// ];
/// let grid = Grid::from_matrix(5, 3, &matrix).unwrap();
///
/// let finder = Finder::new(Algorithm::AStar, FinderConfig::default());
/// let path = finder.find_path((0, 0), (0, 2), &grid);
///
/// assert_eq!(path.len(), 11);
/// assert_eq!(path.cost, 10.0);
/// assert_eq!(path[4], (4, 0));
///
/// // blocked Goal
/// assert!(finder.find_path((0, 0), (0, 1), &grid).is_empty());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Finder {
	algorithm: Algorithm,
	config: FinderConfig,
}

impl Finder {
	/// Creates a Finder for the given algorithm.
	pub fn new(algorithm: Algorithm, config: FinderConfig) -> Finder {
		Finder { algorithm, config }
	}

	/// the algorithm used by this Finder
	pub fn algorithm(&self) -> Algorithm {
		self.algorithm
	}

	/// the config used by this Finder
	pub fn config(&self) -> &FinderConfig {
		&self.config
	}

	/// Searches a Path from `start` to `goal`.
	///
	/// Returns a step-by-step Path including both ends, or an empty Path if none exists. A Start
	/// or Goal that is outside of the Grid or not walkable (or too narrow for the configured
	/// `unit_size`) always results in an empty Path.
	pub fn find_path(&self, start: Point, goal: Point, grid: &Grid) -> Path {
		self.search(start, goal, grid, &mut ()).path
	}

	/// Same as [`find_path`](Finder::find_path), but reports every step of the search to
	/// `observer` and returns the details of the search, including the unexpanded
	/// [`waypoints`](SearchReport::waypoints).
	///
	/// ## Examples
	/// ```
	/// use grid_pathfinder::{Algorithm, Finder, FinderConfig, Grid, Outcome, Recorder};
	/// use std::time::Duration;
	///
	/// let grid = Grid::new(4, 4).unwrap();
	/// let finder = Finder::new(Algorithm::Dijkstra, FinderConfig::DIAGONAL);
	///
	/// let mut recorder = Recorder::new();
	/// let report = finder.search((0, 0), (3, 3), &grid, &mut recorder);
	///
	/// assert_eq!(report.outcome, Outcome::Found);
	/// assert_eq!(report.path.len(), 4);
	/// assert_eq!(recorder.closed_points().count(), report.nodes_expanded);
	/// assert_eq!(report.waypoints, report.path.path);
	///
	/// let config = FinderConfig {
	///     time_limit: Some(Duration::ZERO),
	///     ..FinderConfig::DIAGONAL
	/// };
	/// let report = Finder::new(Algorithm::IdaStar, config).search((0, 0), (3, 3), &grid, &mut ());
	/// assert_eq!(report.outcome, Outcome::TimedOut);
	/// assert!(report.path.is_empty());
	/// ```
	pub fn search<O: SearchObserver>(
		&self,
		start: Point,
		goal: Point,
		grid: &Grid,
		observer: &mut O,
	) -> SearchReport {
		let timer = Instant::now();
		let mut ctx = Context::new(
			grid,
			&self.config,
			self.algorithm.heuristic_scale(),
			observer,
		);

		let route = if !ctx.passable(start) || !ctx.passable(goal) {
			Err(Outcome::Unreachable)
		} else if start == goal {
			Ok(vec![start])
		} else {
			self.run(&mut ctx, start, goal)
		};

		let (path, waypoints, outcome) = match route {
			Ok(waypoints) => {
				let steps = match self.algorithm {
					Algorithm::JumpPoint | Algorithm::ThetaStar => expand_path(&waypoints),
					_ => waypoints.clone(),
				};
				(Path::new(steps), waypoints, Outcome::Found)
			}
			Err(outcome) => (Path::empty(), vec![], outcome),
		};
		let report = SearchReport {
			path,
			waypoints,
			outcome,
			nodes_expanded: ctx.expanded,
			elapsed: timer.elapsed(),
		};
		log_debug!(
			"{} {:?} -> {:?}: {:?}, {} steps, {} expanded in {:?}",
			self.algorithm,
			start,
			goal,
			report.outcome,
			report.path.len(),
			report.nodes_expanded,
			report.elapsed
		);
		report
	}

	fn run<O: SearchObserver>(
		&self,
		ctx: &mut Context<O>,
		start: Point,
		goal: Point,
	) -> Result<Vec<Point>, Outcome> {
		let route = match self.algorithm {
			Algorithm::AStar | Algorithm::BestFirst | Algorithm::Dijkstra => {
				a_star::a_star_search(ctx, start, goal, false)
			}
			Algorithm::ThetaStar => a_star::a_star_search(ctx, start, goal, true),
			Algorithm::BreadthFirst => breadth_first::breadth_first_search(ctx, start, goal),
			Algorithm::BiAStar | Algorithm::BiBestFirst => {
				bidirectional::bidirectional_search(ctx, start, goal, false, Meeting::FirstContact)
			}
			Algorithm::BiDijkstra => {
				bidirectional::bidirectional_search(ctx, start, goal, false, Meeting::BestContact)
			}
			Algorithm::BiBreadthFirst => {
				bidirectional::bidirectional_search(ctx, start, goal, true, Meeting::BestContact)
			}
			Algorithm::JumpPoint => jump_point::jump_point_search(ctx, start, goal),
			Algorithm::IdaStar => match ida_star::ida_star_search(ctx, start, goal) {
				Ok(route) => route,
				Err(ida_star::TimedOut) => return Err(Outcome::TimedOut),
			},
		};
		route.ok_or(Outcome::Unreachable)
	}

	/// Searches Paths for many `(start, goal)` pairs on the same Grid.
	///
	/// The result has one Path per query, in the same order. With the `parallel` feature the
	/// queries are distributed over the rayon thread pool.
	///
	/// ## Examples
	/// ```
	/// use grid_pathfinder::{Algorithm, Finder, FinderConfig, Grid};
	///
	/// let grid = Grid::new(10, 10).unwrap();
	/// let finder = Finder::new(Algorithm::JumpPoint, FinderConfig::DIAGONAL);
	///
	/// let paths = finder.find_paths(&[((0, 0), (9, 9)), ((0, 9), (9, 0)), ((5, 5), (5, 5))], &grid);
	///
	/// assert_eq!(paths.len(), 3);
	/// assert_eq!(paths[0].len(), 10);
	/// assert_eq!(paths[1].len(), 10);
	/// assert_eq!(paths[2].path, vec![(5, 5)]);
	/// ```
	pub fn find_paths(&self, queries: &[(Point, Point)], grid: &Grid) -> Vec<Path> {
		#[cfg(feature = "parallel")]
		{
			use rayon::prelude::*;
			queries
				.par_iter()
				.map(|&(start, goal)| self.find_path(start, goal, grid))
				.collect()
		}
		#[cfg(not(feature = "parallel"))]
		{
			queries
				.iter()
				.map(|&(start, goal)| self.find_path(start, goal, grid))
				.collect()
		}
	}
}
