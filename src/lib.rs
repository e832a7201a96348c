#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find Paths on walkable/blocked Grids.
//!
//! ## Introduction
//! A Grid is a rectangle of Cells that are either walkable or blocked. A Path is a sequence of
//! neighboring walkable Cells, where "neighboring" always includes the four orthogonal Cells and,
//! depending on the [`DiagonalMovement`] policy, some or all of the four diagonal ones.
//!
//! This crate offers a whole family of search algorithms on such Grids, all behind the same
//! [`Finder`] interface:
//! - the optimal ones: A*, Dijkstra, Breadth-First and their bidirectional variants
//! - the fast ones: Best-First, bidirectional A*, Jump Point Search
//! - Theta*, which follows lines of sight instead of the Grid, and the memory efficient IDA*
//!
//! The Grid only stores whether a Cell can be walked on. Every search keeps its bookkeeping in its
//! own scratch state, so a Grid can be searched any number of times, also from several threads
//! at once, without resetting anything in between.
//!
//! ## Examples
//! ```
//! use grid_pathfinder::{Algorithm, DiagonalMovement, Finder, FinderConfig, Grid};
//!
//! // 1 = blocked
//! let matrix = [
//!     [0, 0, 0, 1, 0],
//!     [1, 1, 0, 1, 0],
//!     [0, 0, 0, 0, 0],
//!     [0, 1, 1, 1, 0],
//!     [0, 0, 0, 1, 0],
//! ];
//! let grid = Grid::from_matrix(5, 5, &matrix).unwrap();
//!
//! let finder = Finder::new(Algorithm::AStar, FinderConfig::default());
//! let path = finder.find_path((0, 0), (4, 0), &grid);
//!
//! assert_eq!(path.len(), 9);
//! assert_eq!(path.start(), Some((0, 0)));
//! assert_eq!(path.goal(), Some((4, 0)));
//!
//! // cutting corners is allowed as long as one side of the corner is free
//! let config = FinderConfig {
//!     diagonal_movement: DiagonalMovement::IfAtMostOneObstacle,
//!     ..FinderConfig::DIAGONAL
//! };
//! let finder = Finder::new(Algorithm::AStar, config);
//! let path = finder.find_path((0, 0), (4, 0), &grid);
//!
//! assert_eq!(path.len(), 6);
//! ```
//!
//! ### Configuration
//! The second parameter of [`Finder::new`] is a [`FinderConfig`] with the diagonal policy, the
//! heuristic and a few algorithm specific options. It provides presets for the common cases, like
//! [`FinderConfig::DIAGONAL`] or [`FinderConfig::NO_CORNER_CUTTING`]:
//! ```
//! use grid_pathfinder::{Algorithm, Finder, FinderConfig, Grid, Heuristic};
//!
//! let grid = Grid::new(8, 8).unwrap();
//!
//! let finder = Finder::new(
//!     Algorithm::AStar,
//!     FinderConfig {
//!         heuristic: Some(Heuristic::Chebyshev),
//!         ..FinderConfig::NO_CORNER_CUTTING
//!     },
//! );
//!
//! let path = finder.find_path((0, 0), (7, 7), &grid);
//! assert_eq!(path.len(), 8);
//! ```
//!
//! ### Watching a search
//! [`Finder::search`] takes a [`SearchObserver`] that is told about every Cell that is opened,
//! closed or re-parented, which is all that is needed to animate a search. The [`Recorder`]
//! simply stores all of those events:
//! ```
//! use grid_pathfinder::{Algorithm, Finder, FinderConfig, Grid, Recorder, SearchEvent};
//!
//! let grid = Grid::new(3, 1).unwrap();
//! let finder = Finder::new(Algorithm::BreadthFirst, FinderConfig::default());
//!
//! let mut recorder = Recorder::new();
//! finder.search((0, 0), (2, 0), &grid, &mut recorder);
//!
//! assert_eq!(recorder.events[0], SearchEvent::Opened((0, 0)));
//! assert_eq!(recorder.events[1], SearchEvent::Closed((0, 0)));
//! ```
//!
//! ## Cargo Features
//! #### parallel
//! Enabled by default.
//!
//! The parallel feature makes [`Finder::find_paths`] distribute its queries over a rayon
//! thread pool.
//!
//! #### log
//! Disabled by default.
//!
//! The log feature is used to report a summary of every search (at debug level) and internal
//! timings (at trace level) through the [log crate](https://docs.rs/log).

#[cfg(feature = "log")]
macro_rules! log_debug {
	($($arg:tt)*) => { log::debug!($($arg)*) };
}
#[cfg(not(feature = "log"))]
macro_rules! log_debug {
	($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_trace {
	($($arg:tt)*) => { log::trace!($($arg)*) };
}
#[cfg(not(feature = "log"))]
macro_rules! log_trace {
	($($arg:tt)*) => {};
}

/// A shorthand for Points on the grid
pub type Point = (usize, usize);

/// A HashMap keyed by Points, using the hasher of hashbrown
pub type PointMap<V> = hashbrown::HashMap<Point, V>;

pub mod grid;
pub use self::grid::{Cell, Grid, GridError, Obstacle};

pub mod neighbors;
pub use self::neighbors::DiagonalMovement;

pub mod heuristic;
pub use self::heuristic::Heuristic;

pub mod heap;

pub mod path;
pub use self::path::Path;

mod finder;
pub use self::finder::{
	Algorithm, Finder, FinderConfig, Outcome, Recorder, SearchEvent, SearchObserver, SearchReport,
};

pub mod scenario;

/// The most commonly used items, for glob imports
pub mod prelude {
	pub use crate::{
		Algorithm, DiagonalMovement, Finder, FinderConfig, Grid, Heuristic, Outcome, Path, Point,
		SearchObserver,
	};
}
