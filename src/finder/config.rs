use crate::{DiagonalMovement, Heuristic};
use std::time::Duration;

/// Options for configuring a [`Finder`](crate::Finder)
///
/// Default options:
/// ```
/// # use grid_pathfinder::{FinderConfig, DiagonalMovement};
/// assert_eq!(
/// 	FinderConfig {
/// 		diagonal_movement: DiagonalMovement::Never,
/// 		heuristic: None,
/// 		weight: 1.0,
/// 		unit_size: 1,
/// 		track_recursion: false,
/// 		time_limit: None,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FinderConfig {
	/// When and if diagonal steps are allowed (defaults to [`DiagonalMovement::Never`])
	pub diagonal_movement: DiagonalMovement,
	/// The estimate of the remaining distance.
	///
	/// `None` (default): [`Heuristic::Manhattan`] without diagonal movement, [`Heuristic::Octile`]
	/// otherwise. See [`Heuristic::default_for`].
	pub heuristic: Option<Heuristic>,
	/// Multiplier for the heuristic (defaults to `1.0`).
	///
	/// Values above `1.0` usually make the search faster, but the Paths are no longer guaranteed
	/// to be the shortest ones.
	pub weight: f64,
	/// The footprint of the moving unit in Cells (defaults to `1`).
	///
	/// For values above `1`, the clearance of the Grid is calculated before every search, and
	/// only Cells with a clearance of at least `unit_size` are considered walkable.
	pub unit_size: usize,
	/// `true`: IDA* reports every Cell on its current recursion stack through
	/// [`SearchObserver::tested`](crate::SearchObserver::tested).
	///
	/// `false` (default): no such reports. Ignored by all other algorithms.
	pub track_recursion: bool,
	/// The time after which IDA* gives up (defaults to `None` = no limit).
	///
	/// Ignored by all other algorithms.
	pub time_limit: Option<Duration>,
}

impl FinderConfig {
	/// only orthogonal steps, Manhattan distance
	///
	/// Values:
	/// ```
	/// # use grid_pathfinder::FinderConfig;
	/// assert_eq!(FinderConfig::ORTHOGONAL, FinderConfig::default());
	/// ```
	pub const ORTHOGONAL: FinderConfig = FinderConfig {
		diagonal_movement: DiagonalMovement::Never,
		heuristic: None,
		weight: 1.0,
		unit_size: 1,
		track_recursion: false,
		time_limit: None,
	};
	/// all 8 directions without restrictions, octile distance
	///
	/// Values:
	/// ```
	/// # use grid_pathfinder::{FinderConfig, DiagonalMovement, Heuristic};
	/// assert_eq!(
	/// 	FinderConfig {
	/// 		diagonal_movement: DiagonalMovement::Always,
	/// 		heuristic: Some(Heuristic::Octile),
	/// 		..Default::default()
	/// 	},
	/// 	FinderConfig::DIAGONAL
	/// );
	/// ```
	pub const DIAGONAL: FinderConfig = FinderConfig {
		diagonal_movement: DiagonalMovement::Always,
		heuristic: Some(Heuristic::Octile),
		..FinderConfig::ORTHOGONAL
	};
	/// all 8 directions, but diagonal steps may not cut corners
	///
	/// Values:
	/// ```
	/// # use grid_pathfinder::{FinderConfig, DiagonalMovement};
	/// assert_eq!(
	/// 	FinderConfig {
	/// 		diagonal_movement: DiagonalMovement::OnlyWhenNoObstacles,
	/// 		..Default::default()
	/// 	},
	/// 	FinderConfig::NO_CORNER_CUTTING
	/// );
	/// ```
	pub const NO_CORNER_CUTTING: FinderConfig = FinderConfig {
		diagonal_movement: DiagonalMovement::OnlyWhenNoObstacles,
		..FinderConfig::ORTHOGONAL
	};

	/// Creates a config from the legacy `allowDiagonal` / `dontCrossCorners` flags.
	///
	/// See [`DiagonalMovement::from_flags`].
	pub fn from_legacy_flags(allow_diagonal: bool, dont_cross_corners: bool) -> FinderConfig {
		FinderConfig {
			diagonal_movement: DiagonalMovement::from_flags(allow_diagonal, dont_cross_corners),
			..FinderConfig::ORTHOGONAL
		}
	}

	/// the configured heuristic, or the default one for the diagonal policy
	pub fn heuristic(&self) -> Heuristic {
		self.heuristic
			.unwrap_or_else(|| Heuristic::default_for(self.diagonal_movement))
	}
}

impl Default for FinderConfig {
	fn default() -> FinderConfig {
		FinderConfig::ORTHOGONAL
	}
}

#[test]
fn test_heuristic_defaults() {
	assert_eq!(FinderConfig::ORTHOGONAL.heuristic(), Heuristic::Manhattan);
	assert_eq!(FinderConfig::NO_CORNER_CUTTING.heuristic(), Heuristic::Octile);
	let config = FinderConfig {
		heuristic: Some(Heuristic::Euclidean),
		..FinderConfig::DIAGONAL
	};
	assert_eq!(config.heuristic(), Heuristic::Euclidean);
	assert_eq!(
		FinderConfig::from_legacy_flags(true, false).diagonal_movement,
		DiagonalMovement::IfAtMostOneObstacle
	);
}
