//! Diagonal movement policies and the offsets used to walk the Grid

use crate::Point;

/// Defines whether and when a Path may take a diagonal step.
///
/// Orthogonal steps (up, right, down, left) are always allowed. A diagonal step from `(x, y)`
/// to `(x + dx, y + dy)` is "flanked" by the two orthogonal Cells `(x + dx, y)` and
/// `(x, y + dy)`. The policy decides how many of those flanking Cells may be blocked.
///
/// ```no_code
/// A: Agent, #: blocked, 1: the diagonal step in question
///
/// . # 1
/// . A .
/// . . .
///
/// Never:               1 is not reachable
/// Always:              1 is reachable
/// IfAtMostOneObstacle: 1 is reachable, because the right flank is walkable
/// OnlyWhenNoObstacles: 1 is not reachable, because the upper flank is blocked
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagonalMovement {
	/// Only the 4 orthogonal directions
	Never,
	/// All 8 directions, regardless of blocked corners
	Always,
	/// A diagonal is allowed if at least one of its flanking Cells is walkable
	IfAtMostOneObstacle,
	/// A diagonal is allowed only if both flanking Cells are walkable (no corner-cutting)
	OnlyWhenNoObstacles,
}

impl DiagonalMovement {
	/// Maps the legacy `allowDiagonal` / `dontCrossCorners` flags onto a policy.
	///
	/// ```
	/// # use grid_pathfinder::DiagonalMovement;
	/// assert_eq!(DiagonalMovement::from_flags(false, true), DiagonalMovement::Never);
	/// assert_eq!(DiagonalMovement::from_flags(true, true), DiagonalMovement::OnlyWhenNoObstacles);
	/// assert_eq!(DiagonalMovement::from_flags(true, false), DiagonalMovement::IfAtMostOneObstacle);
	/// ```
	pub fn from_flags(allow_diagonal: bool, dont_cross_corners: bool) -> DiagonalMovement {
		match (allow_diagonal, dont_cross_corners) {
			(false, _) => DiagonalMovement::Never,
			(true, true) => DiagonalMovement::OnlyWhenNoObstacles,
			(true, false) => DiagonalMovement::IfAtMostOneObstacle,
		}
	}

	/// `true` for every policy except [`Never`](DiagonalMovement::Never)
	pub fn allows_diagonals(self) -> bool {
		self != DiagonalMovement::Never
	}

	/// Decides a diagonal step given the walkability of its two flanking Cells.
	pub fn permits(self, first_flank: bool, second_flank: bool) -> bool {
		match self {
			DiagonalMovement::Never => false,
			DiagonalMovement::Always => true,
			DiagonalMovement::IfAtMostOneObstacle => first_flank || second_flank,
			DiagonalMovement::OnlyWhenNoObstacles => first_flank && second_flank,
		}
	}
}

impl Default for DiagonalMovement {
	fn default() -> DiagonalMovement {
		DiagonalMovement::Never
	}
}

/// up, right, down, left
pub(crate) const ORTHOGONAL: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// up-left, up-right, down-right, down-left.
///
/// `DIAGONAL[i]` is flanked by `ORTHOGONAL[i]` and `ORTHOGONAL[(i + 3) % 4]`.
pub(crate) const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (1, -1), (1, 1), (-1, 1)];

/// Offsets a Point, returning the signed result.
pub(crate) fn offset(point: Point, (dx, dy): (isize, isize)) -> (isize, isize) {
	(point.0 as isize + dx, point.1 as isize + dy)
}

/// The cost of a single step between two adjacent Cells: `1` or `√2`
pub(crate) fn step_cost(a: Point, b: Point) -> f64 {
	if a.0 == b.0 || a.1 == b.1 {
		1.0
	} else {
		std::f64::consts::SQRT_2
	}
}

/// `true` if `a` and `b` are adjacent (including diagonally)
pub(crate) fn is_adjacent(a: Point, b: Point) -> bool {
	let dx = a.0.abs_diff(b.0);
	let dy = a.1.abs_diff(b.1);
	dx <= 1 && dy <= 1 && (dx, dy) != (0, 0)
}

#[test]
fn test_from_flags() {
	assert_eq!(DiagonalMovement::from_flags(false, false), DiagonalMovement::Never);
	assert_eq!(
		DiagonalMovement::from_flags(true, false),
		DiagonalMovement::IfAtMostOneObstacle
	);
}

#[test]
fn test_permits() {
	use DiagonalMovement::*;
	assert!(!Never.permits(true, true));
	assert!(Always.permits(false, false));
	assert!(IfAtMostOneObstacle.permits(false, true));
	assert!(!IfAtMostOneObstacle.permits(false, false));
	assert!(OnlyWhenNoObstacles.permits(true, true));
	assert!(!OnlyWhenNoObstacles.permits(true, false));
}

#[test]
fn test_flanks_line_up() {
	for i in 0..4 {
		let (dx, dy) = DIAGONAL[i];
		let a = ORTHOGONAL[i];
		let b = ORTHOGONAL[(i + 3) % 4];
		assert_eq!((a.0 + b.0, a.1 + b.1), (dx, dy));
	}
}

#[test]
fn test_step_cost() {
	assert_eq!(step_cost((0, 0), (0, 1)), 1.0);
	assert_eq!(step_cost((0, 0), (1, 1)), std::f64::consts::SQRT_2);
	assert!(is_adjacent((1, 1), (0, 0)));
	assert!(!is_adjacent((1, 1), (1, 1)));
	assert!(!is_adjacent((1, 1), (3, 1)));
}
