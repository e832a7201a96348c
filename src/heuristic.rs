//! Estimates of the remaining distance to the Goal
//!
//! All functions take the absolute coordinate differences `(dx, dy)` between a Cell and the Goal.

use crate::neighbors::DiagonalMovement;
use crate::Point;

/// The signature of a heuristic function: `(dx, dy) -> estimate`
pub type HeuristicFn = fn(f64, f64) -> f64;

/// `dx + dy`. Only admissible when diagonal steps are not allowed.
pub fn manhattan(dx: f64, dy: f64) -> f64 {
	dx + dy
}

/// `sqrt(dx² + dy²)`
pub fn euclidean(dx: f64, dy: f64) -> f64 {
	(dx * dx + dy * dy).sqrt()
}

/// `max(dx, dy)`
pub fn chebyshev(dx: f64, dy: f64) -> f64 {
	dx.max(dy)
}

/// `max(dx, dy) + (√2 - 1) * min(dx, dy)`: the exact distance on an open 8-directional Grid
pub fn octile(dx: f64, dy: f64) -> f64 {
	let f = std::f64::consts::SQRT_2 - 1.0;
	if dx < dy {
		f * dx + dy
	} else {
		f * dy + dx
	}
}

/// A selectable heuristic.
///
/// The named variants correspond to the free functions of this module, `Custom` takes any
/// function with the same signature.
#[derive(Clone, Copy, Debug)]
pub enum Heuristic {
	/// see [`manhattan`]
	Manhattan,
	/// see [`euclidean`]
	Euclidean,
	/// see [`chebyshev`]
	Chebyshev,
	/// see [`octile`]
	Octile,
	/// a user supplied function
	Custom(HeuristicFn),
}

impl Heuristic {
	/// The heuristic used when none is configured: [`manhattan`] for
	/// [`DiagonalMovement::Never`], [`octile`] for everything else.
	pub fn default_for(diagonal_movement: DiagonalMovement) -> Heuristic {
		if diagonal_movement.allows_diagonals() {
			Heuristic::Octile
		} else {
			Heuristic::Manhattan
		}
	}

	/// the function behind this heuristic
	pub fn function(self) -> HeuristicFn {
		match self {
			Heuristic::Manhattan => manhattan,
			Heuristic::Euclidean => euclidean,
			Heuristic::Chebyshev => chebyshev,
			Heuristic::Octile => octile,
			Heuristic::Custom(f) => f,
		}
	}

	/// Evaluates the heuristic for the given coordinate differences.
	///
	/// ```
	/// # use grid_pathfinder::Heuristic;
	/// assert_eq!(Heuristic::Manhattan.eval(3.0, 4.0), 7.0);
	/// assert_eq!(Heuristic::Euclidean.eval(3.0, 4.0), 5.0);
	/// assert_eq!(Heuristic::Chebyshev.eval(3.0, 4.0), 4.0);
	/// ```
	pub fn eval(self, dx: f64, dy: f64) -> f64 {
		(self.function())(dx, dy)
	}

	/// Evaluates the heuristic between two Points.
	pub fn between(self, a: Point, b: Point) -> f64 {
		self.eval(a.0.abs_diff(b.0) as f64, a.1.abs_diff(b.1) as f64)
	}
}

impl PartialEq for Heuristic {
	fn eq(&self, other: &Heuristic) -> bool {
		match (self, other) {
			(Heuristic::Custom(a), Heuristic::Custom(b)) => *a as usize == *b as usize,
			_ => std::mem::discriminant(self) == std::mem::discriminant(other),
		}
	}
}
