use super::{FinderConfig, SearchObserver};
use crate::grid::{neighbors_by, step_allowed_by};
use crate::path::walk_line;
use crate::{DiagonalMovement, Grid, Heuristic, Point};

/// Everything a single search needs besides its own scratch state
pub(crate) struct Context<'a, O> {
	pub grid: &'a Grid,
	pub config: &'a FinderConfig,
	pub diagonal_movement: DiagonalMovement,
	pub observer: &'a mut O,
	pub expanded: usize,
	heuristic: Heuristic,
	h_scale: f64,
	/// clearance of every Cell, only present for units bigger than one Cell
	clearance: Option<Vec<usize>>,
}

impl<'a, O: SearchObserver> Context<'a, O> {
	/// `h_scale` is the factor applied to every heuristic value on top of the configured weight.
	pub fn new(
		grid: &'a Grid,
		config: &'a FinderConfig,
		h_scale: f64,
		observer: &'a mut O,
	) -> Context<'a, O> {
		let clearance = if config.unit_size > 1 {
			#[cfg(feature = "log")]
			let timer = std::time::Instant::now();
			let clearance = grid.clearance_map();
			log_trace!("clearance pre-pass took {:?}", timer.elapsed());
			Some(clearance)
		} else {
			None
		};
		Context {
			grid,
			config,
			diagonal_movement: config.diagonal_movement,
			observer,
			expanded: 0,
			heuristic: config.heuristic(),
			h_scale: config.weight * h_scale,
			clearance,
		}
	}

	/// the weighted heuristic from `a` to `b`
	pub fn h(&self, a: Point, b: Point) -> f64 {
		if self.h_scale == 0.0 {
			0.0
		} else {
			self.heuristic.between(a, b) * self.h_scale
		}
	}

	/// Whether the moving unit may stand on a Cell. Coordinates outside of the Grid are not
	/// passable.
	pub fn passable_at(&self, x: isize, y: isize) -> bool {
		if !self.grid.is_walkable_at(x, y) {
			return false;
		}
		match &self.clearance {
			Some(clearance) => {
				clearance[self.grid.index((x as usize, y as usize))] >= self.config.unit_size
			}
			None => true,
		}
	}

	pub fn passable(&self, (x, y): Point) -> bool {
		self.passable_at(x as isize, y as isize)
	}

	pub fn neighbors_into(&self, point: Point, out: &mut Vec<Point>) {
		neighbors_by(
			point,
			self.diagonal_movement,
			|x, y| self.passable_at(x, y),
			out,
		)
	}

	/// Straight line walkability between two arbitrary Cells, stepping like
	/// [`interpolate`](crate::path::interpolate).
	pub fn line_of_sight(&self, a: Point, b: Point) -> bool {
		walk_line(a, b, |from, to| {
			step_allowed_by(from, to, self.diagonal_movement, |x, y| {
				self.passable_at(x, y)
			})
		})
	}
}
