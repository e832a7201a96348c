use crate::Point;

/// A single position on the [`Grid`](crate::Grid).
///
/// A Cell only stores static information. Everything a search needs (`g`, `h`, `f`, open/closed,
/// parent) lives in per-search scratch state, so one Grid can be shared between many searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
	x: usize,
	y: usize,
	walkable: bool,
	clearance: Option<usize>,
}

impl Cell {
	pub(crate) fn new(x: usize, y: usize, walkable: bool) -> Cell {
		Cell {
			x,
			y,
			walkable,
			clearance: None,
		}
	}

	/// the x coordinate (column)
	pub fn x(&self) -> usize {
		self.x
	}
	/// the y coordinate (row)
	pub fn y(&self) -> usize {
		self.y
	}
	/// `(x, y)`
	pub fn pos(&self) -> Point {
		(self.x, self.y)
	}
	/// whether an Agent may stand on this Cell
	pub fn is_walkable(&self) -> bool {
		self.walkable
	}

	/// The size of the largest walkable square that has this Cell as its top-left corner.
	///
	/// Only present after [`Grid::calculate_clearance`](crate::Grid::calculate_clearance) ran
	/// and no walkability changed since.
	pub fn clearance(&self) -> Option<usize> {
		self.clearance
	}

	pub(crate) fn set_walkable(&mut self, walkable: bool) {
		self.walkable = walkable;
		self.clearance = None;
	}

	pub(crate) fn set_clearance(&mut self, clearance: Option<usize>) {
		self.clearance = clearance;
	}
}
