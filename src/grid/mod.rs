//! The walkable/blocked Grid that all searches run on

mod cell;
pub use self::cell::Cell;

mod clearance;

use crate::neighbors::{is_adjacent, offset, DiagonalMovement, DIAGONAL, ORTHOGONAL};
use crate::Point;

/// Errors raised while building or mutating a [`Grid`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
	/// The Grid would have a width or height of 0
	InvalidSize {
		/// requested width
		width: usize,
		/// requested height
		height: usize,
	},
	/// The obstacle matrix does not have `height` rows of `width` entries
	DimensionMismatch {
		/// `(width, height)` that was declared
		expected: (usize, usize),
		/// `(row length, row count)` of the offending matrix
		found: (usize, usize),
	},
	/// A mutation targeted a Cell outside of the Grid
	OutOfBounds {
		/// x coordinate of the access
		x: isize,
		/// y coordinate of the access
		y: isize,
	},
}

impl std::fmt::Display for GridError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			GridError::InvalidSize { width, height } => {
				write!(f, "invalid grid size {}x{}", width, height)
			}
			GridError::DimensionMismatch { expected, found } => write!(
				f,
				"obstacle matrix is {}x{}, expected {}x{}",
				found.0, found.1, expected.0, expected.1
			),
			GridError::OutOfBounds { x, y } => write!(f, "({}, {}) is outside of the grid", x, y),
		}
	}
}

impl std::error::Error for GridError {}

/// Anything that can be used as an entry of an obstacle matrix.
///
/// Truthy entries mark a Cell as **blocked**: `true`, any non-zero number, or any character other
/// than `'.'` and `'G'` (the walkable characters of the `.map` format).
pub trait Obstacle {
	/// `true` if the Cell should not be walkable
	fn is_blocked(&self) -> bool;
}

impl Obstacle for bool {
	fn is_blocked(&self) -> bool {
		*self
	}
}

impl Obstacle for char {
	fn is_blocked(&self) -> bool {
		!matches!(self, '.' | 'G')
	}
}

impl<T: Obstacle> Obstacle for &T {
	fn is_blocked(&self) -> bool {
		(**self).is_blocked()
	}
}

macro_rules! impl_obstacle {
	($($type:ty),+) => {$(
		impl Obstacle for $type {
			fn is_blocked(&self) -> bool {
				*self != 0
			}
		}
	)+}
}

impl_obstacle!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// A rectangular Grid of walkable and blocked [`Cell`]s.
///
/// The Grid only holds static data. Searches borrow it immutably and keep their bookkeeping in
/// private scratch state, which means:
/// - the same Grid can be searched any number of times without a reset
/// - several threads can search the same `&Grid` at once
/// - walkability can only change between searches, since that requires `&mut self`
///
/// ## Examples
/// ```
/// use grid_pathfinder::{Grid, DiagonalMovement};
///
/// // 1 = blocked
/// let matrix = [
///     [0, 0, 0, 0],
///     [1, 0, 1, 0],
///     [0, 0, 1, 0],
/// ];
/// let mut grid = Grid::from_matrix(4, 3, &matrix).unwrap();
///
/// assert!(grid.is_walkable_at(1, 1));
/// assert!(!grid.is_walkable_at(2, 1));
/// assert!(!grid.is_walkable_at(-1, 0)); // outside is never walkable
///
/// grid.set_walkable_at(2, 1, true).unwrap();
/// assert!(grid.set_walkable_at(4, 0, true).is_err());
///
/// assert_eq!(
///     grid.neighbors((0, 0), DiagonalMovement::Always),
///     vec![(1, 0), (1, 1)],
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
	width: usize,
	height: usize,
	cells: Vec<Cell>,
	/// set while the Cells carry clearance values
	has_clearance: bool,
}

impl Grid {
	/// Creates a Grid where every Cell is walkable.
	pub fn new(width: usize, height: usize) -> Result<Grid, GridError> {
		if width == 0 || height == 0 {
			return Err(GridError::InvalidSize { width, height });
		}
		let cells = (0..height)
			.flat_map(|y| (0..width).map(move |x| Cell::new(x, y, true)))
			.collect();
		Ok(Grid {
			width,
			height,
			cells,
			has_clearance: false,
		})
	}

	/// Creates a Grid from an obstacle matrix, indexed as `matrix[row][column]`.
	///
	/// Truthy entries (see [`Obstacle`]) become blocked Cells. The matrix must have exactly
	/// `height` rows with `width` entries each, otherwise [`GridError::DimensionMismatch`] is
	/// returned.
	pub fn from_matrix<R, T>(width: usize, height: usize, matrix: &[R]) -> Result<Grid, GridError>
	where
		R: AsRef<[T]>,
		T: Obstacle,
	{
		let mut grid = Grid::new(width, height)?;

		if matrix.len() != height {
			let row_len = matrix.first().map_or(0, |row| row.as_ref().len());
			return Err(GridError::DimensionMismatch {
				expected: (width, height),
				found: (row_len, matrix.len()),
			});
		}
		if let Some(row) = matrix.iter().find(|row| row.as_ref().len() != width) {
			return Err(GridError::DimensionMismatch {
				expected: (width, height),
				found: (row.as_ref().len(), matrix.len()),
			});
		}

		for (y, row) in matrix.iter().enumerate() {
			for (x, entry) in row.as_ref().iter().enumerate() {
				if entry.is_blocked() {
					let index = grid.index((x, y));
					grid.cells[index].set_walkable(false);
				}
			}
		}
		Ok(grid)
	}

	/// the number of columns
	pub fn width(&self) -> usize {
		self.width
	}
	/// the number of rows
	pub fn height(&self) -> usize {
		self.height
	}
	/// `(width, height)`
	pub fn size(&self) -> (usize, usize) {
		(self.width, self.height)
	}

	/// `0 <= x < width && 0 <= y < height`
	pub fn is_inside(&self, x: isize, y: isize) -> bool {
		x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
	}

	/// `false` for blocked Cells and for any coordinate outside of the Grid.
	pub fn is_walkable_at(&self, x: isize, y: isize) -> bool {
		self.is_inside(x, y) && self.cells[self.index((x as usize, y as usize))].is_walkable()
	}

	/// Changes the walkability of a Cell.
	///
	/// Any clearance stored by [`calculate_clearance`](Grid::calculate_clearance) becomes
	/// stale and is dropped.
	pub fn set_walkable_at(&mut self, x: isize, y: isize, walkable: bool) -> Result<(), GridError> {
		if !self.is_inside(x, y) {
			return Err(GridError::OutOfBounds { x, y });
		}
		let index = self.index((x as usize, y as usize));
		self.cells[index].set_walkable(walkable);
		if self.has_clearance {
			self.cells.iter_mut().for_each(|cell| cell.set_clearance(None));
			self.has_clearance = false;
		}
		Ok(())
	}

	/// The Cell at `(x, y)`, if it is inside the Grid
	pub fn cell(&self, x: isize, y: isize) -> Option<&Cell> {
		if self.is_inside(x, y) {
			Some(&self.cells[self.index((x as usize, y as usize))])
		} else {
			None
		}
	}

	/// All Cells in row-major order
	pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
		self.cells.iter()
	}

	/// Returns the walkable neighbors of `point` under the given diagonal policy.
	///
	/// Orthogonal neighbors come first (up, right, down, left), followed by the allowed
	/// diagonals (up-left, up-right, down-right, down-left).
	pub fn neighbors(&self, point: Point, diagonal_movement: DiagonalMovement) -> Vec<Point> {
		let mut ret = Vec::with_capacity(8);
		self.neighbors_into(point, diagonal_movement, &mut ret);
		ret
	}

	/// Same as [`neighbors`](Grid::neighbors), but appends to an existing buffer.
	pub fn neighbors_into(
		&self,
		point: Point,
		diagonal_movement: DiagonalMovement,
		out: &mut Vec<Point>,
	) {
		neighbors_by(point, diagonal_movement, |x, y| self.is_walkable_at(x, y), out)
	}

	/// Checks a single step of a Path: `to` has to be a walkable neighbor of `from` that the
	/// diagonal policy allows.
	pub fn is_valid_step(&self, from: Point, to: Point, diagonal_movement: DiagonalMovement) -> bool {
		step_allowed_by(from, to, diagonal_movement, |x, y| self.is_walkable_at(x, y))
	}

	pub(crate) fn index(&self, (x, y): Point) -> usize {
		y * self.width + x
	}

	/// walkability of a Point that may lie outside of the Grid
	pub(crate) fn walkable(&self, (x, y): Point) -> bool {
		x < self.width && y < self.height && self.cells[self.index((x, y))].is_walkable()
	}
}

/// Collects the neighbors of `point` according to an arbitrary walkability function.
///
/// Orthogonal neighbors come first, diagonal ones are filtered by the walkability of their
/// flanking Cells.
pub(crate) fn neighbors_by<F>(
	point: Point,
	diagonal_movement: DiagonalMovement,
	walkable: F,
	out: &mut Vec<Point>,
) where
	F: Fn(isize, isize) -> bool,
{
	let mut open = [false; 4];
	for (i, &dir) in ORTHOGONAL.iter().enumerate() {
		let (x, y) = offset(point, dir);
		if walkable(x, y) {
			open[i] = true;
			out.push((x as usize, y as usize));
		}
	}
	if !diagonal_movement.allows_diagonals() {
		return;
	}
	for (i, &dir) in DIAGONAL.iter().enumerate() {
		if !diagonal_movement.permits(open[i], open[(i + 3) % 4]) {
			continue;
		}
		let (x, y) = offset(point, dir);
		if walkable(x, y) {
			out.push((x as usize, y as usize));
		}
	}
}

/// Checks a single step according to an arbitrary walkability function.
pub(crate) fn step_allowed_by<F>(
	from: Point,
	to: Point,
	diagonal_movement: DiagonalMovement,
	walkable: F,
) -> bool
where
	F: Fn(isize, isize) -> bool,
{
	if !is_adjacent(from, to) || !walkable(to.0 as isize, to.1 as isize) {
		return false;
	}
	if from.0 == to.0 || from.1 == to.1 {
		return true;
	}
	let first = walkable(to.0 as isize, from.1 as isize);
	let second = walkable(from.0 as isize, to.1 as isize);
	diagonal_movement.permits(first, second)
}
