use super::Grid;

impl Grid {
	/// Computes the clearance of every Cell without storing it.
	///
	/// The clearance of a Cell is the size of the largest walkable square with that Cell as its
	/// top-left corner:
	/// - `0` for blocked Cells
	/// - `1` for walkable Cells on the right or bottom border
	/// - `1 + min(right, below, below-right)` for everything else
	///
	/// The result is indexed in row-major order, like [`cells`](Grid::cells).
	///
	/// ## Examples
	/// ```
	/// # use grid_pathfinder::Grid;
	/// let matrix = [
	///     [0, 0, 0],
	///     [0, 0, 0],
	///     [0, 0, 1],
	/// ];
	/// let grid = Grid::from_matrix(3, 3, &matrix).unwrap();
	///
	/// assert_eq!(grid.clearance_map(), vec![
	///     2, 2, 1,
	///     2, 1, 1,
	///     1, 1, 0,
	/// ]);
	/// ```
	pub fn clearance_map(&self) -> Vec<usize> {
		let (width, height) = self.size();
		let mut clearance = vec![0; width * height];

		for y in (0..height).rev() {
			for x in (0..width).rev() {
				let index = self.index((x, y));
				clearance[index] = if !self.cells[index].is_walkable() {
					0
				} else if x == width - 1 || y == height - 1 {
					1
				} else {
					let right = clearance[index + 1];
					let below = clearance[index + width];
					let diagonal = clearance[index + width + 1];
					1 + right.min(below).min(diagonal)
				};
			}
		}
		clearance
	}

	/// Runs [`clearance_map`](Grid::clearance_map) and stores the result on the Cells, where it
	/// can be read with [`Cell::clearance`](crate::Cell::clearance).
	pub fn calculate_clearance(&mut self) {
		let clearance = self.clearance_map();
		for (cell, value) in self.cells.iter_mut().zip(clearance) {
			cell.set_clearance(Some(value));
		}
		self.has_clearance = true;
	}
}
