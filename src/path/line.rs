use crate::neighbors::DiagonalMovement;
use crate::{Grid, Point};

/// Returns the Cells of the Bresenham line from `a` to `b` (both inclusive).
///
/// ## Examples
/// ```
/// # use grid_pathfinder::path::interpolate;
/// assert_eq!(interpolate((0, 1), (0, 4)), vec![(0, 1), (0, 2), (0, 3), (0, 4)]);
/// assert_eq!(interpolate((0, 0), (4, 2)), vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]);
/// ```
pub fn interpolate(a: Point, b: Point) -> Vec<Point> {
	let mut line = Vec::with_capacity(a.0.abs_diff(b.0).max(a.1.abs_diff(b.1)) + 1);
	line.push(a);
	walk_line(a, b, |_, to| {
		line.push(to);
		true
	});
	line
}

/// Walks the Bresenham line from `a` to `b`, calling `step_ok(from, to)` for every step.
///
/// Stops early and returns `false` as soon as a step is rejected.
pub(crate) fn walk_line<F>(a: Point, b: Point, mut step_ok: F) -> bool
where
	F: FnMut(Point, Point) -> bool,
{
	let (mut x, mut y) = (a.0 as isize, a.1 as isize);
	let (x1, y1) = (b.0 as isize, b.1 as isize);
	let dx = (x1 - x).abs();
	let dy = (y1 - y).abs();
	let sx = if x < x1 { 1 } else { -1 };
	let sy = if y < y1 { 1 } else { -1 };
	let mut err = dx - dy;

	while (x, y) != (x1, y1) {
		let from = (x as usize, y as usize);
		let e2 = 2 * err;
		if e2 > -dy {
			err -= dy;
			x += sx;
		}
		if e2 < dx {
			err += dx;
			y += sy;
		}
		if !step_ok(from, (x as usize, y as usize)) {
			return false;
		}
	}
	true
}

/// Checks if the straight line from `a` to `b` can be walked.
///
/// Every Cell on the [`interpolate`]d line has to be walkable, and every diagonal step along the
/// line has to be allowed by `diagonal_movement`.
///
/// ## Examples
/// ```
/// # use grid_pathfinder::{Grid, DiagonalMovement, path::line_of_sight};
/// let matrix = [
///     [0, 0, 0],
///     [0, 1, 0],
///     [0, 0, 0],
/// ];
/// let grid = Grid::from_matrix(3, 3, &matrix).unwrap();
///
/// assert!(line_of_sight(&grid, (0, 0), (2, 0), DiagonalMovement::Never));
/// assert!(!line_of_sight(&grid, (0, 0), (2, 2), DiagonalMovement::Always));
/// assert!(line_of_sight(&grid, (0, 1), (1, 0), DiagonalMovement::IfAtMostOneObstacle));
/// assert!(!line_of_sight(&grid, (0, 1), (1, 0), DiagonalMovement::OnlyWhenNoObstacles));
/// ```
pub fn line_of_sight(grid: &Grid, a: Point, b: Point, diagonal_movement: DiagonalMovement) -> bool {
	grid.walkable(a) && walk_line(a, b, |from, to| grid.is_valid_step(from, to, diagonal_movement))
}

/// Fills in the Cells between consecutive waypoints, turning a compressed Path back into a
/// step-by-step one.
///
/// ## Examples
/// ```
/// # use grid_pathfinder::path::expand_path;
/// assert_eq!(
///     expand_path(&[(0, 1), (0, 4), (2, 6)]),
///     vec![(0, 1), (0, 2), (0, 3), (0, 4), (1, 5), (2, 6)]
/// );
/// assert!(expand_path(&[]).is_empty());
/// ```
pub fn expand_path(path: &[Point]) -> Vec<Point> {
	let mut expanded = Vec::with_capacity(path.len());
	if let Some(&first) = path.first() {
		expanded.push(first);
	}
	for w in path.windows(2) {
		walk_line(w[0], w[1], |_, to| {
			expanded.push(to);
			true
		});
	}
	expanded
}

fn gcd(a: usize, b: usize) -> usize {
	if b == 0 {
		a
	} else {
		gcd(b, a % b)
	}
}

fn direction(from: Point, to: Point) -> (isize, isize) {
	let dx = to.0 as isize - from.0 as isize;
	let dy = to.1 as isize - from.1 as isize;
	let d = gcd(dx.unsigned_abs(), dy.unsigned_abs()).max(1) as isize;
	(dx / d, dy / d)
}

/// Removes every Point that continues the direction of the previous step, leaving only the
/// Start, the Goal and the turning points.
///
/// ## Examples
/// ```
/// # use grid_pathfinder::path::compress_path;
/// assert_eq!(
///     compress_path(&[(0, 1), (0, 2), (0, 3), (0, 4), (1, 5), (2, 6)]),
///     vec![(0, 1), (0, 4), (2, 6)]
/// );
/// ```
pub fn compress_path(path: &[Point]) -> Vec<Point> {
	if path.len() < 3 {
		return path.to_vec();
	}
	let mut compressed = vec![path[0]];
	for w in path.windows(3) {
		if direction(w[0], w[1]) != direction(w[1], w[2]) {
			compressed.push(w[1]);
		}
	}
	compressed.extend(path.last().copied());
	compressed
}

/// Shortcuts a Path wherever there is a [`line_of_sight`].
///
/// Starting from the first Point, the Path is followed for as long as the current anchor can see
/// the next Point. When the view is blocked, the last visible Point becomes a new waypoint.
/// The result is a list of waypoints; if the input was a valid step-by-step Path, then
/// [`expand_path`] of the result is one as well.
pub fn smoothen_path(grid: &Grid, path: &[Point], diagonal_movement: DiagonalMovement) -> Vec<Point> {
	if path.len() < 3 {
		return path.to_vec();
	}
	let mut anchor = path[0];
	let mut smooth = vec![anchor];
	for i in 2..path.len() {
		if !line_of_sight(grid, anchor, path[i], diagonal_movement) {
			anchor = path[i - 1];
			smooth.push(anchor);
		}
	}
	smooth.extend(path.last().copied());
	smooth
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn interpolate_endpoints_and_reverse() {
		assert_eq!(interpolate((2, 2), (2, 2)), vec![(2, 2)]);
		assert_eq!(interpolate((3, 3), (0, 0)), vec![(3, 3), (2, 2), (1, 1), (0, 0)]);
		assert_eq!(interpolate((4, 0), (0, 0)).len(), 5);
	}

	#[test]
	fn interpolated_lines_are_connected() {
		for end in [(7, 2), (1, 6), (5, 5), (0, 3), (6, 0)] {
			let line = interpolate((0, 0), end);
			assert_eq!(line.first(), Some(&(0, 0)));
			assert_eq!(line.last(), Some(&end));
			assert!(line
				.windows(2)
				.all(|w| crate::neighbors::is_adjacent(w[0], w[1])));
		}
	}

	#[test]
	fn compress_short_paths() {
		assert!(compress_path(&[]).is_empty());
		assert_eq!(compress_path(&[(0, 0), (1, 0)]), vec![(0, 0), (1, 0)]);
		assert_eq!(
			compress_path(&[(0, 1), (0, 2), (0, 3), (0, 4)]),
			vec![(0, 1), (0, 4)]
		);
	}

	#[test]
	fn compress_then_expand() {
		let path = vec![(0, 0), (1, 1), (2, 2), (2, 3), (2, 4), (3, 4)];
		let compressed = compress_path(&path);
		assert_eq!(compressed, vec![(0, 0), (2, 2), (2, 4), (3, 4)]);
		assert_eq!(expand_path(&compressed), path);
	}

	#[test]
	fn smoothen_around_wall() {
		// . . . .
		// . # # .
		// . . . .
		let matrix = [[0, 0, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0]];
		let grid = Grid::from_matrix(4, 3, &matrix).unwrap();
		let path = [(0, 2), (0, 1), (0, 0), (1, 0), (2, 0), (3, 0)];

		let smooth = smoothen_path(&grid, &path, DiagonalMovement::Never);
		assert_eq!(smooth, vec![(0, 2), (0, 0), (3, 0)]);
		assert_eq!(expand_path(&smooth), path.to_vec());

		let diagonal = smoothen_path(&grid, &path, DiagonalMovement::IfAtMostOneObstacle);
		assert_eq!(diagonal, vec![(0, 2), (1, 0), (3, 0)]);
		assert!(expand_path(&diagonal)
			.windows(2)
			.all(|w| grid.is_valid_step(w[0], w[1], DiagonalMovement::IfAtMostOneObstacle)));
	}
}
