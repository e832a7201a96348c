use crate::neighbors::step_cost;
use crate::Point;

/// Follows parent links from `end` back to the root and returns the Points in root-to-end order
/// (both inclusive).
///
/// `parent_of` returns the parent of a Point, or `None` for the root.
///
/// ## Examples
/// ```
/// # use grid_pathfinder::path::backtrace;
/// // every Point was reached from its left neighbor
/// let parent_of = |(x, y): (usize, usize)| if x > 0 { Some((x - 1, y)) } else { None };
///
/// assert_eq!(backtrace((3, 0), parent_of), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
/// ```
pub fn backtrace<F>(end: Point, mut parent_of: F) -> Vec<Point>
where
	F: FnMut(Point) -> Option<Point>,
{
	let mut path = vec![end];
	let mut current = end;
	while let Some(parent) = parent_of(current) {
		path.push(parent);
		current = parent;
	}
	path.reverse();
	path
}

/// Joins the results of two searches that met between `a` and `b`.
///
/// `a` is traced back to the Start through `parent_a`, `b` is traced back to the Goal through
/// `parent_b`. The result runs from Start through `a` and `b` to the Goal.
pub fn bi_backtrace<F, G>(a: Point, parent_a: F, b: Point, parent_b: G) -> Vec<Point>
where
	F: FnMut(Point) -> Option<Point>,
	G: FnMut(Point) -> Option<Point>,
{
	let mut path = backtrace(a, parent_a);
	let mut tail = backtrace(b, parent_b);
	tail.reverse();
	if path.last() == tail.first() {
		tail.remove(0);
	}
	path.extend(tail);
	path
}

/// The length of a step-by-step Path: `1` per orthogonal and `√2` per diagonal step.
///
/// Non-adjacent consecutive Points are measured by their euclidean distance.
pub fn path_length(path: &[Point]) -> f64 {
	path.windows(2)
		.map(|w| {
			let dx = w[0].0.abs_diff(w[1].0);
			let dy = w[0].1.abs_diff(w[1].1);
			if dx <= 1 && dy <= 1 {
				step_cost(w[0], w[1])
			} else {
				((dx * dx + dy * dy) as f64).sqrt()
			}
		})
		.sum()
}

#[cfg(test)]
mod tests {
	use super::*;
	use hashbrown::HashMap;

	#[test]
	fn backtrace_root_only() {
		assert_eq!(backtrace((2, 2), |_| None), vec![(2, 2)]);
	}

	#[test]
	fn bi_backtrace_joins_both_halves() {
		let forward: HashMap<Point, Point> = [((1, 0), (0, 0)), ((2, 0), (1, 0))].into_iter().collect();
		let backward: HashMap<Point, Point> = [((3, 0), (4, 0))].into_iter().collect();

		let path = bi_backtrace(
			(2, 0),
			|p| forward.get(&p).copied(),
			(3, 0),
			|p| backward.get(&p).copied(),
		);
		assert_eq!(path, vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
	}

	#[test]
	fn bi_backtrace_shared_meeting_point() {
		let forward: HashMap<Point, Point> = [((1, 1), (0, 0))].into_iter().collect();
		let backward: HashMap<Point, Point> = [((1, 1), (2, 2))].into_iter().collect();

		let path = bi_backtrace(
			(1, 1),
			|p| forward.get(&p).copied(),
			(1, 1),
			|p| backward.get(&p).copied(),
		);
		assert_eq!(path, vec![(0, 0), (1, 1), (2, 2)]);
	}

	#[test]
	fn lengths() {
		assert_eq!(path_length(&[]), 0.0);
		assert_eq!(path_length(&[(3, 3)]), 0.0);
		assert_eq!(path_length(&[(0, 0), (0, 1), (1, 2)]), 1.0 + std::f64::consts::SQRT_2);
		assert_eq!(path_length(&[(0, 0), (3, 4)]), 5.0);
	}
}
