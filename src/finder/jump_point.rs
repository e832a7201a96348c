//! Jump Point Search
//!
//! Instead of opening every neighbor, a jump point search only looks at the directions that
//! could lead somewhere a straight line from the parent could not, and follows each of them
//! until something interesting happens:
//! - the Goal is reached
//! - a forced neighbor appears (an obstacle ends next to the line, opening a new shortest route)
//! - the line runs into an obstacle (no jump point)
//!
//! Only the resulting jump points are put on the open list. Which neighbors are forced depends
//! on the diagonal policy, so every policy gets its own pruning and jumping rules.

use super::context::Context;
use super::state::{open_list, SearchState};
use super::SearchObserver;
use crate::heuristic::octile;
use crate::path::backtrace;
use crate::{DiagonalMovement, Point};

type Signed = (isize, isize);

/// Returns the jump points from Start to Goal, or `None` if the Goal is unreachable.
pub(crate) fn jump_point_search<O: SearchObserver>(
	ctx: &mut Context<O>,
	start: Point,
	goal: Point,
) -> Option<Vec<Point>> {
	let mut state = SearchState::new(ctx.grid);
	let mut open = open_list(ctx.grid.width() + ctx.grid.height());

	let h = ctx.h(start, goal);
	state.open_root(&mut open, ctx.observer, start, h);

	let mut candidates = Vec::with_capacity(8);

	while let Some(current) = state.close_next(&mut open, ctx.observer) {
		ctx.expanded += 1;
		if current == goal {
			return Some(backtrace(goal, |p| state.parent(p)));
		}

		candidates.clear();
		pruned_neighbors(ctx, current, state.parent(current), &mut candidates);

		let current_g = state.node(current).g;
		let origin = (current.0 as isize, current.1 as isize);
		for &next in candidates.iter() {
			let dir = (next.0 - origin.0, next.1 - origin.1);
			let jump_point = match jump(ctx, next, dir, goal) {
				Some(p) => p,
				None => continue,
			};
			let dx = jump_point.0.abs_diff(current.0) as f64;
			let dy = jump_point.1.abs_diff(current.1) as f64;
			let h = ctx.h(jump_point, goal);
			state.relax(
				&mut open,
				ctx.observer,
				jump_point,
				current,
				current_g + octile(dx, dy),
				h,
			);
		}
	}
	None
}

/// The Cells worth jumping to from `current` when it was reached from `parent`.
///
/// Candidates may be blocked or outside of the Grid, [`jump`] rejects those.
fn pruned_neighbors<O: SearchObserver>(
	ctx: &Context<O>,
	current: Point,
	parent: Option<Point>,
	out: &mut Vec<Signed>,
) {
	let parent = match parent {
		Some(parent) => parent,
		None => {
			let mut all = Vec::with_capacity(8);
			ctx.neighbors_into(current, &mut all);
			out.extend(all.into_iter().map(|(x, y)| (x as isize, y as isize)));
			return;
		}
	};
	let (x, y) = (current.0 as isize, current.1 as isize);
	let dx = (x - parent.0 as isize).signum();
	let dy = (y - parent.1 as isize).signum();
	let open = |x: isize, y: isize| ctx.passable_at(x, y);
	let diagonal = dx != 0 && dy != 0;

	match ctx.diagonal_movement {
		DiagonalMovement::Never => {
			if dx != 0 {
				if open(x, y - 1) {
					out.push((x, y - 1));
				}
				if open(x, y + 1) {
					out.push((x, y + 1));
				}
				if open(x + dx, y) {
					out.push((x + dx, y));
				}
			} else {
				if open(x - 1, y) {
					out.push((x - 1, y));
				}
				if open(x + 1, y) {
					out.push((x + 1, y));
				}
				if open(x, y + dy) {
					out.push((x, y + dy));
				}
			}
		}
		DiagonalMovement::Always => {
			if diagonal {
				if open(x, y + dy) {
					out.push((x, y + dy));
				}
				if open(x + dx, y) {
					out.push((x + dx, y));
				}
				if open(x + dx, y + dy) {
					out.push((x + dx, y + dy));
				}
				if !open(x - dx, y) {
					out.push((x - dx, y + dy));
				}
				if !open(x, y - dy) {
					out.push((x + dx, y - dy));
				}
			} else if dx == 0 {
				if open(x, y + dy) {
					out.push((x, y + dy));
				}
				if !open(x + 1, y) {
					out.push((x + 1, y + dy));
				}
				if !open(x - 1, y) {
					out.push((x - 1, y + dy));
				}
			} else {
				if open(x + dx, y) {
					out.push((x + dx, y));
				}
				if !open(x, y + 1) {
					out.push((x + dx, y + 1));
				}
				if !open(x, y - 1) {
					out.push((x + dx, y - 1));
				}
			}
		}
		DiagonalMovement::IfAtMostOneObstacle => {
			if diagonal {
				let open_y = open(x, y + dy);
				let open_x = open(x + dx, y);
				if open_y {
					out.push((x, y + dy));
				}
				if open_x {
					out.push((x + dx, y));
				}
				if open_x || open_y {
					out.push((x + dx, y + dy));
				}
				if !open(x - dx, y) && open_y {
					out.push((x - dx, y + dy));
				}
				if !open(x, y - dy) && open_x {
					out.push((x + dx, y - dy));
				}
			} else if dx == 0 {
				if open(x, y + dy) {
					out.push((x, y + dy));
					if !open(x + 1, y) {
						out.push((x + 1, y + dy));
					}
					if !open(x - 1, y) {
						out.push((x - 1, y + dy));
					}
				}
			} else if open(x + dx, y) {
				out.push((x + dx, y));
				if !open(x, y + 1) {
					out.push((x + dx, y + 1));
				}
				if !open(x, y - 1) {
					out.push((x + dx, y - 1));
				}
			}
		}
		DiagonalMovement::OnlyWhenNoObstacles => {
			if diagonal {
				let open_y = open(x, y + dy);
				let open_x = open(x + dx, y);
				if open_y {
					out.push((x, y + dy));
				}
				if open_x {
					out.push((x + dx, y));
				}
				if open_x && open_y {
					out.push((x + dx, y + dy));
				}
			} else if dx == 0 {
				let ahead = open(x, y + dy);
				let right = open(x + 1, y);
				let left = open(x - 1, y);
				if ahead {
					out.push((x, y + dy));
					if right {
						out.push((x + 1, y + dy));
					}
					if left {
						out.push((x - 1, y + dy));
					}
				}
				if right {
					out.push((x + 1, y));
				}
				if left {
					out.push((x - 1, y));
				}
			} else {
				let ahead = open(x + dx, y);
				let below = open(x, y + 1);
				let above = open(x, y - 1);
				if ahead {
					out.push((x + dx, y));
					if below {
						out.push((x + dx, y + 1));
					}
					if above {
						out.push((x + dx, y - 1));
					}
				}
				if below {
					out.push((x, y + 1));
				}
				if above {
					out.push((x, y - 1));
				}
			}
		}
	}
}

/// Follows direction `(dx, dy)` starting at `(x, y)` until a jump point is found.
///
/// Straight scans run in a loop. Diagonal scans (and vertical scans without diagonal movement)
/// start perpendicular straight scans at every Cell, so the recursion is at most two levels deep.
fn jump<O: SearchObserver>(
	ctx: &mut Context<O>,
	(mut x, mut y): Signed,
	(dx, dy): Signed,
	goal: Point,
) -> Option<Point> {
	let policy = ctx.diagonal_movement;
	loop {
		if !ctx.passable_at(x, y) {
			return None;
		}
		let here = (x as usize, y as usize);
		ctx.observer.tested(here, true);
		if here == goal {
			return Some(here);
		}

		if dx != 0 && dy != 0 {
			if policy != DiagonalMovement::OnlyWhenNoObstacles
				&& ((ctx.passable_at(x - dx, y + dy) && !ctx.passable_at(x - dx, y))
					|| (ctx.passable_at(x + dx, y - dy) && !ctx.passable_at(x, y - dy)))
			{
				return Some(here);
			}
			if jump(ctx, (x + dx, y), (dx, 0), goal).is_some()
				|| jump(ctx, (x, y + dy), (0, dy), goal).is_some()
			{
				return Some(here);
			}
			let open_x = ctx.passable_at(x + dx, y);
			let open_y = ctx.passable_at(x, y + dy);
			let may_continue = match policy {
				DiagonalMovement::IfAtMostOneObstacle => open_x || open_y,
				DiagonalMovement::OnlyWhenNoObstacles => open_x && open_y,
				_ => true,
			};
			if !may_continue {
				return None;
			}
		} else {
			let forced = match policy {
				DiagonalMovement::Always | DiagonalMovement::IfAtMostOneObstacle => {
					if dx != 0 {
						(ctx.passable_at(x + dx, y + 1) && !ctx.passable_at(x, y + 1))
							|| (ctx.passable_at(x + dx, y - 1) && !ctx.passable_at(x, y - 1))
					} else {
						(ctx.passable_at(x + 1, y + dy) && !ctx.passable_at(x + 1, y))
							|| (ctx.passable_at(x - 1, y + dy) && !ctx.passable_at(x - 1, y))
					}
				}
				DiagonalMovement::Never | DiagonalMovement::OnlyWhenNoObstacles => {
					if dx != 0 {
						(ctx.passable_at(x, y - 1) && !ctx.passable_at(x - dx, y - 1))
							|| (ctx.passable_at(x, y + 1) && !ctx.passable_at(x - dx, y + 1))
					} else {
						(ctx.passable_at(x - 1, y) && !ctx.passable_at(x - 1, y - dy))
							|| (ctx.passable_at(x + 1, y) && !ctx.passable_at(x + 1, y - dy))
					}
				}
			};
			if forced {
				return Some(here);
			}
			// without diagonals, horizontal turns have to be found while scanning vertically
			if policy == DiagonalMovement::Never && dx == 0 {
				let turns = jump(ctx, (x + 1, y), (1, 0), goal).is_some()
					|| jump(ctx, (x - 1, y), (-1, 0), goal).is_some();
				if turns {
					return Some(here);
				}
			}
		}
		x += dx;
		y += dy;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{FinderConfig, Grid};

	fn jump_points(grid: &Grid, policy: DiagonalMovement, start: Point, goal: Point) -> Option<Vec<Point>> {
		let config = FinderConfig {
			diagonal_movement: policy,
			..Default::default()
		};
		let mut observer = ();
		let mut ctx = Context::new(grid, &config, 1.0, &mut observer);
		jump_point_search(&mut ctx, start, goal)
	}

	#[test]
	fn open_grid_is_a_single_jump() {
		let grid = Grid::new(6, 6).unwrap();
		for policy in [
			DiagonalMovement::Always,
			DiagonalMovement::IfAtMostOneObstacle,
			DiagonalMovement::OnlyWhenNoObstacles,
		] {
			assert_eq!(
				jump_points(&grid, policy, (0, 0), (5, 5)),
				Some(vec![(0, 0), (5, 5)])
			);
		}
		assert_eq!(
			jump_points(&grid, DiagonalMovement::Never, (0, 3), (5, 3)),
			Some(vec![(0, 3), (5, 3)])
		);
	}

	#[test]
	fn turns_at_forced_neighbors() {
		// . . . . .
		// . # # # .
		// . . . # .
		// . . . # .
		let matrix = [
			[0, 0, 0, 0, 0],
			[0, 1, 1, 1, 0],
			[0, 0, 0, 1, 0],
			[0, 0, 0, 1, 0],
		];
		let grid = Grid::from_matrix(5, 4, &matrix).unwrap();
		for policy in [
			DiagonalMovement::Never,
			DiagonalMovement::Always,
			DiagonalMovement::IfAtMostOneObstacle,
			DiagonalMovement::OnlyWhenNoObstacles,
		] {
			let points = jump_points(&grid, policy, (1, 3), (4, 3)).expect("reachable");
			assert_eq!(points.first(), Some(&(1, 3)));
			assert_eq!(points.last(), Some(&(4, 3)));
			// every leg is a straight or 45° line
			for w in points.windows(2) {
				let dx = w[0].0.abs_diff(w[1].0);
				let dy = w[0].1.abs_diff(w[1].1);
				assert!(dx == 0 || dy == 0 || dx == dy, "{:?}: {:?}", policy, w);
			}
		}
	}

	#[test]
	fn walled_off() {
		let matrix = [[0, 1, 0], [0, 1, 0], [0, 1, 0]];
		let grid = Grid::from_matrix(3, 3, &matrix).unwrap();
		assert_eq!(
			jump_points(&grid, DiagonalMovement::Always, (0, 0), (2, 2)),
			None
		);
	}
}
