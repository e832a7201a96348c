use super::context::Context;
use super::state::{open_list, SearchState};
use super::SearchObserver;
use crate::heuristic::euclidean;
use crate::neighbors::step_cost;
use crate::path::backtrace;
use crate::Point;

/// The generalized A* loop shared by A*, Dijkstra, Best-First and Theta*.
///
/// The heuristic scaling that distinguishes A*, Dijkstra and Best-First is already part of the
/// [`Context`]. With `any_angle` set, every neighbor is first offered a direct route from the
/// parent of the current Cell (Theta*), which makes the result a list of waypoints rather than a
/// step-by-step Path.
pub(crate) fn a_star_search<O: SearchObserver>(
	ctx: &mut Context<O>,
	start: Point,
	goal: Point,
	any_angle: bool,
) -> Option<Vec<Point>> {
	let mut state = SearchState::new(ctx.grid);
	let mut open = open_list(ctx.grid.width() + ctx.grid.height());

	let h = ctx.h(start, goal);
	state.open_root(&mut open, ctx.observer, start, h);

	let mut neighbors = Vec::with_capacity(8);

	while let Some(current) = state.close_next(&mut open, ctx.observer) {
		ctx.expanded += 1;
		if current == goal {
			return Some(backtrace(goal, |p| state.parent(p)));
		}

		let current_g = state.node(current).g;
		let grandparent = if any_angle {
			state.parent(current)
		} else {
			None
		};

		neighbors.clear();
		ctx.neighbors_into(current, &mut neighbors);
		for &next in neighbors.iter() {
			let (parent, g) = match grandparent {
				Some(p) if ctx.line_of_sight(p, next) => {
					let dx = p.0.abs_diff(next.0) as f64;
					let dy = p.1.abs_diff(next.1) as f64;
					(p, state.node(p).g + euclidean(dx, dy))
				}
				_ => (current, current_g + step_cost(current, next)),
			};
			let h = ctx.h(next, goal);
			state.relax(&mut open, ctx.observer, next, parent, g, h);
		}
	}
	None
}
