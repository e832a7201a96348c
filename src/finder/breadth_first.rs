use super::context::Context;
use super::state::{SearchState, Status};
use super::SearchObserver;
use crate::path::backtrace;
use crate::Point;
use std::collections::VecDeque;

/// Breadth-First Search over the Grid.
///
/// Every step counts as `1`, diagonal ones included, so the result has the fewest steps but not
/// necessarily the shortest length.
pub(crate) fn breadth_first_search<O: SearchObserver>(
	ctx: &mut Context<O>,
	start: Point,
	goal: Point,
) -> Option<Vec<Point>> {
	let mut state = SearchState::new(ctx.grid);
	let mut queue = VecDeque::new();

	state.node_mut(start).status = Status::Open;
	queue.push_back(start);
	ctx.observer.opened(start);

	let mut neighbors = Vec::with_capacity(8);

	while let Some(current) = queue.pop_front() {
		state.node_mut(current).status = Status::Closed;
		ctx.observer.closed(current);
		ctx.expanded += 1;
		if current == goal {
			return Some(backtrace(goal, |p| state.parent(p)));
		}

		let depth = state.node(current).g + 1.0;
		neighbors.clear();
		ctx.neighbors_into(current, &mut neighbors);
		for &next in neighbors.iter() {
			let node = state.node_mut(next);
			if node.status != Status::Unvisited {
				continue;
			}
			node.status = Status::Open;
			node.g = depth;
			node.parent = Some(current);
			queue.push_back(next);
			ctx.observer.opened(next);
			ctx.observer.parent_changed(next, current);
		}
	}
	None
}
