use super::context::Context;
use super::state::{open_list, OpenList, SearchState, Status};
use super::SearchObserver;
use crate::neighbors::step_cost;
use crate::path::bi_backtrace;
use crate::Point;
use std::collections::VecDeque;

/// When a bidirectional search is done
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Meeting {
	/// at the first Cell that was reached by both sides
	FirstContact,
	/// once no meeting point cheaper than the best one so far can exist
	BestContact,
}

enum Frontier {
	Heap(OpenList),
	Fifo(VecDeque<Point>),
}

/// One direction of a bidirectional search
struct Side {
	state: SearchState,
	frontier: Frontier,
	target: Point,
}

impl Side {
	fn new<O: SearchObserver>(ctx: &mut Context<O>, root: Point, target: Point, fifo: bool) -> Side {
		let mut state = SearchState::new(ctx.grid);
		let frontier = if fifo {
			state.node_mut(root).status = Status::Open;
			ctx.observer.opened(root);
			Frontier::Fifo(VecDeque::from(vec![root]))
		} else {
			let mut open = open_list(ctx.grid.width() + ctx.grid.height());
			let h = ctx.h(root, target);
			state.open_root(&mut open, ctx.observer, root, h);
			Frontier::Heap(open)
		};
		Side {
			state,
			frontier,
			target,
		}
	}

	/// the smallest priority on the frontier
	fn top(&self) -> Option<f64> {
		match &self.frontier {
			Frontier::Heap(open) => open.peek().map(|entry| entry.f),
			Frontier::Fifo(queue) => queue.front().map(|&p| self.state.node(p).g),
		}
	}

	fn g(&self, point: Point) -> f64 {
		self.state.node(point).g
	}

	fn reached(&self, point: Point) -> bool {
		self.state.status(point) != Status::Unvisited
	}

	fn pop<O: SearchObserver>(&mut self, observer: &mut O) -> Option<Point> {
		match &mut self.frontier {
			Frontier::Heap(open) => self.state.close_next(open, observer),
			Frontier::Fifo(queue) => {
				let point = queue.pop_front()?;
				self.state.node_mut(point).status = Status::Closed;
				observer.closed(point);
				Some(point)
			}
		}
	}

	fn offer<O: SearchObserver>(
		&mut self,
		observer: &mut O,
		point: Point,
		parent: Point,
		g: f64,
		h: f64,
	) {
		match &mut self.frontier {
			Frontier::Heap(open) => {
				self.state.relax(open, observer, point, parent, g, h);
			}
			Frontier::Fifo(queue) => {
				let node = self.state.node_mut(point);
				if node.status == Status::Unvisited {
					node.status = Status::Open;
					node.g = g;
					node.parent = Some(parent);
					queue.push_back(point);
					observer.opened(point);
					observer.parent_changed(point, parent);
				}
			}
		}
	}
}

fn join(forward: &Side, backward: &Side, a: Point, b: Point) -> Vec<Point> {
	bi_backtrace(
		a,
		|p| forward.state.parent(p),
		b,
		|p| backward.state.parent(p),
	)
}

/// Runs two searches, one from the Start and one from the Goal, expanding one Cell of each in
/// turn until they meet.
///
/// With `fifo` both sides are breadth-first and every step costs `1`; otherwise both sides use
/// the heap ordered by the heuristic scaling of the [`Context`]. The returned Path is only
/// guaranteed to be the shortest one with [`Meeting::BestContact`] and a zero heuristic.
pub(crate) fn bidirectional_search<O: SearchObserver>(
	ctx: &mut Context<O>,
	start: Point,
	goal: Point,
	fifo: bool,
	meeting: Meeting,
) -> Option<Vec<Point>> {
	let mut forward = Side::new(ctx, start, goal, fifo);
	let mut backward = Side::new(ctx, goal, start, fifo);

	// (cost, forward Cell, backward Cell) of the cheapest contact so far
	let mut best: Option<(f64, Point, Point)> = None;
	let mut neighbors = Vec::with_capacity(8);

	loop {
		for from_start in [true, false] {
			if let (Some((mu, a, b)), Some(f), Some(g)) = (best, forward.top(), backward.top()) {
				if f + g >= mu {
					return Some(join(&forward, &backward, a, b));
				}
			}

			let (this, other) = if from_start {
				(&mut forward, &backward)
			} else {
				(&mut backward, &forward)
			};

			let current = match this.pop(ctx.observer) {
				Some(current) => current,
				None => return best.map(|(_, a, b)| join(&forward, &backward, a, b)),
			};
			ctx.expanded += 1;
			let current_g = this.g(current);

			neighbors.clear();
			ctx.neighbors_into(current, &mut neighbors);
			for &next in neighbors.iter() {
				let step = if fifo { 1.0 } else { step_cost(current, next) };

				if other.reached(next) {
					let (a, b) = if from_start {
						(current, next)
					} else {
						(next, current)
					};
					if meeting == Meeting::FirstContact {
						return Some(join(&forward, &backward, a, b));
					}
					let cost = current_g + step + other.g(next);
					if best.map_or(true, |(mu, _, _)| cost < mu) {
						best = Some((cost, a, b));
					}
				}

				let h = ctx.h(next, this.target);
				this.offer(ctx.observer, next, current, current_g + step, h);
			}
		}
	}
}
