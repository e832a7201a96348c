use super::context::Context;
use super::SearchObserver;
use crate::neighbors::step_cost;
use crate::{Point, PointMap};
use std::time::Instant;

/// The configured time limit ran out before IDA* could decide the search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TimedOut;

enum Probe {
	Found,
	/// the smallest `f` that exceeded the cutoff (infinite if nothing did)
	Exceeded(f64),
	TimedOut,
}

struct IdaStar<'c, 'a, O> {
	ctx: &'c mut Context<'a, O>,
	goal: Point,
	deadline: Option<Instant>,
	route: Vec<Point>,
	on_route: Vec<bool>,
	retain_count: PointMap<usize>,
}

/// Iterative deepening A*.
///
/// Runs depth-first searches bounded by an `f` cutoff, starting at the heuristic of the Start.
/// Every failed iteration raises the cutoff to the smallest `f` that exceeded it, until the Goal
/// is found or nothing exceeds the cutoff anymore. A Cell is never visited twice on the same
/// route.
pub(crate) fn ida_star_search<O: SearchObserver>(
	ctx: &mut Context<O>,
	start: Point,
	goal: Point,
) -> Result<Option<Vec<Point>>, TimedOut> {
	let deadline = ctx
		.config
		.time_limit
		.and_then(|limit| Instant::now().checked_add(limit));
	let cells = ctx.grid.width() * ctx.grid.height();
	let mut cutoff = ctx.h(start, goal);

	let mut search = IdaStar {
		ctx,
		goal,
		deadline,
		route: Vec::new(),
		on_route: vec![false; cells],
		retain_count: PointMap::default(),
	};

	#[cfg(feature = "log")]
	let mut iteration = 0;

	loop {
		search.route.clear();
		search.route.push(start);
		search.on_route.iter_mut().for_each(|b| *b = false);
		let index = search.ctx.grid.index(start);
		search.on_route[index] = true;

		match search.probe(start, 0.0, cutoff) {
			Probe::Found => return Ok(Some(search.route)),
			Probe::TimedOut => return Err(TimedOut),
			Probe::Exceeded(next) if next.is_infinite() => return Ok(None),
			Probe::Exceeded(next) => {
				#[cfg(feature = "log")]
				{
					iteration += 1;
				}
				log_trace!("IDA* iteration {}: cutoff {} -> {}", iteration, cutoff, next);
				cutoff = next;
			}
		}
	}
}

impl<O: SearchObserver> IdaStar<'_, '_, O> {
	fn probe(&mut self, point: Point, g: f64, cutoff: f64) -> Probe {
		self.ctx.expanded += 1;
		if let Some(deadline) = self.deadline {
			if Instant::now() >= deadline {
				return Probe::TimedOut;
			}
		}

		let f = g + self.ctx.h(point, self.goal);
		if f > cutoff {
			return Probe::Exceeded(f);
		}
		if point == self.goal {
			return Probe::Found;
		}

		let mut neighbors = Vec::with_capacity(8);
		self.ctx.neighbors_into(point, &mut neighbors);

		let mut min = f64::INFINITY;
		for next in neighbors {
			let index = self.ctx.grid.index(next);
			if self.on_route[index] {
				continue;
			}
			self.enter(next);

			match self.probe(next, g + step_cost(point, next), cutoff) {
				Probe::Found => return Probe::Found,
				Probe::TimedOut => return Probe::TimedOut,
				Probe::Exceeded(t) => min = min.min(t),
			}

			self.leave(next);
		}
		Probe::Exceeded(min)
	}

	fn enter(&mut self, point: Point) {
		let index = self.ctx.grid.index(point);
		self.on_route[index] = true;
		self.route.push(point);
		if self.ctx.config.track_recursion {
			let count = self.retain_count.entry(point).or_insert(0);
			*count += 1;
			if *count == 1 {
				self.ctx.observer.tested(point, true);
			}
		}
	}

	fn leave(&mut self, point: Point) {
		let index = self.ctx.grid.index(point);
		self.on_route[index] = false;
		self.route.pop();
		if self.ctx.config.track_recursion {
			if let Some(count) = self.retain_count.get_mut(&point) {
				*count -= 1;
				if *count == 0 {
					self.retain_count.remove(&point);
					self.ctx.observer.tested(point, false);
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{FinderConfig, Grid, Recorder, SearchEvent};
	use std::time::Duration;

	#[test]
	fn finds_detour() {
		// . . .
		// # # .
		// . . .
		let matrix = [[0, 0, 0], [1, 1, 0], [0, 0, 0]];
		let grid = Grid::from_matrix(3, 3, &matrix).unwrap();
		let config = FinderConfig::default();
		let mut observer = ();
		let mut ctx = Context::new(&grid, &config, 1.0, &mut observer);

		let route = ida_star_search(&mut ctx, (0, 0), (0, 2)).unwrap();
		assert_eq!(
			route,
			Some(vec![(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2)])
		);
	}

	#[test]
	fn unreachable() {
		let matrix = [[0, 1, 0], [0, 1, 0]];
		let grid = Grid::from_matrix(3, 2, &matrix).unwrap();
		let config = FinderConfig::DIAGONAL;
		let mut observer = ();
		let mut ctx = Context::new(&grid, &config, 1.0, &mut observer);

		assert_eq!(ida_star_search(&mut ctx, (0, 0), (2, 1)), Ok(None));
	}

	#[test]
	fn zero_time_limit() {
		let grid = Grid::new(8, 8).unwrap();
		let config = FinderConfig {
			time_limit: Some(Duration::ZERO),
			..FinderConfig::default()
		};
		let mut observer = ();
		let mut ctx = Context::new(&grid, &config, 1.0, &mut observer);

		assert_eq!(ida_star_search(&mut ctx, (0, 0), (7, 7)), Err(TimedOut));
	}

	#[test]
	fn recursion_tracking_is_balanced() {
		let matrix = [[0, 0, 0], [0, 1, 0], [0, 0, 0]];
		let grid = Grid::from_matrix(3, 3, &matrix).unwrap();
		let config = FinderConfig {
			track_recursion: true,
			..FinderConfig::default()
		};
		let mut recorder = Recorder::new();
		let mut ctx = Context::new(&grid, &config, 1.0, &mut recorder);
		let route = ida_star_search(&mut ctx, (0, 0), (2, 2)).unwrap().unwrap();

		let mut depth: PointMap<i32> = PointMap::default();
		for event in &recorder.events {
			if let SearchEvent::Tested { point, tested } = *event {
				*depth.entry(point).or_insert(0) += if tested { 1 } else { -1 };
			}
		}
		// only the Cells on the final route are still on the recursion stack
		for (point, count) in depth {
			let on_route = route[1..].contains(&point);
			assert_eq!(count, on_route as i32, "{:?}", point);
		}
	}
}
