use super::SearchObserver;
use crate::heap::{BinaryHeap, Handle};
use crate::{Grid, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Status {
	Unvisited,
	Open,
	Closed,
}

/// The per-search bookkeeping of a single Cell
#[derive(Clone, Copy, Debug)]
pub(crate) struct Node {
	pub g: f64,
	pub h: f64,
	pub status: Status,
	pub parent: Option<Point>,
	pub handle: Option<Handle>,
}

impl Node {
	const UNVISITED: Node = Node {
		g: 0.0,
		h: 0.0,
		status: Status::Unvisited,
		parent: None,
		handle: None,
	};
}

/// An entry of the open list: ordered by `f`, ties broken by the smaller `h`
#[derive(Clone, Copy, Debug)]
pub(crate) struct OpenEntry {
	pub f: f64,
	pub h: f64,
	pub point: Point,
}

impl OpenEntry {
	fn before(a: &OpenEntry, b: &OpenEntry) -> bool {
		a.f < b.f || (a.f == b.f && a.h < b.h)
	}
}

pub(crate) type OpenList = BinaryHeap<OpenEntry, fn(&OpenEntry, &OpenEntry) -> bool>;

pub(crate) fn open_list(capacity: usize) -> OpenList {
	let before: fn(&OpenEntry, &OpenEntry) -> bool = OpenEntry::before;
	BinaryHeap::with_capacity(capacity, before)
}

/// Scratch state of one search, freshly allocated per call
#[derive(Debug)]
pub(crate) struct SearchState {
	width: usize,
	nodes: Vec<Node>,
}

impl SearchState {
	pub fn new(grid: &Grid) -> SearchState {
		SearchState {
			width: grid.width(),
			nodes: vec![Node::UNVISITED; grid.width() * grid.height()],
		}
	}

	pub fn node(&self, (x, y): Point) -> &Node {
		&self.nodes[y * self.width + x]
	}

	pub fn node_mut(&mut self, (x, y): Point) -> &mut Node {
		&mut self.nodes[y * self.width + x]
	}

	pub fn status(&self, point: Point) -> Status {
		self.node(point).status
	}

	pub fn parent(&self, point: Point) -> Option<Point> {
		self.node(point).parent
	}

	/// Puts the root of a search on the open list.
	pub fn open_root<O: SearchObserver>(
		&mut self,
		open: &mut OpenList,
		observer: &mut O,
		point: Point,
		h: f64,
	) {
		let handle = open.push(OpenEntry { f: h, h, point });
		*self.node_mut(point) = Node {
			g: 0.0,
			h,
			status: Status::Open,
			parent: None,
			handle: Some(handle),
		};
		observer.opened(point);
	}

	/// Pops the best entry of the open list and marks it as closed.
	pub fn close_next<O: SearchObserver>(
		&mut self,
		open: &mut OpenList,
		observer: &mut O,
	) -> Option<Point> {
		let point = open.pop().ok()?.point;
		let node = self.node_mut(point);
		node.status = Status::Closed;
		node.handle = None;
		observer.closed(point);
		Some(point)
	}

	/// Offers `point` a route of cost `g` through `parent`.
	///
	/// Unvisited Cells are opened with the heuristic value `h`, open Cells are updated in place
	/// if the new route is cheaper, closed Cells are left alone. Returns `true` if the route was
	/// taken.
	pub fn relax<O: SearchObserver>(
		&mut self,
		open: &mut OpenList,
		observer: &mut O,
		point: Point,
		parent: Point,
		g: f64,
		h: f64,
	) -> bool {
		let node = self.node_mut(point);
		match node.status {
			Status::Closed => return false,
			Status::Open if g >= node.g => return false,
			Status::Open => {
				node.g = g;
				node.parent = Some(parent);
				if let Some(handle) = node.handle {
					if let Some(entry) = open.get_mut(handle) {
						entry.f = g + node.h;
					}
					let updated = open.update_item(handle);
					debug_assert!(updated.is_ok(), "open Cell without a heap entry");
				}
			}
			Status::Unvisited => {
				node.g = g;
				node.h = h;
				node.parent = Some(parent);
				node.status = Status::Open;
				node.handle = Some(open.push(OpenEntry { f: g + h, h, point }));
				observer.opened(point);
			}
		}
		observer.parent_changed(point, parent);
		true
	}
}
