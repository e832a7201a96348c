use crate::Point;

/// Receives a callback whenever a search changes the state of a Cell.
///
/// Every method has an empty default implementation, so an observer only implements what it is
/// interested in. `()` is the observer that ignores everything.
///
/// ## Examples
/// ```
/// use grid_pathfinder::{Algorithm, Finder, FinderConfig, Grid, SearchObserver, Point};
///
/// #[derive(Default)]
/// struct ClosedCounter(usize);
///
/// impl SearchObserver for ClosedCounter {
///     fn closed(&mut self, _: Point) {
///         self.0 += 1;
///     }
/// }
///
/// let grid = Grid::new(5, 5).unwrap();
/// let finder = Finder::new(Algorithm::AStar, FinderConfig::default());
///
/// let mut counter = ClosedCounter::default();
/// let report = finder.search((0, 0), (4, 0), &grid, &mut counter);
///
/// assert_eq!(counter.0, report.nodes_expanded);
/// ```
pub trait SearchObserver {
	/// `point` was added to the open list
	fn opened(&mut self, _point: Point) {}
	/// `point` was taken from the open list and expanded
	fn closed(&mut self, _point: Point) {}
	/// `point` is now reached through `parent`
	fn parent_changed(&mut self, _point: Point, _parent: Point) {}
	/// `point` was probed without being opened (jump point scans), or entered (`true`) and left
	/// (`false`) the recursion stack of IDA*
	fn tested(&mut self, _point: Point, _tested: bool) {}
}

impl SearchObserver for () {}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
	fn opened(&mut self, point: Point) {
		(**self).opened(point)
	}
	fn closed(&mut self, point: Point) {
		(**self).closed(point)
	}
	fn parent_changed(&mut self, point: Point, parent: Point) {
		(**self).parent_changed(point, parent)
	}
	fn tested(&mut self, point: Point, tested: bool) {
		(**self).tested(point, tested)
	}
}

/// A single callback of a [`SearchObserver`], as stored by a [`Recorder`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchEvent {
	/// see [`SearchObserver::opened`]
	Opened(Point),
	/// see [`SearchObserver::closed`]
	Closed(Point),
	/// see [`SearchObserver::parent_changed`]
	ParentChanged {
		/// the Cell that got a new parent
		point: Point,
		/// the new parent
		parent: Point,
	},
	/// see [`SearchObserver::tested`]
	Tested {
		/// the probed Cell
		point: Point,
		/// the new state
		tested: bool,
	},
}

/// A [`SearchObserver`] that records every event in order, e.g. to replay a search step by step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Recorder {
	/// all events so far
	pub events: Vec<SearchEvent>,
}

impl Recorder {
	/// Creates an empty Recorder.
	pub fn new() -> Recorder {
		Recorder::default()
	}

	/// all Points that were opened, in order
	pub fn opened_points(&self) -> impl Iterator<Item = Point> + '_ {
		self.events.iter().filter_map(|event| match event {
			SearchEvent::Opened(p) => Some(*p),
			_ => None,
		})
	}

	/// all Points that were closed, in order
	pub fn closed_points(&self) -> impl Iterator<Item = Point> + '_ {
		self.events.iter().filter_map(|event| match event {
			SearchEvent::Closed(p) => Some(*p),
			_ => None,
		})
	}
}

impl SearchObserver for Recorder {
	fn opened(&mut self, point: Point) {
		self.events.push(SearchEvent::Opened(point));
	}
	fn closed(&mut self, point: Point) {
		self.events.push(SearchEvent::Closed(point));
	}
	fn parent_changed(&mut self, point: Point, parent: Point) {
		self.events.push(SearchEvent::ParentChanged { point, parent });
	}
	fn tested(&mut self, point: Point, tested: bool) {
		self.events.push(SearchEvent::Tested { point, tested });
	}
}
