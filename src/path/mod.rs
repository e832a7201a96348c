//! Paths and the utilities to build, measure and post-process them

mod line;
pub use self::line::{compress_path, expand_path, interpolate, line_of_sight, smoothen_path};
pub(crate) use self::line::walk_line;

mod trace;
pub use self::trace::{backtrace, bi_backtrace, path_length};

use crate::Point;

/// A Path on the Grid
///
/// Stores the sequence of Points from Start to Goal (both inclusive) in `path` and the total
/// length of walking that sequence in `cost`. An empty Path means that no Path exists.
///
/// Every consecutive pair of a Path returned by a [`Finder`](crate::Finder) is a single step
/// to an adjacent Cell, so `cost` is made up of orthogonal steps (`1`) and diagonal steps (`√2`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
	/// the Points of the Path
	pub path: Vec<Point>,
	/// the total length of the Path
	pub cost: f64,
}

impl Path {
	/// creates a new Path from a sequence of Points, measuring its length
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use grid_pathfinder::Path;
	/// let path = Path::new(vec![(0, 0), (1, 0), (2, 1)]);
	///
	/// assert_eq!(path.path, vec![(0, 0), (1, 0), (2, 1)]);
	/// assert_eq!(path.cost, 1.0 + 2f64.sqrt());
	/// ```
	pub fn new(path: Vec<Point>) -> Path {
		let cost = path_length(&path);
		Path { path, cost }
	}

	/// the Path that signals "no Path found"
	pub fn empty() -> Path {
		Path {
			path: vec![],
			cost: 0.0,
		}
	}

	/// the first Point, if any
	pub fn start(&self) -> Option<Point> {
		self.path.first().copied()
	}

	/// the last Point, if any
	pub fn goal(&self) -> Option<Point> {
		self.path.last().copied()
	}

	/// Returns a reversed copy of the Path.
	pub fn reversed(&self) -> Path {
		let mut path = self.path.clone();
		path.reverse();
		Path {
			path,
			cost: self.cost,
		}
	}

	/// Drops all Points that lie on a straight line between their neighbors.
	///
	/// See [`compress_path`].
	pub fn compressed(&self) -> Vec<Point> {
		compress_path(&self.path)
	}
}

use std::ops::{Deref, Index};

impl Index<usize> for Path {
	type Output = Point;
	fn index(&self, index: usize) -> &Point {
		&self.path[index]
	}
}

impl Deref for Path {
	type Target = [Point];
	fn deref(&self) -> &[Point] {
		&self.path
	}
}

impl From<Path> for Vec<Point> {
	fn from(path: Path) -> Vec<Point> {
		path.path
	}
}

impl IntoIterator for Path {
	type Item = Point;
	type IntoIter = std::vec::IntoIter<Point>;
	fn into_iter(self) -> Self::IntoIter {
		self.path.into_iter()
	}
}

impl PartialEq<Vec<Point>> for Path {
	fn eq(&self, rhs: &Vec<Point>) -> bool {
		self.path == *rhs
	}
}

impl<'a> PartialEq<&'a [Point]> for Path {
	fn eq(&self, rhs: &&'a [Point]) -> bool {
		self.path == *rhs
	}
}

use std::cmp::Ordering;

impl PartialOrd for Path {
	fn partial_cmp(&self, other: &Path) -> Option<Ordering> {
		self.cost.partial_cmp(&other.cost)
	}
}

use std::fmt;
impl fmt::Display for Path {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {:.2}]: ", self.cost)?;
		if self.path.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{:?}", self.path[0])?;
			for p in self.path.iter().skip(1) {
				write!(fmt, " -> {:?}", p)?;
			}
			Ok(())
		}
	}
}
