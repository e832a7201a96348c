//! A binary min-heap with a custom ordering and in-place priority updates
//!
//! This is the open list of every heap based search. Unlike [`std::collections::BinaryHeap`],
//! every pushed item gets a [`Handle`] that keeps track of its position in the heap, so an item
//! whose priority changed can be moved to its new place in `O(log n)` instead of rebuilding the
//! whole heap.

use slab::Slab;
use std::fmt;

/// Errors returned by [`BinaryHeap`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeapError {
	/// `pop` or `replace` was called on an empty heap
	EmptyQueue,
	/// the Handle does not belong to an item in the heap (anymore)
	StaleHandle,
}

impl fmt::Display for HeapError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			HeapError::EmptyQueue => write!(f, "the queue is empty"),
			HeapError::StaleHandle => write!(f, "the handle does not point to a queued item"),
		}
	}
}

impl std::error::Error for HeapError {}

/// Identifies an item inside a [`BinaryHeap`].
///
/// A Handle stays valid until its item is popped or replaced. After that, the same Handle may be
/// reused for a newly pushed item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Handle(usize);

#[derive(Debug)]
struct Slot<T> {
	item: T,
	pos: usize,
}

/// The ordering used by [`BinaryHeap::min_heap`]
pub type NaturalOrder<T> = fn(&T, &T) -> bool;

/// A binary min-heap ordered by a comparator `before(a, b)`, meaning "`a` sorts before `b`".
///
/// ## Examples
/// ```
/// use grid_pathfinder::heap::BinaryHeap;
///
/// let mut heap = BinaryHeap::new(|a: &(char, u32), b: &(char, u32)| a.1 < b.1);
/// heap.push(('a', 5));
/// let b = heap.push(('b', 7));
/// heap.push(('c', 6));
///
/// // 'b' got cheaper
/// heap.get_mut(b).unwrap().1 = 1;
/// heap.update_item(b).unwrap();
///
/// assert_eq!(heap.pop(), Ok(('b', 1)));
/// assert_eq!(heap.pop(), Ok(('a', 5)));
/// assert_eq!(heap.pop(), Ok(('c', 6)));
/// assert!(heap.pop().is_err());
/// ```
pub struct BinaryHeap<T, F = NaturalOrder<T>> {
	slots: Slab<Slot<T>>,
	heap: Vec<usize>,
	before: F,
}

impl<T: PartialOrd> BinaryHeap<T, NaturalOrder<T>> {
	/// A heap that pops the smallest item first according to `PartialOrd`
	pub fn min_heap() -> BinaryHeap<T, NaturalOrder<T>> {
		BinaryHeap::new(|a: &T, b: &T| a < b)
	}
}

impl<T, F: Fn(&T, &T) -> bool> BinaryHeap<T, F> {
	/// Creates an empty heap with the given ordering.
	pub fn new(before: F) -> BinaryHeap<T, F> {
		BinaryHeap {
			slots: Slab::new(),
			heap: Vec::new(),
			before,
		}
	}

	/// Creates an empty heap with room for `capacity` items.
	pub fn with_capacity(capacity: usize, before: F) -> BinaryHeap<T, F> {
		BinaryHeap {
			slots: Slab::with_capacity(capacity),
			heap: Vec::with_capacity(capacity),
			before,
		}
	}

	/// number of queued items
	pub fn len(&self) -> usize {
		self.heap.len()
	}

	/// `true` if no items are queued
	pub fn is_empty(&self) -> bool {
		self.heap.is_empty()
	}

	/// Adds an item and returns the Handle to refer to it later.
	pub fn push(&mut self, item: T) -> Handle {
		let pos = self.heap.len();
		let key = self.slots.insert(Slot { item, pos });
		self.heap.push(key);
		self.sift_up(pos);
		Handle(key)
	}

	/// Removes and returns the smallest item.
	///
	/// Fails with [`HeapError::EmptyQueue`] if the heap is empty.
	pub fn pop(&mut self) -> Result<T, HeapError> {
		if self.heap.is_empty() {
			return Err(HeapError::EmptyQueue);
		}
		let key = self.heap.swap_remove(0);
		if !self.heap.is_empty() {
			self.slots[self.heap[0]].pos = 0;
			self.sift_down(0);
		}
		Ok(self.slots.remove(key).item)
	}

	/// The smallest item, if any
	pub fn peek(&self) -> Option<&T> {
		self.heap.first().map(|&key| &self.slots[key].item)
	}

	/// Pops the smallest item and pushes `item` in a single sift.
	///
	/// Returns the popped item together with the Handle of the new item. Fails with
	/// [`HeapError::EmptyQueue`] if there is nothing to pop.
	pub fn replace(&mut self, item: T) -> Result<(T, Handle), HeapError> {
		if self.heap.is_empty() {
			return Err(HeapError::EmptyQueue);
		}
		let key = self.slots.insert(Slot { item, pos: 0 });
		let old = std::mem::replace(&mut self.heap[0], key);
		self.sift_down(0);
		Ok((self.slots.remove(old).item, Handle(key)))
	}

	/// `true` if the Handle refers to a queued item
	pub fn contains(&self, handle: Handle) -> bool {
		self.slots.contains(handle.0)
	}

	/// The item behind a Handle
	pub fn get(&self, handle: Handle) -> Option<&T> {
		self.slots.get(handle.0).map(|slot| &slot.item)
	}

	/// Mutable access to the item behind a Handle.
	///
	/// If the change affects the ordering, [`update_item`](BinaryHeap::update_item) has to be
	/// called afterwards.
	pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
		self.slots.get_mut(handle.0).map(|slot| &mut slot.item)
	}

	/// Restores the heap order after the item behind `handle` was changed in place.
	pub fn update_item(&mut self, handle: Handle) -> Result<(), HeapError> {
		let pos = self
			.slots
			.get(handle.0)
			.ok_or(HeapError::StaleHandle)?
			.pos;
		let pos = self.sift_up(pos);
		self.sift_down(pos);
		Ok(())
	}

	/// Removes all items. Every Handle becomes stale.
	pub fn clear(&mut self) {
		self.slots.clear();
		self.heap.clear();
	}

	fn is_before(&self, a: usize, b: usize) -> bool {
		(self.before)(&self.slots[self.heap[a]].item, &self.slots[self.heap[b]].item)
	}

	fn swap(&mut self, a: usize, b: usize) {
		self.heap.swap(a, b);
		self.slots[self.heap[a]].pos = a;
		self.slots[self.heap[b]].pos = b;
	}

	fn sift_up(&mut self, mut pos: usize) -> usize {
		while pos > 0 {
			let parent = (pos - 1) / 2;
			if !self.is_before(pos, parent) {
				break;
			}
			self.swap(pos, parent);
			pos = parent;
		}
		pos
	}

	fn sift_down(&mut self, mut pos: usize) {
		let len = self.heap.len();
		loop {
			let left = 2 * pos + 1;
			let right = left + 1;
			let mut smallest = pos;
			if left < len && self.is_before(left, smallest) {
				smallest = left;
			}
			if right < len && self.is_before(right, smallest) {
				smallest = right;
			}
			if smallest == pos {
				break;
			}
			self.swap(pos, smallest);
			pos = smallest;
		}
	}
}

impl<T: fmt::Debug, F> fmt::Debug for BinaryHeap<T, F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list()
			.entries(self.heap.iter().map(|&key| &self.slots[key].item))
			.finish()
	}
}
