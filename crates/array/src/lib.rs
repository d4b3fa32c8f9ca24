#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![no_std]

extern crate alloc;

mod error;

use alloc::{boxed::Box, vec, vec::Vec};
use core::{
	fmt::{Debug, Formatter, Result as FmtResult},
	iter::FusedIterator,
	mem, slice,
};

pub use self::error::*;

/// A fixed-length array that reads as if every slot had been set to a default
/// value, while only ever touching the slots that are actually written.
///
/// Written slots live in an append-only log of `(index, value)` entries, and
/// `positions[i]` points at slot `i`'s entry. A position only counts when the
/// entry it points at names `i` back, so the positions table never needs to be
/// initialized or reset.
///
/// There is no `Clone` impl, since a copy would have to visit all `len()`
/// slots. Build a new array and copy what [`iter`] yields instead.
///
/// [`iter`]: Self::iter
pub struct ConstInitArray<T> {
	default: T,
	positions: Box<[usize]>,
	log: Vec<Entry<T>>,
}

impl<T> ConstInitArray<T> {
	/// Creates an array of `len` slots, each reading as `default` until written.
	pub fn new(len: usize, default: T) -> Result<Self, ArrayError> {
		if len == 0 {
			return Err(ArrayError::InvalidSize);
		}

		Ok(Self {
			default,
			// zeroed, so this is a single calloc rather than a fill
			positions: vec![0; len].into_boxed_slice(),
			log: Vec::with_capacity(len),
		})
	}

	#[must_use]
	pub const fn len(&self) -> usize {
		self.positions.len()
	}

	#[must_use]
	pub const fn is_empty(&self) -> bool {
		self.positions.is_empty()
	}

	/// The number of slots that have been explicitly written.
	#[must_use]
	pub const fn initialized_len(&self) -> usize {
		self.log.len()
	}

	#[must_use]
	pub const fn default_value(&self) -> &T {
		&self.default
	}

	#[must_use]
	pub fn is_initialized(&self, index: usize) -> bool {
		self.position(index).is_some()
	}

	/// Returns the value at `index`, or the default if it was never written.
	///
	/// Never initializes the slot.
	pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
		self.check_bounds(index)?;

		Ok(self
			.position(index)
			.map_or(&self.default, |pos| &self.log[pos].value))
	}

	pub fn set(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
		self.replace(index, value).map(|_| ())
	}

	/// Writes `value` at `index` and hands back whatever was explicitly written
	/// there before, if anything.
	pub fn replace(&mut self, index: usize, value: T) -> Result<Option<T>, ArrayError> {
		self.check_bounds(index)?;

		if let Some(pos) = self.position(index) {
			return Ok(Some(mem::replace(&mut self.log[pos].value, value)));
		}

		self.push(index, value);
		Ok(None)
	}

	/// Returns every slot to the default. Drops only the written values.
	pub fn clear(&mut self) {
		self.log.clear();
	}

	/// Iterates the written slots in the order they were first written.
	pub fn iter(&self) -> Iter<'_, T> {
		Iter {
			inner: self.log.iter(),
		}
	}

	const fn check_bounds(&self, index: usize) -> Result<(), ArrayError> {
		if index < self.len() {
			Ok(())
		} else {
			Err(ArrayError::IndexOutOfBounds {
				index,
				len: self.len(),
			})
		}
	}

	fn position(&self, index: usize) -> Option<usize> {
		let pos = *self.positions.get(index)?;

		self.log
			.get(pos)
			.is_some_and(|entry| entry.index == index)
			.then_some(pos)
	}

	fn push(&mut self, index: usize, value: T) -> usize {
		// at most one entry per slot, so this never outgrows the reservation
		let pos = self.log.len();
		self.log.push(Entry { index, value });
		self.positions[index] = pos;
		pos
	}
}

impl<T: Clone> ConstInitArray<T> {
	/// Returns a mutable reference to the slot at `index`, writing the default
	/// into it first if it was never written.
	pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
		self.check_bounds(index)?;

		let pos = if let Some(pos) = self.position(index) {
			pos
		} else {
			let value = self.default.clone();
			self.push(index, value)
		};

		Ok(&mut self.log[pos].value)
	}

	pub fn read(&self, index: usize) -> Result<T, ArrayError> {
		self.get(index).cloned()
	}
}

impl<T: Debug> Debug for ConstInitArray<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		f.debug_map().entries(self.iter()).finish()
	}
}

impl<'a, T> IntoIterator for &'a ConstInitArray<T> {
	type IntoIter = Iter<'a, T>;
	type Item = (usize, &'a T);

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

struct Entry<T> {
	index: usize,
	value: T,
}

pub struct Iter<'a, T> {
	inner: slice::Iter<'a, Entry<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
	type Item = (usize, &'a T);

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(|entry| (entry.index, &entry.value))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
	fn next_back(&mut self) -> Option<Self::Item> {
		self.inner.next_back().map(|entry| (entry.index, &entry.value))
	}
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
	use alloc::{
		borrow::ToOwned as _,
		format,
		string::String,
		vec::Vec,
	};
	use core::cell::Cell;

	use super::{ArrayError, ConstInitArray};

	#[derive(Clone)]
	struct DropCounter<'a>(&'a Cell<usize>);

	impl Drop for DropCounter<'_> {
		fn drop(&mut self) {
			self.0.set(self.0.get() + 1);
		}
	}

	#[test]
	fn zero_length_is_rejected() {
		assert_eq!(
			ConstInitArray::new(0, 0u8).err(),
			Some(ArrayError::InvalidSize)
		);
	}

	#[test]
	fn unwritten_slots_read_as_default() {
		let array = ConstInitArray::new(10, 7i32).unwrap();

		for i in 0..10 {
			assert_eq!(array.get(i), Ok(&7));
		}

		assert_eq!(array.initialized_len(), 0);
		assert_eq!(array.len(), 10);
	}

	#[test]
	fn reads_do_not_initialize() {
		let array = ConstInitArray::new(4, "unset".to_owned()).unwrap();

		assert_eq!(array.read(2).unwrap(), "unset");
		assert!(!array.is_initialized(2));
		assert_eq!(array.iter().count(), 0);
	}

	#[test]
	fn writes_read_back() {
		let mut array = ConstInitArray::new(8, 0u64).unwrap();

		array.set(3, 30).unwrap();
		*array.get_mut(5).unwrap() += 5;
		*array.get_mut(3).unwrap() += 1;
		assert_eq!(array.replace(5, 50), Ok(Some(5)));
		assert_eq!(array.replace(6, 60), Ok(None));

		assert_eq!(array.get(3), Ok(&31));
		assert_eq!(array.get(5), Ok(&50));
		assert_eq!(array.get(6), Ok(&60));
		assert_eq!(array.get(4), Ok(&0));
		assert_eq!(array.initialized_len(), 3);
	}

	#[test]
	fn get_mut_initializes_once() {
		let mut array = ConstInitArray::new(3, 1u8).unwrap();

		*array.get_mut(1).unwrap() = 9;
		assert_eq!(*array.get_mut(1).unwrap(), 9);
		assert!(array.is_initialized(1));
		assert_eq!(array.initialized_len(), 1);
	}

	#[test]
	fn out_of_bounds() {
		let mut array = ConstInitArray::new(5, 'x').unwrap();
		let expected = ArrayError::IndexOutOfBounds { index: 5, len: 5 };

		assert_eq!(array.get(5), Err(expected));
		assert_eq!(array.set(5, 'y'), Err(expected));
		assert_eq!(array.get_mut(5).err(), Some(expected));
		assert_eq!(
			array.get(usize::MAX).err(),
			Some(ArrayError::IndexOutOfBounds {
				index: usize::MAX,
				len: 5
			})
		);
		assert!(!array.is_initialized(1000));
		assert_eq!(array.initialized_len(), 0);
	}

	#[test]
	fn large_arrays_stay_sparse() {
		let mut array = ConstInitArray::new(1 << 22, 0u32).unwrap();

		array.set((1 << 22) - 1, 1).unwrap();
		array.set(0, 2).unwrap();

		assert_eq!(array.get(12_345), Ok(&0));
		assert_eq!(array.iter().collect::<Vec<_>>(), [((1 << 22) - 1, &1), (0, &2)]);
	}

	#[test]
	fn clear_does_not_resurrect_stale_positions() {
		let mut array = ConstInitArray::new(6, 0i8).unwrap();

		array.set(4, 40).unwrap();
		array.set(2, 20).unwrap();
		array.clear();

		assert_eq!(array.get(4), Ok(&0));
		assert_eq!(array.get(2), Ok(&0));

		array.set(1, 10).unwrap();

		// slot 4 still records position 0, which is now slot 1's entry
		assert!(!array.is_initialized(4));
		assert_eq!(array.get(4), Ok(&0));
		assert_eq!(array.get(1), Ok(&10));
	}

	#[test]
	fn only_written_slots_are_dropped() {
		let drops = Cell::new(0);

		{
			let mut array = ConstInitArray::new(100_000, DropCounter(&drops)).unwrap();
			array.set(17, DropCounter(&drops)).unwrap();
			array.set(99_999, DropCounter(&drops)).unwrap();
			array.get_mut(500).unwrap();
			assert_eq!(drops.get(), 0);
		}

		// three written slots and the default
		assert_eq!(drops.get(), 4);
	}

	#[test]
	fn debug_lists_written_slots() {
		let mut array = ConstInitArray::new(4, String::new()).unwrap();

		array.set(2, "two".to_owned()).unwrap();
		array.set(0, "zero".to_owned()).unwrap();

		assert_eq!(format!("{array:?}"), r#"{2: "two", 0: "zero"}"#);
	}
}
