#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

mod combine;
mod error;

use std::{
	fmt::{Debug, Formatter, Result as FmtResult},
	mem,
};

use sparsefind_array::ConstInitArray;
pub use sparsefind_id::{Identity, IndexOf, NumericId, Offset, Ordinal, SetId};
use tracing::{debug, trace};

pub use self::{combine::*, error::*};

/// A union-find over a fixed universe of `capacity` dense indices, carrying
/// one value of `T` per set.
///
/// Identifiers are turned into indices by `M`, and the data of two sets is
/// merged by `C` whenever they are united. All three backing arrays are
/// [`ConstInitArray`]s, so building one is O(1) in the capacity and only the
/// indices actually placed into sets are ever touched.
///
/// Every fallible operation validates its arguments before it changes
/// anything, so an error leaves the partition exactly as it was.
pub struct DisjointSet<T, M = Identity, C = KeepLarger> {
	parents: ConstInitArray<Option<SetId>>,
	sizes: ConstInitArray<usize>,
	data: ConstInitArray<Option<T>>,
	mapping: M,
	combine: C,
	set_count: usize,
	member_count: usize,
}

impl<T, M, C> DisjointSet<T, M, C> {
	pub fn new(capacity: usize) -> Result<Self, UnionFindError>
	where
		M: Default,
		C: Default,
	{
		Self::with_parts(capacity, M::default(), C::default())
	}

	pub fn with_parts(capacity: usize, mapping: M, combine: C) -> Result<Self, UnionFindError> {
		let parents = ConstInitArray::new(capacity, None)?;
		let sizes = ConstInitArray::new(capacity, 0)?;
		let data = ConstInitArray::new(capacity, None)?;

		debug!(capacity, "created disjoint set");

		Ok(Self {
			parents,
			sizes,
			data,
			mapping,
			combine,
			set_count: 0,
			member_count: 0,
		})
	}

	#[must_use]
	pub const fn capacity(&self) -> usize {
		self.sizes.len()
	}

	/// The number of indices placed into some set.
	#[must_use]
	pub const fn len(&self) -> usize {
		self.member_count
	}

	#[must_use]
	pub const fn is_empty(&self) -> bool {
		matches!(self.member_count, 0)
	}

	#[must_use]
	pub const fn set_count(&self) -> usize {
		self.set_count
	}

	pub const fn mapping(&self) -> &M {
		&self.mapping
	}

	pub const fn combiner(&self) -> &C {
		&self.combine
	}

	pub fn contains<Id>(&self, id: Id) -> Result<bool, UnionFindError>
	where
		M: IndexOf<Id>,
	{
		let index = self.map(id)?;

		Ok(self.size(index)? != 0)
	}

	/// Places `id` into a new singleton set owning `data`.
	///
	/// The returned handle is the new set's root.
	pub fn make_set<Id>(&mut self, id: Id, data: T) -> Result<SetId, UnionFindError>
	where
		M: IndexOf<Id>,
	{
		let index = self.map(id)?;
		let set = SetId::from_index(index);

		if self.size(index)? != 0 {
			return Err(UnionFindError::AlreadyMember(set));
		}

		self.sizes.set(index, 1)?;
		self.data.set(index, Some(data))?;
		self.set_count += 1;
		self.member_count += 1;

		trace!(%set, "made set");

		Ok(set)
	}

	/// Returns the root of the set containing `id`, or `None` if `id` was
	/// never placed into a set.
	///
	/// Every index on the way to the root is repointed straight at it.
	pub fn find<Id>(&mut self, id: Id) -> Result<Option<SetId>, UnionFindError>
	where
		M: IndexOf<Id>,
	{
		let index = self.map(id)?;

		self.find_index(index)
	}

	/// Like [`find`](Self::find), but leaves the paths as they are.
	pub fn root<Id>(&self, id: Id) -> Result<Option<SetId>, UnionFindError>
	where
		M: IndexOf<Id>,
	{
		let index = self.map(id)?;

		self.root_of(index)
	}

	pub fn same_set<Id>(&self, a: Id, b: Id) -> Result<bool, UnionFindError>
	where
		M: IndexOf<Id>,
	{
		let a = self.root(a)?;
		let b = self.root(b)?;

		Ok(a.is_some() && a == b)
	}

	/// Merges the sets rooted at `x` and `y` and returns the surviving root.
	///
	/// The larger set survives and its data is passed to the combiner first.
	/// When both sets are the same size, `y` survives. Uniting a root with
	/// itself does nothing.
	pub fn union(&mut self, x: SetId, y: SetId) -> Result<SetId, UnionFindError>
	where
		C: Combine<T>,
	{
		self.check_root(x)?;
		self.check_root(y)?;

		if x == y {
			return Ok(x);
		}

		let (mut smaller, mut larger) = (x, y);
		if self.size(smaller.index())? > self.size(larger.index())? {
			mem::swap(&mut smaller, &mut larger);
		}

		let size = self.size(larger.index())? + self.size(smaller.index())?;

		let absorbed = self.data.replace(smaller.index(), None)?.flatten();
		let surviving = self.data.replace(larger.index(), None)?.flatten();
		let (Some(surviving), Some(absorbed)) = (surviving, absorbed) else {
			unreachable!("every root owns its data");
		};

		let merged = self.combine.combine(surviving, absorbed);

		self.data.set(larger.index(), Some(merged))?;
		self.sizes.set(larger.index(), size)?;
		self.parents.set(smaller.index(), Some(larger))?;
		self.set_count -= 1;

		trace!(root = %larger, absorbed = %smaller, size, "united sets");

		Ok(larger)
	}

	/// Finds the sets containing `a` and `b` and unites them.
	#[tracing::instrument(level = tracing::Level::TRACE, skip_all)]
	pub fn unite<Id>(&mut self, a: Id, b: Id) -> Result<SetId, UnionFindError>
	where
		M: IndexOf<Id>,
		C: Combine<T>,
	{
		let a = self.map(a)?;
		let b = self.map(b)?;

		for index in [a, b] {
			if self.size(index)? == 0 {
				return Err(UnionFindError::EmptySet(SetId::from_index(index)));
			}
		}

		let x = self
			.find_index(a)?
			.ok_or(UnionFindError::EmptySet(SetId::from_index(a)))?;
		let y = self
			.find_index(b)?
			.ok_or(UnionFindError::EmptySet(SetId::from_index(b)))?;

		self.union(x, y)
	}

	pub fn size_of(&self, root: SetId) -> Result<usize, UnionFindError> {
		self.check_root(root)?;

		self.size(root.index())
	}

	pub fn data_ref(&self, root: SetId) -> Result<&T, UnionFindError> {
		self.check_root(root)?;

		match self.data.get(root.index())? {
			Some(data) => Ok(data),
			None => unreachable!("{root} has no data"),
		}
	}

	pub fn data_of(&self, root: SetId) -> Result<T, UnionFindError>
	where
		T: Clone,
	{
		self.data_ref(root).cloned()
	}

	/// Iterates the current roots along with the sizes of their sets.
	///
	/// Only visits indices that were placed into sets.
	pub fn roots(&self) -> impl Iterator<Item = (SetId, usize)> {
		self.sizes
			.iter()
			.filter(|&(index, _)| matches!(self.parents.get(index), Ok(None)))
			.map(|(index, &size)| (SetId::from_index(index), size))
	}

	/// Empties every set, dropping their data.
	pub fn clear(&mut self) {
		self.parents.clear();
		self.sizes.clear();
		self.data.clear();

		trace!(
			sets = self.set_count,
			members = self.member_count,
			"cleared disjoint set"
		);

		self.set_count = 0;
		self.member_count = 0;
	}

	fn map<Id>(&self, id: Id) -> Result<usize, UnionFindError>
	where
		M: IndexOf<Id>,
	{
		let index = self.mapping.index_of(id);

		if index < self.capacity() {
			Ok(index)
		} else {
			Err(UnionFindError::IndexOutOfBounds {
				index,
				len: self.capacity(),
			})
		}
	}

	fn size(&self, index: usize) -> Result<usize, UnionFindError> {
		Ok(*self.sizes.get(index)?)
	}

	fn check_root(&self, set: SetId) -> Result<(), UnionFindError> {
		let index = set.index();

		if self.parents.get(index)?.is_some() {
			return Err(UnionFindError::NotARoot(set));
		}

		if self.size(index)? == 0 {
			return Err(UnionFindError::EmptySet(set));
		}

		Ok(())
	}

	fn root_of(&self, index: usize) -> Result<Option<SetId>, UnionFindError> {
		if self.size(index)? == 0 {
			return Ok(None);
		}

		let mut current = SetId::from_index(index);
		while let Some(parent) = *self.parents.get(current.index())? {
			current = parent;
		}

		Ok(Some(current))
	}

	fn find_index(&mut self, index: usize) -> Result<Option<SetId>, UnionFindError> {
		let Some(root) = self.root_of(index)? else {
			return Ok(None);
		};

		let mut current = SetId::from_index(index);
		while current != root {
			let Some(parent) = self.parents.replace(current.index(), Some(root))?.flatten() else {
				unreachable!("{current} is below {root} but has no parent");
			};

			current = parent;
		}

		Ok(Some(root))
	}
}

impl<T: Debug, M, C> Debug for DisjointSet<T, M, C> {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		f.debug_map()
			.entries(self.roots().filter_map(|(root, _)| {
				let data = self.data.get(root.index()).ok()?.as_ref()?;
				Some((root, data))
			}))
			.finish()
	}
}
