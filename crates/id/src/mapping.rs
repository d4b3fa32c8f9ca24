use super::NumericId;

/// Maps caller identifiers onto dense indices in `0..n`.
///
/// Implementations should be injective over the identifiers actually used.
/// Only the range of the result is ever checked; aliasing goes unnoticed.
pub trait IndexOf<Id> {
	fn index_of(&self, id: Id) -> usize;
}

impl<Id, F> IndexOf<Id> for F
where
	F: Fn(Id) -> usize,
{
	fn index_of(&self, id: Id) -> usize {
		self(id)
	}
}

/// Uses the identifier's own index.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Identity;

impl<K: NumericId> IndexOf<K> for Identity {
	fn index_of(&self, id: K) -> usize {
		id.index()
	}
}

/// Maps one-based identifiers `1..=n` onto `0..n`.
///
/// `0` wraps around to `usize::MAX`, which is always out of bounds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Ordinal;

impl<K: NumericId> IndexOf<K> for Ordinal {
	fn index_of(&self, id: K) -> usize {
		id.index().wrapping_sub(1)
	}
}

/// Maps identifiers starting at `base` onto `0..n`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct Offset(pub usize);

impl<K: NumericId> IndexOf<K> for Offset {
	fn index_of(&self, id: K) -> usize {
		id.index().wrapping_sub(self.0)
	}
}
