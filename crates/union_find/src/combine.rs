use std::{cmp::Ordering, ops::Add};

/// Merges the data of two sets on union.
///
/// `larger` always belongs to the set that survives as the root. On a size
/// tie that is the second argument passed to
/// [`union`](crate::DisjointSet::union).
pub trait Combine<T> {
	fn combine(&self, larger: T, smaller: T) -> T;
}

impl<T, F> Combine<T> for F
where
	F: Fn(T, T) -> T,
{
	fn combine(&self, larger: T, smaller: T) -> T {
		self(larger, smaller)
	}
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sum;

impl<T: Add<Output = T>> Combine<T> for Sum {
	fn combine(&self, larger: T, smaller: T) -> T {
		larger + smaller
	}
}

/// Keeps the greater value, preferring `larger` when they compare equal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Max;

impl<T: Ord> Combine<T> for Max {
	fn combine(&self, larger: T, smaller: T) -> T {
		match larger.cmp(&smaller) {
			Ordering::Less => smaller,
			Ordering::Equal | Ordering::Greater => larger,
		}
	}
}

/// Keeps the lesser value, preferring `larger` when they compare equal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Min;

impl<T: Ord> Combine<T> for Min {
	fn combine(&self, larger: T, smaller: T) -> T {
		match larger.cmp(&smaller) {
			Ordering::Greater => smaller,
			Ordering::Equal | Ordering::Less => larger,
		}
	}
}

/// Keeps the surviving root's data and drops the absorbed set's.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeepLarger;

impl<T> Combine<T> for KeepLarger {
	fn combine(&self, larger: T, _: T) -> T {
		larger
	}
}
