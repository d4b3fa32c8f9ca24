use std::{
	error::Error,
	fmt::{Display, Formatter, Result as FmtResult},
};

use sparsefind_array::ArrayError;
use sparsefind_id::SetId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnionFindError {
	InvalidSize,
	IndexOutOfBounds { index: usize, len: usize },
	AlreadyMember(SetId),
	NotARoot(SetId),
	EmptySet(SetId),
}

impl Display for UnionFindError {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		match *self {
			Self::InvalidSize => f.write_str("disjoint set capacity must be greater than zero"),
			Self::IndexOutOfBounds { index, len } => {
				f.write_str("mapped index ")?;
				Display::fmt(&index, f)?;
				f.write_str(" is out of bounds for capacity ")?;
				Display::fmt(&len, f)?;
				f.write_str("; check the index mapping")
			}
			Self::AlreadyMember(set) => {
				f.write_str("index ")?;
				Display::fmt(&set.index(), f)?;
				f.write_str(" already belongs to a set")
			}
			Self::NotARoot(set) => {
				Display::fmt(&set, f)?;
				f.write_str(" is no longer a root; it was absorbed by a union")
			}
			Self::EmptySet(set) => {
				Display::fmt(&set, f)?;
				f.write_str(" does not exist")
			}
		}
	}
}

impl Error for UnionFindError {}

impl From<ArrayError> for UnionFindError {
	fn from(value: ArrayError) -> Self {
		match value {
			ArrayError::InvalidSize => Self::InvalidSize,
			ArrayError::IndexOutOfBounds { index, len } => Self::IndexOutOfBounds { index, len },
		}
	}
}
