#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

mod mapping;

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

pub use self::mapping::*;

/// An integer-like identifier with a dense index.
///
/// Values that do not fit in a `usize` saturate to `usize::MAX`, which no
/// capacity can hold.
pub trait NumericId: Copy {
	fn index(self) -> usize;
}

impl NumericId for usize {
	fn index(self) -> usize {
		self
	}
}

impl NumericId for u16 {
	fn index(self) -> usize {
		usize::from(self)
	}
}

impl NumericId for u32 {
	fn index(self) -> usize {
		usize::try_from(self).unwrap_or(usize::MAX)
	}
}

impl NumericId for u64 {
	fn index(self) -> usize {
		usize::try_from(self).unwrap_or(usize::MAX)
	}
}

/// Names a set by the dense index of its root.
///
/// A handle only stays a root until the set is absorbed by a later union, so
/// it should not be held across unions.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct SetId(usize);

impl SetId {
	#[must_use]
	pub const fn from_index(index: usize) -> Self {
		Self(index)
	}

	#[must_use]
	pub const fn index(self) -> usize {
		self.0
	}
}

impl NumericId for SetId {
	fn index(self) -> usize {
		self.0
	}
}

impl Debug for SetId {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		f.write_str("SetId(")?;
		Debug::fmt(&self.0, f)?;
		f.write_str(")")
	}
}

impl Display for SetId {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		f.write_str("set ")?;
		Display::fmt(&self.0, f)
	}
}

impl From<SetId> for usize {
	fn from(value: SetId) -> Self {
		value.0
	}
}

#[cfg(test)]
mod tests {
	use super::{NumericId, SetId};

	#[test]
	fn set_id_keeps_its_index() {
		let id = SetId::from_index(41);

		assert_eq!(id.index(), 41);
		assert_eq!(NumericId::index(id), 41);
		assert_eq!(usize::from(id), 41);
	}

	#[test]
	fn integer_ids_widen() {
		assert_eq!(7u16.index(), 7);
		assert_eq!(u32::MAX.index(), u32::MAX as usize);
		assert_eq!(u64::from(u32::MAX).index(), u32::MAX as usize);
	}

	#[cfg(target_pointer_width = "32")]
	#[test]
	fn oversized_ids_saturate() {
		assert_eq!(u64::MAX.index(), usize::MAX);
	}

	#[test]
	fn formatting() {
		assert_eq!(format!("{:?}", SetId::from_index(3)), "SetId(3)");
		assert_eq!(SetId::from_index(3).to_string(), "set 3");
	}
}
