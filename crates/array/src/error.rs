use core::{
	error::Error,
	fmt::{Display, Formatter, Result as FmtResult},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
	InvalidSize,
	IndexOutOfBounds { index: usize, len: usize },
}

impl Display for ArrayError {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		match *self {
			Self::InvalidSize => f.write_str("array length must be greater than zero"),
			Self::IndexOutOfBounds { index, len } => {
				f.write_str("index ")?;
				Display::fmt(&index, f)?;
				f.write_str(" is out of bounds for an array of length ")?;
				Display::fmt(&len, f)
			}
		}
	}
}

impl Error for ArrayError {}
