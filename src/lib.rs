#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

//! Union-find over a fixed universe of dense indices, built on arrays that
//! need no upfront initialization.
//!
//! ```
//! use sparsefind::{DisjointSet, Ordinal, Sum};
//!
//! let mut sets = DisjointSet::<u32, Ordinal, Sum>::new(1 << 20)?;
//!
//! sets.make_set(1usize, 10)?;
//! sets.make_set(2usize, 32)?;
//!
//! let root = sets.unite(1usize, 2usize)?;
//!
//! assert_eq!(sets.data_of(root)?, 42);
//! assert_eq!(sets.size_of(root)?, 2);
//! # Ok::<(), sparsefind::UnionFindError>(())
//! ```

pub use sparsefind_array::{ArrayError, ConstInitArray, Iter};
pub use sparsefind_id::{Identity, IndexOf, NumericId, Offset, Ordinal, SetId};
pub use sparsefind_union_find::{
	Combine, DisjointSet, KeepLarger, Max, Min, Sum, UnionFindError,
};
