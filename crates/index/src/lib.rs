//! Ordered-map capability for the shelf indexes
//!
//! This crate defines the container contract the engine builds its indexes
//! on, and one implementation:
//! - [`OrderedMap`]: unique-key ordered container with create-or-overwrite
//!   insert, point lookup, erase, ascending inclusive-range traversal, and a
//!   resettable key-comparison counter
//! - [`SortedVecMap`]: sorted-array implementation with binary-search probes
//!
//! The contract deliberately says nothing about balancing: any ordered-key
//! container (balanced tree, unbalanced tree, B-tree, sorted array) can
//! satisfy it, as long as traversal is ascending and every key comparison
//! is counted.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod sorted;
pub mod traits;

pub use sorted::SortedVecMap;
pub use traits::OrderedMap;
