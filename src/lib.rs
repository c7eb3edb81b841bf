//! # shelfdb
//!
//! Embedded in-memory record store with instrumented ordered indexes.
//!
//! shelfdb keeps an append-only record store consistent with two ordered
//! search structures: a unique index on the record id and a non-unique,
//! case-insensitive index on the record name. Both indexes count key
//! comparisons per operation so algorithmic cost is observable from tests.
//!
//! ## Quick Start
//!
//! ```
//! use shelfdb::prelude::*;
//!
//! let mut engine = Engine::new();
//! engine.insert(Record::new(RecordId(3), "Smith", json!({"year": 2})));
//! engine.insert(Record::new(RecordId(7), "smythe", json!({"year": 4})));
//!
//! // Point lookup with its comparison cost
//! let found = engine.find_by_id(RecordId(3))?;
//! assert_eq!(found.value.unwrap().name, "Smith");
//!
//! // Case-insensitive prefix scan, ascending by name
//! let matches = engine.prefix_by_name("SM")?;
//! assert_eq!(matches.value.len(), 2);
//!
//! // Logical delete removes the record from every query path
//! engine.delete_by_id(RecordId(3))?;
//! assert!(engine.find_by_id(RecordId(3))?.value.is_none());
//! # Ok::<(), shelfdb::Error>(())
//! ```
//!
//! ## Pieces
//!
//! - [`Engine`] - the orchestrator: insert, delete, point/range/prefix query
//! - [`RecordStore`] - append-only backing storage
//! - [`OrderedMap`] / [`SortedVecMap`] - the index capability and its
//!   default sorted-array implementation
//!
//! ## Scope
//!
//! Single-threaded and fully in-memory: no persistence, transactions, or
//! internal locking. Callers needing shared access serialize operations
//! externally.

#![warn(missing_docs)]

pub mod prelude;

// Core types
pub use shelf_core::{Counted, Error, NameKey, Record, RecordId, Result, Rid};

// Index capability
pub use shelf_index::{OrderedMap, SortedVecMap};

// Engine
pub use shelf_engine::{Engine, RecordStore};
