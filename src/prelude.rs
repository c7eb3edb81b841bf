//! Convenient imports for shelfdb.
//!
//! Re-exports the commonly used types so you can get started with a single
//! import:
//!
//! ```
//! use shelfdb::prelude::*;
//!
//! let mut engine = Engine::new();
//! engine.insert(Record::new(RecordId(1), "Ada", json!(null)));
//! ```

// Engine and storage
pub use crate::{Engine, RecordStore};

// Error handling
pub use crate::{Error, Result};

// Core types
pub use crate::{Counted, NameKey, Record, RecordId, Rid};

// Index capability
pub use crate::{OrderedMap, SortedVecMap};

// Re-export serde_json for convenience
pub use serde_json::json;
