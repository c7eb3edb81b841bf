//! The stored record row
//!
//! A [`Record`] is created once at insert time and never mutated in place
//! afterwards, with one exception: logical deletion sets the audit-only
//! `deleted` flag. Index membership — not the flag — decides liveness; the
//! flag exists so a dump of the backing store shows which slots were
//! superseded or deleted and when queries may skip them.

use crate::types::RecordId;
use serde::{Deserialize, Serialize};

/// One row in the record store.
///
/// # Examples
///
/// ```
/// use shelf_core::record::Record;
/// use shelf_core::types::RecordId;
///
/// let rec = Record::new(RecordId(3), "Smith", serde_json::json!({"gpa": 3.9}));
/// assert_eq!(rec.id, RecordId(3));
/// assert!(!rec.deleted);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Caller-supplied identifier, unique among live records.
    pub id: RecordId,
    /// Free text, compared case-insensitively by the secondary index.
    pub name: String,
    /// Opaque caller payload; the engine never inspects it.
    pub payload: serde_json::Value,
    /// Audit flag: set when the row is logically deleted or superseded.
    /// Not consulted on query paths.
    #[serde(default)]
    pub deleted: bool,
}

impl Record {
    /// Create a live record.
    pub fn new(id: RecordId, name: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            id,
            name: name.into(),
            payload,
            deleted: false,
        }
    }
}
