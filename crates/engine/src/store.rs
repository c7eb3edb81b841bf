//! Append-only record storage
//!
//! The store owns every record ever inserted, by value, in one growing
//! vector. Slots are never compacted, reused, or renumbered, which is what
//! makes a [`Rid`] stable for the lifetime of the store. The only in-place
//! mutation the engine performs through [`get_mut`](RecordStore::get_mut) is
//! setting the audit `deleted` flag.

use shelf_core::{Record, Rid};

/// Append-only sequence of records.
///
/// # Example
///
/// ```
/// use shelf_core::{Record, types::RecordId};
/// use shelf_engine::RecordStore;
///
/// let mut store = RecordStore::new();
/// let rid = store.append(Record::new(RecordId(1), "Ada", serde_json::json!(null)));
/// assert_eq!(store.get(rid).unwrap().name, "Ada");
/// ```
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Store `record` in the next slot and return that slot's rid.
    ///
    /// Size is monotonically non-decreasing; there is no removal primitive.
    pub fn append(&mut self, record: Record) -> Rid {
        let rid = Rid(self.records.len());
        self.records.push(record);
        rid
    }

    /// Read the record at `rid`, if the slot exists.
    pub fn get(&self, rid: Rid) -> Option<&Record> {
        self.records.get(rid.index())
    }

    /// Mutable access to the record at `rid`, if the slot exists.
    pub fn get_mut(&mut self, rid: Rid) -> Option<&mut Record> {
        self.records.get_mut(rid.index())
    }

    /// Number of slots ever appended, deleted rows included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing was ever appended.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
