//! The index engine
//!
//! [`Engine`] composes the append-only [`RecordStore`] with two ordered
//! indexes and is the sole owner of the cross-structure invariants:
//!
//! - the primary index maps `id -> rid` for exactly the live records
//! - the secondary index maps `lowercase(name) -> bucket of rids` in
//!   insertion order, and never retains an empty bucket
//! - index membership is the single source of truth for liveness; the
//!   record's `deleted` flag is audit-only
//!
//! ## Mutation protocol
//!
//! ```text
//! insert:  supersede any prior row with the same id (flag + detach from
//!          its bucket), append, index primary, append to name bucket
//! delete:  flag the slot, erase the primary entry, detach the rid from
//!          its name bucket, erase the bucket if it emptied
//! ```
//!
//! Queries reset the relevant index's comparison counter on entry and
//! report the comparisons that single call performed.

use crate::store::RecordStore;
use shelf_core::{Counted, Error, NameKey, Record, RecordId, Result, Rid};
use shelf_index::{OrderedMap, SortedVecMap};
use tracing::{debug, trace, warn};

/// Record engine over an append-only store and two ordered indexes.
///
/// Generic over the two index containers so any [`OrderedMap`]
/// implementation can back it; defaults to [`SortedVecMap`].
///
/// # Thread Safety
///
/// None. The engine is single-threaded by contract; callers needing shared
/// access must serialize all operations externally.
///
/// # Example
///
/// ```
/// use shelf_core::{Record, types::RecordId};
/// use shelf_engine::Engine;
///
/// let mut engine = Engine::new();
/// engine.insert(Record::new(RecordId(3), "Smith", serde_json::json!(null)));
///
/// let found = engine.find_by_id(RecordId(3)).unwrap();
/// assert!(found.value.is_some());
/// assert!(found.comparisons > 0);
/// ```
pub struct Engine<P = SortedVecMap<RecordId, Rid>, N = SortedVecMap<NameKey, Vec<Rid>>>
where
    P: OrderedMap<RecordId, Rid>,
    N: OrderedMap<NameKey, Vec<Rid>>,
{
    /// Backing storage; owns every row ever inserted.
    store: RecordStore,
    /// Unique index: id -> rid of the live row.
    by_id: P,
    /// Non-unique index: lowercased name -> rids in insertion order.
    by_name: N,
}

impl Engine {
    /// Create an engine over the default sorted-array indexes.
    pub fn new() -> Self {
        Self::with_indexes(SortedVecMap::new(), SortedVecMap::new())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, N> Engine<P, N>
where
    P: OrderedMap<RecordId, Rid>,
    N: OrderedMap<NameKey, Vec<Rid>>,
{
    /// Create an engine over caller-supplied index containers.
    pub fn with_indexes(by_id: P, by_name: N) -> Self {
        Self {
            store: RecordStore::new(),
            by_id,
            by_name,
        }
    }

    /// Insert a record, returning its rid.
    ///
    /// If a live record already holds the same id, that row is superseded
    /// first: its slot is audit-flagged and its rid detached from the
    /// secondary index, so queries resolve only the newest row. Infallible.
    pub fn insert(&mut self, record: Record) -> Rid {
        if let Some(old) = self.by_id.get(&record.id).copied() {
            self.supersede(record.id, old);
        }

        let id = record.id;
        let key = NameKey::new(&record.name);
        let rid = self.store.append(record);

        self.by_id.insert(id, rid);
        match self.by_name.get_mut(&key) {
            Some(bucket) => bucket.push(rid),
            None => {
                self.by_name.insert(key, vec![rid]);
            }
        }

        debug!(%id, %rid, "inserted record");
        rid
    }

    /// Logically delete the record with `id`.
    ///
    /// Unknown and already-deleted ids are indistinguishable: both return
    /// `Ok(false)` with no mutation. On success the slot is audit-flagged,
    /// the id leaves the primary index entirely, and the rid leaves its name
    /// bucket (erasing the bucket if it empties).
    pub fn delete_by_id(&mut self, id: RecordId) -> Result<bool> {
        let rid = match self.by_id.get(&id).copied() {
            Some(rid) => rid,
            None => return Ok(false),
        };

        let len = self.store.len();
        let record = self
            .store
            .get_mut(rid)
            .ok_or(Error::CorruptIndex { rid, len })?;
        record.deleted = true;
        let key = NameKey::new(&record.name);

        self.by_id.remove(&id);
        self.detach_from_bucket(&key, rid);

        debug!(%id, %rid, "deleted record");
        Ok(true)
    }

    /// Point lookup by id, with the comparison cost of that single lookup.
    ///
    /// Returns `Ok` with `None` for unknown ids; the count still reflects
    /// the failed probe's cost.
    pub fn find_by_id(&self, id: RecordId) -> Result<Counted<Option<&Record>>> {
        trace!(%id, "find_by_id");
        self.by_id.reset_metrics();

        let found = match self.by_id.get(&id).copied() {
            Some(rid) => Some(self.resolve(rid)?),
            None => None,
        };

        Ok(Counted::new(found, self.by_id.comparisons()))
    }

    /// All live records with id in `[lo, hi]`, ascending by id.
    ///
    /// Comparisons accumulate over the entire traversal. `lo > hi` yields an
    /// empty result.
    pub fn range_by_id(&self, lo: RecordId, hi: RecordId) -> Result<Counted<Vec<&Record>>> {
        trace!(%lo, %hi, "range_by_id");
        self.by_id.reset_metrics();

        let mut rids = Vec::new();
        self.by_id.range_apply(&lo, &hi, |_, rid| rids.push(*rid));
        let comparisons = self.by_id.comparisons();

        let mut records = Vec::with_capacity(rids.len());
        for rid in rids {
            records.push(self.resolve(rid)?);
        }
        Ok(Counted::new(records, comparisons))
    }

    /// All live records whose lowercased name starts with `prefix`,
    /// case-insensitively.
    ///
    /// Ordering: ascending name key across buckets, insertion order within a
    /// bucket. The traversal runs from the lowercased prefix up to its exact
    /// successor key; since the inclusive successor bound itself can be a
    /// real non-matching key, every visited key is re-verified and
    /// non-matching keys are skipped without error.
    pub fn prefix_by_name(&self, prefix: &str) -> Result<Counted<Vec<&Record>>> {
        self.by_name.reset_metrics();
        let lo = NameKey::new(prefix);
        trace!(prefix = %lo, "prefix_by_name");

        let mut rids = Vec::new();
        let visit = |key: &NameKey, bucket: &Vec<Rid>| {
            if key.starts_with(&lo) {
                rids.extend_from_slice(bucket);
            }
        };
        match lo.successor() {
            Some(hi) => self.by_name.range_apply(&lo, &hi, visit),
            None => self.by_name.range_from_apply(&lo, visit),
        }
        let comparisons = self.by_name.comparisons();

        let mut records = Vec::with_capacity(rids.len());
        for rid in rids {
            records.push(self.resolve(rid)?);
        }
        Ok(Counted::new(records, comparisons))
    }

    /// Number of live records (primary index size).
    pub fn live_count(&self) -> usize {
        self.by_id.len()
    }

    /// Number of storage slots ever appended, deleted rows included.
    pub fn stored_count(&self) -> usize {
        self.store.len()
    }

    /// Number of distinct live name keys (secondary index size).
    ///
    /// Because empty buckets are erased rather than retained, this counts
    /// exactly the names with at least one live record.
    pub fn distinct_name_count(&self) -> usize {
        self.by_name.len()
    }

    /// Map a rid to its record, surfacing index/store drift as corruption.
    fn resolve(&self, rid: Rid) -> Result<&Record> {
        self.store.get(rid).ok_or(Error::CorruptIndex {
            rid,
            len: self.store.len(),
        })
    }

    /// Flag and detach the row a duplicate-id insert replaces.
    fn supersede(&mut self, id: RecordId, old: Rid) {
        let key = match self.store.get_mut(old) {
            Some(prior) => {
                prior.deleted = true;
                NameKey::new(&prior.name)
            }
            None => {
                warn!(%id, rid = %old, "primary index referenced a missing slot; skipping detach");
                return;
            }
        };
        self.detach_from_bucket(&key, old);
        debug!(%id, rid = %old, "superseded prior record");
    }

    /// Remove `rid` from the bucket for `key`, erasing the bucket if it
    /// empties. A missing bucket is index drift; tolerated with a warning
    /// because the caller's own mutation has already logically succeeded.
    fn detach_from_bucket(&mut self, key: &NameKey, rid: Rid) {
        let emptied = match self.by_name.get_mut(key) {
            Some(bucket) => {
                bucket.retain(|&r| r != rid);
                bucket.is_empty()
            }
            None => {
                warn!(%key, %rid, "secondary index bucket missing during detach");
                return;
            }
        };
        if emptied {
            self.by_name.remove(key);
        }
    }
}
