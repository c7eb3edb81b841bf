//! The ordered-map contract consumed by the engine.

/// Unique-key ordered associative container with comparison instrumentation.
///
/// The engine composes two of these (primary and secondary index) and relies
/// only on this surface, never on a concrete container's internals:
///
/// - `insert` has create-or-overwrite semantics
/// - `range_apply` visits entries in ascending key order, both bounds
///   inclusive
/// - every key comparison performed by a lookup or traversal since the last
///   [`reset_metrics`](OrderedMap::reset_metrics) call accumulates into
///   [`comparisons`](OrderedMap::comparisons)
///
/// Counters exist to verify algorithmic cost in tests, not for production
/// metrics; implementations may update them with relaxed atomics.
pub trait OrderedMap<K: Ord, V> {
    /// Insert or overwrite. Returns the previous value for `key`, if any.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Point lookup.
    fn get(&self, key: &K) -> Option<&V>;

    /// Point lookup with mutable access to the value.
    fn get_mut(&mut self, key: &K) -> Option<&mut V>;

    /// Erase the entry for `key`, returning its value if it existed.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Visit every entry with `lo <= key <= hi` in ascending key order.
    fn range_apply<F>(&self, lo: &K, hi: &K, visitor: F)
    where
        F: FnMut(&K, &V);

    /// Visit every entry with `lo <= key` in ascending key order.
    ///
    /// Covers the upper-bound-overflow edge of prefix scans, where no finite
    /// key sorts above the last matching one.
    fn range_from_apply<F>(&self, lo: &K, visitor: F)
    where
        F: FnMut(&K, &V);

    /// Zero the comparison counter.
    fn reset_metrics(&self);

    /// Key comparisons performed since the last [`reset_metrics`](OrderedMap::reset_metrics).
    fn comparisons(&self) -> u64;

    /// Number of entries.
    fn len(&self) -> usize;

    /// Whether the map holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
