//! Sorted-array implementation of [`OrderedMap`]
//!
//! Entries live in a `Vec` kept sorted by key; probes are hand-rolled binary
//! searches so every three-way comparison can be counted. Each traversal
//! boundary check also counts as one comparison, so a range scan's cost is
//! `O(log n)` to locate the lower bound plus one comparison per visited
//! entry.
//!
//! Good for the small-to-medium data this store targets; swapping in a tree
//! only requires implementing the same trait.

use crate::traits::OrderedMap;
use std::cmp;
use std::sync::atomic::{AtomicU64, Ordering};

/// Ordered map backed by a sorted `Vec<(K, V)>`.
///
/// # Example
///
/// ```
/// use shelf_index::{OrderedMap, SortedVecMap};
///
/// let mut map = SortedVecMap::new();
/// map.insert(3, "c");
/// map.insert(1, "a");
///
/// map.reset_metrics();
/// assert_eq!(map.get(&3), Some(&"c"));
/// assert!(map.comparisons() > 0);
/// ```
#[derive(Debug)]
pub struct SortedVecMap<K, V> {
    /// Entries sorted ascending by key.
    entries: Vec<(K, V)>,
    /// Key comparisons since the last reset. Relaxed ordering: this is a
    /// metrics counter, not a synchronization point.
    comparisons: AtomicU64,
}

impl<K: Ord, V> SortedVecMap<K, V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            comparisons: AtomicU64::new(0),
        }
    }

    /// Create an empty map with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            comparisons: AtomicU64::new(0),
        }
    }

    /// Counted binary search. `Ok(i)` is the position holding `key`,
    /// `Err(i)` the position where it would insert.
    fn probe(&self, key: &K) -> std::result::Result<usize, usize> {
        let mut lo = 0;
        let mut hi = self.entries.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            self.comparisons.fetch_add(1, Ordering::Relaxed);
            match self.entries[mid].0.cmp(key) {
                cmp::Ordering::Less => lo = mid + 1,
                cmp::Ordering::Greater => hi = mid,
                cmp::Ordering::Equal => return Ok(mid),
            }
        }
        Err(lo)
    }

    /// Visit entries from position `start`, stopping after `hi` when given.
    fn apply_from<F>(&self, start: usize, hi: Option<&K>, mut visitor: F)
    where
        F: FnMut(&K, &V),
    {
        for (key, value) in &self.entries[start..] {
            if let Some(hi) = hi {
                self.comparisons.fetch_add(1, Ordering::Relaxed);
                if key.cmp(hi) == cmp::Ordering::Greater {
                    break;
                }
            }
            visitor(key, value);
        }
    }
}

impl<K: Ord, V> Default for SortedVecMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> OrderedMap<K, V> for SortedVecMap<K, V> {
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.probe(&key) {
            Ok(i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            Err(i) => {
                self.entries.insert(i, (key, value));
                None
            }
        }
    }

    fn get(&self, key: &K) -> Option<&V> {
        match self.probe(key) {
            Ok(i) => Some(&self.entries[i].1),
            Err(_) => None,
        }
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match self.probe(key) {
            Ok(i) => Some(&mut self.entries[i].1),
            Err(_) => None,
        }
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        match self.probe(key) {
            Ok(i) => Some(self.entries.remove(i).1),
            Err(_) => None,
        }
    }

    fn range_apply<F>(&self, lo: &K, hi: &K, visitor: F)
    where
        F: FnMut(&K, &V),
    {
        let start = match self.probe(lo) {
            Ok(i) | Err(i) => i,
        };
        self.apply_from(start, Some(hi), visitor);
    }

    fn range_from_apply<F>(&self, lo: &K, visitor: F)
    where
        F: FnMut(&K, &V),
    {
        let start = match self.probe(lo) {
            Ok(i) | Err(i) => i,
        };
        self.apply_from(start, None, visitor);
    }

    fn reset_metrics(&self) {
        self.comparisons.store(0, Ordering::Relaxed);
    }

    fn comparisons(&self) -> u64 {
        self.comparisons.load(Ordering::Relaxed)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
