//! Fundamental identifier and key types
//!
//! This module defines the small newtypes used throughout the system:
//! - [`Rid`]: stable offset into the record store
//! - [`RecordId`]: caller-supplied unique identifier
//! - [`NameKey`]: lowercased name, the secondary index key
//! - [`Counted`]: a query result paired with its comparison cost

use serde::{Deserialize, Serialize};

/// Stable offset into the record store identifying one storage slot.
///
/// A `Rid` is assigned when a record is appended and is never reused or
/// renumbered. It stays valid for the lifetime of the store — even after the
/// record it names is logically deleted, the slot remains addressable.
///
/// # Examples
///
/// ```
/// use shelf_core::types::Rid;
///
/// let rid = Rid(0);
/// assert_eq!(rid.index(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rid(pub usize);

impl Rid {
    /// Get the underlying slot index.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for Rid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rid:{}", self.0)
    }
}

/// Caller-supplied record identifier.
///
/// Intended unique among live records; the engine resolves duplicate inserts
/// by superseding the older row. Ordered numerically for range queries.
///
/// # Examples
///
/// ```
/// use shelf_core::types::RecordId;
///
/// let a = RecordId(3);
/// let b = RecordId(7);
/// assert!(a < b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub u64);

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Secondary index key: a name folded to lowercase.
///
/// All name comparisons in the system are case-insensitive, so the fold
/// happens once at key construction and the key orders by plain `String`
/// comparison afterwards.
///
/// # Examples
///
/// ```
/// use shelf_core::types::NameKey;
///
/// let a = NameKey::new("Smith");
/// let b = NameKey::new("smith");
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NameKey(String);

impl NameKey {
    /// Build a key by lowercasing `name`.
    pub fn new(name: &str) -> Self {
        NameKey(name.to_lowercase())
    }

    /// The lowercased key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this key starts with `prefix` (both already lowercased).
    pub fn starts_with(&self, prefix: &NameKey) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Compute the exact successor key for prefix scans.
    ///
    /// Returns the smallest key `s` such that every key starting with `self`
    /// orders strictly below `s`: the last character is incremented (skipping
    /// the surrogate gap), popping trailing `char::MAX` characters first.
    /// Returns `None` when no such key exists — the prefix is empty or all
    /// `char::MAX` — in which case a scan must run unbounded above.
    pub fn successor(&self) -> Option<NameKey> {
        let mut chars: Vec<char> = self.0.chars().collect();
        while let Some(last) = chars.pop() {
            if let Some(next) = next_char(last) {
                chars.push(next);
                return Some(NameKey(chars.into_iter().collect()));
            }
        }
        None
    }
}

impl std::fmt::Display for NameKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Next Unicode scalar value after `c`, or `None` for `char::MAX`.
///
/// The UTF-16 surrogate range is not encodable in a `char`, so incrementing
/// past U+D7FF jumps to U+E000. This keeps the successor ordering aligned
/// with `String`'s byte-wise ordering of UTF-8 code points.
fn next_char(c: char) -> Option<char> {
    let mut code = c as u32 + 1;
    if (0xD800..=0xDFFF).contains(&code) {
        code = 0xE000;
    }
    char::from_u32(code)
}

/// A query result paired with the comparison cost of producing it.
///
/// Every instrumented query resets its index's comparison counter, runs, and
/// reports the comparisons that single call performed — the counts are
/// per-call, never cumulative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counted<T> {
    /// The query result.
    pub value: T,
    /// Key comparisons the backing index performed for this call.
    pub comparisons: u64,
}

impl<T> Counted<T> {
    /// Pair a result with its comparison cost.
    pub fn new(value: T, comparisons: u64) -> Self {
        Self { value, comparisons }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Rid Tests =====

    #[test]
    fn test_rid_index_and_display() {
        let rid = Rid(42);
        assert_eq!(rid.index(), 42);
        assert_eq!(rid.to_string(), "rid:42");
    }

    #[test]
    fn test_rid_ordering() {
        assert!(Rid(0) < Rid(1), "rids order by slot index");
    }

    // ===== RecordId Tests =====

    #[test]
    fn test_record_id_ordering() {
        assert!(RecordId(3) < RecordId(7));
        assert_eq!(RecordId(5), RecordId(5));
    }

    #[test]
    fn test_record_id_serialization() {
        let id = RecordId(99);
        let json = serde_json::to_string(&id).unwrap();
        let restored: RecordId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, restored, "RecordId should roundtrip through JSON");
    }

    // ===== NameKey Tests =====

    #[test]
    fn test_name_key_folds_case() {
        assert_eq!(NameKey::new("SMITH"), NameKey::new("smith"));
        assert_eq!(NameKey::new("SmYtHe").as_str(), "smythe");
    }

    #[test]
    fn test_name_key_ordering_is_lowercase_lexicographic() {
        let smith = NameKey::new("Smith");
        let smythe = NameKey::new("smythe");
        assert!(smith < smythe, "smith should sort before smythe");
    }

    #[test]
    fn test_name_key_starts_with() {
        let key = NameKey::new("Smith");
        assert!(key.starts_with(&NameKey::new("SM")));
        assert!(key.starts_with(&NameKey::new("smith")));
        assert!(!key.starts_with(&NameKey::new("smy")));
    }

    #[test]
    fn test_successor_simple() {
        let succ = NameKey::new("sm").successor().unwrap();
        assert_eq!(succ.as_str(), "sn");
        assert!(NameKey::new("sm") < succ);
        assert!(NameKey::new("smzzzz") < succ, "all sm-prefixed keys sort below the successor");
    }

    #[test]
    fn test_successor_pops_trailing_max() {
        let prefix = NameKey::new(&format!("a{}", char::MAX));
        let succ = prefix.successor().unwrap();
        assert_eq!(succ.as_str(), "b");
        assert!(prefix < succ);
    }

    #[test]
    fn test_successor_skips_surrogate_gap() {
        let prefix = NameKey::new("\u{D7FF}");
        let succ = prefix.successor().unwrap();
        assert_eq!(succ.as_str(), "\u{E000}");
    }

    #[test]
    fn test_successor_unbounded_cases() {
        assert!(NameKey::new("").successor().is_none());
        let all_max = NameKey::new(&char::MAX.to_string());
        assert!(all_max.successor().is_none());
    }

    // ===== Counted Tests =====

    #[test]
    fn test_counted_pairs_value_and_cost() {
        let counted = Counted::new(vec![1, 2], 3);
        assert_eq!(counted.value, vec![1, 2]);
        assert_eq!(counted.comparisons, 3);
    }
}
