//! Canonical error type for shelf operations.
//!
//! Absence is not an error anywhere in this system: unknown ids produce
//! `Ok(None)` or `Ok(false)`, empty ranges produce empty vectors. The only
//! failure class is internal index corruption, surfaced rather than silently
//! treated as a miss.

use crate::types::Rid;
use thiserror::Error;

/// All shelf errors.
#[derive(Debug, Error)]
pub enum Error {
    /// An index referenced a storage slot that does not exist.
    ///
    /// Indicates drift between an index and the record store, which the
    /// engine's mutation protocol is supposed to rule out. Surfaced on read
    /// and delete paths instead of being masked as "not found".
    #[error("corrupt index: {rid} out of bounds (store holds {len} slots)")]
    CorruptIndex {
        /// The out-of-bounds reference.
        rid: Rid,
        /// Store size at the time of detection.
        len: usize,
    },
}

/// Result type for shelf operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error indicates index/store drift.
    pub fn is_corruption(&self) -> bool {
        matches!(self, Error::CorruptIndex { .. })
    }
}
