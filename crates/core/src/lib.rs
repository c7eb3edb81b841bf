//! Core types for the shelf record store
//!
//! This crate defines the fundamental types shared by every layer:
//! - [`types::Rid`]: stable offset into the record store
//! - [`types::RecordId`]: caller-supplied record identifier
//! - [`types::NameKey`]: lowercased, ordered name key for the secondary index
//! - [`record::Record`]: the stored row
//! - [`error::Error`]: canonical error type

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod record;
pub mod types;

pub use error::{Error, Result};
pub use record::Record;
pub use types::{Counted, NameKey, RecordId, Rid};
