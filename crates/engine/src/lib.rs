//! Record engine for shelfdb
//!
//! This crate implements the two stateful pieces of the system:
//! - [`RecordStore`]: append-only backing storage for all records
//! - [`Engine`]: the orchestrator that keeps the store and both ordered
//!   indexes mutually consistent across insert and logical delete, and runs
//!   the range/prefix query algorithms on top of ordered traversal

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod store;

pub use engine::Engine;
pub use store::RecordStore;
