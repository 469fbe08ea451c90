//! Store Module
//!
//! In-memory mapping from UUID key to numeric value.
//!
//! ## Responsibilities
//! - Read, create-if-absent, increment and decrement a single key
//! - Make every operation's existence check and mutation one indivisible
//!   step with respect to other operations on the same key
//! - Let operations on unrelated keys proceed without contending
//!
//! ## Data Structure Choice
//! The key space is split over a fixed set of shards, each a
//! `HashMap` behind a `parking_lot::Mutex`. A key always hashes to the
//! same shard, so holding that shard's lock for the duration of one
//! operation is enough for per-key atomicity. With one shard this is the
//! plain single-lock map.

mod table;

pub use table::Store;

/// Key addressing one store entry (externally supplied by the client)
pub type Key = uuid::Uuid;

/// Numeric value stored under a key
pub type Value = f64;
