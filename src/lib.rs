//! # TallyKV
//!
//! An in-memory, UUID-keyed numeric store with:
//! - Atomic read / create-if-absent / increment / decrement per key
//! - Sharded locking so unrelated keys never contend
//! - HTTP query protocol with JSON responses
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HTTP Server                             │
//! │           (one task per request, query decoding)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  Request {operation, key, value}
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Dispatcher                               │
//! │        (operation validation, error → response)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Store                                  │
//! │          (shards of Mutex<HashMap<Uuid, f64>>)               │
//! └─────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod protocol;
pub mod dispatcher;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, TallyError};
pub use config::Config;
pub use dispatcher::Dispatcher;
pub use store::{Key, Store, Value};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of TallyKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
