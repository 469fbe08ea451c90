//! Request definitions
//!
//! A request as decoded by the transport, before the operation name is
//! validated.

use crate::store::{Key, Value};

/// A decoded request
///
/// The operation name is kept as sent; the dispatcher decides whether it
/// names a known operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// Operation name (case-insensitive)
    pub operation: String,

    /// Target key
    pub key: Key,

    /// Initial value for CREATE, ignored otherwise
    pub value: Value,
}

impl Request {
    pub fn new(operation: impl Into<String>, key: Key, value: Value) -> Self {
        Self {
            operation: operation.into(),
            key,
            value,
        }
    }
}
