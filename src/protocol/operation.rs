//! Operation definitions
//!
//! The four operations a client can request.

use std::fmt;
use std::str::FromStr;

use crate::error::TallyError;

/// A store operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Current value, zero if absent
    Read,

    /// Create the entry if none exists
    Create,

    /// Add one to an existing entry
    Increment,

    /// Subtract one from an existing entry
    Decrement,
}

impl Operation {
    /// All operations, in wire-name order
    pub const ALL: [Operation; 4] = [
        Operation::Read,
        Operation::Create,
        Operation::Increment,
        Operation::Decrement,
    ];

    /// Canonical wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Read => "READ",
            Operation::Create => "CREATE",
            Operation::Increment => "INCREMENT",
            Operation::Decrement => "DECREMENT",
        }
    }

    /// Parse an operation name, ignoring case
    ///
    /// Also accepts the short names `GET`, `SETX`, `INCX` and `DECX`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "READ" | "GET" => Some(Operation::Read),
            "CREATE" | "SETX" => Some(Operation::Create),
            "INCREMENT" | "INCX" => Some(Operation::Increment),
            "DECREMENT" | "DECX" => Some(Operation::Decrement),
            _ => None,
        }
    }

    /// Whether the request value is used by this operation
    pub fn uses_value(&self) -> bool {
        matches!(self, Operation::Create)
    }
}

impl FromStr for Operation {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::parse(s).ok_or_else(|| TallyError::UnknownOperation(s.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
