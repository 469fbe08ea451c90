//! Response definitions
//!
//! Represents responses to clients.

use serde::{Deserialize, Serialize};

use crate::error::TallyError;
use crate::store::Value;

/// Response status codes
///
/// Two-value convention: success, or a client error of any kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum StatusCode {
    Success = 200,
    Failure = 422,
}

impl StatusCode {
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            200 => Some(StatusCode::Success),
            422 => Some(StatusCode::Failure),
            _ => None,
        }
    }
}

/// A response to send to a client
///
/// Serialized as `{"Code": 200, "Value": 6.0, "Error": ""}`. JSON has no
/// NaN or infinity, so those values travel as the strings `"NaN"`, `"inf"`
/// and `"-inf"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Status code
    #[serde(rename = "Code")]
    pub code: u16,

    /// Result value (zero on failure)
    #[serde(rename = "Value", with = "json_float")]
    pub value: Value,

    /// Error message (empty on success)
    #[serde(rename = "Error")]
    pub error: String,
}

impl Response {
    /// Create a success response carrying `value`
    pub fn ok(value: Value) -> Self {
        Self {
            code: StatusCode::Success.as_u16(),
            value,
            error: String::new(),
        }
    }

    /// Create a failure response from an error
    pub fn error(err: &TallyError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            value: 0.0,
            error: err.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == StatusCode::Success.as_u16()
    }

    /// The protocol status, if the code is one this crate produces
    pub fn status(&self) -> Option<StatusCode> {
        StatusCode::from_u16(self.code)
    }
}

impl From<crate::error::Result<Value>> for Response {
    fn from(result: crate::error::Result<Value>) -> Self {
        match result {
            Ok(value) => Response::ok(value),
            Err(err) => Response::error(&err),
        }
    }
}

/// Float (de)serialization that survives non-finite values
mod json_float {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::store::Value;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(Value),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &Value, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value.is_infinite() {
            serializer.serialize_str(if *value > 0.0 { "inf" } else { "-inf" })
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Value, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.as_str() {
                "NaN" => Ok(Value::NAN),
                "inf" => Ok(Value::INFINITY),
                "-inf" => Ok(Value::NEG_INFINITY),
                other => Err(serde::de::Error::custom(format!(
                    "invalid float value {:?}",
                    other
                ))),
            },
        }
    }
}
