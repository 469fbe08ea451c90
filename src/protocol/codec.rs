//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//!
//! ### Request
//! ```text
//! GET /?operation=<name>&key=<uuid>&value=<float>
//! ```
//! All three parameters are required. When one is repeated the first
//! occurrence wins.
//!
//! ### Response
//! ```text
//! {"Code": 200, "Value": 6.0, "Error": ""}
//! ```

use crate::error::{Result, TallyError};
use crate::store::{Key, Value};
use super::{Request, Response};

/// Query parameter carrying the operation name
pub const OPERATION_PARAM: &str = "operation";

/// Query parameter carrying the key
pub const KEY_PARAM: &str = "key";

/// Query parameter carrying the value
pub const VALUE_PARAM: &str = "value";

// =============================================================================
// Request Encoding/Decoding
// =============================================================================

/// Decode a request from query parameter pairs
///
/// Fields are checked in the order key, value, operation. Any missing or
/// unparsable field is a `MalformedRequest`. The operation name, even an
/// empty one, is left for the dispatcher to validate.
pub fn decode_request<K, V>(pairs: &[(K, V)]) -> Result<Request>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let key = parse_key(required(pairs, KEY_PARAM)?)?;
    let value = parse_value(required(pairs, VALUE_PARAM)?)?;
    let operation = required(pairs, OPERATION_PARAM)?;

    Ok(Request {
        operation: operation.to_string(),
        key,
        value,
    })
}

/// Encode a request as query parameter pairs
pub fn encode_request(request: &Request) -> Vec<(&'static str, String)> {
    vec![
        (OPERATION_PARAM, request.operation.clone()),
        (KEY_PARAM, request.key.to_string()),
        (VALUE_PARAM, request.value.to_string()),
    ]
}

/// Parse a key parameter
pub fn parse_key(raw: &str) -> Result<Key> {
    Key::parse_str(raw).map_err(|e| {
        TallyError::MalformedRequest(format!("invalid key {:?}: {}", raw, e))
    })
}

/// Parse a value parameter
pub fn parse_value(raw: &str) -> Result<Value> {
    raw.parse::<Value>().map_err(|e| {
        TallyError::MalformedRequest(format!("invalid value {:?}: {}", raw, e))
    })
}

fn required<'a, K, V>(pairs: &'a [(K, V)], name: &str) -> Result<&'a str>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    pairs
        .iter()
        .find(|(k, _)| k.as_ref() == name)
        .map(|(_, v)| v.as_ref())
        .ok_or_else(|| TallyError::MalformedRequest(format!("missing field `{}`", name)))
}

// =============================================================================
// Response Encoding/Decoding
// =============================================================================

/// Encode a response as JSON bytes
pub fn encode_response(response: &Response) -> Result<Vec<u8>> {
    serde_json::to_vec(response).map_err(|e| TallyError::Http(e.to_string()))
}

/// Decode a response from JSON bytes
pub fn decode_response(bytes: &[u8]) -> Result<Response> {
    serde_json::from_slice(bytes)
        .map_err(|e| TallyError::Http(format!("invalid response body: {}", e)))
}
