//! Protocol Module
//!
//! Defines the request/response protocol between clients and the server.
//!
//! ### Request
//! ```text
//! GET /?operation=<name>&key=<uuid>&value=<float>
//! ```
//!
//! ### Operations (case-insensitive)
//! - READ      (alias GET)  - current value, 0 if absent
//! - CREATE    (alias SETX) - create entry with value, fail if present
//! - INCREMENT (alias INCX) - add one, fail if absent
//! - DECREMENT (alias DECX) - subtract one, fail if absent
//!
//! ### Response
//! ```text
//! {"Code": <int>, "Value": <float>, "Error": <string>}
//! ```
//!
//! ### Status Codes
//! - 200: success
//! - 422: any failure (the error text tells kinds apart)

mod operation;
mod request;
mod response;
mod codec;

pub use operation::Operation;
pub use request::Request;
pub use response::{Response, StatusCode};
pub use codec::{
    decode_request, decode_response, encode_request, encode_response, parse_key, parse_value,
    KEY_PARAM, OPERATION_PARAM, VALUE_PARAM,
};
