//! Dispatcher Module
//!
//! Translates decoded requests into store calls and store outcomes into
//! responses.
//!
//! ## Responsibilities
//! - Validate the operation name
//! - Make exactly one store call per valid request
//! - Fold every failure into a response (nothing escapes as an error)

use std::sync::Arc;

use crate::error::{Result, TallyError};
use crate::protocol::{Operation, Request, Response};
use crate::store::{Store, Value};

/// Routes requests to the store
///
/// Holds no state besides the injected store, so it can be cloned into
/// every request handler.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    store: Arc<Store>,
}

impl Dispatcher {
    /// Create a dispatcher over a shared store
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Execute a request against the store
    ///
    /// An unrecognized operation fails with `UnknownOperation` before the
    /// store is touched.
    pub fn execute(&self, request: &Request) -> Result<Value> {
        let operation: Operation = request.operation.parse()?;

        match operation {
            Operation::Read => Ok(self.store.read(&request.key)),
            Operation::Create => self.store.create_if_absent(request.key, request.value),
            Operation::Increment => self.store.increment(&request.key),
            Operation::Decrement => self.store.decrement(&request.key),
        }
    }

    /// Execute a request and build its response
    pub fn dispatch(&self, request: &Request) -> Response {
        tracing::debug!(
            operation = %request.operation,
            key = %request.key,
            value = request.value,
            "dispatching request"
        );

        let result = self.execute(request);
        if let Err(ref e) = result {
            tracing::warn!(
                operation = %request.operation,
                key = %request.key,
                "request failed: {}",
                e
            );
        }
        Response::from(result)
    }

    /// Build the response for a request the transport may have failed to decode
    ///
    /// Decode failures are reported as `MalformedRequest` and never reach
    /// the store.
    pub fn handle(&self, decoded: Result<Request>) -> Response {
        match decoded {
            Ok(request) => self.dispatch(&request),
            Err(e) => {
                let err = match e {
                    TallyError::MalformedRequest(_) => e,
                    other => TallyError::MalformedRequest(other.to_string()),
                };
                tracing::warn!("rejected request: {}", err);
                Response::error(&err)
            }
        }
    }

    /// The store this dispatcher writes to
    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }
}
