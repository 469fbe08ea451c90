//! HTTP Client
//!
//! Sends requests to a TallyKV server and decodes its responses.

use crate::error::Result;
use crate::protocol::{decode_response, encode_request, Operation, Request, Response};
use crate::store::{Key, Value};

/// Client for a TallyKV server
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Create a client for the server at `base_url` (e.g. `http://127.0.0.1:3000`)
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            base_url = format!("http://{}", base_url);
        }
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Send a request and return the server's response as-is
    ///
    /// `Err` only for transport failures; protocol failures come back as a
    /// response with a failure code.
    pub async fn send(&self, request: &Request) -> Result<Response> {
        let body = self
            .http
            .get(format!("{}/", self.base_url))
            .query(&encode_request(request))
            .send()
            .await?
            .bytes()
            .await?;

        decode_response(&body)
    }

    /// Send a raw query string, for operations or values this client would
    /// not construct itself
    pub async fn send_raw(&self, pairs: &[(&str, &str)]) -> Result<Response> {
        let body = self
            .http
            .get(format!("{}/", self.base_url))
            .query(pairs)
            .send()
            .await?
            .bytes()
            .await?;

        decode_response(&body)
    }

    pub async fn read(&self, key: Key) -> Result<Response> {
        self.send(&Request::new(Operation::Read.as_str(), key, 0.0)).await
    }

    pub async fn create(&self, key: Key, value: Value) -> Result<Response> {
        self.send(&Request::new(Operation::Create.as_str(), key, value)).await
    }

    pub async fn increment(&self, key: Key) -> Result<Response> {
        self.send(&Request::new(Operation::Increment.as_str(), key, 0.0)).await
    }

    pub async fn decrement(&self, key: Key) -> Result<Response> {
        self.send(&Request::new(Operation::Decrement.as_str(), key, 0.0)).await
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
