//! Network Module
//!
//! HTTP server and client.
//!
//! ## Architecture
//! - axum server on a multi-threaded tokio runtime
//! - One task per request, concurrently with all others
//! - Requests routed through the Dispatcher

mod server;
mod client;

pub use server::Server;
pub use client::Client;
