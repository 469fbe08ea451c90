//! HTTP Server
//!
//! Accepts requests and hands them to the dispatcher.

use std::future::Future;
use std::net::SocketAddr;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response as HttpResponse};
use axum::Router;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::error::{Result, TallyError};
use crate::protocol::{decode_request, encode_response};

/// HTTP server for TallyKV
pub struct Server {
    config: Config,
    dispatcher: Dispatcher,
}

impl Server {
    /// Create a new server with the given config and dispatcher
    pub fn new(config: Config, dispatcher: Dispatcher) -> Self {
        Self { config, dispatcher }
    }

    /// Build the request router
    ///
    /// Every path answers the same query protocol.
    pub fn router(&self) -> Router {
        Router::new()
            .fallback(handle_request)
            .layer(ConcurrencyLimitLayer::new(self.config.max_connections))
            .layer(TraceLayer::new_for_http())
            .with_state(self.dispatcher.clone())
    }

    /// Bind the configured listen address
    pub async fn bind(&self) -> Result<TcpListener> {
        self.config.validate()?;
        let listener = TcpListener::bind(&self.config.listen_addr).await?;
        Ok(listener)
    }

    /// Bind and serve until `shutdown` resolves
    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = self.bind().await?;
        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = listener.local_addr()?;
        tracing::info!("Listening on {}", addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}

/// Decode the query, dispatch, and answer with the JSON-encoded response
async fn handle_request(
    State(dispatcher): State<Dispatcher>,
    query: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> HttpResponse {
    let decoded = match query {
        Ok(Query(pairs)) => decode_request(&pairs),
        Err(rejection) => Err(TallyError::MalformedRequest(rejection.body_text())),
    };

    let response = dispatcher.handle(decoded);
    match encode_response(&response) {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            tracing::error!("Failed to encode response: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
