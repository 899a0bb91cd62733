//! HTTP request layer.
//!
//! ## Endpoints
//! - `POST /greetings` - create, 201
//! - `GET /greetings` - list in insertion order
//! - `GET /greetings/:id` - fetch one, 404 if absent
//! - `PUT /greetings/:id` - replace message, 404 if absent
//! - `DELETE /greetings/:id` - delete, 204
//! - `GET /health` - store round-trip
//!
//! ## Example
//! ```rust,no_run
//! use greetings::adapters::MemoryRepository;
//! use greetings::api;
//! use greetings::core::GreetingService;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = GreetingService::new(Arc::new(MemoryRepository::new()));
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! api::serve(listener, api::router(service), std::future::pending()).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;

pub use error::{ApiError, ErrorBody};

use crate::core::GreetingService;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use std::future::Future;
use std::time::Instant;
use tokio::net::TcpListener;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub service: GreetingService,
}

/// Builds the application router
pub fn router(service: GreetingService) -> Router {
    Router::new()
        .route(
            "/greetings",
            get(handlers::list_greetings)
                .post(handlers::create_greeting)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/greetings/:id",
            get(handlers::get_greeting)
                .put(handlers::update_greeting)
                .delete(handlers::delete_greeting)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/health",
            get(handlers::health).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::route_not_found)
        .layer(middleware::from_fn(log_requests))
        .with_state(AppState { service })
}

/// Serves `router` on `listener` until `shutdown` resolves
///
/// In-flight requests are allowed to finish after the shutdown signal.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "HTTP server listening");
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        latency_ms = started.elapsed().as_millis() as u64,
        "Request handled"
    );
    response
}
