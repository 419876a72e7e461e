//! Items catalog service.
//!
//! # Overview
//! One resource, `/items`, backed by an in-memory [`ItemStore`]:
//! - `GET /items` lists every item in insertion order (200).
//! - `POST /items` appends one item and echoes it back (201), or answers 400
//!   with the decoder's message when the body is not a JSON object.
//! - Any other method on the path, `HEAD` included, answers 405 with an empty
//!   body.
//!
//! # Design
//! The store is built by the caller and injected as router state, so tests and
//! the binary each own their own instance. Request bodies are not size-capped.

pub mod config;
pub mod error;
pub mod handlers;
pub mod store;
pub mod types;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use error::ApiError;
pub use store::ItemStore;
pub use types::Item;

pub fn app(store: ItemStore) -> Router {
    Router::new()
        .route(
            "/items",
            get(handlers::list_items)
                .post(handlers::create_item)
                .head(handlers::method_not_allowed),
        )
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

pub async fn run(listener: TcpListener, store: ItemStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}
