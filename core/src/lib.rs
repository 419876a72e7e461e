//! Consumer side of the items catalog contract.
//!
//! `ItemsClient` turns the two catalog operations into `HttpRequest` values
//! and reads `HttpResponse` values back into `Item`s; whoever holds the
//! connection sends the request. A 400 from the service comes back as
//! `ApiError::BadRequest` carrying the service's decoder message, minus trailing whitespace.
//!
//! The `Item` DTO is declared here rather than imported from the server. The
//! vectors in `test-vectors/` are what keeps the two in step: this crate
//! checks its requests and parsing against them, the server replays them.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::ItemsClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::Item;
