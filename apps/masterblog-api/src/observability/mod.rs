//! Observability module - request IDs for tracing and clients.

mod request_id;

pub use request_id::{REQUEST_ID_HEADER, RequestIdMiddleware};
