//! TDP Search API Client
//!
//! Typed wrappers around the search backend's REST endpoints:
//! - A pluggable [`Fetcher`] so callers can supply their own transport
//! - One request helper that checks the status and unwraps the
//!   `{ "data": ... }` envelope when present
//! - One method per endpoint on [`ApiClient`]

mod api;
mod fetch;


pub use api::{unwrap_envelope, ApiClient};
pub use fetch::{FetchResponse, Fetcher, HttpFetcher, RequestOptions, CONTENT_TYPE_JSON};
