//! Remote feed loading core.
//!
//! # Overview
//! Fetches a list of feed items over HTTP, validates and decodes the JSON
//! payload, and reports either the items or a `LoadError`. The network is
//! reached only through the `HttpClient` trait, which the host implements
//! (host-does-IO pattern), keeping the core deterministic and testable with
//! a fake transport.
//!
//! # Design
//! - `RemoteFeedLoader` binds a URL and a transport and offers both a
//!   callback form (`load_with`) and an async form (`load`) via `FeedLoader`.
//! - `mapper::map` is the single decode/validate path shared by both forms.
//! - The error taxonomy is exactly `Connectivity` and `InvalidData`; transport
//!   detail is logged through `tracing`, never returned.
//! - Wire DTOs are private to the mapper; the mock-server crate defines its
//!   own copy and integration tests catch schema drift.

pub mod error;
pub mod http;
pub mod loader;
pub mod mapper;
pub mod types;

pub use error::{LoadError, TransportError};
pub use http::{HttpClient, HttpClientResult, HttpCompletion, HttpResponse};
pub use loader::RemoteFeedLoader;
pub use types::{FeedItem, FeedLoader, LoadCompletion, LoadResult};
pub use url::Url;
