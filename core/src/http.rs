//! Transport contract for fetching the feed.
//!
//! # Design
//! The core never performs network I/O itself. A host supplies an
//! `HttpClient` that executes a GET and reports either an `HttpResponse`
//! or a `TransportError`. The contract has two calling conventions:
//!
//! - `get_with` hands the outcome to a completion handler, exactly once, on
//!   whatever thread the transport chooses.
//! - `get` suspends the caller until the outcome is ready.
//!
//! `get` has a default implementation that awaits `get_with` through a
//! oneshot channel, so a transport may implement only the callback form.
//! Transports with a native async path override `get` instead of paying for
//! the channel hop. Either way both forms must issue the same request and
//! have the same possible outcomes.
//!
//! Implementations must tolerate concurrent overlapping calls, since one
//! transport instance is typically shared by several loaders.

use async_trait::async_trait;
use tokio::sync::oneshot;
use url::Url;

use crate::error::TransportError;

/// An HTTP response described as plain data.
///
/// Headers are carried for completeness; the feed mapper only looks at
/// `status` and `body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }
}

/// Outcome of one transport request.
pub type HttpClientResult = Result<HttpResponse, TransportError>;

/// Handler invoked by [`HttpClient::get_with`] when a request finishes.
pub type HttpCompletion = Box<dyn FnOnce(HttpClientResult) + Send + 'static>;

/// An HTTP backend able to perform a GET in both calling conventions.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a GET against `url` and invoke `completion` exactly once.
    fn get_with(&self, url: &Url, completion: HttpCompletion);

    /// Perform a GET against `url`, suspending until it completes.
    async fn get(&self, url: &Url) -> HttpClientResult {
        let (tx, rx) = oneshot::channel();
        self.get_with(
            url,
            Box::new(move |result| {
                // The receiver is gone only if the awaiting caller was dropped.
                let _ = tx.send(result);
            }),
        );
        rx.await.unwrap_or(Err(TransportError::Abandoned))
    }
}
