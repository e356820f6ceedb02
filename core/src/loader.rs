//! HTTP-backed feed loader.
//!
//! # Design
//! `RemoteFeedLoader` binds one URL to one transport and holds no mutable
//! state, so concurrent and repeated loads need no locking; each call issues
//! its own request. Every outcome goes through the same translation:
//!
//! - transport error → `LoadError::Connectivity` (detail logged, not returned)
//! - response → `mapper::map`, which yields the items or `InvalidData`
//!
//! The callback form hands the transport a closure that may outlive the
//! loader. That closure holds only a `Weak` to the loader's state and checks
//! it before doing anything, so a dropped loader is never kept alive by a
//! pending request and never calls back into the caller. The async form
//! borrows `self` for the whole await and has no such hazard.

use std::sync::{Arc, Weak};

use async_trait::async_trait;
use url::Url;

use crate::error::LoadError;
use crate::http::{HttpClient, HttpClientResult};
use crate::mapper;
use crate::types::{FeedLoader, LoadCompletion, LoadResult};

#[derive(Debug)]
struct LoaderState {
    url: Url,
}

/// Loads the feed from a fixed URL through an injected `HttpClient`.
///
/// Constructing a loader performs no request. The loader is deliberately not
/// `Clone`: dropping it is what cancels delivery of pending callback loads.
pub struct RemoteFeedLoader<C: HttpClient + ?Sized> {
    state: Arc<LoaderState>,
    client: Arc<C>,
}

impl<C: HttpClient + ?Sized> RemoteFeedLoader<C> {
    pub fn new(url: Url, client: Arc<C>) -> Self {
        Self {
            state: Arc::new(LoaderState { url }),
            client,
        }
    }

    /// Parse `url` and bind it to `client`.
    pub fn parse(url: &str, client: Arc<C>) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(url)?, client))
    }

    pub fn url(&self) -> &Url {
        &self.state.url
    }
}

/// Translate one transport outcome into a domain result.
fn deliver(url: &Url, result: HttpClientResult) -> LoadResult {
    let outcome = match result {
        Ok(response) => mapper::map(&response.body, response.status),
        Err(e) => {
            tracing::warn!(%url, error = %e, "feed request failed");
            Err(LoadError::Connectivity)
        }
    };
    match &outcome {
        Ok(items) => tracing::debug!(%url, count = items.len(), "feed loaded"),
        Err(e) => tracing::debug!(%url, error = %e, "feed load failed"),
    }
    outcome
}

#[async_trait]
impl<C: HttpClient + ?Sized> FeedLoader for RemoteFeedLoader<C> {
    fn load_with(&self, completion: LoadCompletion) {
        tracing::debug!(url = %self.state.url, "loading feed");
        let state: Weak<LoaderState> = Arc::downgrade(&self.state);
        self.client.get_with(
            &self.state.url,
            Box::new(move |result| {
                let Some(state) = state.upgrade() else {
                    tracing::trace!("feed loader dropped before the response arrived");
                    return;
                };
                completion(deliver(&state.url, result));
            }),
        );
    }

    async fn load(&self) -> LoadResult {
        tracing::debug!(url = %self.state.url, "loading feed");
        let result = self.client.get(&self.state.url).await;
        deliver(&self.state.url, result)
    }
}
