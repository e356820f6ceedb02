//! Domain model for the feed.
//!
//! # Design
//! `FeedItem` is the only value the loader hands back to callers. It is
//! defined independently of the wire DTOs in `mapper`, so payload quirks
//! (the `image` key, nullable optionals) never leak into the domain.
//! The mock-server defines its own copy of the wire schema; integration
//! tests catch any drift between the two crates.

use async_trait::async_trait;
use url::Url;
use uuid::Uuid;

use crate::error::LoadError;

/// A single entry of the remote feed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedItem {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: Url,
}

/// Outcome of one load: the decoded items in payload order, or a domain error.
pub type LoadResult = Result<Vec<FeedItem>, LoadError>;

/// Caller-supplied handler for the callback form of [`FeedLoader::load_with`].
pub type LoadCompletion = Box<dyn FnOnce(LoadResult) + Send + 'static>;

/// Anything that can produce the feed, in either calling convention.
///
/// Both forms yield the same outcome for the same underlying response; they
/// differ only in how the caller receives it.
#[async_trait]
pub trait FeedLoader: Send + Sync {
    /// Start a load and deliver its result to `completion`.
    ///
    /// The completion may fire on any thread, or not at all if the loader is
    /// dropped before the response arrives.
    fn load_with(&self, completion: LoadCompletion);

    /// Load the feed, suspending the caller until the transport completes.
    async fn load(&self) -> LoadResult;
}
