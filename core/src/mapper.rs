//! Validation and decoding of feed responses.
//!
//! # Design
//! `map` is the only place that decides whether a response is usable. Both
//! loader calling conventions route through it, so the status and payload
//! rules cannot drift apart.
//!
//! Decoding is all-or-nothing at the container level: the body must be a
//! JSON object whose `items` key holds a list of well-formed entries. A bad
//! UUID or URL in any entry fails the whole decode. Once the container has
//! decoded, converting an entry into a `FeedItem` cannot fail, so no entry is
//! ever dropped. Optional fields accept both absence and `null`.

use serde::Deserialize;
use url::Url;
use uuid::Uuid;

use crate::error::LoadError;
use crate::types::{FeedItem, LoadResult};

const OK_200: u16 = 200;

#[derive(Deserialize)]
struct Root {
    items: Vec<RemoteFeedItem>,
}

#[derive(Deserialize)]
struct RemoteFeedItem {
    id: Uuid,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    location: Option<String>,
    image: Url,
}

impl From<RemoteFeedItem> for FeedItem {
    fn from(item: RemoteFeedItem) -> Self {
        FeedItem {
            id: item.id,
            description: item.description,
            location: item.location,
            image_url: item.image,
        }
    }
}

/// Validate `status` and decode `body` into feed items, in payload order.
pub fn map(body: &[u8], status: u16) -> LoadResult {
    if status != OK_200 {
        tracing::debug!(status, "rejecting feed response with unexpected status");
        return Err(LoadError::InvalidData);
    }
    let root: Root = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "rejecting undecodable feed payload");
        LoadError::InvalidData
    })?;
    Ok(root.items.into_iter().map(FeedItem::from).collect())
}
