//! Listing store and the sources it can be loaded from.
//!
//! The store is populated once at page start. Loading never fails: any
//! transport, status or decode failure is logged and replaced by an empty
//! collection so rendering always has a valid sequence to iterate.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use hearth_model::{Listing, ListingId, ListingsDocument};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::error::{CoreError, Result};

/// A read-only origin for the listing collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch and decode the listings document.
    async fn fetch(&self) -> Result<ListingsDocument>;

    /// Human-readable origin used in logs.
    fn describe(&self) -> String;
}

/// Fetches the listings document over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpListingSource {
    client: Client,
    url: Url,
}

impl HttpListingSource {
    /// Build a source with its own client. A zero `timeout` disables the
    /// request timeout.
    pub fn new(url: Url, timeout: Duration) -> Result<Self> {
        let mut builder = Client::builder();
        if !timeout.is_zero() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client, url })
    }

    /// Source sharing an existing client.
    pub fn with_client(client: Client, url: Url) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl ListingSource for HttpListingSource {
    async fn fetch(&self) -> Result<ListingsDocument> {
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::HttpStatus {
                url: self.url.to_string(),
                status,
            });
        }
        let body = response.bytes().await?;
        decode_document(&body)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// Reads the listings document from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileListingSource {
    path: PathBuf,
}

impl FileListingSource {
    /// Source reading the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ListingSource for FileListingSource {
    async fn fetch(&self) -> Result<ListingsDocument> {
        let bytes = tokio::fs::read(&self.path).await?;
        decode_document(&bytes)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Document shape before the individual records are decoded.
#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    listings: Vec<serde_json::Value>,
}

/// Decode a listings document record by record. A record that does not
/// decode is logged and skipped; only a malformed document is an error.
pub fn decode_document(bytes: &[u8]) -> Result<ListingsDocument> {
    let raw: RawDocument = serde_json::from_slice(bytes)?;
    let listings = raw
        .listings
        .into_iter()
        .enumerate()
        .filter_map(|(position, value)| {
            let id = value.get("id").map(ToString::to_string);
            match serde_json::from_value::<Listing>(value) {
                Ok(listing) => Some(listing),
                Err(err) => {
                    warn!(position, id = ?id, error = %err, "skipping malformed listing");
                    None
                }
            }
        })
        .collect();
    Ok(ListingsDocument { listings })
}

/// Ordered, immutable listing collection shared by every page component.
/// Cloning is cheap.
#[derive(Debug, Clone, Default)]
pub struct ListingStore {
    listings: Arc<[Listing]>,
}

impl ListingStore {
    /// Store holding `listings` in the given order.
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings: listings.into(),
        }
    }

    /// Store without listings.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fetch once from `source`. Failures degrade to an empty store.
    pub async fn load(source: &dyn ListingSource) -> Self {
        let origin = source.describe();
        debug!(source = %origin, "loading listings");
        match source.fetch().await {
            Ok(document) => {
                info!(
                    source = %origin,
                    listing_count = document.listings.len(),
                    "listings loaded"
                );
                Self::new(document.listings)
            }
            Err(err) => {
                error!(source = %origin, error = %err, "error loading listings");
                Self::empty()
            }
        }
    }

    /// All listings, in document order.
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Iterate over the listings.
    pub fn iter(&self) -> std::slice::Iter<'_, Listing> {
        self.listings.iter()
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the store has no listings.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Listing with the given id.
    pub fn get(&self, id: &ListingId) -> Option<&Listing> {
        self.listings.iter().find(|listing| &listing.id == id)
    }

    /// Featured listings in store order, at most `limit` of them.
    pub fn featured(&self, limit: usize) -> Vec<&Listing> {
        self.listings
            .iter()
            .filter(|listing| listing.featured)
            .take(limit)
            .collect()
    }
}

impl<'a> IntoIterator for &'a ListingStore {
    type Item = &'a Listing;
    type IntoIter = std::slice::Iter<'a, Listing>;

    fn into_iter(self) -> Self::IntoIter {
        self.listings.iter()
    }
}
