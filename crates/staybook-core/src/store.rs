//! Loading the booking document.
//!
//! A [`HotelStore`] is a parsed snapshot of the whole document for the
//! lifetime of one request. [`StoreSource::load`] reads and parses the
//! document again on every call. Records are kept as raw JSON values; only
//! the top-level shape of the document is checked here.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::app_config::AppConfig;
use crate::hotels::HotelId;

/// The document is missing, unreadable, or not a hotel document.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read hotel document {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse hotel document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to fetch hotel document: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid hotel document URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HotelDocument {
    #[serde(default)]
    pub hotels: Vec<Value>,
    #[serde(default)]
    pub recommended_hotels: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default)]
pub struct HotelStore {
    document: HotelDocument,
}

impl HotelStore {
    #[must_use]
    pub fn from_document(document: HotelDocument) -> Self {
        Self { document }
    }

    /// Parse a store from raw document JSON.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Parse`] if the JSON is malformed, or if
    /// `hotels` or `recommended_hotels` is present but not an array.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, StoreError> {
        let document: HotelDocument = serde_json::from_slice(bytes)?;
        let store = Self::from_document(document);
        for id in store.duplicate_ids() {
            tracing::warn!(
                hotel_id = %id,
                "duplicate hotel id in document; lookups resolve to the first record"
            );
        }
        Ok(store)
    }

    #[must_use]
    pub fn hotels(&self) -> &[Value] {
        &self.document.hotels
    }

    /// Recommended hotels, empty when the document has no such key.
    #[must_use]
    pub fn recommended(&self) -> &[Value] {
        self.document.recommended_hotels.as_deref().unwrap_or_default()
    }

    /// Ids shared by more than one hotel, in order of their second occurrence.
    ///
    /// Records without a string or numeric id are not counted.
    #[must_use]
    pub fn duplicate_ids(&self) -> Vec<HotelId> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        self.document
            .hotels
            .iter()
            .filter_map(HotelId::of)
            .filter(|id| !seen.insert(id.clone()) && reported.insert(id.clone()))
            .collect()
    }
}

/// Remote JSON endpoint serving the full document.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    client: Client,
    url: Url,
}

impl RemoteStore {
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidUrl`] if `url` does not parse, or
    /// [`StoreError::Http`] if the HTTP client cannot be built.
    pub fn new(url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, StoreError> {
        let parsed = Url::parse(url).map_err(|e| StoreError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            url: parsed,
        })
    }

    async fn fetch(&self) -> Result<HotelStore, StoreError> {
        let bytes = self
            .client
            .get(self.url.clone())
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        HotelStore::from_json_slice(&bytes)
    }
}

/// Where the booking document lives.
#[derive(Debug, Clone)]
pub enum StoreSource {
    File(PathBuf),
    Remote(RemoteStore),
}

impl StoreSource {
    /// Remote URL when configured, otherwise the local path.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the remote URL or HTTP client is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, StoreError> {
        match config.db_url.as_deref() {
            Some(url) => Ok(Self::Remote(RemoteStore::new(
                url,
                config.remote_timeout_secs,
                &config.user_agent,
            )?)),
            None => Ok(Self::File(config.db_path.clone())),
        }
    }

    /// Read and parse the document. Never cached.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on any read, transport or parse failure.
    pub async fn load(&self) -> Result<HotelStore, StoreError> {
        match self {
            StoreSource::File(path) => load_file(path).await,
            StoreSource::Remote(remote) => remote.fetch().await,
        }
    }
}

impl std::fmt::Display for StoreSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreSource::File(path) => write!(f, "file {}", path.display()),
            StoreSource::Remote(remote) => write!(
                f,
                "remote {}",
                remote.url.host_str().unwrap_or("<no host>")
            ),
        }
    }
}

async fn load_file(path: &Path) -> Result<HotelStore, StoreError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| StoreError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    HotelStore::from_json_slice(&bytes)
}
