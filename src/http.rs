use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{
    error::{PageError, Result},
    source::MetadataSource,
    types::{FileEntry, FileKind, Metadata, MetadataDocument},
};

/// Relative path of the metadata document, published next to the page
pub const METADATA_PATH: &str = "files_metadata.json";

/// HTTP-backed metadata source
///
/// Fetches the metadata document from a base URL with a single GET
/// request and decodes it into the page's data model.
#[derive(Clone)]
pub struct HttpMetadataSource {
    client: Client,
    base_url: String,
    path: String,
}

#[derive(Deserialize)]
struct RawDocument {
    files: Vec<RawFileEntry>,
    metadata: RawMetadata,
}

#[derive(Deserialize)]
struct RawFileEntry {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    size: u64,
    updated: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RawMetadata {
    total_files: u64,
    m3u_count: u64,
    epg_count: u64,
    next_update: DateTime<Utc>,
}

impl HttpMetadataSource {
    /// Create a new source rooted at `base_url`
    ///
    /// The document path defaults to [`METADATA_PATH`].
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .user_agent("playlist-hub/0.4")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url,
            path: METADATA_PATH.to_string(),
        }
    }

    /// Override the document path relative to the base URL
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Build the absolute URL of the metadata document
    fn document_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }
}

/// Map the wire representation onto the data model
///
/// Unknown `type` values are listed with the guides rather than
/// rejected.
fn into_document(raw: RawDocument) -> MetadataDocument {
    let files = raw
        .files
        .into_iter()
        .map(|e| FileEntry {
            name: e.name,
            kind: match e.kind.as_str() {
                "m3u" => FileKind::M3u,
                _ => FileKind::Epg,
            },
            size: e.size,
            updated: e.updated,
        })
        .collect();

    MetadataDocument {
        files,
        metadata: Metadata {
            total_files: raw.metadata.total_files,
            m3u_count: raw.metadata.m3u_count,
            epg_count: raw.metadata.epg_count,
            next_update: raw.metadata.next_update,
        },
    }
}

#[async_trait]
impl MetadataSource for HttpMetadataSource {
    async fn fetch_document(&self) -> Result<MetadataDocument> {
        let url = self.document_url();

        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await?;
                let raw: RawDocument = serde_json::from_str(&body)?;
                Ok(into_document(raw))
            }
            StatusCode::NOT_FOUND => Err(PageError::NotFound {
                path: self.path.clone(),
            }),
            status => Err(PageError::UnexpectedStatus {
                status,
                path: self.path.clone(),
            }),
        }
    }

    fn identifier(&self) -> String {
        self.document_url()
    }
}
