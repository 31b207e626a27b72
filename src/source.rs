use async_trait::async_trait;

use crate::{error::Result, types::MetadataDocument};

/// Provider of the metadata document
///
/// Implementors perform the single fetch-and-decode step of a page
/// load. The page controller never retries; whatever error comes back
/// is rendered as the page's error state.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Fetch and decode the metadata document
    async fn fetch_document(&self) -> Result<MetadataDocument>;

    /// Get a human-readable identifier for this source (for logging/debugging)
    fn identifier(&self) -> String;
}
