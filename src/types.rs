use chrono::{DateTime, Utc};

/// Category a file is listed under
///
/// Anything that is not an M3U playlist belongs with the program guides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    M3u,
    Epg,
}

/// One downloadable file described by the metadata document
#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry {
    /// File name, also the download target relative to the page
    pub name: String,
    /// Which list the file belongs to
    pub kind: FileKind,
    /// Size in bytes
    pub size: u64,
    /// When the file was last refreshed
    pub updated: DateTime<Utc>,
}

/// Summary counters published alongside the file list
///
/// The counts are displayed as-is; `m3u_count + epg_count` is not
/// required to equal `total_files`.
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    pub total_files: u64,
    pub m3u_count: u64,
    pub epg_count: u64,
    pub next_update: DateTime<Utc>,
}

/// The full metadata document, read once per page load
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataDocument {
    /// Files in publication order
    pub files: Vec<FileEntry>,
    pub metadata: Metadata,
}
