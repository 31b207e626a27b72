use std::sync::Arc;

use chrono::{DateTime, Datelike, Local};
use tracing::{debug, error};

use crate::{
    format::format_size,
    locale::{DateFormatter, Messages},
    source::MetadataSource,
    types::{FileEntry, FileKind, Metadata},
    view::{FileCard, PageView, SectionContent, SummaryPanel},
};

/// Orchestrates one page load
///
/// Stamps the header, fetches the metadata document through the
/// injected source and renders either the file lists and summary or
/// the error state. The flow is strictly linear; failures never escape
/// [`PageController::initialize`].
pub struct PageController {
    source: Arc<dyn MetadataSource>,
    formatter: Arc<dyn DateFormatter>,
    messages: Messages,
}

impl PageController {
    /// Create a controller with the default (pt-BR) messages
    pub fn new(source: Arc<dyn MetadataSource>, formatter: Arc<dyn DateFormatter>) -> Self {
        Self {
            source,
            formatter,
            messages: Messages::default(),
        }
    }

    /// Replace the message table
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Populate the page: stamp the current year and last-update
    /// string, then load and render the metadata document
    pub async fn initialize(&self, view: &mut dyn PageView) {
        self.initialize_at(view, Local::now()).await;
    }

    /// Same as [`PageController::initialize`], with the clock instant
    /// supplied by the caller
    pub async fn initialize_at(&self, view: &mut dyn PageView, now: DateTime<Local>) {
        view.set_year(now.year());
        view.set_last_update(&self.formatter.long_form(now));
        self.load_metadata(view).await;
    }

    /// Fetch the metadata document and dispatch to the success or
    /// error rendering path
    pub async fn load_metadata(&self, view: &mut dyn PageView) {
        match self.source.fetch_document().await {
            Ok(document) => {
                debug!(
                    source = %self.source.identifier(),
                    files = document.files.len(),
                    "metadata document loaded"
                );
                self.render_files(view, &document.files);
                self.render_summary(view, &document.metadata);
            }
            Err(err) => {
                error!(source = %self.source.identifier(), %err, "failed to load metadata");
                self.render_error(view);
            }
        }
    }

    /// Build one card per entry, in document order, playlists and
    /// guides each in their own section
    ///
    /// A section that ends up with no cards shows its empty-state
    /// notice instead; the two sections are independent.
    pub fn render_files(&self, view: &mut dyn PageView, files: &[FileEntry]) {
        let mut playlists = Vec::new();
        let mut guides = Vec::new();

        for entry in files {
            let card = self.build_card(entry);
            match entry.kind {
                FileKind::M3u => playlists.push(card),
                FileKind::Epg => guides.push(card),
            }
        }

        view.show_playlists(if playlists.is_empty() {
            SectionContent::Notice(self.messages.no_playlists.clone())
        } else {
            SectionContent::Cards(playlists)
        });

        view.show_guides(if guides.is_empty() {
            SectionContent::Notice(self.messages.no_guides.clone())
        } else {
            SectionContent::Cards(guides)
        });
    }

    /// Write the summary panel: total count, per-kind counts and the
    /// localized next-update time
    pub fn render_summary(&self, view: &mut dyn PageView, metadata: &Metadata) {
        view.show_summary(SummaryPanel {
            total_files: metadata.total_files,
            m3u_count: metadata.m3u_count,
            epg_count: metadata.epg_count,
            next_update: self
                .formatter
                .short_form(metadata.next_update.with_timezone(&Local)),
        });
    }

    /// Replace both sections with the reload notices
    ///
    /// The summary panel is left alone: it was never written on this
    /// path.
    pub fn render_error(&self, view: &mut dyn PageView) {
        view.show_playlists(SectionContent::Notice(self.messages.playlists_error.clone()));
        view.show_guides(SectionContent::Notice(self.messages.guides_error.clone()));
    }

    fn build_card(&self, entry: &FileEntry) -> FileCard {
        let kind_label = match entry.kind {
            FileKind::M3u => self.messages.playlist_label.clone(),
            FileKind::Epg => self.messages.guide_label.clone(),
        };

        FileCard {
            name: entry.name.clone(),
            kind: entry.kind,
            kind_label,
            size: format_size(entry.size),
            updated: self
                .formatter
                .short_form(entry.updated.with_timezone(&Local)),
            href: entry.name.clone(),
        }
    }
}
