use crate::locale::Messages;
use crate::types::FileKind;

/// A display-ready file card
///
/// All fields are already formatted and localized; a view only has to
/// lay them out.
#[derive(Debug, Clone, PartialEq)]
pub struct FileCard {
    pub name: String,
    pub kind: FileKind,
    pub kind_label: String,
    pub size: String,
    pub updated: String,
    /// Download target, the bare file name relative to the page
    pub href: String,
}

/// Contents of one list section
///
/// Either rendered cards or a notice (empty state or error) standing in
/// for them. A write of either fully replaces the section.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    Cards(Vec<FileCard>),
    Notice(String),
}

/// The summary panel's data
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryPanel {
    pub total_files: u64,
    pub m3u_count: u64,
    pub epg_count: u64,
    /// Localized next-update time
    pub next_update: String,
}

/// Receiver for every display write the controller performs
///
/// One method per page region. Each call replaces the region's previous
/// content, so rendering the same document twice leaves the same state.
pub trait PageView {
    fn set_year(&mut self, year: i32);
    fn set_last_update(&mut self, text: &str);
    fn show_playlists(&mut self, content: SectionContent);
    fn show_guides(&mut self, content: SectionContent);
    fn show_summary(&mut self, panel: SummaryPanel);
}

/// View that fills the page template server-side
///
/// Collects the controller's writes and renders the complete HTML
/// document in one pass.
pub struct HtmlView {
    messages: Messages,
    year: Option<i32>,
    last_update: Option<String>,
    playlists: Option<SectionContent>,
    guides: Option<SectionContent>,
    summary: Option<SummaryPanel>,
}

impl HtmlView {
    pub fn new(messages: Messages) -> Self {
        Self {
            messages,
            year: None,
            last_update: None,
            playlists: None,
            guides: None,
            summary: None,
        }
    }

    fn card_html(&self, card: &FileCard) -> String {
        let icon = match card.kind {
            FileKind::M3u => "fa-list",
            FileKind::Epg => "fa-calendar-alt",
        };

        format!(
            "<div class=\"file-card\">\
             <h3><i class=\"fas {icon}\"></i> {name}</h3>\
             <p class=\"file-type\">{label}</p>\
             <p class=\"file-size\">{size_prefix}: {size}</p>\
             <p class=\"file-updated\">{updated_prefix}: {updated}</p>\
             <a href=\"{href}\" download>{download}</a>\
             </div>",
            icon = icon,
            name = escape_html(&card.name),
            label = escape_html(&card.kind_label),
            size_prefix = escape_html(&self.messages.size_prefix),
            size = escape_html(&card.size),
            updated_prefix = escape_html(&self.messages.updated_prefix),
            updated = escape_html(&card.updated),
            href = escape_html(&card.href),
            download = escape_html(&self.messages.download_label),
        )
    }

    fn section_html(&self, content: Option<&SectionContent>) -> String {
        match content {
            None => String::new(),
            Some(SectionContent::Notice(text)) => {
                format!("<div class=\"error-message\">{}</div>", escape_html(text))
            }
            Some(SectionContent::Cards(cards)) => {
                cards.iter().map(|card| self.card_html(card)).collect()
            }
        }
    }

    fn summary_html(&self) -> String {
        match &self.summary {
            None => String::new(),
            Some(panel) => format!(
                "<p><strong>{total_label}:</strong> {total} ({m3u} M3U, {epg} EPG)</p>\
                 <p><strong>{next_label}:</strong> {next}</p>",
                total_label = escape_html(&self.messages.total_files_label),
                total = panel.total_files,
                m3u = panel.m3u_count,
                epg = panel.epg_count,
                next_label = escape_html(&self.messages.next_update_label),
                next = escape_html(&panel.next_update),
            ),
        }
    }

    /// Render the complete page
    pub fn render(&self) -> String {
        format!(
            "<!DOCTYPE html>\n\
             <html lang=\"pt-BR\">\n\
             <head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
             <body>\n\
             <main>\n\
             <section id=\"m3u-files\">{playlists}</section>\n\
             <section id=\"epg-files\">{guides}</section>\n\
             <section id=\"metadata-info\">{summary}</section>\n\
             </main>\n\
             <footer>\n\
             <p><span id=\"last-update\">{last_update}</span></p>\n\
             <p>&copy; <span id=\"current-year\">{year}</span></p>\n\
             </footer>\n\
             </body>\n\
             </html>\n",
            title = escape_html(&self.messages.page_title),
            playlists = self.section_html(self.playlists.as_ref()),
            guides = self.section_html(self.guides.as_ref()),
            summary = self.summary_html(),
            last_update = escape_html(self.last_update.as_deref().unwrap_or("")),
            year = self.year.map(|y| y.to_string()).unwrap_or_default(),
        )
    }
}

impl PageView for HtmlView {
    fn set_year(&mut self, year: i32) {
        self.year = Some(year);
    }

    fn set_last_update(&mut self, text: &str) {
        self.last_update = Some(text.to_string());
    }

    fn show_playlists(&mut self, content: SectionContent) {
        self.playlists = Some(content);
    }

    fn show_guides(&mut self, content: SectionContent) {
        self.guides = Some(content);
    }

    fn show_summary(&mut self, panel: SummaryPanel) {
        self.summary = Some(panel);
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
