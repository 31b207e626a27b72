use chrono::{DateTime, Datelike, Local, Timelike};

/// Localized date/time rendering
///
/// The formatter receives an instant in the page's local zone and
/// returns the display string for it. Implementations own the locale;
/// the rest of the crate never formats dates directly.
pub trait DateFormatter: Send + Sync {
    /// Long form for the page header: weekday, numeric day, full month
    /// name, year and hour:minute
    fn long_form(&self, when: DateTime<Local>) -> String;

    /// Compact day/month/year hour:minute form used on file cards and
    /// the summary panel
    fn short_form(&self, when: DateTime<Local>) -> String;
}

const WEEKDAYS_PT_BR: [&str; 7] = [
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
    "domingo",
];

const MONTHS_PT_BR: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Brazilian Portuguese formatter, the page's original locale
pub struct PtBrFormatter;

impl DateFormatter for PtBrFormatter {
    fn long_form(&self, when: DateTime<Local>) -> String {
        let weekday = WEEKDAYS_PT_BR[when.weekday().num_days_from_monday() as usize];
        let month = MONTHS_PT_BR[when.month0() as usize];
        format!(
            "{}, {} de {} de {}, {:02}:{:02}",
            weekday,
            when.day(),
            month,
            when.year(),
            when.hour(),
            when.minute()
        )
    }

    fn short_form(&self, when: DateTime<Local>) -> String {
        format!(
            "{:02}/{:02}/{} {:02}:{:02}",
            when.day(),
            when.month(),
            when.year(),
            when.hour(),
            when.minute()
        )
    }
}

/// Fixed page text in the display language
#[derive(Debug, Clone)]
pub struct Messages {
    pub page_title: String,
    pub playlist_label: String,
    pub guide_label: String,
    pub size_prefix: String,
    pub updated_prefix: String,
    pub download_label: String,
    pub no_playlists: String,
    pub no_guides: String,
    pub playlists_error: String,
    pub guides_error: String,
    pub total_files_label: String,
    pub next_update_label: String,
}

impl Messages {
    /// The original Brazilian Portuguese strings
    pub fn pt_br() -> Self {
        Self {
            page_title: "Playlists e Guias EPG".to_string(),
            playlist_label: "Playlist M3U".to_string(),
            guide_label: "Guia EPG".to_string(),
            size_prefix: "Tamanho".to_string(),
            updated_prefix: "Atualizado".to_string(),
            download_label: "Baixar".to_string(),
            no_playlists: "Nenhuma playlist M3U disponível no momento.".to_string(),
            no_guides: "Nenhum guia EPG disponível no momento.".to_string(),
            playlists_error: "Erro ao carregar as playlists. Por favor, tente recarregar a página."
                .to_string(),
            guides_error: "Erro ao carregar os guias EPG. Por favor, tente recarregar a página."
                .to_string(),
            total_files_label: "Total de arquivos".to_string(),
            next_update_label: "Próxima atualização".to_string(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::pt_br()
    }
}
