pub mod error;
pub mod format;
pub mod http;
pub mod locale;
pub mod page;
pub mod source;
pub mod types;
pub mod view;

pub use error::{PageError, Result};
pub use format::format_size;
pub use http::{HttpMetadataSource, METADATA_PATH};
pub use locale::{DateFormatter, Messages, PtBrFormatter};
pub use page::PageController;
pub use source::MetadataSource;
pub use types::{FileEntry, FileKind, Metadata, MetadataDocument};
pub use view::{FileCard, HtmlView, PageView, SectionContent, SummaryPanel};
