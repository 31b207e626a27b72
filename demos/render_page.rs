/// Fetches the metadata document and prints the rendered page
///
/// Usage: render_page [base-url]
///
/// Tracing output goes to stderr so the page itself can be piped to a
/// file.
use std::sync::Arc;

use playlist_hub::{HtmlView, HttpMetadataSource, Messages, PageController, PtBrFormatter};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8000".to_string());

    let source = Arc::new(HttpMetadataSource::new(base_url));
    let controller = PageController::new(source, Arc::new(PtBrFormatter));

    let mut view = HtmlView::new(Messages::pt_br());
    controller.initialize(&mut view).await;

    println!("{}", view.render());
}
