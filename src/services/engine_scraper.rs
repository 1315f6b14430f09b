use std::collections::HashSet;
use std::time::Duration;

use reqwest::StatusCode;

use crate::{domain::email::extract_emails, domain::engine::Engine, services::fetcher::Fetcher};

/// Run every result page of one engine through the extractor and union what
/// comes back. A non-200 status or transport error on one page is logged and
/// skipped, never retried, and never aborts the remaining pages. The fixed
/// sleep between pages is a courtesy delay, not adaptive rate limiting.
pub async fn scrape_engine(
    fetcher: &Fetcher,
    engine: Engine,
    domain: &str,
    limit: usize,
    page_delay: Duration,
) -> HashSet<String> {
    log::info!("[{}] Searching {}...", engine.menu_key(), engine.label());

    let mut emails: HashSet<String> = HashSet::new();

    for url in engine.page_urls(domain, limit) {
        match fetcher.fetch(&url).await {
            Ok((status, body)) if status == StatusCode::OK => {
                let found = extract_emails(&body, domain);
                log::info!(
                    "[{}] {}: found {} emails",
                    engine.menu_key(),
                    engine.label(),
                    found.len()
                );
                emails.extend(found);
            }
            Ok((status, _)) => {
                log::error!(
                    "[{}] {}: got status {} on {}",
                    engine.menu_key(),
                    engine.label(),
                    status,
                    url
                );
            }
            Err(e) => {
                log::error!(
                    "[{}] {} error: {:?}",
                    engine.menu_key(),
                    engine.label(),
                    e
                );
            }
        }

        tokio::time::sleep(page_delay).await;
    }

    emails
}
