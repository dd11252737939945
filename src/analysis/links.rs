//! Broken-link detection.
//!
//! Each `<a href>` is resolved against the page URL and fetched sequentially
//! with a short timeout. A link is broken only when it answers 404. Transport
//! failures (timeout, DNS, unparseable href) fold into "not broken": one
//! flaky third-party link must not distort an otherwise valid report.

use crate::fetch::HttpClient;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Timeout applied to each individual link fetch.
const LINK_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of probing one link.
enum LinkStatus {
    /// The link answered with this status code.
    Reached(u16),
    /// Transport failure or unusable href; explicitly not broken.
    Unreachable,
}

/// Resolve an href against the page URL.
///
/// Root-relative hrefs are rebased onto the page URL with its trailing slash
/// stripped; absolute http(s) hrefs pass through. Anything else (fragments,
/// mailto:, bare relative paths) yields `None` and is skipped.
pub fn resolve_href(href: &str, page_url: &str) -> Option<String> {
    if let Some(path) = href.strip_prefix('/') {
        return Some(format!("{}/{}", page_url.trim_end_matches('/'), path));
    }
    Url::parse(href)
        .ok()
        .filter(|u| matches!(u.scheme(), "http" | "https"))
        .map(|_| href.to_string())
}

/// Count links on the page that answer 404. Fetches run one at a time.
pub async fn count_broken(hrefs: &[String], page_url: &str, client: &HttpClient) -> usize {
    let mut broken = 0;
    for href in hrefs {
        let Some(link_url) = resolve_href(href, page_url) else {
            continue;
        };
        match probe(&link_url, client).await {
            LinkStatus::Reached(404) => {
                debug!("broken link: {link_url}");
                broken += 1;
            }
            LinkStatus::Reached(_) => {}
            LinkStatus::Unreachable => {
                debug!("link unreachable, skipping: {link_url}");
            }
        }
    }
    broken
}

async fn probe(link_url: &str, client: &HttpClient) -> LinkStatus {
    match client.get_status(link_url, LINK_TIMEOUT).await {
        Ok(status) => LinkStatus::Reached(status),
        Err(_) => LinkStatus::Unreachable,
    }
}
