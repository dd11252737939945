//! HTML extraction into a plain summary struct.
//!
//! `scraper`'s document type is not `Send`, so all DOM work happens in one
//! synchronous pass (run under `spawn_blocking` by the evaluator) that pulls
//! out everything the checks need. The checks themselves then operate on this
//! `Send + 'static` summary.

use scraper::{Html, Selector};

/// Everything the on-page checks need, extracted in a single pass.
#[derive(Debug, Clone, Default)]
pub struct PageSummary {
    /// Trimmed text of the first `<title>`, if any.
    pub title: Option<String>,
    /// Whether a `<meta name="description">` with non-empty content exists.
    pub has_meta_description: bool,
    /// Number of `<h1>` elements.
    pub h1_count: usize,
    /// Number of `<img>` elements without a non-empty `alt` attribute.
    pub images_missing_alt: usize,
    /// Whether a `<meta name="viewport">` exists.
    pub has_viewport: bool,
    /// Whether a `<script type="application/ld+json">` exists.
    pub has_json_ld: bool,
    /// Whether a `<meta property="og:title">` exists.
    pub has_og_title: bool,
    /// Whether a `<meta name="twitter:title">` exists.
    pub has_twitter_title: bool,
    /// Whether a `<link rel="canonical">` exists.
    pub has_canonical: bool,
    /// Every `<a href>` value, in document order.
    pub hrefs: Vec<String>,
    /// All text content of the document, concatenated.
    pub visible_text: String,
}

impl PageSummary {
    /// Parse HTML and extract the summary. Synchronous; call from a
    /// blocking context.
    pub fn from_html(html: &str) -> Self {
        let document = Html::parse_document(html);
        let mut summary = PageSummary::default();

        if let Ok(sel) = Selector::parse("title") {
            if let Some(el) = document.select(&sel).next() {
                let text: String = el.text().collect();
                summary.title = Some(text.trim().to_string());
            }
        }

        if let Ok(sel) = Selector::parse(r#"meta[name="description"]"#) {
            summary.has_meta_description = document
                .select(&sel)
                .any(|el| el.value().attr("content").is_some_and(|c| !c.is_empty()));
        }

        if let Ok(sel) = Selector::parse("h1") {
            summary.h1_count = document.select(&sel).count();
        }

        if let Ok(sel) = Selector::parse("img") {
            summary.images_missing_alt = document
                .select(&sel)
                .filter(|el| el.value().attr("alt").is_none_or(|a| a.is_empty()))
                .count();
        }

        if let Ok(sel) = Selector::parse(r#"meta[name="viewport"]"#) {
            summary.has_viewport = document.select(&sel).next().is_some();
        }

        if let Ok(sel) = Selector::parse(r#"script[type="application/ld+json"]"#) {
            summary.has_json_ld = document.select(&sel).next().is_some();
        }

        if let Ok(sel) = Selector::parse(r#"meta[property="og:title"]"#) {
            summary.has_og_title = document.select(&sel).next().is_some();
        }

        if let Ok(sel) = Selector::parse(r#"meta[name="twitter:title"]"#) {
            summary.has_twitter_title = document.select(&sel).next().is_some();
        }

        if let Ok(sel) = Selector::parse(r#"link[rel="canonical"]"#) {
            summary.has_canonical = document.select(&sel).next().is_some();
        }

        if let Ok(sel) = Selector::parse("a[href]") {
            summary.hrefs = document
                .select(&sel)
                .filter_map(|el| el.value().attr("href"))
                .map(|h| h.to_string())
                .collect();
        }

        summary.visible_text = document
            .root_element()
            .text()
            .collect::<Vec<_>>()
            .join(" ");

        summary
    }
}
