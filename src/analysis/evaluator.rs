//! The SEO evaluator: fetch, parse, run the checklist, score.

use crate::analysis::keywords;
use crate::analysis::links;
use crate::analysis::page::PageSummary;
use crate::analysis::rules::{Finding, Rule};
use crate::fetch::{FetchError, HttpClient};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Timeout for the primary page and auxiliary (robots.txt, sitemap.xml) fetches.
const PAGE_TIMEOUT: Duration = Duration::from_secs(10);

/// Title length above which the "too long" suggestion triggers.
const MAX_TITLE_LEN: usize = 60;

/// Result of one evaluation: clamped score plus findings in checklist order.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Score in `[0, 100]`: 100 minus the sum of triggered penalties.
    pub score: u32,
    /// One finding per triggered check, in checklist order.
    pub findings: Vec<Finding>,
}

impl AnalysisReport {
    fn from_findings(findings: Vec<Finding>) -> Self {
        let spent: u32 = findings.iter().map(|f| f.penalty).sum();
        Self {
            score: 100u32.saturating_sub(spent),
            findings,
        }
    }

    /// The flat suggestion strings, in checklist order.
    pub fn suggestions(&self) -> Vec<String> {
        self.findings.iter().map(|f| f.message.clone()).collect()
    }
}

/// Failure that aborts the whole analysis.
///
/// Expected absences (missing tags, 404 on robots.txt) are findings, not
/// errors; only transport failures on the primary fetch and internal join
/// failures surface here.
#[derive(Debug, Error)]
pub enum EvaluateError {
    #[error("{0}")]
    Fetch(#[from] FetchError),
    #[error("analysis task failed: {0}")]
    Internal(String),
}

/// Stateless single-page SEO evaluator.
///
/// Holds only the injected HTTP client; every call to [`Evaluator::evaluate`]
/// is independent. All fetches within one evaluation are sequential.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    client: HttpClient,
}

impl Evaluator {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Run the full checklist against `url`.
    ///
    /// Returns `Ok` with a zero-score "not reachable" report when the primary
    /// fetch answers a non-200 status; returns `Err` only on transport
    /// failure of the primary fetch.
    pub async fn evaluate(&self, url: &str) -> Result<AnalysisReport, EvaluateError> {
        info!("analyzing {url}");

        let response = self.client.get(url, PAGE_TIMEOUT).await?;
        if !response.is_ok() {
            debug!("primary fetch returned status {}", response.status);
            return Ok(AnalysisReport::from_findings(vec![Finding::new(
                Rule::Unreachable,
                "Website not reachable. Check the URL.",
            )]));
        }

        // scraper's DOM is not Send; extract everything in one blocking pass.
        let body = response.body;
        let summary = tokio::task::spawn_blocking(move || PageSummary::from_html(&body))
            .await
            .map_err(|e| EvaluateError::Internal(e.to_string()))?;

        let mut findings = Vec::new();

        self.check_title(&summary, &mut findings);
        self.check_meta_description(&summary, &mut findings);
        self.check_h1(&summary, &mut findings);
        self.check_image_alt(&summary, &mut findings);
        self.check_viewport(&summary, &mut findings);
        self.check_https(url, &mut findings);
        self.check_robots_txt(url, &mut findings).await;
        self.check_sitemap(url, &mut findings).await;
        self.check_structured_data(&summary, &mut findings);
        self.check_social_meta(&summary, &mut findings);
        self.check_canonical(&summary, &mut findings);
        self.check_broken_links(&summary, url, &mut findings).await;
        self.check_keyword_stuffing(&summary, &mut findings);

        let report = AnalysisReport::from_findings(findings);
        info!("score for {url}: {}", report.score);
        Ok(report)
    }

    fn check_title(&self, summary: &PageSummary, findings: &mut Vec<Finding>) {
        match summary.title.as_deref() {
            None | Some("") => findings.push(Finding::new(
                Rule::MissingTitle,
                "Missing <title> tag. Add a unique, descriptive title.",
            )),
            Some(title) if title.chars().count() > MAX_TITLE_LEN => findings.push(Finding::new(
                Rule::LongTitle,
                "Title is too long (over 60 characters). Shorten it.",
            )),
            Some(_) => {}
        }
    }

    fn check_meta_description(&self, summary: &PageSummary, findings: &mut Vec<Finding>) {
        if !summary.has_meta_description {
            findings.push(Finding::new(
                Rule::MissingMetaDescription,
                "Missing <meta name='description'>. Add a description between 50-160 characters.",
            ));
        }
    }

    fn check_h1(&self, summary: &PageSummary, findings: &mut Vec<Finding>) {
        if summary.h1_count == 0 {
            findings.push(Finding::new(
                Rule::MissingH1,
                "No <h1> tag found. Use an <h1> for the main heading.",
            ));
        }
    }

    fn check_image_alt(&self, summary: &PageSummary, findings: &mut Vec<Finding>) {
        if summary.images_missing_alt > 0 {
            findings.push(Finding::with_count(
                Rule::ImagesMissingAlt,
                summary.images_missing_alt,
                |n| format!("{n} images are missing 'alt' attributes. Add descriptive alt text."),
            ));
        }
    }

    fn check_viewport(&self, summary: &PageSummary, findings: &mut Vec<Finding>) {
        if !summary.has_viewport {
            findings.push(Finding::new(
                Rule::MissingViewport,
                "Missing <meta name='viewport'>. Add it for mobile responsiveness.",
            ));
        }
    }

    fn check_https(&self, url: &str, findings: &mut Vec<Finding>) {
        if !url.starts_with("https://") {
            findings.push(Finding::new(
                Rule::NotHttps,
                "Your website is not secure (missing HTTPS). Get an SSL certificate.",
            ));
        }
    }

    /// robots.txt and sitemap.xml: any non-200 answer counts as missing, and
    /// transport errors are caught here and scored the same way rather than
    /// aborting the analysis (same policy as per-link failures).
    async fn check_robots_txt(&self, url: &str, findings: &mut Vec<Finding>) {
        if !self.aux_resource_present(url, "robots.txt").await {
            findings.push(Finding::new(
                Rule::MissingRobotsTxt,
                "Missing robots.txt file. Add one to guide search engines.",
            ));
        }
    }

    async fn check_sitemap(&self, url: &str, findings: &mut Vec<Finding>) {
        if !self.aux_resource_present(url, "sitemap.xml").await {
            findings.push(Finding::new(
                Rule::MissingSitemap,
                "Missing sitemap.xml file. Add one for better indexing.",
            ));
        }
    }

    async fn aux_resource_present(&self, url: &str, name: &str) -> bool {
        let aux_url = format!("{}/{}", url.trim_end_matches('/'), name);
        match self.client.get_status(&aux_url, PAGE_TIMEOUT).await {
            Ok(status) => status == 200,
            Err(e) => {
                debug!("{name} fetch failed, treating as missing: {e}");
                false
            }
        }
    }

    fn check_structured_data(&self, summary: &PageSummary, findings: &mut Vec<Finding>) {
        if !summary.has_json_ld {
            findings.push(Finding::new(
                Rule::MissingStructuredData,
                "Missing structured data (Schema.org). Add JSON-LD for better search visibility.",
            ));
        }
    }

    fn check_social_meta(&self, summary: &PageSummary, findings: &mut Vec<Finding>) {
        // Either tag missing costs the single social penalty.
        if !summary.has_og_title || !summary.has_twitter_title {
            findings.push(Finding::new(
                Rule::MissingSocialMeta,
                "Missing Open Graph & Twitter Card tags. Add for better social media previews.",
            ));
        }
    }

    fn check_canonical(&self, summary: &PageSummary, findings: &mut Vec<Finding>) {
        if !summary.has_canonical {
            findings.push(Finding::new(
                Rule::MissingCanonical,
                "Missing canonical tag. Add it to prevent duplicate content issues.",
            ));
        }
    }

    async fn check_broken_links(
        &self,
        summary: &PageSummary,
        url: &str,
        findings: &mut Vec<Finding>,
    ) {
        let broken = links::count_broken(&summary.hrefs, url, &self.client).await;
        if broken > 0 {
            findings.push(Finding::with_count(Rule::BrokenLinks, broken, |n| {
                format!("{n} broken links detected. Fix or remove them.")
            }));
        }
    }

    fn check_keyword_stuffing(&self, summary: &PageSummary, findings: &mut Vec<Finding>) {
        if keywords::is_stuffed(&summary.visible_text) {
            findings.push(Finding::new(
                Rule::KeywordStuffing,
                "Too many repetitive keywords detected. Avoid keyword stuffing.",
            ));
        }
    }
}
