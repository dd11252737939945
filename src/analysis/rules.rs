//! Checklist rules and findings.
//!
//! Each rule carries a fixed penalty. The evaluator starts from 100, subtracts
//! the penalty of every triggered rule, and clamps at zero. Keeping rule,
//! penalty, and message together in a [`Finding`] lets tests recompute the
//! score independently from the returned findings.

use serde::Serialize;

/// One rule of the SEO checklist, in checklist order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rule {
    /// Primary fetch answered a non-200 status; zeroes the whole report.
    Unreachable,
    /// No `<title>` tag, or empty after trimming.
    MissingTitle,
    /// Title longer than 60 characters after trimming.
    LongTitle,
    /// No `<meta name="description">` with non-empty content.
    MissingMetaDescription,
    /// No `<h1>` anywhere in the document.
    MissingH1,
    /// One or more `<img>` elements without alt text.
    ImagesMissingAlt,
    /// No `<meta name="viewport">`.
    MissingViewport,
    /// Target URL is not served over HTTPS.
    NotHttps,
    /// robots.txt missing (non-200 or unreachable).
    MissingRobotsTxt,
    /// sitemap.xml missing (non-200 or unreachable).
    MissingSitemap,
    /// No JSON-LD structured data script.
    MissingStructuredData,
    /// Missing Open Graph or Twitter Card title tags.
    MissingSocialMeta,
    /// No `<link rel="canonical">`.
    MissingCanonical,
    /// One or more links returning 404.
    BrokenLinks,
    /// More than five words each exceeding 5% of all tokens.
    KeywordStuffing,
}

impl Rule {
    /// Fixed penalty subtracted from the score when this rule triggers.
    pub fn penalty(self) -> u32 {
        match self {
            Rule::Unreachable => 100,
            Rule::MissingTitle => 10,
            Rule::LongTitle => 5,
            Rule::MissingMetaDescription => 10,
            Rule::MissingH1 => 10,
            Rule::ImagesMissingAlt => 5,
            Rule::MissingViewport => 5,
            Rule::NotHttps => 10,
            Rule::MissingRobotsTxt => 5,
            Rule::MissingSitemap => 5,
            Rule::MissingStructuredData => 5,
            Rule::MissingSocialMeta => 5,
            Rule::MissingCanonical => 5,
            Rule::BrokenLinks => 10,
            Rule::KeywordStuffing => 10,
        }
    }
}

/// A triggered rule: penalty applied plus the suggestion shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub rule: Rule,
    pub penalty: u32,
    pub message: String,
}

impl Finding {
    /// Build a finding with the rule's fixed penalty and a static message.
    pub fn new(rule: Rule, message: &str) -> Self {
        Self {
            rule,
            penalty: rule.penalty(),
            message: message.to_string(),
        }
    }

    /// Build a finding with a message rendered from a count (images, links).
    pub fn with_count(rule: Rule, count: usize, template: impl Fn(usize) -> String) -> Self {
        Self {
            rule,
            penalty: rule.penalty(),
            message: template(count),
        }
    }
}
