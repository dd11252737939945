//! Seoscope — on-page SEO analysis for a single URL.
//!
//! Fetches a target page plus its robots.txt and sitemap.xml, inspects the
//! HTML for a fixed checklist of on-page SEO signals, and produces a numeric
//! score with human-readable suggestions. Stateless: every evaluation is
//! independent and deterministic given identical fetch outcomes.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod fetch;
pub mod server;
