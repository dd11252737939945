//! SEO evaluation: page extraction, checklist rules, and the evaluator.

pub mod evaluator;
pub mod keywords;
pub mod links;
pub mod page;
pub mod rules;

pub use evaluator::{AnalysisReport, EvaluateError, Evaluator};
pub use rules::{Finding, Rule};
