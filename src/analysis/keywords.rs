//! Keyword stuffing detection over a page's visible text.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// A word is "excessive" when its frequency exceeds this share of all tokens.
const DENSITY_THRESHOLD: f64 = 0.05;

/// Stuffing triggers when more than this many distinct words are excessive.
const EXCESSIVE_WORD_LIMIT: usize = 5;

fn word_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\w+\b").unwrap())
}

/// Tokenize text into lower-cased word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    word_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Count distinct words whose frequency exceeds 5% of the total token count.
pub fn excessive_word_count(text: &str) -> usize {
    let tokens = tokenize(text);
    let total = tokens.len();
    if total == 0 {
        return 0;
    }

    let mut freq: HashMap<&str, usize> = HashMap::new();
    for token in &tokens {
        *freq.entry(token.as_str()).or_insert(0) += 1;
    }

    let cutoff = total as f64 * DENSITY_THRESHOLD;
    freq.values().filter(|&&count| count as f64 > cutoff).count()
}

/// Whether the text trips the keyword-stuffing rule.
pub fn is_stuffed(text: &str) -> bool {
    excessive_word_count(text) > EXCESSIVE_WORD_LIMIT
}
