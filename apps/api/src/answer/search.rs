//! Keyword search over the document corpus.
//!
//! A linear scan: segment the corpus into sentence-like units, extract
//! keywords from the query, and return the first few units containing any
//! keyword. Deterministic for a fixed (query, corpus) pair and never fails.

use once_cell::sync::Lazy;
use regex::Regex;

/// Upper bound on the number of snippets joined into an answer.
pub const MAX_SNIPPETS: usize = 5;

const ANSWER_PREFIX: &str = "Based on the provided documents: ";

pub const NO_MATCH_MESSAGE: &str = "I couldn't find specific information in the documents \
     related to that. Can you rephrase or ask about specific details?";

/// Splits text into sentence-like units after any `.`, `!` or `?` followed
/// by whitespace.
///
/// A documented heuristic, not a grammar: abbreviations ("Dr. Smith"),
/// numbered lists ("1. Overview") and quoted punctuation all split wrongly,
/// and that imprecision is accepted. Callers depend on the exact boundary
/// rule, so do not "improve" it.
fn split_sentences(text: &str) -> Vec<&str> {
    static BOUNDARY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").unwrap());

    let mut units = Vec::new();
    let mut start = 0;
    for m in BOUNDARY_RE.find_iter(text) {
        // The terminator is a single ASCII byte; keep it with its sentence.
        let end = m.start() + 1;
        units.push(&text[start..end]);
        start = m.end();
    }
    units.push(&text[start..]);
    units
}

/// Keywords of a lower-cased query: every maximal run of two or more word
/// characters. Single letters and punctuation are dropped.
fn extract_keywords(query_lower: &str) -> Vec<String> {
    static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w{2,}\b").unwrap());

    WORD_RE
        .find_iter(query_lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Answers a question by scanning the corpus for sentences containing any
/// query keyword (or the whole query as a phrase).
///
/// Collects at most [`MAX_SNIPPETS`] relevant units in corpus order, joins
/// them with single spaces and appends a final period. A sentence that
/// already ends with a terminator therefore gains a second one; that
/// artifact is part of the observable contract and is kept.
pub fn search(query: &str, corpus: &str) -> String {
    let query_lower = query.to_lowercase();

    let mut keywords = extract_keywords(&query_lower);
    if keywords.is_empty() {
        // No usable words; fall back to the whole query as one phrase.
        keywords.push(query_lower.clone());
    }

    let mut snippets: Vec<&str> = Vec::new();
    for unit in split_sentences(corpus) {
        let unit_lower = unit.to_lowercase();
        let relevant = keywords.iter().any(|k| unit_lower.contains(k.as_str()))
            || unit_lower.contains(&query_lower);
        if relevant {
            let trimmed = unit.trim();
            if !trimmed.is_empty() {
                snippets.push(trimmed);
                if snippets.len() >= MAX_SNIPPETS {
                    break;
                }
            }
        }
    }

    if snippets.is_empty() {
        NO_MATCH_MESSAGE.to_string()
    } else {
        format!("{ANSWER_PREFIX}{}.", snippets.join(" "))
    }
}
