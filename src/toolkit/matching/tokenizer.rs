//! Lowercasing word tokenizer with English stop-word removal and n-gram expansion.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TOKEN_PATTERN: Regex = Regex::new(r"\b\w\w+\b").expect("token pattern is valid");

    pub static ref STOP_WORDS: HashSet<&'static str> = [
        "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is",
        "it", "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there",
        "these", "they", "this", "to", "was", "will", "with",
    ]
    .into_iter()
    .collect();
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NgramRange {
    pub min: usize,
    pub max: usize,
}

impl NgramRange {
    pub const UNIGRAMS: Self = Self { min: 1, max: 1 };
    pub const UNI_AND_BIGRAMS: Self = Self { min: 1, max: 2 };
}


/// Words of two or more characters, lowercased, stop words removed.
pub fn words(text: &str, remove_stop_words: bool) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|w| !(remove_stop_words && STOP_WORDS.contains(w)))
        .map(str::to_string)
        .collect()
}


/// Terms for the given n-gram range, in document order: all n-grams of the
/// smallest size first, then the next size.
pub fn terms(text: &str, range: NgramRange, remove_stop_words: bool) -> Vec<String> {
    let words = words(text, remove_stop_words);
    let mut out = Vec::new();

    for n in range.min.max(1)..=range.max {
        if n == 1 {
            out.extend(words.iter().cloned());
            continue;
        }
        out.extend(words.windows(n).map(|w| w.join(" ")));
    }

    out
}
