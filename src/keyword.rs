//! Frequency-based keyword extraction.
//!
//! Tokens are counted across the whole document, singletons and short tokens
//! are dropped, and each surviving term is categorized against the static
//! dictionaries in [`crate::dictionaries`].

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use tracing::{debug, trace};

use crate::dictionaries;
use crate::segment::{char_len, word_tokens};

/// Domain category of a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCategory {
    Legal,
    Financial,
    Temporal,
    General,
}

impl KeywordCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeywordCategory::Legal => "legal",
            KeywordCategory::Financial => "financial",
            KeywordCategory::Temporal => "temporal",
            KeywordCategory::General => "general",
        }
    }
}

impl fmt::Display for KeywordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A repeated term with its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    /// Lowercase token
    pub term: String,
    /// Occurrences across the document
    pub frequency: usize,
    pub category: KeywordCategory,
}

/// Extracts the most frequent terms of a document.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    /// Terms seen fewer times than this are dropped
    min_frequency: usize,
    /// Result is truncated to this many keywords
    max_keywords: usize,
    /// Tokens shorter than this many characters are ignored
    min_token_chars: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self {
            min_frequency: 2,
            max_keywords: 20,
            min_token_chars: 4,
        }
    }
}

impl KeywordExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_frequency(mut self, min_frequency: usize) -> Self {
        self.min_frequency = min_frequency;
        self
    }

    pub fn with_max_keywords(mut self, max_keywords: usize) -> Self {
        self.max_keywords = max_keywords;
        self
    }

    pub fn with_min_token_chars(mut self, min_token_chars: usize) -> Self {
        self.min_token_chars = min_token_chars;
        self
    }

    /// Keywords sorted by frequency, most frequent first.
    ///
    /// Terms with equal frequency keep the order of their first occurrence
    /// in the document.
    pub fn extract(&self, text: &str) -> Vec<Keyword> {
        // (term, count) in first-occurrence order
        let mut counts: Vec<(String, usize)> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for token in word_tokens(text) {
            if char_len(&token) < self.min_token_chars {
                continue;
            }
            match positions.get(&token) {
                Some(&idx) => counts[idx].1 += 1,
                None => {
                    positions.insert(token.clone(), counts.len());
                    counts.push((token, 1));
                }
            }
        }

        let distinct = counts.len();
        let mut keywords: Vec<Keyword> = counts
            .into_iter()
            .filter(|(_, frequency)| *frequency >= self.min_frequency)
            .map(|(term, frequency)| {
                let category = dictionaries::categorize(&term);
                trace!(%term, frequency, %category, "keyword candidate");
                Keyword {
                    term,
                    frequency,
                    category,
                }
            })
            .collect();

        // stable: ties stay in first-occurrence order
        keywords.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        keywords.truncate(self.max_keywords);

        debug!(
            distinct_terms = distinct,
            keywords = keywords.len(),
            "extracted keywords"
        );
        keywords
    }
}

/// Number of keywords per category, in category priority order. Categories
/// without keywords are omitted.
pub fn category_distribution(keywords: &[Keyword]) -> BTreeMap<KeywordCategory, usize> {
    let mut distribution = BTreeMap::new();
    for keyword in keywords {
        *distribution.entry(keyword.category).or_insert(0) += 1;
    }
    distribution
}
