//! Boilerplate key phrase extraction.
//!
//! Each sentence is scanned with the connective patterns from
//! [`crate::dictionaries::BOILERPLATE_CONNECTIVES`]. A match runs from the
//! connective ("subject to", "the tenant shall", ...) to the end of its
//! sentence; semicolons do not end a match.

use std::collections::HashSet;
use tracing::{debug, trace};

use crate::dictionaries::boilerplate_patterns;
use crate::errors::{AnalysisError, AnalysisResult};
use crate::segment::{char_len, split_sentences};

/// Extracts distinct boilerplate phrases in first-seen order.
#[derive(Debug, Clone)]
pub struct PhraseExtractor {
    /// Shortest phrase kept, in characters
    min_chars: usize,
    /// Longest phrase kept, in characters
    max_chars: usize,
    max_phrases: usize,
}

impl Default for PhraseExtractor {
    fn default() -> Self {
        Self {
            min_chars: 20,
            max_chars: 200,
            max_phrases: 10,
        }
    }
}

impl PhraseExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only phrases whose length is within `min_chars..=max_chars`.
    pub fn with_bounds(mut self, min_chars: usize, max_chars: usize) -> AnalysisResult<Self> {
        if min_chars > max_chars {
            return Err(AnalysisError::invalid(
                "min_chars",
                format!(
                    "minimum phrase length ({}) exceeds maximum ({})",
                    min_chars, max_chars
                ),
            ));
        }
        self.min_chars = min_chars;
        self.max_chars = max_chars;
        Ok(self)
    }

    pub fn with_max_phrases(mut self, max_phrases: usize) -> Self {
        self.max_phrases = max_phrases;
        self
    }

    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut phrases: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        'sentences: for sentence in split_sentences(text) {
            for pattern in boilerplate_patterns() {
                for found in pattern.find_iter(sentence) {
                    if phrases.len() >= self.max_phrases {
                        break 'sentences;
                    }

                    let phrase = clean_phrase(found.as_str());
                    let len = char_len(phrase);
                    if len < self.min_chars || len > self.max_chars {
                        trace!(len, phrase, "phrase out of bounds");
                        continue;
                    }

                    if seen.insert(phrase.to_string()) {
                        phrases.push(phrase.to_string());
                    }
                }
            }
        }

        debug!(phrases = phrases.len(), "extracted key phrases");
        phrases
    }
}

/// Trim and strip trailing sentence-terminal punctuation.
fn clean_phrase(raw: &str) -> &str {
    raw.trim()
        .trim_end_matches(|c: char| matches!(c, '.' | '!' | '?'))
        .trim_end()
}
