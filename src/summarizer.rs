//! Extractive summarization by keyword overlap.
//!
//! Sentences are scored by how many of their whitespace-separated tokens are
//! summary keywords. The best-scoring sentences are selected, then put back
//! in document order so the summary reads like the source.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

use crate::dictionaries::is_summary_keyword;
use crate::errors::AnalysisError;
use crate::segment::{char_len, join_sentences, split_sentences};

/// Requested summary length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Short,
    Medium,
    Long,
}

impl SummaryLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryLength::Short => "short",
            SummaryLength::Medium => "medium",
            SummaryLength::Long => "long",
        }
    }

    /// Maximum number of sentences, and the share of the document's
    /// sentences (in percent) a summary of this length may take.
    fn limits(&self) -> (usize, usize) {
        match self {
            SummaryLength::Short => (3, 10),
            SummaryLength::Medium => (6, 20),
            SummaryLength::Long => (10, 30),
        }
    }

    /// Sentence budget for a document with `sentence_count` sentences:
    /// `min(cap, floor(share * sentence_count))`.
    pub fn budget(&self, sentence_count: usize) -> usize {
        let (cap, percent) = self.limits();
        usize::min(cap, sentence_count * percent / 100)
    }
}

impl Default for SummaryLength {
    fn default() -> Self {
        SummaryLength::Medium
    }
}

impl fmt::Display for SummaryLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummaryLength {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(SummaryLength::Short),
            "medium" => Ok(SummaryLength::Medium),
            "long" => Ok(SummaryLength::Long),
            _ => Err(AnalysisError::UnknownLength(s.to_string())),
        }
    }
}

/// A sentence chosen for a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarySentence {
    /// Position among the document's sentences
    pub index: usize,
    pub text: String,
    /// Number of summary keywords in the sentence
    pub score: usize,
}

/// Selected sentences in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub length: SummaryLength,
    pub sentences: Vec<SummarySentence>,
}

impl Summary {
    /// Summary text: sentences joined with `". "` and a trailing period.
    /// Empty when no sentence was selected.
    pub fn text(&self) -> String {
        let sentences: Vec<&str> = self.sentences.iter().map(|s| s.text.as_str()).collect();
        join_sentences(&sentences)
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Keyword-overlap extractive summarizer.
#[derive(Debug, Clone)]
pub struct Summarizer {
    /// Sentences shorter than this many characters are never selected
    min_sentence_chars: usize,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self {
            min_sentence_chars: 21,
        }
    }
}

impl Summarizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_sentence_chars(mut self, min_sentence_chars: usize) -> Self {
        self.min_sentence_chars = min_sentence_chars;
        self
    }

    pub fn summarize(&self, text: &str, length: SummaryLength) -> Summary {
        let sentences = split_sentences(text);
        let budget = length.budget(sentences.len());

        let mut candidates: Vec<SummarySentence> = sentences
            .iter()
            .enumerate()
            .filter(|(_, sentence)| char_len(sentence) >= self.min_sentence_chars)
            .map(|(index, sentence)| SummarySentence {
                index,
                text: sentence.to_string(),
                score: score_sentence(sentence),
            })
            .collect();
        let candidate_count = candidates.len();

        // stable: equal scores keep document order
        candidates.sort_by(|a, b| b.score.cmp(&a.score));
        candidates.truncate(budget);
        candidates.sort_by_key(|sentence| sentence.index);

        for selected in &candidates {
            trace!(index = selected.index, score = selected.score, "selected sentence");
        }
        debug!(
            %length,
            sentences = sentences.len(),
            candidates = candidate_count,
            budget,
            selected = candidates.len(),
            "summarized document"
        );

        Summary {
            length,
            sentences: candidates,
        }
    }
}

/// Count of lowercase whitespace-separated tokens that are summary keywords.
fn score_sentence(sentence: &str) -> usize {
    sentence
        .to_lowercase()
        .split_whitespace()
        .filter(|token| is_summary_keyword(token))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_requires_exact_tokens() {
        assert_eq!(score_sentence("The Tenant shall pay rent"), 3);
        // punctuation stays attached to the token
        assert_eq!(score_sentence("Tenant, Landlord: rent."), 0);
    }

    #[test]
    fn budgets() {
        assert_eq!(SummaryLength::Short.budget(9), 0);
        assert_eq!(SummaryLength::Short.budget(19), 1);
        assert_eq!(SummaryLength::Medium.budget(19), 3);
        assert_eq!(SummaryLength::Long.budget(19), 5);
        assert_eq!(SummaryLength::Short.budget(1000), 3);
        assert_eq!(SummaryLength::Medium.budget(1000), 6);
        assert_eq!(SummaryLength::Long.budget(1000), 10);
    }
}
