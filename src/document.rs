//! The analyzed document.

use crate::chunker::{Chunk, ChunkMethod, Chunker};
use crate::errors::AnalysisResult;
use crate::keyword::{Keyword, KeywordExtractor};
use crate::phrase::PhraseExtractor;
use crate::summarizer::{Summarizer, Summary, SummaryLength};

/// Already-decoded plain text and the name it was uploaded under.
///
/// A document is never mutated; every analysis reads it and returns a fresh
/// result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    name: String,
    text: String,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// An unnamed document.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new("untitled", text)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn chunk(&self, method: ChunkMethod, size: usize, overlap: usize) -> AnalysisResult<Vec<Chunk>> {
        Ok(Chunker::new(method, size, overlap)?.chunk(&self.text))
    }

    pub fn keywords(&self) -> Vec<Keyword> {
        KeywordExtractor::default().extract(&self.text)
    }

    pub fn phrases(&self) -> Vec<String> {
        PhraseExtractor::default().extract(&self.text)
    }

    pub fn summarize(&self, length: SummaryLength) -> Summary {
        Summarizer::default().summarize(&self.text, length)
    }
}
