//! Sliding-window chunking over words, sentences or paragraphs.
//!
//! A chunker takes `size` units per window and advances by
//! `size - overlap` units, so consecutive chunks share exactly `overlap`
//! units. Word and sentence counts are always recomputed from the
//! reconstructed chunk content, whatever the unit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

use crate::errors::{AnalysisError, AnalysisResult};
use crate::segment::{
    join_sentences, sentence_count, split_paragraphs, split_sentences, split_words,
    word_count, PARAGRAPH_JOINER,
};

/// The unit a document is segmented into before windowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkMethod {
    Words,
    Sentences,
    Paragraphs,
}

impl ChunkMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChunkMethod::Words => "words",
            ChunkMethod::Sentences => "sentences",
            ChunkMethod::Paragraphs => "paragraphs",
        }
    }

    /// Units of this kind, in document order.
    pub fn units<'t>(&self, text: &'t str) -> Vec<&'t str> {
        match self {
            ChunkMethod::Words => split_words(text),
            ChunkMethod::Sentences => split_sentences(text),
            ChunkMethod::Paragraphs => split_paragraphs(text),
        }
    }

    /// Rebuild running text from a window of units.
    fn join(&self, units: &[&str]) -> String {
        match self {
            ChunkMethod::Words => units.join(" "),
            ChunkMethod::Sentences => join_sentences(units),
            ChunkMethod::Paragraphs => units.join(PARAGRAPH_JOINER),
        }
    }
}

impl Default for ChunkMethod {
    fn default() -> Self {
        ChunkMethod::Words
    }
}

impl fmt::Display for ChunkMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChunkMethod {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "words" => Ok(ChunkMethod::Words),
            "sentences" => Ok(ChunkMethod::Sentences),
            "paragraphs" => Ok(ChunkMethod::Paragraphs),
            _ => Err(AnalysisError::UnknownMethod(s.to_string())),
        }
    }
}

/// One window of a chunked document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// 1-based, in window order
    pub id: usize,
    pub content: String,
    pub word_count: usize,
    pub sentence_count: usize,
    /// Number of paragraphs in the window (paragraph chunking only)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub paragraph_count: Option<usize>,
    /// First unit index of the window
    pub start_unit: usize,
    /// One past the last unit index of the window
    pub end_unit: usize,
}

/// Validated chunking parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunker {
    method: ChunkMethod,
    size: usize,
    overlap: usize,
}

impl Chunker {
    /// Create a chunker, rejecting windows that would never advance.
    ///
    /// `size` must be at least 1 and `overlap` strictly smaller than `size`.
    pub fn new(method: ChunkMethod, size: usize, overlap: usize) -> AnalysisResult<Self> {
        if size < 1 {
            return Err(AnalysisError::invalid(
                "size",
                "chunk size must be at least 1",
            ));
        }
        if overlap >= size {
            return Err(AnalysisError::invalid(
                "overlap",
                format!(
                    "overlap ({}) must be smaller than chunk size ({})",
                    overlap, size
                ),
            ));
        }
        Ok(Self {
            method,
            size,
            overlap,
        })
    }

    pub fn method(&self) -> ChunkMethod {
        self.method
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Units the window advances by.
    pub fn step(&self) -> usize {
        self.size - self.overlap
    }

    /// Split `text` into overlapping chunks.
    pub fn chunk(&self, text: &str) -> Vec<Chunk> {
        let units = self.method.units(text);
        let step = self.step();
        let mut chunks = Vec::new();

        let mut start = 0;
        while start < units.len() {
            let end = usize::min(start.saturating_add(self.size), units.len());
            let window = &units[start..end];
            let joined = self.method.join(window);
            let content = joined.trim();

            if !content.is_empty() {
                let chunk = Chunk {
                    id: chunks.len() + 1,
                    content: content.to_string(),
                    word_count: word_count(content),
                    sentence_count: sentence_count(content),
                    paragraph_count: match self.method {
                        ChunkMethod::Paragraphs => Some(window.len()),
                        _ => None,
                    },
                    start_unit: start,
                    end_unit: end,
                };
                trace!(
                    id = chunk.id,
                    start,
                    end,
                    words = chunk.word_count,
                    "chunk"
                );
                chunks.push(chunk);
            }

            start = start.saturating_add(step);
        }

        debug!(
            method = %self.method,
            size = self.size,
            overlap = self.overlap,
            units = units.len(),
            chunks = chunks.len(),
            "chunked document"
        );
        chunks
    }
}
