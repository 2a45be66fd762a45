//! Full document analysis: all four views plus their statistics.
//!
//! The views are computed independently of each other; the bundle only
//! exists so a host can render or export them together.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::chunker::{Chunk, ChunkMethod, Chunker};
use crate::config::AnalysisConfig;
use crate::document::Document;
use crate::errors::AnalysisResult;
use crate::keyword::{category_distribution, Keyword, KeywordCategory};
use crate::segment::word_count;
use crate::summarizer::Summary;

/// Chunking parameters and totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChunkStatistics {
    pub method: ChunkMethod,
    pub size: usize,
    pub overlap: usize,
    pub total_chunks: usize,
    /// Sum of chunk word counts; overlapping words are counted per chunk
    pub total_words: usize,
    pub average_words: f64,
}

impl ChunkStatistics {
    pub fn new(chunker: &Chunker, chunks: &[Chunk]) -> Self {
        let total_words: usize = chunks.iter().map(|c| c.word_count).sum();
        let average_words = if chunks.is_empty() {
            0.0
        } else {
            total_words as f64 / chunks.len() as f64
        };
        Self {
            method: chunker.method(),
            size: chunker.size(),
            overlap: chunker.overlap(),
            total_chunks: chunks.len(),
            total_words,
            average_words,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordStatistics {
    pub total_words: usize,
    pub unique_keywords: usize,
    pub total_phrases: usize,
    pub category_distribution: BTreeMap<KeywordCategory, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStatistics {
    pub original_words: usize,
    pub summary_words: usize,
    /// Percentage of words removed, `0.0` for an empty document
    pub compression_ratio: f64,
    pub sentences: usize,
}

impl SummaryStatistics {
    pub fn new(original: &str, summary: &Summary) -> Self {
        let original_words = word_count(original);
        let summary_words = word_count(&summary.text());
        let compression_ratio = if original_words == 0 {
            0.0
        } else {
            (original_words as f64 - summary_words as f64) / original_words as f64 * 100.0
        };
        Self {
            original_words,
            summary_words,
            compression_ratio,
            sentences: summary.sentences.len(),
        }
    }
}

/// Every derived view of one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentAnalysis {
    pub document: String,
    pub chunks: Vec<Chunk>,
    pub chunk_statistics: ChunkStatistics,
    pub keywords: Vec<Keyword>,
    pub key_phrases: Vec<String>,
    pub keyword_statistics: KeywordStatistics,
    pub summary: Summary,
    pub summary_text: String,
    pub summary_statistics: SummaryStatistics,
}

impl DocumentAnalysis {
    /// Run every component on `document`.
    ///
    /// The configuration is validated before any text is processed.
    pub fn run(document: &Document, config: &AnalysisConfig) -> AnalysisResult<Self> {
        config.validate()?;
        let text = document.text();

        let chunker = config.chunker()?;
        let chunks = chunker.chunk(text);
        let chunk_statistics = ChunkStatistics::new(&chunker, &chunks);

        let keywords = config.keyword_extractor().extract(text);
        let key_phrases = config.phrase_extractor()?.extract(text);
        let keyword_statistics = KeywordStatistics {
            total_words: word_count(text),
            unique_keywords: keywords.len(),
            total_phrases: key_phrases.len(),
            category_distribution: category_distribution(&keywords),
        };

        let summary = config.summarizer().summarize(text, config.summary.length);
        let summary_statistics = SummaryStatistics::new(text, &summary);
        let summary_text = summary.text();

        debug!(
            chunks = chunks.len(),
            keywords = keywords.len(),
            phrases = key_phrases.len(),
            summary_sentences = summary.sentences.len(),
            "analysis complete"
        );
        info!(document = document.name(), "analyzed document");

        Ok(Self {
            document: document.name().to_string(),
            chunks,
            chunk_statistics,
            keywords,
            key_phrases,
            keyword_statistics,
            summary,
            summary_text,
            summary_statistics,
        })
    }

    /// Pretty-printed JSON of the whole analysis.
    pub fn to_json(&self) -> AnalysisResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
