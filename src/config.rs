//! Analysis configuration.
//!
//! Every field has a default, so an empty TOML document is a valid
//! configuration:
//!
//! ```toml
//! [chunking]
//! method = "sentences"
//! size = 5
//! overlap = 1
//!
//! [summary]
//! length = "long"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::chunker::{ChunkMethod, Chunker};
use crate::errors::{AnalysisError, AnalysisResult};
use crate::keyword::KeywordExtractor;
use crate::phrase::PhraseExtractor;
use crate::summarizer::{Summarizer, SummaryLength};

/// Configuration for a full document analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub keywords: KeywordConfig,
    #[serde(default)]
    pub phrases: PhraseConfig,
    #[serde(default)]
    pub summary: SummaryConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingConfig {
    pub method: ChunkMethod,
    /// Units per chunk
    pub size: usize,
    /// Units shared by consecutive chunks
    pub overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            method: ChunkMethod::Words,
            size: 200,
            overlap: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    pub min_frequency: usize,
    pub max_keywords: usize,
    pub min_token_chars: usize,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            min_frequency: 2,
            max_keywords: 20,
            min_token_chars: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhraseConfig {
    pub min_chars: usize,
    pub max_chars: usize,
    pub max_phrases: usize,
}

impl Default for PhraseConfig {
    fn default() -> Self {
        Self {
            min_chars: 20,
            max_chars: 200,
            max_phrases: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub length: SummaryLength,
    pub min_sentence_chars: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            length: SummaryLength::Medium,
            min_sentence_chars: 21,
        }
    }
}

impl AnalysisConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> AnalysisResult<Self> {
        toml::from_str(content).map_err(|e| AnalysisError::Config {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> AnalysisResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| AnalysisError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| AnalysisError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Check every section, failing on the first out-of-range value.
    pub fn validate(&self) -> AnalysisResult<()> {
        self.chunker()?;
        self.phrase_extractor()?;
        Ok(())
    }

    pub fn chunker(&self) -> AnalysisResult<Chunker> {
        Chunker::new(
            self.chunking.method,
            self.chunking.size,
            self.chunking.overlap,
        )
    }

    pub fn keyword_extractor(&self) -> KeywordExtractor {
        KeywordExtractor::new()
            .with_min_frequency(self.keywords.min_frequency)
            .with_max_keywords(self.keywords.max_keywords)
            .with_min_token_chars(self.keywords.min_token_chars)
    }

    pub fn phrase_extractor(&self) -> AnalysisResult<PhraseExtractor> {
        Ok(PhraseExtractor::new()
            .with_bounds(self.phrases.min_chars, self.phrases.max_chars)?
            .with_max_phrases(self.phrases.max_phrases))
    }

    pub fn summarizer(&self) -> Summarizer {
        Summarizer::new().with_min_sentence_chars(self.summary.min_sentence_chars)
    }
}
