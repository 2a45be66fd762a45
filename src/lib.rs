#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Document digests for plain-text legal documents.
//!
//! Four independent views can be derived from the same text:
//!
//! - [`Chunker`] - overlapping word, sentence or paragraph windows
//! - [`KeywordExtractor`] - repeated terms, categorized as legal, financial,
//!   temporal or general
//! - [`PhraseExtractor`] - boilerplate clauses ("subject to ...",
//!   "the tenant shall ...")
//! - [`Summarizer`] - extractive summary of the most keyword-dense
//!   sentences, in document order
//!
//! Every operation is a pure, synchronous function of the text and its
//! parameters. [`DocumentAnalysis`] runs all four from an
//! [`AnalysisConfig`], and [`report`] renders the results as flat text.
//!
//! ## Example
//!
//! ```
//! use layered_digest::{chunk, extract_keywords, summarize, ChunkMethod, SummaryLength};
//!
//! let text = "The Tenant shall pay rent monthly. The Tenant shall keep the premises clean.";
//!
//! let chunks = chunk(text, ChunkMethod::Sentences, 1, 0).unwrap();
//! assert_eq!(chunks.len(), 2);
//!
//! let keywords = extract_keywords(text);
//! assert_eq!(keywords[0].term, "tenant");
//!
//! // too few sentences for even a one-sentence summary
//! assert_eq!(summarize(text, SummaryLength::Short), "");
//! ```

mod analysis;
mod chunker;
mod config;
mod document;
mod errors;
mod keyword;
mod phrase;
mod summarizer;

pub mod dictionaries;
pub mod report;
pub mod segment;

pub use analysis::{ChunkStatistics, DocumentAnalysis, KeywordStatistics, SummaryStatistics};
pub use chunker::{Chunk, ChunkMethod, Chunker};
pub use config::{AnalysisConfig, ChunkingConfig, KeywordConfig, PhraseConfig, SummaryConfig};
pub use document::Document;
pub use errors::{AnalysisError, AnalysisResult};
pub use keyword::{category_distribution, Keyword, KeywordCategory, KeywordExtractor};
pub use phrase::PhraseExtractor;
pub use summarizer::{Summarizer, Summary, SummaryLength, SummarySentence};

/// Split `text` into overlapping chunks of `size` units sharing `overlap`
/// units.
///
/// Fails with [`AnalysisError::InvalidParameter`] when `size` is 0 or
/// `overlap >= size`, before the text is looked at.
pub fn chunk(
    text: &str,
    method: ChunkMethod,
    size: usize,
    overlap: usize,
) -> AnalysisResult<Vec<Chunk>> {
    Ok(Chunker::new(method, size, overlap)?.chunk(text))
}

/// Up to 20 terms occurring at least twice, most frequent first.
pub fn extract_keywords(text: &str) -> Vec<Keyword> {
    KeywordExtractor::default().extract(text)
}

/// Up to 10 distinct boilerplate phrases, in first-seen order.
pub fn extract_phrases(text: &str) -> Vec<String> {
    PhraseExtractor::default().extract(text)
}

/// Summary text for `length`; empty when the document is too short.
pub fn summarize(text: &str, length: SummaryLength) -> String {
    Summarizer::default().summarize(text, length).text()
}
