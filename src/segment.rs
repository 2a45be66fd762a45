//! Shared segmentation primitives.
//!
//! Every component splits text the same way, so a sentence seen by the
//! chunker is the same sentence the summarizer scores and the phrase
//! extractor scans:
//!
//! - words: runs of non-whitespace
//! - sentences: text between runs of `.`, `!`, `?`, trimmed, empties dropped
//! - paragraphs: text between blank lines, trimmed, empties dropped
//! - word tokens: lowercase runs of word characters inside Unicode words

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

static SENTENCE_TERMINATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("Invalid sentence terminator regex"));

static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("Invalid paragraph break regex"));

static WORD_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("Invalid word run regex"));

/// Separator used when sentences are joined back into running text.
pub const SENTENCE_JOINER: &str = ". ";

/// Separator used when paragraphs are joined back into running text.
pub const PARAGRAPH_JOINER: &str = "\n\n";

/// Split on runs of whitespace.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Split on runs of sentence-terminal punctuation.
///
/// The terminators themselves are not part of the returned sentences.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_TERMINATORS
        .split(text)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

/// Split on blank lines (a newline, optional whitespace, another newline).
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .collect()
}

/// Lowercased word tokens in document order.
///
/// Words are found on Unicode word boundaries and then narrowed to maximal
/// runs of word characters, so `"$1,200"` yields `"1"` and `"200"` and
/// `"Tenant's"` yields `"tenant"` and `"s"`.
pub fn word_tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.unicode_words()
        .flat_map(|word| WORD_RUN.find_iter(word))
        .map(|run| run.as_str().to_lowercase())
}

/// Number of whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of non-empty sentences.
pub fn sentence_count(text: &str) -> usize {
    split_sentences(text).len()
}

/// Length in Unicode scalar values.
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Join sentences back into running text: `". "` between them and a
/// trailing period. No sentences produce an empty string.
pub(crate) fn join_sentences<S: AsRef<str>>(sentences: &[S]) -> String {
    if sentences.is_empty() {
        return String::new();
    }

    let mut joined = sentences
        .iter()
        .map(|sentence| sentence.as_ref())
        .collect::<Vec<_>>()
        .join(SENTENCE_JOINER);
    joined.push('.');
    joined
}
