//! Flat-text reports for exporting analysis results.

use std::fmt::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::analysis::{ChunkStatistics, DocumentAnalysis, KeywordStatistics, SummaryStatistics};
use crate::chunker::Chunk;
use crate::keyword::Keyword;
use crate::summarizer::Summary;

const RULE_WIDTH: usize = 50;
const SUBRULE_WIDTH: usize = 30;

fn rule(c: char, width: usize) -> String {
    c.to_string().repeat(width)
}

/// `term (frequency occurrences) - category`
pub fn keyword_line(keyword: &Keyword) -> String {
    format!(
        "{} ({} occurrences) - {}",
        keyword.term, keyword.frequency, keyword.category
    )
}

/// `• phrase`
pub fn phrase_line(phrase: &str) -> String {
    format!("• {}", phrase)
}

/// Shorten `content` to at most `max_width` terminal columns, marking the cut
/// with `...`.
pub fn preview(content: &str, max_width: usize) -> String {
    if content.width() <= max_width {
        return content.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut width = 0;
    let mut out = String::new();
    for c in content.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// One line per chunk: id, word count and a content preview.
pub fn chunk_overview(chunks: &[Chunk], max_chunks: usize, max_width: usize) -> String {
    let mut output = String::new();
    for chunk in chunks.iter().take(max_chunks) {
        let single_line = chunk.content.split_whitespace().collect::<Vec<_>>().join(" ");
        writeln!(
            output,
            "Chunk {} ({} words): {}",
            chunk.id,
            chunk.word_count,
            preview(&single_line, max_width)
        )
        .unwrap();
    }
    output
}

pub fn chunk_report(document: &str, statistics: &ChunkStatistics, chunks: &[Chunk]) -> String {
    let mut output = String::new();

    writeln!(output, "TEXT CHUNKING REPORT").unwrap();
    writeln!(output, "{}", rule('=', RULE_WIDTH)).unwrap();
    writeln!(output).unwrap();
    writeln!(output, "Original Document: {}", document).unwrap();
    writeln!(output, "Chunking Method: {}", statistics.method).unwrap();
    writeln!(output, "Chunk Size: {}", statistics.size).unwrap();
    writeln!(output, "Overlap: {}", statistics.overlap).unwrap();
    writeln!(output, "Total Chunks: {}", chunks.len()).unwrap();
    writeln!(output).unwrap();

    for chunk in chunks {
        writeln!(output, "CHUNK {}", chunk.id).unwrap();
        writeln!(
            output,
            "Words: {} | Sentences: {}",
            chunk.word_count, chunk.sentence_count
        )
        .unwrap();
        if let Some(paragraphs) = chunk.paragraph_count {
            writeln!(output, "Paragraphs: {}", paragraphs).unwrap();
        }
        writeln!(output, "Range: {}-{}", chunk.start_unit, chunk.end_unit).unwrap();
        writeln!(output).unwrap();
        writeln!(output, "{}", chunk.content).unwrap();
        writeln!(output).unwrap();
        writeln!(output, "{}", rule('=', RULE_WIDTH)).unwrap();
        writeln!(output).unwrap();
    }

    output
}

pub fn keyword_report(
    document: &str,
    keywords: &[Keyword],
    phrases: &[String],
    statistics: &KeywordStatistics,
) -> String {
    let mut output = String::new();

    writeln!(output, "KEYWORD EXTRACTION REPORT").unwrap();
    writeln!(output, "{}", rule('=', RULE_WIDTH)).unwrap();
    writeln!(output).unwrap();
    writeln!(output, "Document: {}", document).unwrap();
    writeln!(output).unwrap();

    writeln!(output, "STATISTICS:").unwrap();
    writeln!(output, "Total Words: {}", statistics.total_words).unwrap();
    writeln!(output, "Unique Keywords: {}", statistics.unique_keywords).unwrap();
    writeln!(output, "Key Phrases: {}", statistics.total_phrases).unwrap();
    writeln!(output).unwrap();

    writeln!(output, "CATEGORY DISTRIBUTION:").unwrap();
    for (category, count) in &statistics.category_distribution {
        writeln!(output, "  {}: {}", category, count).unwrap();
    }
    writeln!(output).unwrap();

    writeln!(output, "KEYWORDS:").unwrap();
    writeln!(output, "{}", rule('-', SUBRULE_WIDTH)).unwrap();
    for keyword in keywords {
        writeln!(output, "{}", keyword_line(keyword)).unwrap();
    }
    writeln!(output).unwrap();

    writeln!(output, "KEY PHRASES:").unwrap();
    writeln!(output, "{}", rule('-', SUBRULE_WIDTH)).unwrap();
    for phrase in phrases {
        writeln!(output, "{}", phrase_line(phrase)).unwrap();
    }

    output
}

pub fn summary_report(document: &str, summary: &Summary, statistics: &SummaryStatistics) -> String {
    let mut output = String::new();

    writeln!(output, "DOCUMENT SUMMARY").unwrap();
    writeln!(output, "{}", rule('=', RULE_WIDTH)).unwrap();
    writeln!(output).unwrap();
    writeln!(output, "Original Document: {}", document).unwrap();
    writeln!(output, "Length: {}", summary.length).unwrap();
    writeln!(output, "Original Words: {}", statistics.original_words).unwrap();
    writeln!(output, "Summary Words: {}", statistics.summary_words).unwrap();
    writeln!(output, "Compression Ratio: {:.1}%", statistics.compression_ratio).unwrap();
    writeln!(output, "Sentences: {}", statistics.sentences).unwrap();
    writeln!(output).unwrap();
    writeln!(output, "SUMMARY:").unwrap();
    writeln!(output, "{}", rule('-', SUBRULE_WIDTH)).unwrap();
    writeln!(output, "{}", summary.text()).unwrap();

    output
}

impl DocumentAnalysis {
    pub fn chunk_report(&self) -> String {
        chunk_report(&self.document, &self.chunk_statistics, &self.chunks)
    }

    pub fn keyword_report(&self) -> String {
        keyword_report(
            &self.document,
            &self.keywords,
            &self.key_phrases,
            &self.keyword_statistics,
        )
    }

    pub fn summary_report(&self) -> String {
        summary_report(&self.document, &self.summary, &self.summary_statistics)
    }
}
