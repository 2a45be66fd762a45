use std::fs;
use std::path::Path;

use crate::{
    AnalysisConfig, AnalysisError, ChunkMethod, Document, DocumentAnalysis, KeywordCategory,
    SummaryLength,
};

fn sample_lease() -> Document {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("sample_lease.txt");
    let text = fs::read_to_string(&path).expect("Failed to read sample lease fixture");
    Document::new("sample_lease.txt", text)
}

#[test]
fn default_analysis_of_sample_lease() {
    let analysis = DocumentAnalysis::run(&sample_lease(), &AnalysisConfig::default()).unwrap();

    assert_eq!(analysis.document, "sample_lease.txt");

    assert_eq!(analysis.chunks.len(), 2);
    let chunks = &analysis.chunk_statistics;
    assert_eq!(chunks.method, ChunkMethod::Words);
    assert_eq!(chunks.total_chunks, 2);
    assert_eq!(chunks.total_words, 237);
    assert_eq!(chunks.average_words, 118.5);

    let keywords = &analysis.keyword_statistics;
    assert_eq!(keywords.total_words, 217);
    assert_eq!(keywords.unique_keywords, 20);
    assert_eq!(keywords.total_phrases, 4);
    assert_eq!(
        keywords
            .category_distribution
            .iter()
            .map(|(category, count)| (*category, *count))
            .collect::<Vec<_>>(),
        vec![
            (KeywordCategory::Legal, 7),
            (KeywordCategory::Financial, 2),
            (KeywordCategory::Temporal, 4),
            (KeywordCategory::General, 7),
        ]
    );

    let summary = &analysis.summary_statistics;
    assert_eq!(analysis.summary.length, SummaryLength::Medium);
    assert_eq!(summary.sentences, 3);
    assert_eq!(summary.original_words, 217);
    assert_eq!(summary.summary_words, 59);
    assert_eq!(format!("{:.1}", summary.compression_ratio), "72.8");
    assert_eq!(analysis.summary_text, analysis.summary.text());
}

#[test]
fn views_match_the_standalone_operations() {
    let document = sample_lease();
    let analysis = DocumentAnalysis::run(&document, &AnalysisConfig::default()).unwrap();

    assert_eq!(analysis.chunks, document.chunk(ChunkMethod::Words, 200, 20).unwrap());
    assert_eq!(analysis.keywords, document.keywords());
    assert_eq!(analysis.key_phrases, document.phrases());
    assert_eq!(analysis.summary, document.summarize(SummaryLength::Medium));
}

#[test]
fn configured_analysis() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("analysis.toml");
    let config = AnalysisConfig::load(&path).unwrap();
    let analysis = DocumentAnalysis::run(&sample_lease(), &config).unwrap();

    // 19 sentences, windows of 4 advancing by 3
    assert_eq!(analysis.chunks.len(), 7);
    assert_eq!(analysis.keywords.len(), 5);
    assert_eq!(analysis.summary.sentences.len(), 5);
    assert_eq!(analysis.summary_statistics.summary_words, 103);
}

#[test]
fn invalid_config_fails_before_analysis() {
    let mut config = AnalysisConfig::default();
    config.chunking.size = 0;
    let err = DocumentAnalysis::run(&sample_lease(), &config).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidParameter { name: "size", .. }));
}

#[test]
fn empty_document_is_analyzable() {
    let document = Document::from_text("");
    assert!(document.is_empty());
    assert_eq!(document.name(), "untitled");

    let analysis = DocumentAnalysis::run(&document, &AnalysisConfig::default()).unwrap();
    assert!(analysis.chunks.is_empty());
    assert!(analysis.keywords.is_empty());
    assert!(analysis.key_phrases.is_empty());
    assert!(analysis.summary.is_empty());
    assert_eq!(analysis.summary_text, "");
    assert_eq!(analysis.chunk_statistics.average_words, 0.0);
    assert_eq!(analysis.summary_statistics.compression_ratio, 0.0);
    assert!(analysis.keyword_statistics.category_distribution.is_empty());
}

#[test]
fn json_export() {
    let analysis = DocumentAnalysis::run(&sample_lease(), &AnalysisConfig::default()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&analysis.to_json().unwrap()).unwrap();

    assert_eq!(json["document"], "sample_lease.txt");
    assert_eq!(json["chunks"][1]["id"], 2);
    assert_eq!(json["chunks"][1]["start_unit"], 180);
    assert!(json["chunks"][0].get("paragraph_count").is_none());
    assert_eq!(json["chunk_statistics"]["method"], "words");
    assert_eq!(json["keywords"][0]["term"], "tenant");
    assert_eq!(json["keywords"][0]["category"], "legal");
    assert_eq!(json["keyword_statistics"]["category_distribution"]["financial"], 2);
    assert_eq!(json["summary"]["length"], "medium");
    assert_eq!(json["summary_statistics"]["sentences"], 3);
}
