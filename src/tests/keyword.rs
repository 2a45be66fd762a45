use std::fs;
use std::path::Path;

use crate::{extract_keywords, Keyword, KeywordCategory, KeywordExtractor};

fn sample_lease() -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("sample_lease.txt");
    fs::read_to_string(&path).expect("Failed to read sample lease fixture")
}

fn find<'a>(keywords: &'a [Keyword], term: &str) -> &'a Keyword {
    keywords
        .iter()
        .find(|k| k.term == term)
        .unwrap_or_else(|| panic!("missing keyword {:?}", term))
}

#[test]
fn sample_lease_keywords() {
    let keywords = extract_keywords(&sample_lease());

    assert_eq!(keywords.len(), 20);
    let head: Vec<(&str, usize)> = keywords
        .iter()
        .take(5)
        .map(|k| (k.term.as_str(), k.frequency))
        .collect();
    assert_eq!(
        head,
        vec![
            ("tenant", 7),
            ("agreement", 6),
            ("lease", 5),
            ("this", 5),
            ("shall", 5),
        ]
    );

    assert_eq!(find(&keywords, "tenant").category, KeywordCategory::Legal);
    assert_eq!(find(&keywords, "landlord").category, KeywordCategory::Legal);
    assert_eq!(find(&keywords, "agreement").category, KeywordCategory::Legal);
    assert_eq!(find(&keywords, "property").category, KeywordCategory::Legal);
    assert_eq!(find(&keywords, "rent").category, KeywordCategory::Financial);
    assert_eq!(find(&keywords, "deposit").category, KeywordCategory::Financial);
    assert_eq!(find(&keywords, "termination").category, KeywordCategory::Temporal);
    assert_eq!(find(&keywords, "january").category, KeywordCategory::Temporal);
    assert_eq!(find(&keywords, "2024").category, KeywordCategory::General);
    assert_eq!(find(&keywords, "will").category, KeywordCategory::Legal);
    assert_eq!(find(&keywords, "landlord").frequency, 3);
    assert_eq!(find(&keywords, "property").frequency, 2);
}

#[test]
fn sample_lease_truncates_after_twenty() {
    // utilities, responsible, maintenance and parties also occur twice but
    // come after "days" in the document
    let keywords = extract_keywords(&sample_lease());
    assert_eq!(keywords.last().unwrap().term, "days");
    assert!(keywords.iter().all(|k| k.term != "parties"));

    let all = KeywordExtractor::new().with_max_keywords(100).extract(&sample_lease());
    assert_eq!(all.len(), 24);
    assert_eq!(all.last().unwrap().term, "parties");
}

#[test]
fn threshold_and_token_length() {
    let keywords = extract_keywords(&sample_lease());
    for keyword in &keywords {
        assert!(keyword.frequency >= 2, "{:?}", keyword);
        assert!(keyword.term.chars().count() > 3, "{:?}", keyword);
        assert_eq!(keyword.term, keyword.term.to_lowercase());
    }
}

#[test]
fn sorted_by_frequency_then_first_occurrence() {
    let text = "notice rent notice deposit rent deposit rent lease lease";
    let keywords = extract_keywords(text);
    let terms: Vec<(&str, usize)> = keywords
        .iter()
        .map(|k| (k.term.as_str(), k.frequency))
        .collect();
    assert_eq!(
        terms,
        vec![("rent", 3), ("notice", 2), ("deposit", 2), ("lease", 2)]
    );
}

#[test]
fn singletons_and_short_tokens_are_dropped() {
    let text = "The fee and the fee and the tax. Rent once.";
    assert!(extract_keywords(text).is_empty());
}

#[test]
fn case_is_folded_before_counting() {
    let keywords = extract_keywords("TENANT Tenant tenant");
    assert_eq!(
        keywords,
        vec![Keyword {
            term: "tenant".to_string(),
            frequency: 3,
            category: KeywordCategory::Legal,
        }]
    );
}

#[test]
fn empty_document_has_no_keywords() {
    assert!(extract_keywords("").is_empty());
    assert!(extract_keywords("   \n").is_empty());
}

#[test]
fn custom_thresholds() {
    let text = "rent rent rent deposit deposit notice";
    let extractor = KeywordExtractor::new()
        .with_min_frequency(3)
        .with_min_token_chars(1);
    let keywords = extractor.extract(text);
    assert_eq!(keywords.len(), 1);
    assert_eq!(keywords[0].term, "rent");

    let single = KeywordExtractor::new().with_min_frequency(1).with_max_keywords(2);
    let terms: Vec<String> = single.extract(text).into_iter().map(|k| k.term).collect();
    assert_eq!(terms, vec!["rent", "deposit"]);
}

#[test]
fn categories_display_lowercase() {
    assert_eq!(KeywordCategory::Financial.to_string(), "financial");
    assert_eq!(
        serde_json::to_string(&KeywordCategory::Temporal).unwrap(),
        "\"temporal\""
    );
}
