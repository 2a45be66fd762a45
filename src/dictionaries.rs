//! Static lookup tables for legal document analysis.
//!
//! All term lists are lowercase. They are configuration data: none of them is
//! derived from the document being analyzed.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::keyword::KeywordCategory;

/// Contract vocabulary, parties, legal actions and property terms.
pub const LEGAL_TERMS: &[&str] = &[
    // contract terms
    "agreement", "contract", "covenant", "provision", "clause", "term", "terms", "condition",
    "conditions", "stipulation", "arrangement", "understanding", "lease",
    // parties
    "party", "parties", "plaintiff", "defendant", "appellant", "appellee", "petitioner",
    "respondent", "landlord", "tenant", "lessor", "lessee", "grantor", "grantee", "buyer",
    "seller", "vendor", "purchaser", "client", "customer",
    // legal actions
    "shall", "must", "may", "will", "should", "agree", "agrees", "warrant", "represent",
    "acknowledge", "consent", "waive", "release", "indemnify", "defend", "enforce",
    "terminate", "breach", "default", "violate", "comply", "perform",
    // property
    "property", "premises", "land", "building", "structure", "asset", "title", "ownership",
    "possession", "use", "occupancy", "access", "easement", "boundary", "lot", "parcel",
];

/// Money and liability vocabulary.
pub const FINANCIAL_TERMS: &[&str] = &[
    "payment", "payments", "fee", "fees", "cost", "costs", "expense", "expenses", "price",
    "amount", "consideration", "compensation", "damages", "penalty", "interest", "rent",
    "rental", "deposit", "refund", "reimbursement", "liability", "obligation", "debt",
    "credit", "installment",
];

/// Dates, durations and deadlines.
pub const TEMPORAL_TERMS: &[&str] = &[
    "date", "time", "period", "term", "duration", "deadline", "expiration", "commencement",
    "termination", "renewal", "extension", "notice", "day", "days", "week", "weeks", "month",
    "months", "year", "years", "annual", "monthly", "quarterly", "immediate", "upon",
    "january", "february", "march", "april", "june", "july", "august", "september",
    "october", "november", "december",
];

/// Categorization rules in priority order. The first table containing a term
/// decides its category; terms in none of them are
/// [`KeywordCategory::General`].
pub const CATEGORY_RULES: &[(KeywordCategory, &[&str])] = &[
    (KeywordCategory::Legal, LEGAL_TERMS),
    (KeywordCategory::Financial, FINANCIAL_TERMS),
    (KeywordCategory::Temporal, TEMPORAL_TERMS),
];

/// Terms that make a sentence worth keeping in an extractive summary.
pub const SUMMARY_KEYWORDS: &[&str] = &[
    "agreement", "contract", "party", "parties", "term", "condition", "obligation", "right",
    "liability", "breach", "termination", "payment", "consideration", "whereas", "therefore",
    "shall", "landlord", "tenant", "lease", "property", "premises", "rent", "deposit", "notice",
];

/// Boilerplate connectives, grouped by the kind of clause they open.
///
/// Each group becomes one case-insensitive pattern that matches from the
/// connective through the end of its clause.
pub const BOILERPLATE_CONNECTIVES: &[&[&str]] = &[
    // qualifications
    &[
        "subject to",
        "in accordance with",
        "pursuant to",
        "with respect to",
        "in the event of",
        "provided that",
        "notwithstanding",
        "for the purpose of",
        "including but not limited to",
    ],
    // agreement
    &[
        "the parties agree",
        "it is agreed",
        "the tenant shall",
        "the landlord shall",
        "this agreement",
        "the term of",
        "in consideration of",
    ],
    // obligations
    &[
        "shall be responsible for",
        "shall maintain",
        "shall provide",
        "shall pay",
        "shall deliver",
        "shall perform",
        "shall comply with",
    ],
    // conditions
    &[
        "if and only if",
        "unless and until",
        "in the event that",
        "on condition that",
        "provided however",
    ],
    // termination
    &[
        "may be terminated",
        "shall terminate",
        "upon termination",
        "in case of termination",
        "termination shall",
    ],
    // notice
    &[
        "written notice",
        "notice shall be",
        "upon receipt of notice",
        "notice is hereby given",
    ],
];

static CATEGORY_SETS: Lazy<Vec<(KeywordCategory, HashSet<&'static str>)>> = Lazy::new(|| {
    CATEGORY_RULES
        .iter()
        .map(|(category, terms)| (*category, terms.iter().copied().collect()))
        .collect()
});

static SUMMARY_KEYWORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| SUMMARY_KEYWORDS.iter().copied().collect());

static BOILERPLATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    BOILERPLATE_CONNECTIVES
        .iter()
        .map(|group| {
            let alternatives = group
                .iter()
                .map(|connective| regex::escape(connective))
                .collect::<Vec<_>>()
                .join("|");
            Regex::new(&format!(r"(?i)\b(?:{})\b[^.!?]*", alternatives))
                .expect("Invalid boilerplate pattern")
        })
        .collect()
});

/// Category of a lowercase term according to [`CATEGORY_RULES`].
pub fn categorize(term: &str) -> KeywordCategory {
    CATEGORY_SETS
        .iter()
        .find(|(_, terms)| terms.contains(term))
        .map(|(category, _)| *category)
        .unwrap_or(KeywordCategory::General)
}

/// Whether a lowercase token counts toward a sentence's summary score.
pub fn is_summary_keyword(token: &str) -> bool {
    SUMMARY_KEYWORD_SET.contains(token)
}

/// Compiled boilerplate patterns, one per connective group, in group order.
pub fn boilerplate_patterns() -> &'static [Regex] {
    &BOILERPLATE_PATTERNS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_wins_over_temporal() {
        // "term" is in both the legal and the temporal table
        assert!(TEMPORAL_TERMS.contains(&"term"));
        assert_eq!(categorize("term"), KeywordCategory::Legal);
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(categorize("tenant"), KeywordCategory::Legal);
        assert_eq!(categorize("rent"), KeywordCategory::Financial);
        assert_eq!(categorize("notice"), KeywordCategory::Temporal);
        assert_eq!(categorize("tenants"), KeywordCategory::General);
        assert_eq!(categorize("Tenant"), KeywordCategory::General);
    }

    #[test]
    fn singular_and_plural_forms_are_both_listed() {
        assert_eq!(categorize("will"), KeywordCategory::Legal);
        assert_eq!(categorize("should"), KeywordCategory::Legal);
        assert_eq!(categorize("fee"), KeywordCategory::Financial);
        assert_eq!(categorize("fees"), KeywordCategory::Financial);
        assert_eq!(categorize("day"), KeywordCategory::Temporal);
        assert_eq!(categorize("days"), KeywordCategory::Temporal);
    }

    #[test]
    fn tables_are_lowercase() {
        for (_, terms) in CATEGORY_RULES {
            for term in terms.iter() {
                assert_eq!(*term, term.to_lowercase());
            }
        }
        for term in SUMMARY_KEYWORDS {
            assert_eq!(*term, term.to_lowercase());
        }
    }

    #[test]
    fn one_pattern_per_group() {
        assert_eq!(boilerplate_patterns().len(), BOILERPLATE_CONNECTIVES.len());
    }
}
