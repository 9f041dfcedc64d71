//! Static keyword lexicons for complaint classification.
//!
//! Three independent tables: category, urgency, sentiment. Within a table
//! exactly one label wins per analysis; a keyword may appear under labels of
//! different tables. Severity ordering is explicit (rank/weight fields),
//! never implied by map iteration order.

use crate::types::{Sentiment, UrgencyLevel};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Sentinel category for text that matches no lexicon entry.
pub const OTHER_CATEGORY: &str = "other";

/// One category label with its keyword list.
pub struct CategoryLexicon {
    pub label: &'static str,
    pub keywords: &'static [&'static str],
}

/// The twelve complaint categories, in tie-break order: the earliest entry
/// wins when aggregate scores are equal.
pub const CATEGORY_LEXICON: &[CategoryLexicon] = &[
    CategoryLexicon {
        label: "appointment_scheduling",
        keywords: &[
            "appointment",
            "reschedule",
            "booking",
            "slot",
            "cancelled",
            "follow-up visit",
        ],
    },
    CategoryLexicon {
        label: "doctor_behavior",
        keywords: &[
            "doctor",
            "physician",
            "dismissive",
            "consultation",
            "bedside manner",
        ],
    },
    CategoryLexicon {
        label: "staff_behavior",
        keywords: &[
            "nurse",
            "receptionist",
            "front desk",
            "unhelpful",
            "impolite",
        ],
    },
    CategoryLexicon {
        label: "billing_issues",
        keywords: &[
            "billing",
            "overcharged",
            "refund",
            "invoice",
            "insurance claim",
            "payment",
        ],
    },
    CategoryLexicon {
        label: "wait_times",
        keywords: &["waiting", "queue", "delay", "long wait", "hours in line"],
    },
    CategoryLexicon {
        label: "medication_issues",
        keywords: &[
            "medication",
            "pharmacy",
            "prescription",
            "dosage",
            "side effects",
            "out of stock",
        ],
    },
    CategoryLexicon {
        label: "facility_cleanliness",
        keywords: &["dirty", "unclean", "hygiene", "restroom", "housekeeping"],
    },
    CategoryLexicon {
        label: "food_quality",
        keywords: &["meal", "cold food", "stale", "canteen", "dietary"],
    },
    CategoryLexicon {
        label: "equipment_issues",
        keywords: &[
            "equipment",
            "machine",
            "broken",
            "x-ray",
            "scanner",
            "wheelchair",
            "out of order",
        ],
    },
    CategoryLexicon {
        label: "communication",
        keywords: &[
            "no response",
            "not informed",
            "unanswered",
            "call back",
            "no update",
        ],
    },
    CategoryLexicon {
        label: "privacy_concerns",
        keywords: &[
            "privacy",
            "confidential",
            "personal data",
            "records leaked",
            "consent",
        ],
    },
    CategoryLexicon {
        label: "emergency_response",
        keywords: &[
            "emergency room",
            "ambulance",
            "resuscitation",
            "trauma",
            "casualty",
        ],
    },
];

/// Keyword list for a known category label, `None` for `other` or any
/// unknown label.
pub fn category_keywords(label: &str) -> Option<&'static [&'static str]> {
    CATEGORY_LEXICON
        .iter()
        .find(|entry| entry.label == label)
        .map(|entry| entry.keywords)
}

/// One urgency level with its explicit rank and keyword list.
pub struct UrgencyLexicon {
    pub level: UrgencyLevel,
    pub rank: u8,
    pub keywords: &'static [&'static str],
}

/// Urgency levels in priority order, critical first. A level is selected
/// only when its rank beats the current best.
pub const URGENCY_LEXICON: &[UrgencyLexicon] = &[
    UrgencyLexicon {
        level: UrgencyLevel::Critical,
        rank: 4,
        keywords: &[
            "emergency",
            "life threatening",
            "critical",
            "severe bleeding",
            "unconscious",
            "heart attack",
        ],
    },
    UrgencyLexicon {
        level: UrgencyLevel::High,
        rank: 3,
        keywords: &[
            "urgent",
            "immediately",
            "asap",
            "severe",
            "worsening",
            "high priority",
        ],
    },
    UrgencyLexicon {
        level: UrgencyLevel::Medium,
        rank: 2,
        keywords: &["soon", "concern", "uncomfortable", "moderate", "follow up"],
    },
    UrgencyLexicon {
        level: UrgencyLevel::Low,
        rank: 1,
        keywords: &["suggestion", "feedback", "minor", "whenever", "general inquiry"],
    },
];

/// One sentiment tone with its score delta and keyword list.
pub struct SentimentLexicon {
    pub tone: Sentiment,
    pub weight: i32,
    pub keywords: &'static [&'static str],
}

/// Sentiment tones with their per-occurrence score deltas. Every occurrence
/// counts, so repeated praise can outweigh one strong negative.
pub const SENTIMENT_LEXICON: &[SentimentLexicon] = &[
    SentimentLexicon {
        tone: Sentiment::VeryNegative,
        weight: -3,
        keywords: &[
            "terrible",
            "horrible",
            "worst",
            "disgusting",
            "unacceptable",
            "traumatic",
        ],
    },
    SentimentLexicon {
        tone: Sentiment::Negative,
        weight: -1,
        keywords: &[
            "bad",
            "poor",
            "disappointed",
            "unhappy",
            "frustrating",
            "rude",
        ],
    },
    SentimentLexicon {
        tone: Sentiment::Neutral,
        weight: 0,
        keywords: &["okay", "average", "normal", "standard"],
    },
    SentimentLexicon {
        tone: Sentiment::Positive,
        weight: 2,
        keywords: &[
            "good",
            "great",
            "excellent",
            "thank you",
            "helpful",
            "satisfied",
        ],
    },
];

/// Emphasis tokens for emotional-intensity scoring. `CAPS` is special-cased
/// by the analyzer: it fires only when the whole input has no lowercase
/// letters.
pub const EMPHASIS_TOKENS: &[&str] = &[
    "very",
    "extremely",
    "really",
    "absolutely",
    "completely",
    "totally",
    "!!!",
    "CAPS",
    "urgent",
    "immediate",
    "serious",
    "critical",
];

/// English stopwords excluded from the informational keyword extraction.
pub static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "and", "that", "this", "with", "from", "have", "has", "had",
        "was", "were", "will", "would", "could", "should", "about", "there",
        "their", "they", "them", "then", "than", "when", "what", "which",
        "where", "while", "been", "being", "because", "before", "after",
        "very", "your", "yours", "just", "also", "some", "such", "only",
        "into", "over",
    ]
    .into_iter()
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_categories_defined() {
        assert_eq!(CATEGORY_LEXICON.len(), 12);
    }

    #[test]
    fn category_labels_unique() {
        let mut labels: Vec<&str> = CATEGORY_LEXICON.iter().map(|e| e.label).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), 12);
    }

    #[test]
    fn urgency_ranks_match_levels() {
        for entry in URGENCY_LEXICON {
            assert_eq!(entry.rank, entry.level.rank());
        }
    }

    #[test]
    fn urgency_table_is_priority_ordered() {
        let ranks: Vec<u8> = URGENCY_LEXICON.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![4, 3, 2, 1]);
    }

    #[test]
    fn other_is_not_a_lexicon_category() {
        assert!(category_keywords(OTHER_CATEGORY).is_none());
    }

    #[test]
    fn known_category_has_keywords() {
        let kws = category_keywords("billing_issues").unwrap();
        assert!(kws.contains(&"overcharged"));
    }
}
