//! Property-style checks for the public triage surface.
//!
//! Exercises analyze/assign/acknowledgement the way the intake layer calls
//! them, over a mixed corpus of realistic complaint texts.

use triage_common::{acknowledgement, analyze, assign, Sentiment, UrgencyLevel};

const CORPUS: &[(&str, &str)] = &[
    ("", ""),
    ("Wrong invoice", "I was overcharged on my invoice and need a refund"),
    (
        "Rude consultation",
        "The doctor was dismissive and the whole visit felt terrible",
    ),
    (
        "EMERGENCY",
        "Severe bleeding in the emergency room, nobody came for an hour!!!",
    ),
    ("Thanks", "thank you, the nurse was helpful and kind"),
    ("", "just a suggestion: the canteen could open earlier"),
    ("Lost records", "my personal data was shared without consent"),
    ("???", "!!!"),
];

#[test]
fn every_corpus_entry_yields_a_complete_result() {
    for (title, description) in CORPUS {
        let result = analyze(description, title);

        assert!(
            (0.0..=1.0).contains(&result.confidence_score),
            "confidence out of range for {description:?}"
        );
        assert!((1..=10).contains(&result.emotional_intensity));
        assert!(result.keywords.len() <= 10);
        assert!(matches!(
            result.sentiment,
            Sentiment::VeryNegative | Sentiment::Negative | Sentiment::Neutral | Sentiment::Positive
        ));
        assert!(matches!(
            result.urgency_score,
            UrgencyLevel::Low | UrgencyLevel::Medium | UrgencyLevel::High | UrgencyLevel::Critical
        ));
        assert!(result.similar_complaints.is_empty());
    }
}

#[test]
fn analysis_is_deterministic_across_calls() {
    for (title, description) in CORPUS {
        assert_eq!(analyze(description, title), analyze(description, title));
    }
}

#[test]
fn suggested_categories_are_always_assignable() {
    for (title, description) in CORPUS {
        let result = analyze(description, title);
        let assignment = assign(&result.suggested_category);
        assert!(assignment.staff_id.starts_with("staff_"));
        assert!(!assignment.department.is_empty());
    }
}

#[test]
fn acknowledgements_render_for_every_suggested_category() {
    for (title, description) in CORPUS {
        let result = analyze(description, title);
        let text = acknowledgement("ref-1", "Pat Doe", &result.suggested_category);
        assert!(text.contains("Pat Doe"));
        assert!(text.contains("ref-1"));
    }
}

#[test]
fn analysis_result_serializes_with_snake_case_fields() {
    let result = analyze("I was overcharged on my invoice", "Billing");
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["suggested_category"], "billing_issues");
    assert!(json["confidence_score"].is_number());
    assert!(json["urgency_score"].is_string());
    assert!(json["similar_complaints"].as_array().unwrap().is_empty());
}
