//! Text analyzer - scores complaint text against the static lexicons.
//!
//! Single pass over lowercased text, substring matching only. Total over all
//! string inputs: empty text yields the neutral/other/medium defaults rather
//! than an error.

use crate::lexicon::{
    category_keywords, CATEGORY_LEXICON, EMPHASIS_TOKENS, OTHER_CATEGORY, SENTIMENT_LEXICON,
    STOPWORDS, URGENCY_LEXICON,
};
use crate::types::{AnalysisResult, Sentiment, UrgencyLevel};

/// Confidence reported when no category matched.
const OTHER_CONFIDENCE: f64 = 0.3;

/// Cap on extracted informational keywords.
const MAX_KEYWORDS: usize = 10;

/// Analyze a complaint. The optional title is prepended to the body with a
/// single space before any matching happens.
pub fn analyze(description: &str, title: &str) -> AnalysisResult {
    let raw = format!("{} {}", title, description);
    let text = raw.to_lowercase();

    let suggested_category = suggest_category(&text);

    AnalysisResult {
        sentiment: score_sentiment(&text),
        keywords: extract_keywords(&text),
        confidence_score: category_confidence(&suggested_category, &text),
        suggested_category,
        emotional_intensity: emotional_intensity(&raw, &text),
        urgency_score: score_urgency(&text),
        similar_complaints: Vec::new(),
    }
}

/// Accumulated sentiment score. Every keyword occurrence counts - one strong
/// negative can be outweighed by repeated praise.
fn score_sentiment(text: &str) -> Sentiment {
    let mut score: i32 = 0;
    for entry in SENTIMENT_LEXICON {
        for keyword in entry.keywords {
            score += entry.weight * text.matches(keyword).count() as i32;
        }
    }

    if score <= -3 {
        Sentiment::VeryNegative
    } else if score < 0 {
        Sentiment::Negative
    } else if score == 0 {
        Sentiment::Neutral
    } else {
        Sentiment::Positive
    }
}

/// Best-scoring category label, or `other` when nothing matched.
///
/// Each present keyword is worth 1 point, plus 0.5 when the keyword is also
/// found followed by a space. A keyword sitting at the very end of the text
/// earns no bonus. Ties resolve to the earliest entry in table order.
fn suggest_category(text: &str) -> String {
    let mut best_label = OTHER_CATEGORY;
    let mut best_score = 0.0_f64;

    for entry in CATEGORY_LEXICON {
        let mut score = 0.0;
        for keyword in entry.keywords {
            if text.contains(keyword) {
                score += 1.0;
                if text.contains(&format!("{} ", keyword)) {
                    score += 0.5;
                }
            }
        }
        if score > best_score {
            best_score = score;
            best_label = entry.label;
        }
    }

    best_label.to_string()
}

/// Share of the category's keywords present in the text, rounded to two
/// decimals. Boolean presence here, unlike the weighted selection score.
fn category_confidence(category: &str, text: &str) -> f64 {
    let Some(keywords) = category_keywords(category) else {
        return OTHER_CONFIDENCE;
    };

    let present = keywords.iter().filter(|kw| text.contains(*kw)).count();
    let ratio = (present as f64 / keywords.len() as f64).min(1.0);
    (ratio * 100.0).round() / 100.0
}

/// Highest-ranked urgency level with a keyword hit. Defaults to medium (the
/// initial value), not low, when nothing matches.
fn score_urgency(text: &str) -> UrgencyLevel {
    let mut best = UrgencyLevel::Medium;
    let mut best_rank = 0_u8;

    for entry in URGENCY_LEXICON {
        if entry.rank > best_rank && entry.keywords.iter().any(|kw| text.contains(kw)) {
            best = entry.level;
            best_rank = entry.rank;
        }
    }

    best
}

/// Emphasis score in [1,10]: base 1, +1 per emphasis token present, +2 for
/// the `CAPS` rule, plus up to 3 for exclamation marks.
///
/// The `CAPS` rule fires only when the entire raw input has letters and none
/// of them is lowercase - a whole-message-shouted check, not per-word.
fn emotional_intensity(raw: &str, text: &str) -> u8 {
    let mut intensity: u32 = 1;

    for token in EMPHASIS_TOKENS {
        if *token == "CAPS" {
            let has_letters = raw.chars().any(|c| c.is_alphabetic());
            let has_lowercase = raw.chars().any(|c| c.is_lowercase());
            if has_letters && !has_lowercase {
                intensity += 2;
            }
        } else if text.contains(&token.to_lowercase()) {
            intensity += 1;
        }
    }

    intensity += (text.matches('!').count() as u32).min(3);
    intensity.min(10) as u8
}

/// Informational tokens: whitespace split, length > 3, stopword-filtered,
/// deduplicated in first-occurrence order, capped at 10. Not consumed by any
/// of the scoring passes.
fn extract_keywords(text: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();

    for word in text.split_whitespace() {
        if word.len() <= 3 {
            continue;
        }
        let lower = word.to_lowercase();
        if STOPWORDS.contains(lower.as_str()) {
            continue;
        }
        if !keywords.contains(&lower) {
            keywords.push(lower);
        }
        if keywords.len() == MAX_KEYWORDS {
            break;
        }
    }

    keywords
}
