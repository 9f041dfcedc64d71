//! Shared result types for the triage core.

use serde::{Deserialize, Serialize};

/// Overall sentiment of a complaint text.
///
/// There is no `very_positive` tier - the scale is asymmetric on purpose,
/// matching the scoring deltas in the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    VeryNegative,
    Negative,
    Neutral,
    Positive,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryNegative => "very_negative",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Positive => "positive",
        }
    }
}

/// Urgency level of a complaint.
///
/// Categorical, not numeric - ordering is expressed through [`rank`], never
/// through the declaration order of a map.
///
/// [`rank`]: UrgencyLevel::rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl UrgencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Explicit severity rank (low=1 .. critical=4).
    pub fn rank(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }
}

/// Full analysis of one complaint text.
///
/// Computed fresh per call and never mutated afterwards. Embedded verbatim
/// into the stored complaint record by the intake layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Accumulated sentiment classification
    pub sentiment: Sentiment,
    /// Up to 10 distinct informational tokens, first-occurrence order
    pub keywords: Vec<String>,
    /// Best-scoring category label, or `other`
    pub suggested_category: String,
    /// Share of the winning category's keywords present in the text,
    /// in [0,1]; fixed 0.3 when the category is `other`
    pub confidence_score: f64,
    /// Emphasis score in [1,10]
    pub emotional_intensity: u8,
    /// Urgency classification (defaults to medium, not low)
    pub urgency_score: UrgencyLevel,
    /// Reserved - similarity search is not part of this core
    pub similar_complaints: Vec<String>,
}

/// Department/staff routing derived from a category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Deterministic id derived from the staff name
    pub staff_id: String,
    pub staff_name: String,
    pub department: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_serializes_snake_case() {
        let json = serde_json::to_string(&Sentiment::VeryNegative).unwrap();
        assert_eq!(json, "\"very_negative\"");
    }

    #[test]
    fn urgency_rank_order() {
        assert!(UrgencyLevel::Critical.rank() > UrgencyLevel::High.rank());
        assert!(UrgencyLevel::High.rank() > UrgencyLevel::Medium.rank());
        assert!(UrgencyLevel::Medium.rank() > UrgencyLevel::Low.rank());
    }

    #[test]
    fn urgency_from_str_round_trip() {
        for level in [
            UrgencyLevel::Low,
            UrgencyLevel::Medium,
            UrgencyLevel::High,
            UrgencyLevel::Critical,
        ] {
            assert_eq!(UrgencyLevel::from_str(level.as_str()), Some(level));
        }
        assert_eq!(UrgencyLevel::from_str("panic"), None);
    }
}
