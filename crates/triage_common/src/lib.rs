//! Triage core - complaint text analysis, auto-assignment, and responses.
//!
//! Everything in this crate is synchronous, pure computation over immutable
//! lexicon tables. Functions here are total: any string input (including
//! empty) produces a complete result, never an error.

pub mod analyzer;
pub mod assignment;
pub mod lexicon;
pub mod respond;
pub mod types;

pub use analyzer::analyze;
pub use assignment::assign;
pub use respond::acknowledgement;
pub use types::{AnalysisResult, Assignment, Sentiment, UrgencyLevel};
