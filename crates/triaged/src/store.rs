//! In-memory complaint store.
//!
//! The original system swapped between an external database and a mock
//! in-memory store; persistence design is out of scope here, so the daemon
//! keeps complaints in a map for its lifetime.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use triage_common::{AnalysisResult, Assignment, UrgencyLevel};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("complaint {0} not found")]
    NotFound(Uuid),
}

/// Complaint lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    Open,
    Assigned,
}

impl ComplaintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Assigned => "assigned",
        }
    }
}

/// A persisted complaint record with its embedded analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Complaint {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub patient_name: String,
    pub patient_phone: Option<String>,
    /// Final category: caller-supplied, or the analyzer's suggestion
    pub category: String,
    /// Final urgency: caller-supplied, or the analyzer's score
    pub urgency: UrgencyLevel,
    pub channel: Option<String>,
    pub language: Option<String>,
    pub is_anonymous: bool,
    pub related_appointment: Option<String>,
    /// Analysis snapshot taken at intake; never recomputed
    pub analysis: AnalysisResult,
    pub assignment: Option<Assignment>,
    pub acknowledgement: String,
    pub status: ComplaintStatus,
    pub created_at: DateTime<Utc>,
}

/// Map-backed store. Callers wrap it in a lock; the store itself is plain
/// synchronous state.
#[derive(Debug, Default)]
pub struct ComplaintStore {
    complaints: HashMap<Uuid, Complaint>,
}

impl ComplaintStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, complaint: Complaint) {
        self.complaints.insert(complaint.id, complaint);
    }

    pub fn get(&self, id: Uuid) -> Result<&Complaint, StoreError> {
        self.complaints.get(&id).ok_or(StoreError::NotFound(id))
    }

    /// All complaints matching the optional filters, newest first.
    pub fn list(
        &self,
        status: Option<ComplaintStatus>,
        category: Option<&str>,
    ) -> Vec<&Complaint> {
        let mut matches: Vec<&Complaint> = self
            .complaints
            .values()
            .filter(|c| status.map_or(true, |s| c.status == s))
            .filter(|c| category.map_or(true, |cat| c.category == cat))
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matches
    }

    pub fn count(&self) -> usize {
        self.complaints.len()
    }
}
