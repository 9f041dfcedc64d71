//! Complaint intake orchestrator.
//!
//! Runs the analyzer over the submitted text, fills in category/urgency
//! defaults the caller omitted, gates auto-assignment by urgency, and
//! renders the acknowledgement. Persistence is the caller's job.

use crate::config::IntakeConfig;
use crate::store::{Complaint, ComplaintStatus};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use triage_common::{acknowledgement, analyze, assign, UrgencyLevel};
use uuid::Uuid;

/// Raw complaint fields as submitted by the caller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComplaintSubmission {
    #[serde(default)]
    pub title: String,
    pub description: String,
    pub patient_name: String,
    #[serde(default)]
    pub patient_phone: Option<String>,
    /// Overrides the analyzer's suggested category when present
    #[serde(default)]
    pub category: Option<String>,
    /// Overrides the analyzer's urgency score when present
    #[serde(default)]
    pub urgency: Option<UrgencyLevel>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub related_appointment: Option<String>,
}

/// Turn a submission into a complete complaint record.
pub fn process(submission: ComplaintSubmission, config: &IntakeConfig) -> Complaint {
    let analysis = analyze(&submission.description, &submission.title);

    let category = submission
        .category
        .clone()
        .unwrap_or_else(|| analysis.suggested_category.clone());
    let urgency = submission.urgency.unwrap_or(analysis.urgency_score);

    let assignment = if config.auto_assign && urgency.rank() > config.assign_above.rank() {
        let assignment = assign(&category);
        info!(
            "Assigned complaint to {} ({})",
            assignment.staff_name, assignment.department
        );
        Some(assignment)
    } else {
        None
    };

    let status = if assignment.is_some() {
        ComplaintStatus::Assigned
    } else {
        ComplaintStatus::Open
    };

    let id = Uuid::new_v4();
    let acknowledgement = acknowledgement(&id.to_string(), &submission.patient_name, &category);

    Complaint {
        id,
        title: submission.title,
        description: submission.description,
        patient_name: submission.patient_name,
        patient_phone: submission.patient_phone,
        category,
        urgency,
        channel: submission.channel,
        language: submission.language,
        is_anonymous: submission.is_anonymous,
        related_appointment: submission.related_appointment,
        analysis,
        assignment,
        acknowledgement,
        status,
        created_at: Utc::now(),
    }
}
