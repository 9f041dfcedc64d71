//! End-to-end intake flow tests against the daemon's internals.
//!
//! Drives the same path the HTTP handlers use: submission -> orchestrator ->
//! store, and checks the wire shape of the stored record.

use triaged::config::IntakeConfig;
use triaged::intake::{process, ComplaintSubmission};
use triaged::store::{ComplaintStatus, ComplaintStore};
use triage_common::UrgencyLevel;

fn submission(title: &str, description: &str) -> ComplaintSubmission {
    ComplaintSubmission {
        title: title.to_string(),
        description: description.to_string(),
        patient_name: "Amina Yusuf".to_string(),
        ..Default::default()
    }
}

#[test]
fn submitted_complaint_is_retrievable_with_analysis() {
    let mut store = ComplaintStore::new();
    let complaint = process(
        submission("Wrong bill", "I was overcharged on my invoice, need a refund"),
        &IntakeConfig::default(),
    );
    let id = complaint.id;
    store.insert(complaint);

    let stored = store.get(id).unwrap();
    assert_eq!(stored.category, "billing_issues");
    assert_eq!(stored.analysis.suggested_category, "billing_issues");
    assert!(stored.acknowledgement.contains("Amina Yusuf"));
}

#[test]
fn urgency_gates_assignment_end_to_end() {
    let config = IntakeConfig::default();

    let low = process(
        ComplaintSubmission {
            urgency: Some(UrgencyLevel::Low),
            ..submission("", "feedback about the waiting room chairs")
        },
        &config,
    );
    assert_eq!(low.status, ComplaintStatus::Open);
    assert!(low.assignment.is_none());

    let critical = process(
        submission("", "emergency: patient unconscious with severe bleeding"),
        &config,
    );
    assert_eq!(critical.urgency, UrgencyLevel::Critical);
    assert_eq!(critical.status, ComplaintStatus::Assigned);
    assert!(critical.assignment.is_some());
}

#[test]
fn submission_json_accepts_minimal_payload() {
    let submission: ComplaintSubmission = serde_json::from_str(
        r#"{"description": "the scanner is broken", "patient_name": "Lee"}"#,
    )
    .unwrap();

    assert!(submission.title.is_empty());
    assert!(submission.category.is_none());
    assert!(submission.urgency.is_none());
    assert!(!submission.is_anonymous);

    let complaint = process(submission, &IntakeConfig::default());
    assert_eq!(complaint.category, "equipment_issues");
}

#[test]
fn stored_complaint_serializes_with_expected_fields() {
    let complaint = process(
        submission("Noise", "the restroom was dirty and the smell unacceptable"),
        &IntakeConfig::default(),
    );
    let json = serde_json::to_value(&complaint).unwrap();

    assert_eq!(json["category"], "facility_cleanliness");
    assert!(json["id"].is_string());
    assert!(json["created_at"].is_string());
    assert!(json["analysis"]["sentiment"].is_string());
    assert_eq!(json["status"], "assigned");
}
