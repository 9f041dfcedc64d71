//! API routes for triaged.
//!
//! Responses use the `{success, data}` envelope the admin dashboard
//! already consumes.

use crate::intake::{self, ComplaintSubmission};
use crate::server::AppState;
use crate::store::{Complaint, ComplaintStatus, StoreError};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use triage_common::{analyze, AnalysisResult};
use uuid::Uuid;

type AppStateArc = Arc<AppState>;

/// Standard response envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

fn ok<T>(data: T) -> Json<Envelope<T>> {
    Json(Envelope {
        success: true,
        data,
    })
}

// ============================================================================
// Complaint Routes
// ============================================================================

pub fn complaint_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/v1/complaints/analyze", post(analyze_complaint))
        .route("/v1/complaints", post(submit_complaint).get(list_complaints))
        .route("/v1/complaints/:id", get(get_complaint))
}

/// Request to analyze a complaint text without persisting anything.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub description: String,
    #[serde(default)]
    pub title: String,
}

async fn analyze_complaint(
    Json(req): Json<AnalyzeRequest>,
) -> Json<Envelope<AnalysisResult>> {
    let result = analyze(&req.description, &req.title);
    info!(
        "Analyzed complaint text: category={} urgency={}",
        result.suggested_category,
        result.urgency_score.as_str()
    );
    ok(result)
}

async fn submit_complaint(
    State(state): State<AppStateArc>,
    Json(submission): Json<ComplaintSubmission>,
) -> Result<Json<Envelope<Complaint>>, (StatusCode, String)> {
    if submission.description.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "description must not be empty".to_string(),
        ));
    }
    if submission.patient_name.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "patient_name must not be empty".to_string(),
        ));
    }

    let complaint = intake::process(submission, &state.config.intake);
    info!(
        "Complaint {} recorded: category={} urgency={} status={}",
        complaint.id,
        complaint.category,
        complaint.urgency.as_str(),
        complaint.status.as_str()
    );

    let mut store = state.store.write().await;
    store.insert(complaint.clone());

    Ok(ok(complaint))
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListParams {
    pub status: Option<String>,
    pub category: Option<String>,
}

async fn list_complaints(
    State(state): State<AppStateArc>,
    Query(params): Query<ListParams>,
) -> Result<Json<Envelope<Vec<Complaint>>>, (StatusCode, String)> {
    let status = match params.status.as_deref() {
        None => None,
        Some("open") => Some(ComplaintStatus::Open),
        Some("assigned") => Some(ComplaintStatus::Assigned),
        Some(other) => {
            return Err((
                StatusCode::BAD_REQUEST,
                format!("unknown status filter '{}'", other),
            ))
        }
    };

    let store = state.store.read().await;
    let complaints = store
        .list(status, params.category.as_deref())
        .into_iter()
        .cloned()
        .collect();

    Ok(ok(complaints))
}

async fn get_complaint(
    State(state): State<AppStateArc>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<Complaint>>, (StatusCode, String)> {
    let store = state.store.read().await;
    match store.get(id) {
        Ok(complaint) => Ok(ok(complaint.clone())),
        Err(e @ StoreError::NotFound(_)) => Err((StatusCode::NOT_FOUND, e.to_string())),
    }
}

// ============================================================================
// Health Routes
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub complaints_recorded: usize,
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<Envelope<HealthResponse>> {
    let store = state.store.read().await;

    ok(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        complaints_recorded: store.count(),
    })
}
