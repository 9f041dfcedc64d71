//! Command execution for triagectl.

use crate::client::DaemonClient;
use anyhow::{bail, Result};
use owo_colors::OwoColorize;
use serde_json::{json, Value};
use triage_common::{analyze, AnalysisResult, UrgencyLevel};

/// Run the analyzer locally and print the result.
pub fn analyze_text(text: &str, title: &str, as_json: bool) -> Result<()> {
    let result = analyze(text, title);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_analysis(&result);
    Ok(())
}

fn print_analysis(result: &AnalysisResult) {
    println!("{}", "Complaint analysis".bold());
    println!("  Category:   {}", result.suggested_category.cyan());
    println!(
        "  Confidence: {:.0}%",
        result.confidence_score * 100.0
    );
    println!("  Sentiment:  {}", result.sentiment.as_str());
    println!("  Urgency:    {}", colorize_urgency(result.urgency_score));
    println!("  Intensity:  {}/10", result.emotional_intensity);
    if !result.keywords.is_empty() {
        println!("  Keywords:   {}", result.keywords.join(", "));
    }
}

fn colorize_urgency(urgency: UrgencyLevel) -> String {
    match urgency {
        UrgencyLevel::Critical => urgency.as_str().red().bold().to_string(),
        UrgencyLevel::High => urgency.as_str().yellow().to_string(),
        UrgencyLevel::Medium => urgency.as_str().to_string(),
        UrgencyLevel::Low => urgency.as_str().dimmed().to_string(),
    }
}

/// Submit a complaint through the daemon.
#[allow(clippy::too_many_arguments)]
pub async fn submit(
    addr: Option<&str>,
    title: &str,
    description: &str,
    patient: &str,
    phone: Option<&str>,
    category: Option<&str>,
    urgency: Option<&str>,
) -> Result<()> {
    if let Some(urgency) = urgency {
        if UrgencyLevel::from_str(urgency).is_none() {
            bail!("invalid urgency '{}' (expected low|medium|high|critical)", urgency);
        }
    }

    let mut submission = json!({
        "title": title,
        "description": description,
        "patient_name": patient,
    });
    if let Some(phone) = phone {
        submission["patient_phone"] = json!(phone);
    }
    if let Some(category) = category {
        submission["category"] = json!(category);
    }
    if let Some(urgency) = urgency {
        submission["urgency"] = json!(urgency);
    }

    let client = DaemonClient::new(addr)?;
    let complaint = client.submit(&submission).await?;

    println!("{}", "Complaint recorded".green().bold());
    print_complaint_line(&complaint);
    if let Some(ack) = complaint.get("acknowledgement").and_then(Value::as_str) {
        println!("\n{}", ack.dimmed());
    }
    Ok(())
}

/// List complaints known to the daemon.
pub async fn list(addr: Option<&str>, status: Option<&str>, category: Option<&str>) -> Result<()> {
    let client = DaemonClient::new(addr)?;
    let complaints = client.list(status, category).await?;

    let Some(entries) = complaints.as_array() else {
        bail!("unexpected list response shape");
    };

    if entries.is_empty() {
        println!("No complaints recorded.");
        return Ok(());
    }

    println!("{} complaint(s):", entries.len());
    for complaint in entries {
        print_complaint_line(complaint);
    }
    Ok(())
}

fn print_complaint_line(complaint: &Value) {
    let id = complaint.get("id").and_then(Value::as_str).unwrap_or("?");
    let category = complaint
        .get("category")
        .and_then(Value::as_str)
        .unwrap_or("?");
    let urgency = complaint
        .get("urgency")
        .and_then(Value::as_str)
        .unwrap_or("?");
    let status = complaint
        .get("status")
        .and_then(Value::as_str)
        .unwrap_or("?");
    let assignee = complaint
        .pointer("/assignment/staff_name")
        .and_then(Value::as_str)
        .unwrap_or("-");

    println!(
        "  {}  {:<24} urgency={:<8} status={:<8} assignee={}",
        id.dimmed(),
        category,
        urgency,
        status,
        assignee
    );
}

/// Show daemon health.
pub async fn status(addr: Option<&str>) -> Result<()> {
    let client = DaemonClient::new(addr)?;
    match client.health().await {
        Ok(health) => {
            println!("{}", "Daemon healthy".green().bold());
            if let Some(version) = health.get("version").and_then(Value::as_str) {
                println!("  Version:    {}", version);
            }
            if let Some(uptime) = health.get("uptime_seconds").and_then(Value::as_u64) {
                println!("  Uptime:     {}s", uptime);
            }
            if let Some(count) = health.get("complaints_recorded").and_then(Value::as_u64) {
                println!("  Complaints: {}", count);
            }
            Ok(())
        }
        Err(e) => {
            println!("{}", "Daemon unreachable".red().bold());
            Err(e)
        }
    }
}
