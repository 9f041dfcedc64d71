//! HTTP client for talking to the triaged daemon.

use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::time::Duration;

/// Default daemon address when nothing else is configured.
pub const DEFAULT_ADDR: &str = "http://127.0.0.1:7870";

/// Client for the daemon's intake API.
pub struct DaemonClient {
    http: reqwest::Client,
    base_url: String,
}

impl DaemonClient {
    /// Discover the daemon address.
    ///
    /// Priority:
    /// 1. Explicit --addr flag (passed as argument)
    /// 2. $TRIAGED_ADDR environment variable
    /// 3. http://127.0.0.1:7870 (default)
    pub fn discover_addr(explicit_addr: Option<&str>) -> String {
        if let Some(addr) = explicit_addr {
            return normalize_addr(addr);
        }

        if let Ok(addr) = std::env::var("TRIAGED_ADDR") {
            return normalize_addr(&addr);
        }

        DEFAULT_ADDR.to_string()
    }

    pub fn new(explicit_addr: Option<&str>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: Self::discover_addr(explicit_addr),
        })
    }

    pub async fn submit(&self, submission: &Value) -> Result<Value> {
        let response = self
            .http
            .post(format!("{}/v1/complaints", self.base_url))
            .json(submission)
            .send()
            .await
            .with_context(|| format!("Daemon unreachable at {}", self.base_url))?;

        Self::unwrap_envelope(response).await
    }

    pub async fn list(&self, status: Option<&str>, category: Option<&str>) -> Result<Value> {
        let mut request = self.http.get(format!("{}/v1/complaints", self.base_url));
        if let Some(status) = status {
            request = request.query(&[("status", status)]);
        }
        if let Some(category) = category {
            request = request.query(&[("category", category)]);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Daemon unreachable at {}", self.base_url))?;

        Self::unwrap_envelope(response).await
    }

    pub async fn health(&self) -> Result<Value> {
        let response = self
            .http
            .get(format!("{}/v1/health", self.base_url))
            .send()
            .await
            .with_context(|| format!("Daemon unreachable at {}", self.base_url))?;

        Self::unwrap_envelope(response).await
    }

    /// Peel the `{success, data}` envelope, surfacing API errors as text.
    async fn unwrap_envelope(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let body = response.text().await.context("Failed to read response")?;

        if !status.is_success() {
            return Err(anyhow!("Daemon returned {}: {}", status, body.trim()));
        }

        let envelope: Value =
            serde_json::from_str(&body).context("Daemon returned invalid JSON")?;
        envelope
            .get("data")
            .cloned()
            .ok_or_else(|| anyhow!("Response envelope missing 'data'"))
    }
}

/// Accept bare host:port addresses by prefixing the scheme.
fn normalize_addr(addr: &str) -> String {
    if addr.starts_with("http://") || addr.starts_with("https://") {
        addr.trim_end_matches('/').to_string()
    } else {
        format!("http://{}", addr.trim_end_matches('/'))
    }
}
