//! The sheet submission dispatcher
//!
//! The endpoint is a spreadsheet-backed web app reached cross-origin,
//! so the response is opaque: no status code, no body. Delivery is
//! therefore fire-and-forget with throw-based failure detection only.
//! The trait seam exists so a real backend (with inspectable
//! responses) can replace [`HttpDispatcher`] without touching the
//! forms.

use async_trait::async_trait;
use registration_types::SheetPayload;
use std::time::Duration;
use thiserror::Error;

/// Placeholder value the endpoint config ships with. When the
/// configured endpoint still equals this, dispatch short-circuits
/// into the simulated-success path.
pub const UNCONFIGURED_ENDPOINT: &str = "YOUR_GOOGLE_APPS_SCRIPT_WEB_APP_URL";

/// Environment variable holding the operator-configured endpoint URL
pub const ENDPOINT_ENV_VAR: &str = "REGISTRATION_ENDPOINT";

/// Artificial delay on the simulated path, matching what a real
/// round-trip feels like in demos
pub const SIMULATED_DELAY: Duration = Duration::from_millis(1500);

/// Client-side request timeout. The transport itself specifies none;
/// this is a defensive cap so a hung endpoint cannot pin a form in
/// `submitting` forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ── Outcome and Errors ───────────────────────────────────────────────

/// How a successful dispatch resolved.
///
/// `Simulated` is still success from the form's point of view, but it
/// is kept distinguishable so operators are not misled into thinking
/// a registration reached the sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The transport call completed against the real endpoint
    Delivered,
    /// No endpoint configured; delivery was simulated
    Simulated,
}

/// Dispatch errors. The transport mode prevents status-code
/// introspection, so there is deliberately no finer taxonomy than
/// "the transport failed".
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Transport-level failure (DNS, connect, timeout, TLS, ...)
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    /// Payload could not be serialized
    #[error("payload serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for dispatch operations
pub type DispatchResult<T> = Result<T, DispatchError>;

// ── Dispatcher Trait ─────────────────────────────────────────────────

/// One-shot delivery of a registration payload.
///
/// Implementations must never read or validate the response body;
/// the operation succeeds iff the underlying call does not error.
#[async_trait]
pub trait SheetDispatcher: Send + Sync {
    async fn submit(&self, payload: &SheetPayload) -> DispatchResult<DispatchOutcome>;
}

// ── HTTP Dispatcher ──────────────────────────────────────────────────

/// Dispatcher that POSTs to the configured spreadsheet web app
#[derive(Clone, Debug)]
pub struct HttpDispatcher {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpDispatcher {
    /// Create a dispatcher for the given endpoint URL
    pub fn new(endpoint: impl Into<String>) -> DispatchResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Create a dispatcher from `REGISTRATION_ENDPOINT`, falling back
    /// to the unconfigured placeholder (simulated delivery)
    pub fn from_env() -> DispatchResult<Self> {
        let endpoint = std::env::var(ENDPOINT_ENV_VAR)
            .unwrap_or_else(|_| UNCONFIGURED_ENDPOINT.to_string());
        Self::new(endpoint)
    }

    /// Whether a real endpoint has been configured
    pub fn is_configured(&self) -> bool {
        self.endpoint != UNCONFIGURED_ENDPOINT && !self.endpoint.is_empty()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SheetDispatcher for HttpDispatcher {
    async fn submit(&self, payload: &SheetPayload) -> DispatchResult<DispatchOutcome> {
        if !self.is_configured() {
            tracing::warn!(
                sheet = %payload.sheet_name,
                "submission endpoint not configured; simulating delivery"
            );
            tokio::time::sleep(SIMULATED_DELAY).await;
            return Ok(DispatchOutcome::Simulated);
        }

        let body = serde_json::to_string(payload)?;

        // text/plain keeps the request a "simple" CORS request (no
        // preflight), which the spreadsheet web app requires. The
        // response is opaque and intentionally dropped unread.
        self.client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await?;

        tracing::info!(
            sheet = %payload.sheet_name,
            endpoint = %self.endpoint,
            "registration payload delivered"
        );
        Ok(DispatchOutcome::Delivered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> SheetPayload {
        SheetPayload::new("Local_Workshops", "n", "e", "p", "i")
    }

    #[tokio::test(start_paused = true)]
    async fn test_unconfigured_endpoint_simulates_success() {
        let dispatcher = HttpDispatcher::new(UNCONFIGURED_ENDPOINT).unwrap();
        assert!(!dispatcher.is_configured());

        let outcome = dispatcher.submit(&payload()).await.unwrap();
        assert_eq!(outcome, DispatchOutcome::Simulated);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_endpoint_counts_as_unconfigured() {
        let dispatcher = HttpDispatcher::new("").unwrap();
        let outcome = dispatcher.submit(&payload()).await.unwrap();
        assert_eq!(outcome, DispatchOutcome::Simulated);
    }

    #[test]
    fn test_configured_flag() {
        let dispatcher = HttpDispatcher::new("https://example.com/exec").unwrap();
        assert!(dispatcher.is_configured());
        assert_eq!(dispatcher.endpoint(), "https://example.com/exec");
    }
}
