use serde::{Deserialize, Serialize};

/// Response for the status endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub ok: bool,
    /// Whether the text-generation collaborator is configured. This is a
    /// configuration presence check, not a reachability probe.
    pub ai: bool,
}

/// Response for the research endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchResponse {
    pub ok: bool,
    pub results: Vec<String>,
}

/// Response for the batch brief endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BriefBatchResponse {
    pub ok: bool,
    /// Cosmetic tag for this response, derived from the request timestamp.
    /// Not persisted and not guaranteed unique across same-millisecond
    /// requests; no retrieval endpoint consumes it.
    #[serde(rename = "jobId")]
    pub job_id: String,
    pub text: String,
}

/// Typed error body shared by all endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: code.into(),
        }
    }
}
