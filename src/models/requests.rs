use serde::Deserialize;

use crate::models::domain::Account;

/// Request to research a single account domain.
///
/// Bodies are decoded best-effort: an undecodable payload is treated as an
/// empty request and fails validation, never deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResearchRequest {
    #[serde(default)]
    pub domain: Option<String>,
}

/// Request to generate outreach briefs for a batch of accounts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BriefBatchRequest {
    #[serde(default)]
    pub accounts: Option<Vec<Account>>,
}
