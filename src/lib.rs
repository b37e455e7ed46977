//! ScoutPulse - Account research and outreach brief service
//!
//! This library backs the ScoutPulse sales-rep dashboard. It provides the
//! CSV account importer and three HTTP endpoints: a status check, single-
//! account research bullets and batch outreach briefs, the latter two
//! passing prompt templates through to an OpenAI-compatible collaborator.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{extract_bullets, parse_accounts, split_csv_line};
pub use crate::models::{
    Account, BriefBatchRequest, BriefBatchResponse, ChatMessage, ErrorResponse, ResearchRequest,
    ResearchResponse, StatusResponse,
};
pub use crate::services::{OpenAiClient, OpenAiError, TextGenerator};
