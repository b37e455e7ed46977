// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Account, ChatMessage};
pub use requests::{BriefBatchRequest, ResearchRequest};
pub use responses::{BriefBatchResponse, ErrorResponse, ResearchResponse, StatusResponse};
