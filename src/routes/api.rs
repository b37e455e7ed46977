use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::core::{
    brief_messages, extract_bullets, research_messages, BRIEF_TEMPERATURE, MAX_BRIEF_ACCOUNTS,
    RESEARCH_TEMPERATURE,
};
use crate::models::{
    BriefBatchRequest, BriefBatchResponse, ErrorResponse, ResearchRequest, ResearchResponse,
    StatusResponse,
};
use crate::services::TextGenerator;

/// Application state shared across all handlers
///
/// `ai` is the explicitly injected collaborator capability: present only
/// when an API key was configured at startup, never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub ai: Option<Arc<dyn TextGenerator>>,
    pub model: String,
}

/// Configure all dashboard-facing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/status", web::get().to(status))
        .route("/research", web::post().to(research))
        .route("/brief/batch", web::post().to(brief_batch));
}

/// Status endpoint
///
/// GET /api/status
///
/// Reports whether the collaborator is configured. Never fails, no side
/// effects.
async fn status(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(StatusResponse {
        ok: true,
        ai: state.ai.is_some(),
    })
}

/// Research endpoint
///
/// POST /api/research
///
/// Request body:
/// ```json
/// { "domain": "companya.com" }
/// ```
///
/// Undecodable bodies are treated as an empty object, so a missing domain
/// is reported as `no_domain` regardless of how the body was malformed or
/// whether the collaborator is configured.
async fn research(state: web::Data<AppState>, body: web::Bytes) -> impl Responder {
    let req: ResearchRequest = serde_json::from_slice(&body).unwrap_or_default();

    let domain = match req.domain {
        Some(domain) if !domain.is_empty() => domain,
        _ => {
            return HttpResponse::BadRequest().json(ErrorResponse::new("no_domain"));
        }
    };

    let ai = match state.ai.as_ref() {
        Some(ai) => ai,
        None => {
            return HttpResponse::ServiceUnavailable().json(ErrorResponse::new("no_key"));
        }
    };

    tracing::info!("Running research scan for domain: {}", domain);

    let messages = research_messages(&domain);

    match ai
        .generate(&state.model, RESEARCH_TEMPERATURE, &messages)
        .await
    {
        Ok(text) => {
            let results = extract_bullets(&text);
            tracing::debug!("Extracted {} bullets for {}", results.len(), domain);
            HttpResponse::Ok().json(ResearchResponse { ok: true, results })
        }
        Err(e) => {
            tracing::error!("Research generation failed for {}: {}", domain, e);
            HttpResponse::InternalServerError().json(ErrorResponse::new("upstream_error"))
        }
    }
}

/// Batch brief endpoint
///
/// POST /api/brief/batch
///
/// Request body:
/// ```json
/// { "accounts": [{ "name": "Company A", "domain": "companya.com", "score": 8.1 }] }
/// ```
///
/// At most the first five accounts are forwarded to prompt construction;
/// excess entries are dropped silently.
async fn brief_batch(state: web::Data<AppState>, body: web::Bytes) -> impl Responder {
    let req: BriefBatchRequest = serde_json::from_slice(&body).unwrap_or_default();

    let accounts = match req.accounts {
        Some(accounts) if !accounts.is_empty() => accounts,
        _ => {
            return HttpResponse::BadRequest().json(ErrorResponse::new("no_accounts"));
        }
    };

    let ai = match state.ai.as_ref() {
        Some(ai) => ai,
        None => {
            return HttpResponse::ServiceUnavailable().json(ErrorResponse::new("no_key"));
        }
    };

    tracing::info!(
        "Generating briefs for {} accounts ({} used)",
        accounts.len(),
        accounts.len().min(MAX_BRIEF_ACCOUNTS)
    );

    let messages = brief_messages(&accounts);

    match ai.generate(&state.model, BRIEF_TEMPERATURE, &messages).await {
        Ok(text) => {
            let job_id = format!("briefs_{}", chrono::Utc::now().timestamp_millis());
            HttpResponse::Ok().json(BriefBatchResponse {
                ok: true,
                job_id,
                text,
            })
        }
        Err(e) => {
            tracing::error!("Brief generation failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new("upstream_error"))
        }
    }
}
