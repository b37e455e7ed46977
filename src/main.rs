use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;
use tracing::{error, info};

use scoutpulse::config::Settings;
use scoutpulse::routes::{self, api::AppState};
use scoutpulse::services::{OpenAiClient, TextGenerator};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting ScoutPulse account research service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // The collaborator is built once here and injected into the handlers;
    // endpoints report no_key instead of failing when it is absent.
    let ai: Option<Arc<dyn TextGenerator>> = match settings.openai.configured_key() {
        Some(key) => {
            let client: Arc<dyn TextGenerator> = Arc::new(OpenAiClient::new(
                settings.openai.base_url.clone(),
                key.to_string(),
            ));
            info!("OpenAI client initialized (model: {})", settings.openai.model);
            Some(client)
        }
        None => {
            info!("No OpenAI API key configured - AI endpoints will report no_key");
            None
        }
    };

    // Build application state
    let app_state = AppState {
        ai,
        model: settings.openai.model.clone(),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
