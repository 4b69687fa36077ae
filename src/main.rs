use actix_web::{middleware, web, App, HttpServer};
use clap::Parser;
use review_collector::api::{self, AppState};
use review_collector::classifier::Classifier;
use review_collector::config::Config;
use review_collector::db::Database;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("review_collector={},actix_web={}", level, level))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = Config::parse();
    init_tracing(&config.log_level);

    let keywords = config.keyword_lists().map_err(|e| {
        error!("Failed to load keyword fragments: {}", e);
        std::io::Error::other(e)
    })?;
    let classifier = Classifier::new(keywords);

    // Initialize the database
    let db = Database::new(&config.db_path).map_err(|e| {
        error!("Failed to open database: {}", e);
        std::io::Error::other(e)
    })?;
    db.create_schema().await.map_err(|e| {
        error!("Failed to create schema: {}", e);
        std::io::Error::other(e)
    })?;
    info!("Schema ready at {}", config.db_path);

    let state = web::Data::new(AppState::new(classifier, Arc::new(db)));

    info!("listening on http://{}", &config.bind);
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(api::configure)
    })
    .bind(&config.bind)?
    .run()
    .await
}
