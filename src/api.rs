use crate::classifier::Classifier;
use crate::db::ReviewStore;
use crate::error::{Result, ServiceError};
use crate::models::review::{Review, Sentiment};
use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

/// Shared state handed to every request handler.
pub struct AppState {
    pub classifier: Classifier,
    pub store: Arc<dyn ReviewStore>,
}

impl AppState {
    pub fn new(classifier: Classifier, store: Arc<dyn ReviewStore>) -> Self {
        Self { classifier, store }
    }

    /// Classify `text` and persist it as a new review.
    pub async fn submit(&self, text: &str) -> Result<Review> {
        let sentiment = self.classifier.classify(text);
        self.store.append(text, sentiment, Utc::now()).await
    }

    pub async fn list(&self, filter: Option<Sentiment>) -> Result<Vec<Review>> {
        self.store.scan(filter).await
    }
}

#[derive(Deserialize, Debug)]
pub struct ReviewRequest {
    pub text: String,
}

#[derive(Deserialize, Debug)]
pub struct ListQuery {
    pub sentiment: Option<String>,
}

impl ListQuery {
    /// The requested label; an empty value means no filter.
    pub fn filter(&self) -> Result<Option<Sentiment>> {
        self.sentiment
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<Sentiment>())
            .transpose()
            .map_err(|e| ServiceError::Validation(e.to_string()))
    }
}

/// Register the review routes and the extractor configs that turn malformed
/// input into validation errors.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        ServiceError::Validation(err.to_string()).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        ServiceError::Validation(err.to_string()).into()
    }))
    .service(
        web::resource("/reviews")
            .route(web::post().to(create_review))
            .route(web::get().to(list_reviews)),
    );
}

// POST /reviews
pub async fn create_review(
    state: web::Data<AppState>,
    request: web::Json<ReviewRequest>,
) -> Result<HttpResponse> {
    match state.submit(&request.text).await {
        Ok(review) => {
            info!("[API] Stored review {} as {}", review.id, review.sentiment);
            Ok(HttpResponse::Ok().json(review))
        }
        Err(e) => {
            error!("[API] Failed to store review: {}", e);
            Err(e)
        }
    }
}

// GET /reviews?sentiment=...
pub async fn list_reviews(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse> {
    let filter = query.filter()?;
    match state.list(filter).await {
        Ok(reviews) => {
            info!("[API] Returning {} reviews", reviews.len());
            Ok(HttpResponse::Ok().json(reviews))
        }
        Err(e) => {
            error!("[API] Failed to fetch reviews: {}", e);
            Err(e)
        }
    }
}
