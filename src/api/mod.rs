//! JSON HTTP API over the calculators
//!
//! Parses and validates request bodies, calls exactly one calculator per
//! request and serializes the result. Any client error is a 400 with an
//! `{"error": "..."}` body.

mod error;
mod handlers;
pub mod requests;

pub use error::ApiError;

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use log::info;

use crate::reference::ReferenceData;

/// Shared, read-only state for every request
#[derive(Clone)]
pub struct AppState {
    pub reference: Arc<ReferenceData>,
    /// Source of "today" for the holiday endpoint
    pub today: fn() -> NaiveDate,
}

impl AppState {
    pub fn new(reference: ReferenceData) -> Self {
        Self {
            reference: Arc::new(reference),
            today: local_today,
        }
    }

    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let response = next.run(req).await;

    info!(
        "{} {} -> {} in {:?}",
        method,
        uri,
        response.status().as_u16(),
        start.elapsed()
    );
    response
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/emi", post(handlers::emi))
        .route("/api/loan-compare", post(handlers::loan_compare))
        .route("/api/amortization", post(handlers::amortization))
        .route("/api/gst", post(handlers::gst))
        .route("/api/fd", post(handlers::fd))
        .route("/api/rd", post(handlers::rd))
        .route("/api/currency", post(handlers::currency))
        .route("/api/bank-holidays", get(handlers::bank_holidays))
        .route("/api/credit-score", post(handlers::credit_score))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}
