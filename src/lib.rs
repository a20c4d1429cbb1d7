pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod payment;
pub mod rate_limit;
pub mod routes;
pub mod state;
pub mod submission;
pub mod views;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::payment::{DeferredPaymentGateway, PaymentGateway};
use crate::rate_limit::SubmissionRateLimiter;
use crate::state::{AppState, SharedState};
use crate::submission::{LogSubmissionPort, SubmissionError, SubmissionPort, WebhookSubmissionPort};

/// Wire the catalog and the configured ports into shared state.
pub fn build_state(catalog: Catalog, config: Config) -> Result<SharedState, SubmissionError> {
    let submissions: Arc<dyn SubmissionPort> = match &config.submission_webhook_url {
        Some(url) => Arc::new(WebhookSubmissionPort::new(url.clone())?),
        None => Arc::new(LogSubmissionPort),
    };
    tracing::info!("Listing submissions go to the {} port", submissions.name());

    Ok(Arc::new(AppState {
        catalog,
        submissions,
        payments: Arc::new(DeferredPaymentGateway) as Arc<dyn PaymentGateway>,
        submission_limiter: SubmissionRateLimiter::new(
            config.submission_rate_limit,
            config.submission_rate_window_secs,
        ),
        config,
    }))
}

pub fn build_app(catalog: Catalog, config: Config) -> Result<(Router, SharedState), SubmissionError> {
    let state = build_state(catalog, config)?;
    Ok((router(state.clone()), state))
}

pub fn router(state: SharedState) -> Router {
    let max_body_size = state.config.max_body_size;

    Router::new()
        .merge(routes::api_routes())
        .merge(views::view_routes())
        .nest_service("/static", ServeDir::new("static"))
        .route("/health", axum::routing::get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(max_body_size))
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                )),
        )
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
