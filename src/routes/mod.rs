pub mod dashboard;
pub mod listings;
pub mod submissions;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Catalog
        .route("/api/v1/listings", get(listings::list))
        .route("/api/v1/listings/{id}", get(listings::get))
        .route("/api/v1/categories", get(listings::categories))
        // Provider dashboard
        .route("/api/v1/dashboard", get(dashboard::summary))
        // Listing submissions
        .route("/api/v1/submissions", post(submissions::create))
}
