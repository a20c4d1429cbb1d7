use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::catalog::{filter_by_category, ALL_CATEGORIES};
use crate::error::AppError;
use crate::models::Listing;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
}

pub async fn list(
    State(state): State<SharedState>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Listing>> {
    let selected = params
        .category
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(ALL_CATEGORIES);
    let listings = filter_by_category(state.catalog.list_all(), selected)
        .into_iter()
        .cloned()
        .collect();
    Json(listings)
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Listing>, AppError> {
    let listing = state
        .catalog
        .find(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound("API not found".to_string()))?;
    Ok(Json(listing))
}

pub async fn categories(State(state): State<SharedState>) -> Json<Vec<String>> {
    Json(
        state
            .catalog
            .list_categories()
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}
