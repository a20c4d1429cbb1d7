pub mod browse;
pub mod dashboard;
pub mod list_api;
pub mod listings;

use axum::routing::get;
use axum::Router;

use crate::catalog::metrics::format_count;
use crate::models::Listing;
use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(browse::index))
        .route("/api/{id}", get(listings::show))
        .route("/api/{id}/pay", axum::routing::post(listings::pay))
        .route("/dashboard", get(dashboard::index))
        .route("/list-api", get(list_api::form).post(list_api::submit))
}

/// A listing flattened to display strings for the browse grid.
pub(crate) struct ListingCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub rating: String,
    pub calls: String,
    pub price: String,
}

impl ListingCard {
    pub fn from_listing(listing: &Listing) -> Self {
        Self {
            id: listing.id.clone(),
            name: listing.name.clone(),
            description: listing.description.clone(),
            category: listing.category.clone(),
            rating: listing.rating.to_string(),
            calls: format_count(listing.total_calls),
            price: display_price(listing),
        }
    }
}

/// `0.001 ETH`
pub(crate) fn display_price(listing: &Listing) -> String {
    format!("{} {}", listing.price, listing.currency)
}

/// An `<option>` in a form select.
pub(crate) struct SelectOption {
    pub value: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn build<S: AsRef<str>>(values: &[S], current: &str) -> Vec<SelectOption> {
        values
            .iter()
            .map(|v| SelectOption {
                value: v.as_ref().to_string(),
                selected: v.as_ref() == current,
            })
            .collect()
    }
}
