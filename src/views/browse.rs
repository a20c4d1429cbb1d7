use askama::Template;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};
use serde::Deserialize;

use crate::catalog::{filter_by_category, CategoryTab, ALL_CATEGORIES};
use crate::error::AppError;
use crate::state::SharedState;

use super::ListingCard;

#[derive(Template)]
#[template(path = "browse/index.html")]
struct BrowseTemplate {
    tabs: Vec<TabLink>,
    selected: String,
    cards: Vec<ListingCard>,
}

struct TabLink {
    label: String,
    query: String,
    active: bool,
}

impl From<CategoryTab> for TabLink {
    fn from(tab: CategoryTab) -> Self {
        Self {
            query: form_urlencoded::byte_serialize(tab.label.as_bytes()).collect(),
            label: tab.label,
            active: tab.active,
        }
    }
}

#[derive(Deserialize)]
pub struct BrowseParams {
    pub category: Option<String>,
}

pub async fn index(
    State(state): State<SharedState>,
    Query(params): Query<BrowseParams>,
) -> Result<impl IntoResponse, AppError> {
    let selected = params
        .category
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| ALL_CATEGORIES.to_string());

    let catalog = &state.catalog;
    let cards = filter_by_category(catalog.list_all(), &selected)
        .into_iter()
        .map(ListingCard::from_listing)
        .collect();

    let tabs = CategoryTab::build(&catalog.list_categories(), &selected)
        .into_iter()
        .map(TabLink::from)
        .collect();

    let template = BrowseTemplate {
        tabs,
        selected,
        cards,
    };
    Ok(Html(template.render()?))
}
