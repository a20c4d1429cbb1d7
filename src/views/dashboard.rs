use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::catalog::metrics::format_count;
use crate::catalog::DashboardSummary;
use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::CURRENCIES;

use super::display_price;

#[derive(Template)]
#[template(path = "dashboard/index.html")]
struct DashboardTemplate {
    total_earnings: String,
    total_calls: String,
    active_listings: usize,
    rows: Vec<ListingRow>,
}

struct ListingRow {
    id: String,
    name: String,
    description: String,
    category: String,
    status: String,
    calls: String,
    price: String,
    earned: String,
}

pub async fn index(State(state): State<SharedState>) -> Result<impl IntoResponse, AppError> {
    let owned = state.catalog.by_providers(&state.config.dashboard_providers);
    let summary = DashboardSummary::from_listings(&owned);

    let rows = owned
        .iter()
        .map(|l| ListingRow {
            id: l.id.clone(),
            name: l.name.clone(),
            description: l.description.clone(),
            category: l.category.clone(),
            status: l.status.to_string(),
            calls: format_count(l.total_calls),
            price: display_price(l),
            earned: format!("{:.4} {}", l.earned(), l.currency),
        })
        .collect();

    let template = DashboardTemplate {
        total_earnings: earnings_label(&summary),
        total_calls: format_count(summary.total_calls),
        active_listings: summary.active_listings,
        rows,
    };
    Ok(Html(template.render()?))
}

/// `29.5950 ETH`, or one amount per currency joined with `+`.
fn earnings_label(summary: &DashboardSummary) -> String {
    if summary.earnings_by_currency.is_empty() {
        return format!("{:.4} {}", 0.0, CURRENCIES[0]);
    }
    summary
        .earnings_by_currency
        .iter()
        .map(|t| format!("{:.4} {}", t.amount, t.currency))
        .collect::<Vec<_>>()
        .join(" + ")
}
