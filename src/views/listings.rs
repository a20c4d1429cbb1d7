use askama::Template;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::catalog::metrics::format_count;
use crate::error::AppError;
use crate::models::Listing;
use crate::payment::x402;
use crate::payment::{PaymentError, PaymentSession};
use crate::state::SharedState;

use super::display_price;

#[derive(Template)]
#[template(path = "listing/detail.html")]
struct DetailTemplate {
    listing: Listing,
    rating: String,
    calls: String,
    price: String,
    request_format: String,
    response_format: String,
    payment: Option<PaymentSession>,
    payment_error: Option<String>,
}

#[derive(Template)]
#[template(path = "listing/not_found.html")]
struct NotFoundTemplate {
    listing_id: String,
}

impl DetailTemplate {
    fn new(listing: &Listing) -> Self {
        Self {
            listing: listing.clone(),
            rating: listing.rating.to_string(),
            calls: format_count(listing.total_calls),
            price: display_price(listing),
            request_format: x402::request_format(listing),
            response_format: x402::response_format(),
            payment: None,
            payment_error: None,
        }
    }
}

fn not_found(listing_id: String) -> Result<Response, AppError> {
    let template = NotFoundTemplate { listing_id };
    Ok((StatusCode::NOT_FOUND, Html(template.render()?)).into_response())
}

pub async fn show(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let Some(listing) = state.catalog.find(&id) else {
        return not_found(id);
    };

    let template = DetailTemplate::new(listing);
    Ok(Html(template.render()?).into_response())
}

/// "Pay & Call API": open a payment session and show the payment panel.
pub async fn pay(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let Some(listing) = state.catalog.find(&id) else {
        return not_found(id);
    };

    let mut template = DetailTemplate::new(listing);
    let status = match state.payments.initiate(listing).await {
        Ok(session) => {
            template.payment = Some(session);
            StatusCode::OK
        }
        Err(err @ PaymentError::ListingInactive(_)) => {
            tracing::debug!(listing_id = %id, "Payment refused: {err}");
            template.payment_error = Some(err.to_string());
            StatusCode::CONFLICT
        }
    };

    Ok((status, Html(template.render()?)).into_response())
}
