pub mod x402;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Listing;

/// A pay-per-call session opened from a listing's "Pay & Call API" action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentSession {
    pub listing_id: String,
    pub amount: f64,
    pub currency: String,
    pub state: PaymentState,
    pub opened_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentState {
    /// Waiting for the payer's wallet to produce a payment proof.
    AwaitingWallet,
}

#[derive(Debug)]
pub enum PaymentError {
    ListingInactive(String),
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentError::ListingInactive(id) => write!(f, "Listing {id} is not accepting calls"),
        }
    }
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn initiate(&self, listing: &Listing) -> Result<PaymentSession, PaymentError>;
}

/// Opens sessions without settling anything; wallet settlement plugs in here.
pub struct DeferredPaymentGateway;

#[async_trait]
impl PaymentGateway for DeferredPaymentGateway {
    async fn initiate(&self, listing: &Listing) -> Result<PaymentSession, PaymentError> {
        if !listing.is_active() {
            return Err(PaymentError::ListingInactive(listing.id.clone()));
        }

        tracing::info!(
            listing_id = %listing.id,
            amount = listing.price,
            currency = %listing.currency,
            "Initiating x402 payment flow"
        );

        Ok(PaymentSession {
            listing_id: listing.id.clone(),
            amount: listing.price,
            currency: listing.currency.clone(),
            state: PaymentState::AwaitingWallet,
            opened_at: Utc::now(),
        })
    }
}
