//! Wire shapes for calling a listed API under the x402 pay-per-call scheme.
//!
//! A caller attaches proof of payment to every request in the `X-PAYMENT`
//! header; the provider answers with a [`CallEnvelope`]. Settling the payment
//! itself is not handled here.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::models::Listing;

pub const PAYMENT_HEADER: &str = "X-PAYMENT";

/// Opaque payment proof produced by the payer's wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentProof(Vec<u8>);

impl PaymentProof {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn header_value(&self) -> String {
        STANDARD.encode(&self.0)
    }

    pub fn from_header_value(value: &str) -> Result<Self, base64::DecodeError> {
        STANDARD.decode(value.trim()).map(Self)
    }
}

/// Build the paid call to a listing's endpoint without sending it.
pub fn build_call_request(
    client: &reqwest::Client,
    listing: &Listing,
    proof: &PaymentProof,
) -> Result<reqwest::Request, reqwest::Error> {
    client
        .get(&listing.endpoint)
        .header(PAYMENT_HEADER, proof.header_value())
        .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .build()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

/// Response body returned by a paid API call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CallEnvelope {
    pub status: EnvelopeStatus,
    pub data: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

/// Request format shown on a listing's documentation tab.
pub fn request_format(listing: &Listing) -> String {
    format!(
        "GET {}\nHeaders:\n  {PAYMENT_HEADER}: <base64-encoded-payment-proof>\n  Content-Type: application/json",
        listing.endpoint
    )
}

/// Response format shown on a listing's documentation tab.
pub fn response_format() -> String {
    "{\n  \"status\": \"success\",\n  \"data\": { ... },\n  \"timestamp\": \"2024-01-01T00:00:00Z\"\n}"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn call_request_carries_payment_proof() {
        let catalog = Catalog::seed();
        let listing = catalog.find("1").unwrap();
        let proof = PaymentProof::new(b"signed-proof".to_vec());

        let req = build_call_request(&reqwest::Client::new(), listing, &proof).unwrap();
        assert_eq!(req.method(), reqwest::Method::GET);
        assert_eq!(req.url().as_str(), "https://api.weather.com/v1/current");
        assert_eq!(
            req.headers().get(PAYMENT_HEADER).unwrap(),
            "c2lnbmVkLXByb29m"
        );
        assert_eq!(req.headers().get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn proof_header_value_decodes_back() {
        let proof = PaymentProof::new(vec![0u8, 1, 2, 250]);
        let decoded = PaymentProof::from_header_value(&proof.header_value()).unwrap();
        assert_eq!(decoded, proof);
        assert!(PaymentProof::from_header_value("not base64!").is_err());
    }

    #[test]
    fn envelope_parses_provider_response() {
        let body = r#"{"status":"success","data":{"temp":21},"timestamp":"2024-01-01T00:00:00Z"}"#;
        let envelope: CallEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.status, EnvelopeStatus::Success);
        assert_eq!(envelope.data["temp"], 21);
        assert_eq!(envelope.timestamp.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn documented_request_names_endpoint_and_header() {
        let catalog = Catalog::seed();
        let doc = request_format(catalog.find("2").unwrap());
        assert!(doc.starts_with("GET https://api.crypto.com/v1/prices"));
        assert!(doc.contains("X-PAYMENT: <base64-encoded-payment-proof>"));
        let envelope: serde_json::Value =
            serde_json::from_str(&response_format().replace("{ ... }", "{}")).unwrap();
        assert_eq!(envelope["status"], "success");
    }
}
