use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::draft::ListingDraft;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub status: ReviewStatus,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    PendingReview,
}

#[derive(Debug)]
pub struct SubmissionError {
    pub message: String,
}

impl std::fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SubmissionError {}

impl From<String> for SubmissionError {
    fn from(s: String) -> Self {
        SubmissionError { message: s }
    }
}

impl From<&str> for SubmissionError {
    fn from(s: &str) -> Self {
        SubmissionError {
            message: s.to_string(),
        }
    }
}

/// Where completed listing drafts are handed off for review.
#[async_trait]
pub trait SubmissionPort: Send + Sync {
    fn name(&self) -> &str;
    async fn submit(&self, draft: &ListingDraft) -> Result<SubmissionReceipt, SubmissionError>;
}

fn pending_receipt() -> SubmissionReceipt {
    SubmissionReceipt {
        id: Uuid::now_v7(),
        status: ReviewStatus::PendingReview,
        received_at: Utc::now(),
    }
}

/// Records the draft in the log and acknowledges it. Nothing is stored.
pub struct LogSubmissionPort;

#[async_trait]
impl SubmissionPort for LogSubmissionPort {
    fn name(&self) -> &str {
        "log"
    }

    async fn submit(&self, draft: &ListingDraft) -> Result<SubmissionReceipt, SubmissionError> {
        let receipt = pending_receipt();
        tracing::info!(
            submission_id = %receipt.id,
            name = %draft.name,
            category = %draft.category,
            endpoint = %draft.endpoint,
            price = %draft.price,
            currency = %draft.currency,
            "Listing submitted for review"
        );
        Ok(receipt)
    }
}

/// Forwards drafts as JSON to a review service.
pub struct WebhookSubmissionPort {
    client: reqwest::Client,
    url: String,
}

impl WebhookSubmissionPort {
    pub fn new(url: impl Into<String>) -> Result<Self, SubmissionError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| SubmissionError::from(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl SubmissionPort for WebhookSubmissionPort {
    fn name(&self) -> &str {
        "webhook"
    }

    async fn submit(&self, draft: &ListingDraft) -> Result<SubmissionReceipt, SubmissionError> {
        let receipt = pending_receipt();

        let resp = self
            .client
            .post(&self.url)
            .json(&serde_json::json!({
                "submission_id": receipt.id,
                "received_at": receipt.received_at,
                "draft": draft,
            }))
            .send()
            .await
            .map_err(|e| SubmissionError::from(format!("Review service request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SubmissionError::from(format!(
                "Review service rejected submission with status {}",
                status.as_u16()
            )));
        }

        tracing::info!(submission_id = %receipt.id, url = %self.url, "Listing forwarded for review");
        Ok(receipt)
    }
}
