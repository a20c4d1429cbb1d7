use std::net::IpAddr;

use crate::error::AppError;
use crate::state::SharedState;

use super::draft::ListingDraft;
use super::port::SubmissionReceipt;

pub enum PipelineResult {
    /// Required fields were blank; nothing was handed off.
    Incomplete(Vec<&'static str>),
    Accepted(SubmissionReceipt),
}

/// Rate-limit, check required fields, then hand the draft to the submission port.
/// The draft is left untouched for the caller to re-render.
pub async fn run(
    state: &SharedState,
    peer_ip: IpAddr,
    draft: &ListingDraft,
) -> Result<PipelineResult, AppError> {
    state
        .submission_limiter
        .check(peer_ip)
        .map_err(AppError::RateLimited)?;

    let missing = draft.missing_required();
    if !missing.is_empty() {
        tracing::debug!(state = ?draft.state(), "Listing draft missing required fields: {:?}", missing);
        return Ok(PipelineResult::Incomplete(missing));
    }

    let receipt = state.submissions.submit(draft).await?;
    Ok(PipelineResult::Accepted(receipt))
}
