use std::net::SocketAddr;

use axum::extract::{ConnectInfo, State};
use axum::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::pipeline::{self, PipelineResult};
use crate::submission::{DraftState, ListingDraft};

pub async fn create(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(draft): Json<ListingDraft>,
) -> Result<Json<Value>, AppError> {
    match pipeline::run(&state, addr.ip(), &draft).await? {
        PipelineResult::Accepted(receipt) => Ok(Json(json!({
            "state": DraftState::Submitted,
            "receipt": receipt,
            "draft": draft,
        }))),
        PipelineResult::Incomplete(missing) => Err(AppError::BadRequest(format!(
            "Missing required fields: {}",
            missing.join(", ")
        ))),
    }
}
