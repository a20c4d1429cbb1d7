use std::net::SocketAddr;

use askama::Template;
use axum::extract::{ConnectInfo, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;

use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::pipeline::{self, PipelineResult};
use crate::submission::{ListingDraft, CURRENCIES};

use super::SelectOption;

#[derive(Template)]
#[template(path = "list_api/form.html")]
struct ListApiTemplate {
    draft: ListingDraft,
    categories: Vec<SelectOption>,
    currencies: Vec<SelectOption>,
    missing: Vec<&'static str>,
    submitted: bool,
    error: Option<String>,
}

impl ListApiTemplate {
    fn new(state: &SharedState, draft: ListingDraft) -> Self {
        Self {
            categories: SelectOption::build(state.catalog.domain_categories(), &draft.category),
            currencies: SelectOption::build(&CURRENCIES[..], &draft.currency),
            draft,
            missing: Vec::new(),
            submitted: false,
            error: None,
        }
    }
}

pub async fn form(State(state): State<SharedState>) -> Result<impl IntoResponse, AppError> {
    let template = ListApiTemplate::new(&state, ListingDraft::default());
    Ok(Html(template.render()?))
}

pub async fn submit(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Form(draft): Form<ListingDraft>,
) -> Result<Response, AppError> {
    let mut template = ListApiTemplate::new(&state, draft.clone());

    let status = match pipeline::run(&state, addr.ip(), &draft).await {
        Ok(PipelineResult::Accepted(_)) => {
            template.submitted = true;
            StatusCode::OK
        }
        Ok(PipelineResult::Incomplete(missing)) => {
            template.missing = missing;
            StatusCode::UNPROCESSABLE_ENTITY
        }
        Err(AppError::Upstream(msg)) => {
            template.error = Some(msg);
            StatusCode::BAD_GATEWAY
        }
        Err(err) => return Err(err),
    };

    Ok((status, Html(template.render()?)).into_response())
}
