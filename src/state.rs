use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::payment::PaymentGateway;
use crate::rate_limit::SubmissionRateLimiter;
use crate::submission::SubmissionPort;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub catalog: Catalog,
    pub config: Config,
    pub submissions: Arc<dyn SubmissionPort>,
    pub payments: Arc<dyn PaymentGateway>,
    pub submission_limiter: SubmissionRateLimiter,
}
