pub mod draft;
pub mod pipeline;
pub mod port;

pub use draft::{DraftState, ListingDraft, CURRENCIES};
pub use port::{
    LogSubmissionPort, ReviewStatus, SubmissionError, SubmissionPort, SubmissionReceipt,
    WebhookSubmissionPort,
};
