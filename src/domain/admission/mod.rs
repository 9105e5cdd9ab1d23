//! Admission domain
//!
//! Validated inbound requests, the admission error taxonomy and the result
//! envelope reported back to callers.

mod outcome;
mod request;

pub use outcome::{
    AdmissionError, AdmissionResult, AdmittedUser, RejectionKind, INTERNAL_SERVER_ERROR,
    USER_CREATED, USER_DUPLICATED,
};
pub use request::{AdmissionRequest, SubmissionError, UserSubmission};
