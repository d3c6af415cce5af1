//! Submission state machine and its user-facing messages.

use serde::{Deserialize, Serialize};

pub const VALIDATION_MESSAGE: &str =
    "Please correct the errors in the form and agree to the policies.";
pub const NOT_CONFIGURED_MESSAGE: &str =
    "No relay endpoint is configured. Set relay_endpoint in the config file to submit requests.";
pub const SUCCESS_MESSAGE: &str =
    "Request successfully sent! We will confirm your booking details via email shortly.";
pub const FAILURE_MESSAGE: &str = "Form submission failed. Please try again later.";
pub const NETWORK_MESSAGE: &str =
    "A network error occurred. Please check your connection or contact us directly.";

/// Terminal result of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum SubmissionOutcome {
    Success,
    Error(String),
}

impl SubmissionOutcome {
    pub fn message(&self) -> &str {
        match self {
            SubmissionOutcome::Success => SUCCESS_MESSAGE,
            SubmissionOutcome::Error(message) => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success)
    }
}

/// Where the form currently stands. `Submitting` means a request is in
/// flight and further submissions are refused; editing any field leaves
/// `Submitted` and returns to `Editing`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BookingPhase {
    #[default]
    Editing,
    Submitting,
    Submitted(SubmissionOutcome),
}

impl BookingPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, BookingPhase::Submitting)
    }

    /// Message to show under the form, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            BookingPhase::Submitted(outcome) => Some(outcome.message()),
            _ => None,
        }
    }
}
