//! Ties the form data, validation and submission phase together.

use chrono::NaiveDate;

use super::form::{validate, BookingRequest, ValidationState};
use super::phase::{
    BookingPhase, SubmissionOutcome, NOT_CONFIGURED_MESSAGE, VALIDATION_MESSAGE,
};
use super::relay::{BookingPayload, RelayEndpoint};

/// What a submission attempt decided. Only `Dispatch` requires the caller
/// to actually deliver anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// A request is already in flight; nothing to do.
    InFlight,
    /// Local validation failed; the fields are now flagged.
    Rejected,
    /// No usable relay endpoint is configured.
    NotConfigured,
    /// The request is valid; deliver this payload.
    Dispatch(BookingPayload),
}

/// The booking form's model: the request being edited, the latest
/// validation flags and the submission phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingWorkflow {
    pub request: BookingRequest,
    pub validation: ValidationState,
    pub phase: BookingPhase,
}

impl BookingWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called whenever a field changes: any earlier result message is
    /// dismissed and the form goes back to plain editing.
    pub fn touch(&mut self) {
        if matches!(self.phase, BookingPhase::Submitted(_)) {
            self.phase = BookingPhase::Editing;
        }
    }

    pub fn validate(&mut self, today: NaiveDate) -> bool {
        self.validation = validate(&self.request, today);
        self.validation.all_valid() && self.request.agree_policy
    }

    /// Attempt a submission. Validation failures and a missing endpoint
    /// settle the phase immediately; a valid request flips the phase to
    /// `Submitting` and hands back the payload to deliver.
    pub fn begin_submit(&mut self, today: NaiveDate, endpoint: &RelayEndpoint) -> SubmitDecision {
        if self.phase.is_submitting() {
            return SubmitDecision::InFlight;
        }

        if !self.validate(today) {
            self.phase =
                BookingPhase::Submitted(SubmissionOutcome::Error(VALIDATION_MESSAGE.to_string()));
            return SubmitDecision::Rejected;
        }

        if !endpoint.is_configured() {
            self.phase = BookingPhase::Submitted(SubmissionOutcome::Error(
                NOT_CONFIGURED_MESSAGE.to_string(),
            ));
            return SubmitDecision::NotConfigured;
        }

        self.phase = BookingPhase::Submitting;
        SubmitDecision::Dispatch(BookingPayload::from(&self.request))
    }

    /// Record the outcome of a dispatched submission.
    pub fn complete(&mut self, outcome: SubmissionOutcome) {
        self.phase = BookingPhase::Submitted(outcome);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::booking::form::{RoomType, DATE_FORMAT};
    use crate::booking::phase::{FAILURE_MESSAGE, SUCCESS_MESSAGE};

    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    fn filled_workflow() -> BookingWorkflow {
        BookingWorkflow {
            request: BookingRequest {
                name: "Asif Bhat".into(),
                email: "asif@example.com".into(),
                phone: "+919876543210".into(),
                check_in: "2026-09-10".into(),
                check_out: "2026-09-12".into(),
                guests: 2,
                room_type: RoomType::Double,
                agree_policy: true,
            },
            ..Default::default()
        }
    }

    fn endpoint() -> RelayEndpoint {
        RelayEndpoint::new("https://formspree.io/f/abc")
    }

    #[test]
    fn test_valid_request_dispatches() {
        let mut workflow = filled_workflow();
        let decision = workflow.begin_submit(day("2026-09-01"), &endpoint());
        match decision {
            SubmitDecision::Dispatch(payload) => {
                assert_eq!(payload.name, "Asif Bhat");
            }
            other => panic!("expected dispatch, got {other:?}"),
        }
        assert!(workflow.phase.is_submitting());
    }

    #[test]
    fn test_invalid_request_is_rejected_with_flags() {
        let mut workflow = filled_workflow();
        workflow.request.email = "nope".into();
        let decision = workflow.begin_submit(day("2026-09-01"), &endpoint());
        assert_eq!(decision, SubmitDecision::Rejected);
        assert!(!workflow.validation.email);
        assert_eq!(
            workflow.phase.message(),
            Some("Please correct the errors in the form and agree to the policies.")
        );
    }

    #[test]
    fn test_policy_must_be_agreed() {
        let mut workflow = filled_workflow();
        workflow.request.agree_policy = false;
        let decision = workflow.begin_submit(day("2026-09-01"), &endpoint());
        assert_eq!(decision, SubmitDecision::Rejected);
        // The fields themselves are fine; only the policy box blocks it.
        assert!(workflow.validation.all_valid());
    }

    #[test]
    fn test_unconfigured_endpoint_blocks_valid_request() {
        let mut workflow = filled_workflow();
        let decision = workflow.begin_submit(day("2026-09-01"), &RelayEndpoint::new(""));
        assert_eq!(decision, SubmitDecision::NotConfigured);
        assert!(!workflow.phase.is_submitting());
    }

    #[test]
    fn test_submission_in_flight_refuses_resubmit() {
        let mut workflow = filled_workflow();
        workflow.begin_submit(day("2026-09-01"), &endpoint());
        let decision = workflow.begin_submit(day("2026-09-01"), &endpoint());
        assert_eq!(decision, SubmitDecision::InFlight);
    }

    #[test]
    fn test_complete_records_outcome() {
        let mut workflow = filled_workflow();
        workflow.begin_submit(day("2026-09-01"), &endpoint());
        workflow.complete(SubmissionOutcome::Success);
        assert_eq!(workflow.phase.message(), Some(SUCCESS_MESSAGE));
    }

    #[test]
    fn test_touch_dismisses_result_message() {
        let mut workflow = filled_workflow();
        workflow.complete(SubmissionOutcome::Error(FAILURE_MESSAGE.to_string()));
        workflow.touch();
        assert_eq!(workflow.phase, BookingPhase::Editing);
        assert_eq!(workflow.phase.message(), None);
    }

    #[test]
    fn test_touch_does_not_interrupt_submitting() {
        let mut workflow = filled_workflow();
        workflow.begin_submit(day("2026-09-01"), &endpoint());
        workflow.touch();
        assert!(workflow.phase.is_submitting());
    }

    #[test]
    fn test_rejection_then_fix_then_dispatch() {
        let mut workflow = filled_workflow();
        workflow.request.name = "Al".into();
        assert_eq!(
            workflow.begin_submit(day("2026-09-01"), &endpoint()),
            SubmitDecision::Rejected
        );
        workflow.request.name = "Alia".into();
        workflow.touch();
        let decision = workflow.begin_submit(day("2026-09-01"), &endpoint());
        assert!(matches!(decision, SubmitDecision::Dispatch(_)));
    }
}
