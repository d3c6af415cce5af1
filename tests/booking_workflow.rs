//! End-to-end exercises of the booking workflow against stand-in relays.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use reqwest::StatusCode;

use orchardstay::booking::{
    outcome_for, BookingPayload, BookingPhase, BookingRelay, BookingRequest, BookingWorkflow,
    RelayEndpoint, RelayError, RoomType, SubmissionOutcome, SubmitDecision,
};

/// Relay answering every delivery with a fixed status, remembering what it
/// was asked to send.
struct FixedStatusRelay {
    status: StatusCode,
    deliveries: AtomicUsize,
    last_payload: Mutex<Option<BookingPayload>>,
}

impl FixedStatusRelay {
    fn new(status: StatusCode) -> Self {
        Self {
            status,
            deliveries: AtomicUsize::new(0),
            last_payload: Mutex::new(None),
        }
    }

    fn delivery_count(&self) -> usize {
        self.deliveries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BookingRelay for FixedStatusRelay {
    async fn deliver(
        &self,
        _endpoint: &RelayEndpoint,
        payload: &BookingPayload,
    ) -> Result<StatusCode, RelayError> {
        self.deliveries.fetch_add(1, Ordering::SeqCst);
        *self.last_payload.lock().unwrap() = Some(payload.clone());
        Ok(self.status)
    }
}

/// Relay that never reaches the network.
struct UnreachableRelay;

#[async_trait]
impl BookingRelay for UnreachableRelay {
    async fn deliver(
        &self,
        _endpoint: &RelayEndpoint,
        _payload: &BookingPayload,
    ) -> Result<StatusCode, RelayError> {
        Err(RelayError::Transport("connection refused".into()))
    }
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn filled_workflow() -> BookingWorkflow {
    BookingWorkflow {
        request: BookingRequest {
            name: "Asif Bhat".into(),
            email: "asif@example.com".into(),
            phone: "+919876543210".into(),
            check_in: "2026-09-10".into(),
            check_out: "2026-09-12".into(),
            guests: 3,
            room_type: RoomType::Family,
            agree_policy: true,
        },
        ..Default::default()
    }
}

fn endpoint() -> RelayEndpoint {
    RelayEndpoint::new("https://formspree.io/f/abc")
}

async fn drive(
    workflow: &mut BookingWorkflow,
    relay: &dyn BookingRelay,
    endpoint: &RelayEndpoint,
    today: NaiveDate,
) -> Option<SubmissionOutcome> {
    match workflow.begin_submit(today, endpoint) {
        SubmitDecision::Dispatch(payload) => {
            let outcome = outcome_for(relay.deliver(endpoint, &payload).await);
            workflow.complete(outcome.clone());
            Some(outcome)
        }
        _ => None,
    }
}

#[tokio::test]
async fn accepted_submission_ends_in_success() {
    let relay = FixedStatusRelay::new(StatusCode::OK);
    let mut workflow = filled_workflow();

    let outcome = drive(&mut workflow, &relay, &endpoint(), day("2026-09-01")).await;

    assert_eq!(outcome, Some(SubmissionOutcome::Success));
    assert_eq!(relay.delivery_count(), 1);
    assert_eq!(
        workflow.phase.message(),
        Some("Request successfully sent! We will confirm your booking details via email shortly.")
    );

    let payload = relay.last_payload.lock().unwrap().clone().unwrap();
    assert_eq!(payload.room_preference, "Family Room");
    assert_eq!(payload.policy_agreed, "Yes");
    assert_eq!(payload.guests, 3);
}

#[tokio::test]
async fn refused_submission_can_be_retried() {
    let relay = FixedStatusRelay::new(StatusCode::INTERNAL_SERVER_ERROR);
    let mut workflow = filled_workflow();

    let outcome = drive(&mut workflow, &relay, &endpoint(), day("2026-09-01")).await;
    assert_eq!(
        outcome,
        Some(SubmissionOutcome::Error(
            "Form submission failed. Please try again later.".into()
        ))
    );

    // The guest edits something, dismissing the message, and tries again
    // against a healthy relay.
    workflow.touch();
    assert_eq!(workflow.phase, BookingPhase::Editing);

    let healthy = FixedStatusRelay::new(StatusCode::OK);
    let outcome = drive(&mut workflow, &healthy, &endpoint(), day("2026-09-01")).await;
    assert_eq!(outcome, Some(SubmissionOutcome::Success));
    assert_eq!(relay.delivery_count(), 1);
    assert_eq!(healthy.delivery_count(), 1);
}

#[tokio::test]
async fn transport_failure_reports_connectivity() {
    let mut workflow = filled_workflow();

    let outcome = drive(
        &mut workflow,
        &UnreachableRelay,
        &endpoint(),
        day("2026-09-01"),
    )
    .await;

    assert_eq!(
        outcome,
        Some(SubmissionOutcome::Error(
            "A network error occurred. Please check your connection or contact us directly.".into()
        ))
    );
}

#[tokio::test]
async fn invalid_request_never_reaches_the_relay() {
    let relay = FixedStatusRelay::new(StatusCode::OK);
    let mut workflow = filled_workflow();
    workflow.request.email = "not-an-email".into();

    let outcome = drive(&mut workflow, &relay, &endpoint(), day("2026-09-01")).await;

    assert_eq!(outcome, None);
    assert_eq!(relay.delivery_count(), 0);
    assert!(!workflow.validation.email);
}

#[tokio::test]
async fn unconfigured_endpoint_never_reaches_the_relay() {
    let relay = FixedStatusRelay::new(StatusCode::OK);
    let mut workflow = filled_workflow();
    let unconfigured = RelayEndpoint::new("YOUR_FORMSPREE_ENDPOINT");

    let outcome = drive(&mut workflow, &relay, &unconfigured, day("2026-09-01")).await;

    assert_eq!(outcome, None);
    assert_eq!(relay.delivery_count(), 0);
    assert!(workflow.phase.message().unwrap().contains("relay_endpoint"));
}
