//! The booking request workflow.
//!
//! This is the only multi-step state machine in the app: a guest fills in a
//! request, it is validated locally, and a valid request is posted as JSON
//! to a configured form relay endpoint. The pieces are kept free of any
//! terminal concerns so they can be tested directly:
//!
//! - `form`: the request data, field normalization and validation rules
//! - `phase`: the submission state machine and its user-facing messages
//! - `relay`: the wire payload and the HTTP delivery trait
//! - `workflow`: ties the three together for the form component

pub mod form;
pub mod phase;
pub mod relay;
pub mod workflow;

pub use form::{normalize_phone, today, validate, BookingRequest, RoomType, ValidationState};
pub use phase::{BookingPhase, SubmissionOutcome};
pub use relay::{outcome_for, BookingPayload, BookingRelay, HttpRelay, RelayEndpoint, RelayError};
pub use workflow::{BookingWorkflow, SubmitDecision};
