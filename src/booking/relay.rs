//! The wire payload and HTTP delivery for booking requests.

use async_trait::async_trait;
use reqwest::{header, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::form::BookingRequest;
use super::phase::{SubmissionOutcome, FAILURE_MESSAGE, NETWORK_MESSAGE};

/// Placeholder value some form-relay templates ship with. Treated the same
/// as an empty endpoint.
pub const ENDPOINT_PLACEHOLDER: &str = "YOUR_FORMSPREE_ENDPOINT";

/// The form relay URL from the config, which may be unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelayEndpoint(String);

impl RelayEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn is_configured(&self) -> bool {
        !self.0.is_empty() && self.0 != ENDPOINT_PLACEHOLDER
    }

    pub fn url(&self) -> &str {
        &self.0
    }
}

/// The JSON body posted to the relay. Field names double as the labels
/// shown in the relayed email, so they stay human-readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingPayload {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "_replyto")]
    pub replyto: String,
    #[serde(rename = "Phone Number (E.164)")]
    pub phone: String,
    #[serde(rename = "Check-In Date")]
    pub check_in: String,
    #[serde(rename = "Check-Out Date")]
    pub check_out: String,
    #[serde(rename = "Number of Guests")]
    pub guests: u8,
    #[serde(rename = "Room Preference")]
    pub room_preference: String,
    #[serde(rename = "Policy Agreed")]
    pub policy_agreed: String,
}

impl From<&BookingRequest> for BookingPayload {
    fn from(request: &BookingRequest) -> Self {
        Self {
            name: request.name.clone(),
            replyto: request.email.clone(),
            phone: request.phone.clone(),
            check_in: request.check_in.clone(),
            check_out: request.check_out.clone(),
            guests: request.guests,
            room_preference: request.room_type.to_string(),
            policy_agreed: if request.agree_policy { "Yes" } else { "No" }.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for RelayError {
    fn from(e: reqwest::Error) -> Self {
        RelayError::Transport(e.to_string())
    }
}

/// Delivery of a payload to the relay. The app uses [`HttpRelay`]; tests
/// substitute their own implementations.
#[async_trait]
pub trait BookingRelay: Send + Sync {
    async fn deliver(
        &self,
        endpoint: &RelayEndpoint,
        payload: &BookingPayload,
    ) -> Result<StatusCode, RelayError>;
}

/// Posts the payload as JSON over HTTPS.
pub struct HttpRelay {
    client: reqwest::Client,
}

impl HttpRelay {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpRelay {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingRelay for HttpRelay {
    async fn deliver(
        &self,
        endpoint: &RelayEndpoint,
        payload: &BookingPayload,
    ) -> Result<StatusCode, RelayError> {
        let response = self
            .client
            .post(endpoint.url())
            .header(header::ACCEPT, "application/json")
            .json(payload)
            .send()
            .await?;
        Ok(response.status())
    }
}

/// Map a delivery result to the outcome shown to the guest. Any 2xx status
/// is a success; other statuses and transport failures each carry their
/// own message.
pub fn outcome_for(result: Result<StatusCode, RelayError>) -> SubmissionOutcome {
    match result {
        Ok(status) if status.is_success() => {
            tracing::info!("booking request delivered");
            SubmissionOutcome::Success
        }
        Ok(status) => {
            tracing::warn!(%status, "relay refused booking request");
            SubmissionOutcome::Error(FAILURE_MESSAGE.to_string())
        }
        Err(e) => {
            tracing::error!(error = %e, "booking request delivery failed");
            SubmissionOutcome::Error(NETWORK_MESSAGE.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::booking::form::RoomType;

    use super::*;

    fn request() -> BookingRequest {
        BookingRequest {
            name: "Asif Bhat".into(),
            email: "asif@example.com".into(),
            phone: "+919876543210".into(),
            check_in: "2026-09-10".into(),
            check_out: "2026-09-12".into(),
            guests: 2,
            room_type: RoomType::Family,
            agree_policy: true,
        }
    }

    #[test]
    fn test_endpoint_configuration() {
        assert!(!RelayEndpoint::new("").is_configured());
        assert!(!RelayEndpoint::new(ENDPOINT_PLACEHOLDER).is_configured());
        assert!(RelayEndpoint::new("https://formspree.io/f/abc").is_configured());
    }

    #[test]
    fn test_payload_field_labels() {
        let payload = BookingPayload::from(&request());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["Name"], "Asif Bhat");
        assert_eq!(json["_replyto"], "asif@example.com");
        assert_eq!(json["Phone Number (E.164)"], "+919876543210");
        assert_eq!(json["Check-In Date"], "2026-09-10");
        assert_eq!(json["Check-Out Date"], "2026-09-12");
        assert_eq!(json["Number of Guests"], 2);
        assert_eq!(json["Room Preference"], "Family Room");
        assert_eq!(json["Policy Agreed"], "Yes");
    }

    #[test]
    fn test_payload_policy_not_agreed() {
        let mut request = request();
        request.agree_policy = false;
        let payload = BookingPayload::from(&request);
        assert_eq!(payload.policy_agreed, "No");
    }

    #[test]
    fn test_outcome_for_success_statuses() {
        assert_eq!(
            outcome_for(Ok(StatusCode::OK)),
            SubmissionOutcome::Success
        );
        assert_eq!(
            outcome_for(Ok(StatusCode::CREATED)),
            SubmissionOutcome::Success
        );
    }

    #[test]
    fn test_outcome_for_http_failure() {
        assert_eq!(
            outcome_for(Ok(StatusCode::INTERNAL_SERVER_ERROR)),
            SubmissionOutcome::Error(FAILURE_MESSAGE.to_string())
        );
        assert_eq!(
            outcome_for(Ok(StatusCode::UNPROCESSABLE_ENTITY)),
            SubmissionOutcome::Error(FAILURE_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_outcome_for_transport_failure() {
        assert_eq!(
            outcome_for(Err(RelayError::Transport("connection refused".into()))),
            SubmissionOutcome::Error(NETWORK_MESSAGE.to_string())
        );
    }
}
