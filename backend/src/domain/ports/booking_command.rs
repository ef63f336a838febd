//! Driving port for booking mutations.
//!
//! This port records bookings and applies the check-in release transition.
//! Requests carry raw field values; the domain service validates them into
//! the [`Booking`] aggregate at the boundary.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Booking, BookingDraft, BookingId, BookingStatus, Error, StayDates};

/// Serializable booking representation for driving ports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    /// Ledger-assigned identifier.
    pub id: BookingId,
    /// Reference to the booked item.
    pub item_id: String,
    /// Identifier of the paying party.
    pub payer_address: String,
    /// Amount in the payment network's unit.
    pub price: f64,
    /// External transaction identifier, when payment has been observed.
    pub payment_reference: Option<String>,
    /// Current lifecycle state.
    pub status: BookingStatus,
    /// Stay window.
    pub stay_dates: StayDates,
    /// Number of guests.
    pub guest_count: u32,
    /// Name the booking was made under.
    pub guest_name: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingPayload {
    fn from(value: Booking) -> Self {
        Self {
            id: value.id(),
            item_id: value.item_id().to_string(),
            payer_address: value.payer_address().to_string(),
            price: value.price().value(),
            payment_reference: value.payment_reference().map(ToString::to_string),
            status: value.status(),
            stay_dates: value.stay_dates(),
            guest_count: value.guest_count(),
            guest_name: value.guest_name().to_owned(),
            created_at: value.created_at(),
        }
    }
}

/// Request to record a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    /// Reference to the booked item.
    pub item_id: String,
    /// Identifier of the paying party.
    pub payer_address: String,
    /// Amount in the payment network's unit.
    pub price: f64,
    /// External transaction identifier obtained by the caller, if any.
    pub payment_reference: Option<String>,
    /// Stay window.
    pub stay_dates: StayDates,
    /// Number of guests.
    pub guest_count: u32,
    /// Name the booking is made under.
    pub guest_name: String,
}

impl From<CreateBookingRequest> for BookingDraft {
    fn from(value: CreateBookingRequest) -> Self {
        Self {
            item_id: value.item_id,
            payer_address: value.payer_address,
            price: value.price,
            payment_reference: value.payment_reference,
            stay_dates: value.stay_dates,
            guest_count: value.guest_count,
            guest_name: value.guest_name,
        }
    }
}

/// Response from recording a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingResponse {
    /// The recorded booking.
    pub booking: BookingPayload,
}

/// Request to check in a booking, releasing held funds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    /// Identifier returned when the booking was recorded.
    pub booking_id: BookingId,
}

/// Response from a check-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInResponse {
    /// The booking in its terminal state.
    pub booking: BookingPayload,
}

/// Driving port for booking write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingCommand: Send + Sync {
    /// Records a booking and returns it with its ledger-assigned identifier.
    ///
    /// The recorded status is `ESCROW_LOCKED` when the request carries a
    /// payment reference and `PENDING` otherwise. Validation failures are
    /// returned as [`Error`] with the `invalid_request` code.
    async fn create_booking(
        &self,
        request: CreateBookingRequest,
    ) -> Result<CreateBookingResponse, Error>;

    /// Finalizes a booking after the simulated verification delay.
    ///
    /// Unknown identifiers yield `not_found`. Checking in an already
    /// released booking is an idempotent success returning the terminal
    /// record unchanged.
    async fn check_in(&self, request: CheckInRequest) -> Result<CheckInResponse, Error>;
}

/// Fixture command implementation for tests that do not need a ledger.
///
/// `create_booking` validates and echoes the booking without persisting it;
/// `check_in` always reports an unknown identifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureBookingCommand;

#[async_trait]
impl BookingCommand for FixtureBookingCommand {
    async fn create_booking(
        &self,
        request: CreateBookingRequest,
    ) -> Result<CreateBookingResponse, Error> {
        let booking = Booking::new(BookingDraft::from(request))
            .map_err(|err| Error::invalid_request(format!("invalid booking request: {err}")))?;
        Ok(CreateBookingResponse {
            booking: BookingPayload::from(booking),
        })
    }

    async fn check_in(&self, request: CheckInRequest) -> Result<CheckInResponse, Error> {
        Err(Error::not_found(format!(
            "booking {} not found",
            request.booking_id
        )))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn sample_request() -> CreateBookingRequest {
        CreateBookingRequest {
            item_id: "mum_001".into(),
            payer_address: "ADDR1".into(),
            price: 0.1,
            payment_reference: Some("TX123".into()),
            stay_dates: StayDates {
                check_in: "2026-03-01".parse().expect("valid date"),
                check_out: "2026-03-04".parse().expect("valid date"),
            },
            guest_count: 2,
            guest_name: "Alice".into(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_create_derives_escrow_locked(sample_request: CreateBookingRequest) {
        let command = FixtureBookingCommand;
        let response = command
            .create_booking(sample_request)
            .await
            .expect("fixture create succeeds");
        assert_eq!(response.booking.status, BookingStatus::EscrowLocked);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_create_rejects_invalid_price(mut sample_request: CreateBookingRequest) {
        sample_request.price = 0.0;
        let command = FixtureBookingCommand;
        let error = command
            .create_booking(sample_request)
            .await
            .expect_err("invalid request");
        assert_eq!(error.code(), crate::domain::ErrorCode::InvalidRequest);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_check_in_reports_not_found() {
        let command = FixtureBookingCommand;
        let error = command
            .check_in(CheckInRequest {
                booking_id: BookingId::random(),
            })
            .await
            .expect_err("not found");
        assert_eq!(error.code(), crate::domain::ErrorCode::NotFound);
    }

    #[rstest]
    fn payload_preserves_booking_fields(sample_request: CreateBookingRequest) {
        let booking =
            Booking::new(BookingDraft::from(sample_request.clone())).expect("valid booking");
        let payload = BookingPayload::from(booking.clone());

        assert_eq!(payload.id, booking.id());
        assert_eq!(payload.item_id, sample_request.item_id);
        assert_eq!(payload.payer_address, sample_request.payer_address);
        assert_eq!(payload.payment_reference, sample_request.payment_reference);
        assert_eq!(payload.created_at, booking.created_at());
    }
}
