//! Booking ledger domain service.
//!
//! Implements the booking driving ports over a [`BookingRepository`]. The
//! service derives the recorded status from payment presence, simulates the
//! check-in verification step with a timer-based suspension, and maps store
//! failures onto the domain error taxonomy.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{
    BookingCommand, BookingPayload, BookingQuery, BookingRepository, BookingRepositoryError,
    CheckInRequest, CheckInResponse, CreateBookingRequest, CreateBookingResponse,
    ListBookingsByPayerRequest, ListBookingsByPayerResponse,
};
use crate::domain::{Booking, BookingDraft, Error, PayerAddress};

/// Simulated verification delay applied before funds release, matching the
/// demo's two-second timer.
const DEFAULT_RELEASE_DELAY: Duration = Duration::from_secs(2);

fn map_repository_error(error: BookingRepositoryError) -> Error {
    match error {
        BookingRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("booking store unavailable: {message}"))
        }
        BookingRepositoryError::Query { message } => {
            Error::internal(format!("booking store error: {message}"))
        }
    }
}

/// Booking ledger service implementing the command and query driving ports.
#[derive(Clone)]
pub struct BookingService<R> {
    bookings: Arc<R>,
    release_delay: Duration,
}

impl<R> BookingService<R> {
    /// Create a service over the given booking store with the default
    /// verification delay.
    pub fn new(bookings: Arc<R>) -> Self {
        Self {
            bookings,
            release_delay: DEFAULT_RELEASE_DELAY,
        }
    }

    /// Override the simulated verification delay.
    #[must_use]
    pub fn with_release_delay(mut self, delay: Duration) -> Self {
        self.release_delay = delay;
        self
    }
}

#[async_trait]
impl<R> BookingCommand for BookingService<R>
where
    R: BookingRepository,
{
    async fn create_booking(
        &self,
        request: CreateBookingRequest,
    ) -> Result<CreateBookingResponse, Error> {
        let booking = Booking::new(BookingDraft::from(request))
            .map_err(|err| Error::invalid_request(format!("invalid booking request: {err}")))?;

        self.bookings
            .append(&booking)
            .await
            .map_err(map_repository_error)?;

        info!(
            booking_id = %booking.id(),
            item_id = %booking.item_id(),
            status = %booking.status(),
            "booking recorded"
        );
        Ok(CreateBookingResponse {
            booking: BookingPayload::from(booking),
        })
    }

    async fn check_in(&self, request: CheckInRequest) -> Result<CheckInResponse, Error> {
        // The external verification step is simulated with a plain timer.
        // It runs before the store lock is taken, so other ledger
        // operations proceed during the wait.
        tokio::time::sleep(self.release_delay).await;

        let booking = self
            .bookings
            .release_funds(&request.booking_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("booking {} not found", request.booking_id)))?;

        info!(booking_id = %booking.id(), "funds released");
        Ok(CheckInResponse {
            booking: BookingPayload::from(booking),
        })
    }
}

#[async_trait]
impl<R> BookingQuery for BookingService<R>
where
    R: BookingRepository,
{
    async fn list_bookings_by_payer(
        &self,
        request: ListBookingsByPayerRequest,
    ) -> Result<ListBookingsByPayerResponse, Error> {
        let payer = PayerAddress::new(request.payer_address)
            .map_err(|err| Error::invalid_request(format!("invalid payer address: {err}")))?;

        let bookings = self
            .bookings
            .list_by_payer(&payer)
            .await
            .map_err(map_repository_error)?;

        Ok(ListBookingsByPayerResponse {
            bookings: bookings.into_iter().map(BookingPayload::from).collect(),
        })
    }
}

#[cfg(test)]
#[path = "booking_service_tests.rs"]
mod tests;
