//! Driven port for booking persistence.
//!
//! The ledger is volatile, process-scoped state today, but the port contract
//! anticipates persistent adapters, so connection and query failures exist
//! even though the in-memory adapter never raises them.

use async_trait::async_trait;

use crate::domain::{Booking, BookingId, PayerAddress};

/// Errors raised by booking store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingRepositoryError {
    /// Store connection could not be established.
    #[error("booking store connection failed: {message}")]
    Connection {
        /// Adapter-specific failure description.
        message: String,
    },
    /// Operation failed during execution.
    #[error("booking store operation failed: {message}")]
    Query {
        /// Adapter-specific failure description.
        message: String,
    },
}

impl BookingRepositoryError {
    /// Construct a [`BookingRepositoryError::Connection`] error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Construct a [`BookingRepositoryError::Query`] error.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for recording bookings and applying the release transition.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Record a new booking.
    async fn append(&self, booking: &Booking) -> Result<(), BookingRepositoryError>;

    /// Apply the funds-release transition to one booking.
    ///
    /// The lookup and the transition must be applied atomically with respect
    /// to other mutations on the same record, so concurrent check-ins
    /// serialize and both observe the terminal record. Returns `None` when
    /// the id is unknown; the store is left untouched in that case. Already
    /// released bookings are returned unchanged.
    async fn release_funds(
        &self,
        id: &BookingId,
    ) -> Result<Option<Booking>, BookingRepositoryError>;

    /// List bookings for one payer, in creation order.
    async fn list_by_payer(
        &self,
        payer: &PayerAddress,
    ) -> Result<Vec<Booking>, BookingRepositoryError>;
}

/// Fixture implementation for tests that do not exercise booking storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureBookingRepository;

#[async_trait]
impl BookingRepository for FixtureBookingRepository {
    async fn append(&self, _booking: &Booking) -> Result<(), BookingRepositoryError> {
        Ok(())
    }

    async fn release_funds(
        &self,
        _id: &BookingId,
    ) -> Result<Option<Booking>, BookingRepositoryError> {
        Ok(None)
    }

    async fn list_by_payer(
        &self,
        _payer: &PayerAddress,
    ) -> Result<Vec<Booking>, BookingRepositoryError> {
        Ok(Vec::new())
    }
}
