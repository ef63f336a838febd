//! Driving port for booking read operations.
//!
//! Inbound adapters use this port to read recorded bookings without
//! depending on store details.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::Error;

use super::booking_command::BookingPayload;

/// Request to list bookings made by one payer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBookingsByPayerRequest {
    /// Identifier of the paying party.
    pub payer_address: String,
}

/// Response containing the payer's bookings in creation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBookingsByPayerResponse {
    /// Matching bookings, oldest first; empty when the payer has none.
    pub bookings: Vec<BookingPayload>,
}

/// Driving port for booking read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingQuery: Send + Sync {
    /// Lists all bookings recorded for the given payer, in creation order.
    async fn list_bookings_by_payer(
        &self,
        request: ListBookingsByPayerRequest,
    ) -> Result<ListBookingsByPayerResponse, Error>;
}

/// Fixture query implementation for tests that do not need a ledger.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureBookingQuery;

#[async_trait]
impl BookingQuery for FixtureBookingQuery {
    async fn list_bookings_by_payer(
        &self,
        _request: ListBookingsByPayerRequest,
    ) -> Result<ListBookingsByPayerResponse, Error> {
        Ok(ListBookingsByPayerResponse {
            bookings: Vec::new(),
        })
    }
}
