//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data`, so they depend
//! only on domain ports and remain testable without real collaborators.

use std::sync::Arc;

use crate::domain::ports::{BookingCommand, BookingQuery, HotelCatalogue};

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use backend::domain::ports::{
///     FixtureBookingCommand, FixtureBookingQuery, FixtureHotelCatalogue,
/// };
/// use backend::inbound::http::state::HttpState;
///
/// let state = HttpState {
///     bookings: Arc::new(FixtureBookingCommand),
///     bookings_query: Arc::new(FixtureBookingQuery),
///     hotels: Arc::new(FixtureHotelCatalogue),
/// };
/// let _command = state.bookings.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    /// Booking write operations.
    pub bookings: Arc<dyn BookingCommand>,
    /// Booking read operations.
    pub bookings_query: Arc<dyn BookingQuery>,
    /// Hotel catalogue reads.
    pub hotels: Arc<dyn HotelCatalogue>,
}
