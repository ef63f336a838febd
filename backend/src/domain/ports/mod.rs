//! Domain ports for the hexagonal boundary.
//!
//! Driving ports ([`BookingCommand`], [`BookingQuery`]) are implemented by
//! domain services and consumed by inbound adapters. Driven ports
//! ([`BookingRepository`], [`HotelCatalogue`]) are implemented by outbound
//! adapters. Each port ships a `Fixture*` implementation for tests that do
//! not exercise the real collaborator.

mod booking_command;
mod booking_query;
mod booking_repository;
mod hotel_catalogue;

#[cfg(test)]
pub use booking_command::MockBookingCommand;
pub use booking_command::{
    BookingCommand, BookingPayload, CheckInRequest, CheckInResponse, CreateBookingRequest,
    CreateBookingResponse, FixtureBookingCommand,
};
#[cfg(test)]
pub use booking_query::MockBookingQuery;
pub use booking_query::{
    BookingQuery, FixtureBookingQuery, ListBookingsByPayerRequest, ListBookingsByPayerResponse,
};
#[cfg(test)]
pub use booking_repository::MockBookingRepository;
pub use booking_repository::{BookingRepository, BookingRepositoryError, FixtureBookingRepository};
#[cfg(test)]
pub use hotel_catalogue::MockHotelCatalogue;
pub use hotel_catalogue::{
    CityFilter, FixtureHotelCatalogue, HotelCatalogue, HotelCatalogueError,
};
