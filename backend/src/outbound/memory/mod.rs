//! In-process adapters backing the driven ports.
//!
//! These adapters hold everything in memory; the durability boundary is the
//! process lifetime. The port traits keep them swappable for persistent
//! stores without touching the domain services.

mod booking_repository;
mod hotel_catalogue;

pub use booking_repository::InMemoryBookingRepository;
pub use hotel_catalogue::StaticHotelCatalogue;
