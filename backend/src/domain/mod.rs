//! Domain entities, services, and ports for the booking ledger.
//!
//! Purpose: define the strongly typed booking lifecycle used by the HTTP
//! adapters and the in-process store. Types are transport agnostic; inbound
//! adapters translate them to wire payloads, outbound adapters persist them.
//!
//! Public surface:
//! - [`Booking`] and its value types: the escrow-style booking aggregate.
//! - [`BookingService`]: the ledger service implementing the driving ports.
//! - [`Hotel`]: read-only catalogue entry.
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failure payload.
//! - [`TraceId`]: request-scoped correlation identifier.

pub mod bookings;
pub mod catalogue;
pub mod error;
pub mod ports;
pub mod trace_id;

mod booking_service;

pub use self::booking_service::BookingService;
pub use self::bookings::{
    Booking, BookingDraft, BookingId, BookingStatus, BookingValidationError, ItemId, PayerAddress,
    PaymentReference, Price, StayDates,
};
pub use self::catalogue::{Hotel, HotelDraft, HotelValidationError};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::TraceId;

/// Response header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "Trace-Id";
