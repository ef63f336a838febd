//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API. It
//! registers the booking and hotel endpoints from the inbound layer together
//! with the health probes, plus the schema wrappers that document domain
//! types without coupling them to utoipa. The generated specification backs
//! Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::bookings::{
    BookingEnvelope, BookingResponseBody, CreateBookingRequestBody, StayDatesBody,
};
use crate::inbound::http::hotels::HotelResponseBody;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Booking ledger API",
        description = "Escrow-style hotel booking lifecycle: book, lock funds, check in, release."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::bookings::create_booking,
        crate::inbound::http::bookings::check_in,
        crate::inbound::http::bookings::list_bookings_by_payer,
        crate::inbound::http::hotels::list_hotels,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateBookingRequestBody,
        StayDatesBody,
        BookingResponseBody,
        BookingEnvelope,
        HotelResponseBody,
        ErrorSchema,
        ErrorCodeSchema,
    )),
    tags(
        (name = "bookings", description = "Booking lifecycle operations"),
        (name = "hotels", description = "Read-only hotel catalogue"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document references the API surface.

    use utoipa::OpenApi;

    use super::*;

    #[test]
    fn document_includes_every_endpoint() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();

        for expected in [
            "/api/v1/bookings",
            "/api/v1/bookings/{id}/checkin",
            "/api/v1/bookings/by-payer/{payerAddress}",
            "/api/v1/hotels",
            "/health/ready",
            "/health/live",
        ] {
            assert!(
                paths.iter().any(|p| p == expected),
                "missing path {expected} in {paths:?}"
            );
        }
    }

    #[test]
    fn document_serializes_to_json() {
        let doc = ApiDoc::openapi();
        let encoded = doc.to_json().expect("serializable document");
        assert!(encoded.contains("Booking ledger API"));
    }
}
