//! Booking HTTP handlers.
//!
//! ```text
//! POST /api/v1/bookings
//! POST /api/v1/bookings/{id}/checkin
//! GET  /api/v1/bookings/by-payer/{payerAddress}
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{
    BookingCommand, BookingPayload, BookingQuery, CheckInRequest, CreateBookingRequest,
    ListBookingsByPayerRequest,
};
use crate::domain::StayDates;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    parse_booking_id, parse_date, require_non_empty, require_non_empty_when_present,
    require_positive, FieldName,
};
use crate::inbound::http::ApiResult;

/// Stay window payload.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StayDatesBody {
    /// First night of the stay.
    #[schema(format = "date", example = "2026-03-01")]
    pub check_in: String,
    /// Departure date.
    #[schema(format = "date", example = "2026-03-04")]
    pub check_out: String,
}

/// Request payload for recording a booking.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequestBody {
    /// Reference to the booked hotel or listing.
    #[schema(example = "mum_001")]
    pub item_id: String,
    /// Identifier of the paying party on the payment network.
    #[schema(example = "ADDR1")]
    pub payer_address: String,
    /// Amount in the payment network's unit.
    #[schema(example = 0.1)]
    pub price: f64,
    /// Transaction identifier obtained by the caller, if payment is already
    /// confirmed. Omitting it records the booking as `PENDING`.
    #[schema(example = "TX123")]
    pub payment_reference: Option<String>,
    /// Stay window.
    pub stay_dates: StayDatesBody,
    /// Number of guests.
    #[schema(example = 2)]
    pub guest_count: u32,
    /// Name the booking is made under.
    #[schema(example = "Alice")]
    pub guest_name: String,
}

/// Booking representation returned by every endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponseBody {
    /// Ledger-assigned identifier.
    #[schema(format = "uuid")]
    pub id: String,
    /// Reference to the booked item.
    pub item_id: String,
    /// Identifier of the paying party.
    pub payer_address: String,
    /// Amount in the payment network's unit.
    pub price: f64,
    /// External transaction identifier; absent while payment is pending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_reference: Option<String>,
    /// Lifecycle state.
    #[schema(example = "ESCROW_LOCKED")]
    pub status: String,
    /// Stay window.
    pub stay_dates: StayDatesBody,
    /// Number of guests.
    pub guest_count: u32,
    /// Name the booking was made under.
    pub guest_name: String,
    /// Creation timestamp.
    #[schema(format = "date-time")]
    pub created_at: String,
}

impl From<BookingPayload> for BookingResponseBody {
    fn from(value: BookingPayload) -> Self {
        Self {
            id: value.id.to_string(),
            item_id: value.item_id,
            payer_address: value.payer_address,
            price: value.price,
            payment_reference: value.payment_reference,
            status: value.status.to_string(),
            stay_dates: StayDatesBody {
                check_in: value.stay_dates.check_in.to_string(),
                check_out: value.stay_dates.check_out.to_string(),
            },
            guest_count: value.guest_count,
            guest_name: value.guest_name,
            created_at: value.created_at.to_rfc3339(),
        }
    }
}

/// Envelope wrapping a single booking.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingEnvelope {
    /// The affected booking.
    pub booking: BookingResponseBody,
}

fn parse_create_booking(body: CreateBookingRequestBody) -> Result<CreateBookingRequest, crate::domain::Error> {
    Ok(CreateBookingRequest {
        item_id: require_non_empty(body.item_id, FieldName::new("itemId"))?,
        payer_address: require_non_empty(body.payer_address, FieldName::new("payerAddress"))?,
        price: require_positive(body.price, FieldName::new("price"))?,
        payment_reference: require_non_empty_when_present(
            body.payment_reference,
            FieldName::new("paymentReference"),
        )?,
        stay_dates: StayDates {
            check_in: parse_date(&body.stay_dates.check_in, FieldName::new("stayDates.checkIn"))?,
            check_out: parse_date(
                &body.stay_dates.check_out,
                FieldName::new("stayDates.checkOut"),
            )?,
        },
        guest_count: body.guest_count,
        guest_name: body.guest_name,
    })
}

/// Record a booking, locking escrow when a payment reference accompanies it.
#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    tags = ["bookings"],
    request_body = CreateBookingRequestBody,
    responses(
        (status = 200, description = "Booking recorded", body = BookingEnvelope),
        (status = 400, description = "Malformed booking request", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    operation_id = "createBooking"
)]
#[post("/bookings")]
pub async fn create_booking(
    state: web::Data<HttpState>,
    body: web::Json<CreateBookingRequestBody>,
) -> ApiResult<web::Json<BookingEnvelope>> {
    let request = parse_create_booking(body.into_inner())?;
    let response = state.bookings.create_booking(request).await?;
    Ok(web::Json(BookingEnvelope {
        booking: BookingResponseBody::from(response.booking),
    }))
}

/// Check in a booking, releasing held funds after the verification delay.
#[utoipa::path(
    post,
    path = "/api/v1/bookings/{id}/checkin",
    tags = ["bookings"],
    params(("id" = String, Path, description = "Ledger-assigned booking identifier")),
    responses(
        (status = 200, description = "Funds released", body = BookingEnvelope),
        (status = 400, description = "Malformed booking identifier", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 404, description = "Unknown booking identifier", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    operation_id = "checkInBooking"
)]
#[post("/bookings/{id}/checkin")]
pub async fn check_in(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<BookingEnvelope>> {
    let booking_id = parse_booking_id(&path.into_inner(), FieldName::new("id"))?;
    let response = state.bookings.check_in(CheckInRequest { booking_id }).await?;
    Ok(web::Json(BookingEnvelope {
        booking: BookingResponseBody::from(response.booking),
    }))
}

/// List all bookings recorded for one payer, oldest first.
#[utoipa::path(
    get,
    path = "/api/v1/bookings/by-payer/{payerAddress}",
    tags = ["bookings"],
    params(("payerAddress" = String, Path, description = "Identifier of the paying party")),
    responses(
        (status = 200, description = "Bookings for the payer", body = [BookingResponseBody]),
        (status = 400, description = "Malformed payer address", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    operation_id = "listBookingsByPayer"
)]
#[get("/bookings/by-payer/{payerAddress}")]
pub async fn list_bookings_by_payer(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<BookingResponseBody>>> {
    let response = state
        .bookings_query
        .list_bookings_by_payer(ListBookingsByPayerRequest {
            payer_address: path.into_inner(),
        })
        .await?;
    Ok(web::Json(
        response
            .bookings
            .into_iter()
            .map(BookingResponseBody::from)
            .collect(),
    ))
}

#[cfg(test)]
#[path = "bookings_tests.rs"]
mod tests;
