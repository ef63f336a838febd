//! Hotel catalogue HTTP handlers.
//!
//! ```text
//! GET /api/v1/hotels[?city=...]
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{CityFilter, HotelCatalogue, HotelCatalogueError};
use crate::domain::{Error, Hotel};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Query parameters accepted by the listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListHotelsQuery {
    /// Exact-match city restriction; absent or `All` lists everything.
    pub city: Option<String>,
}

/// Hotel representation returned to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponseBody {
    /// Catalogue identifier, used as `itemId` when booking.
    #[schema(example = "mum_001")]
    pub id: String,
    /// City the hotel is in.
    pub city: String,
    /// Display name.
    pub name: String,
    /// Human-readable address line.
    pub location: String,
    /// Whether the listing is verified.
    pub verified: bool,
    /// Review rating on a 0–5 scale.
    pub rating: f64,
    /// Nightly rate in the payment network's unit.
    pub price: f64,
    /// Number of reviews behind the rating.
    pub reviews: u32,
    /// Cover image location.
    pub image_url: String,
}

impl From<Hotel> for HotelResponseBody {
    fn from(value: Hotel) -> Self {
        Self {
            id: value.id().to_owned(),
            city: value.city().to_owned(),
            name: value.name().to_owned(),
            location: value.location().to_owned(),
            verified: value.verified(),
            rating: value.rating(),
            price: value.price(),
            reviews: value.reviews(),
            image_url: value.image_url().to_owned(),
        }
    }
}

fn map_catalogue_error(error: HotelCatalogueError) -> Error {
    match error {
        HotelCatalogueError::Connection { message } => {
            Error::service_unavailable(format!("hotel catalogue unavailable: {message}"))
        }
        HotelCatalogueError::Query { message } => {
            Error::internal(format!("hotel catalogue error: {message}"))
        }
    }
}

/// List bookable hotels, optionally restricted to one city.
#[utoipa::path(
    get,
    path = "/api/v1/hotels",
    tags = ["hotels"],
    params(("city" = Option<String>, Query, description = "Exact-match city restriction; omit or pass `All` for every hotel")),
    responses(
        (status = 200, description = "Hotels passing the filter", body = [HotelResponseBody])
    ),
    operation_id = "listHotels"
)]
#[get("/hotels")]
pub async fn list_hotels(
    state: web::Data<HttpState>,
    query: web::Query<ListHotelsQuery>,
) -> ApiResult<web::Json<Vec<HotelResponseBody>>> {
    let filter = CityFilter::from_query(query.into_inner().city);
    let hotels = state
        .hotels
        .list_hotels(&filter)
        .await
        .map_err(map_catalogue_error)?;
    Ok(web::Json(
        hotels.into_iter().map(HotelResponseBody::from).collect(),
    ))
}
