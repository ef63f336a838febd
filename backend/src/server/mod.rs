//! Server construction and wiring.
//!
//! [`build_app`] assembles the Actix application used by the binary and the
//! integration tests; [`build_http_state`] wires the in-memory adapters into
//! the domain services behind the HTTP state bundle.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::BookingService;
use crate::inbound::http::health::{live, ready, HealthState};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{bookings, hotels};
use crate::middleware::trace::Trace;
use crate::outbound::memory::{InMemoryBookingRepository, StaticHotelCatalogue};

/// Wire the in-memory adapters into domain services for the HTTP layer.
pub fn build_http_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    let repository = Arc::new(InMemoryBookingRepository::new());
    let service = Arc::new(
        BookingService::new(repository).with_release_delay(config.release_delay()),
    );
    let catalogue = StaticHotelCatalogue::seeded().map_err(std::io::Error::other)?;

    Ok(HttpState {
        bookings: service.clone(),
        bookings_query: service,
        hotels: Arc::new(catalogue),
    })
}

/// Assemble the HTTP application: state, middleware, routes, and docs.
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api/v1")
        .service(bookings::create_booking)
        .service(bookings::check_in)
        .service(bookings::list_bookings_by_payer)
        .service(hotels::list_hotels);

    let mut app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    {
        app = app.service(
            SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
    }

    app
}
