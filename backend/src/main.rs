//! Backend entry-point: wires the booking REST endpoints and OpenAPI docs.

use actix_web::{web, HttpServer};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use backend::inbound::http::health::HealthState;
use backend::server::{build_app, build_http_state, ServerConfig};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::from_env()?;
    let http_state = web::Data::new(build_http_state(&config)?);

    let health_state = web::Data::new(HealthState::new());
    // Clones for the server factory so the readiness probe stays reachable.
    let server_health_state = health_state.clone();
    let server_http_state = http_state.clone();
    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), server_http_state.clone())
    })
    .bind(config.bind_addr())?;

    health_state.mark_ready();
    info!(addr = %config.bind_addr(), "booking backend listening");
    server.run().await
}
