//! Backend library modules for the booking ledger service.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request-scoped trace identifier primitive.
pub use domain::TraceId;
/// Tracing middleware attaching a `Trace-Id` header to every response.
pub use middleware::trace::Trace;
