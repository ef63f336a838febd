//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting Actix
//! handlers turn domain failures into consistent JSON responses and status
//! codes.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// Internal failures keep their trace id but lose message and details so
// implementation internals never reach clients.
fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use actix_web::body::to_bytes;
    use serde_json::{json, Value};

    use super::*;

    #[test]
    fn codes_map_onto_the_expected_status() {
        assert_eq!(
            Error::invalid_request("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(Error::not_found("gone").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            Error::service_unavailable("later").status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            Error::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn internal_errors_are_redacted() {
        let response = Error::internal("connection string leaked")
            .with_details(json!({ "dsn": "postgres://secret" }))
            .error_response();

        let body = to_bytes(response.into_body()).await.expect("body bytes");
        let payload: Value = serde_json::from_slice(&body).expect("json body");

        assert_eq!(
            payload.get("message").and_then(Value::as_str),
            Some("Internal server error")
        );
        assert!(payload.get("details").is_none());
    }

    #[tokio::test]
    async fn client_errors_keep_their_details() {
        let response = Error::invalid_request("price must be positive")
            .with_details(json!({ "field": "price" }))
            .error_response();

        let body = to_bytes(response.into_body()).await.expect("body bytes");
        let payload: Value = serde_json::from_slice(&body).expect("json body");

        assert_eq!(
            payload.get("message").and_then(Value::as_str),
            Some("price must be positive")
        );
        assert_eq!(
            payload.pointer("/details/field").and_then(Value::as_str),
            Some("price")
        );
    }

    #[tokio::test]
    async fn responses_carry_the_trace_header_when_present() {
        let response = Error::not_found("gone")
            .with_trace_id("abc-123")
            .error_response();
        let header = response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|v| v.to_str().ok());
        assert_eq!(header, Some("abc-123"));
    }
}
