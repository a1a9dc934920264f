/**
 * Error Conversion
 *
 * Implements `IntoResponse` for `ApiError` so handlers can return
 * `Result<Json<T>, ApiError>` and get uniform JSON error bodies.
 *
 * # Response Format
 *
 * ```json
 * { "code": "forbidden", "message": "only the receiver can accept a request" }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Database(err) => tracing::error!("Database error: {:?}", err),
            ApiError::Internal(detail) => tracing::error!("Internal error: {}", detail),
            _ => {}
        }

        let status = self.status_code();
        let body = serde_json::json!({
            "code": self.code(),
            "message": self.public_message(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_into_response_status() {
        let response = ApiError::Forbidden("nope".into()).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_internal_error_status() {
        let response = ApiError::Database(sqlx::Error::RowNotFound).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
