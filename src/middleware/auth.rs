/**
 * Authentication Extractor
 *
 * This module provides the typed identity context for protected routes.
 * `AuthUser` is an Axum extractor that reads the `Authorization: Bearer`
 * header, verifies the JWT against the configured secret, and hands the
 * handler the verified identity id.
 *
 * Malformed, tampered, and expired tokens are all rejected uniformly with
 * `401 unauthenticated`. Tokens are stateless, so no database round trip
 * happens here.
 */

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::auth::sessions::verify_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Verified identity of the requester, extracted from the bearer token.
#[derive(Clone, Debug)]
pub struct AuthUser(pub Uuid);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| ApiError::Unauthenticated("missing authorization header".into()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthenticated("invalid authorization header".into()))?;

        let claims = verify_token(token, &state.jwt_secret).map_err(|e| {
            tracing::warn!("Token rejected: {:?}", e);
            ApiError::Unauthenticated("invalid or expired token".into())
        })?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| ApiError::Unauthenticated("invalid token subject".into()))?;

        Ok(AuthUser(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::sessions::create_token;
    use axum::http::Request;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_state(secret: &str) -> AppState {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        AppState::new(pool, secret.to_string())
    }

    #[tokio::test]
    async fn test_extracts_user_id_from_valid_token() {
        let state = test_state("secret").await;
        let user_id = Uuid::new_v4();
        let token = create_token(user_id, "secret").unwrap();

        let request = Request::builder()
            .uri("/")
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let AuthUser(extracted) = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(extracted, user_id);
    }

    #[tokio::test]
    async fn test_rejects_missing_header() {
        let state = test_state("secret").await;
        let request = Request::builder().uri("/").body(()).unwrap();
        let (mut parts, _) = request.into_parts();

        let err = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthenticated(_)));
    }

    #[tokio::test]
    async fn test_rejects_non_bearer_scheme() {
        let state = test_state("secret").await;
        let request = Request::builder()
            .uri("/")
            .header(AUTHORIZATION, "Basic abc123")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let err = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthenticated(_)));
    }

    #[tokio::test]
    async fn test_rejects_token_signed_with_other_secret() {
        let state = test_state("secret").await;
        let token = create_token(Uuid::new_v4(), "other-secret").unwrap();

        let request = Request::builder()
            .uri("/")
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let err = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthenticated(_)));
    }
}
