use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::authentication::errors::AuthError;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Middleware that resolves the bearer token to a `Principal` and adds it to
/// request extensions. Every credential rejection is the same 401.
pub async fn require_principal(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)
        .inspect_err(|e| tracing::warn!(stage = "header", kind = e.kind(), "Authentication rejected"))
        .map_err(reject)?
        .to_string();

    let principal = state
        .auth_service
        .resolve_principal(&token)
        .await
        .map_err(reject)?;

    tracing::debug!(seller_id = %principal.seller_id, "Request authenticated");
    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}

fn reject(err: AuthError) -> Response {
    ApiError::from(err).into_response()
}

/// Token from `Authorization: Bearer <token>`. A missing, non-ASCII, or
/// non-bearer header is a malformed token.
fn extract_bearer_token(req: &Request) -> Result<&str, AuthError> {
    let auth_str = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::Malformed)?
        .to_str()
        .map_err(|_| AuthError::Malformed)?;

    auth_str
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::Malformed)
}
