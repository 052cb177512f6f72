use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::authentication::errors::AuthError;
use crate::inbound::http::router::AppState;

const LOGIN_REJECTED: &str = "Incorrect email or password";

/// Exchange e-mail and password for a bearer token.
///
/// Unknown e-mail and wrong password produce the same response.
pub async fn issue_token(
    State(state): State<AppState>,
    Json(body): Json<IssueTokenRequest>,
) -> Result<ApiSuccess<IssueTokenResponseData>, ApiError> {
    state
        .auth_service
        .authenticate(&body.e_mail, &body.password)
        .await
        .map_err(|e| match e {
            AuthError::UnknownSubject | AuthError::BadCredential => {
                ApiError::Unauthorized(LOGIN_REJECTED.to_string())
            }
            _ => ApiError::from(e),
        })
        .map(|token| {
            ApiSuccess::new(
                StatusCode::OK,
                IssueTokenResponseData {
                    access_token: token.access_token,
                    token_type: "bearer".to_string(),
                    expires_at: token.expires_at,
                },
            )
        })
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct IssueTokenRequest {
    e_mail: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueTokenResponseData {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}
