use axum::http::header;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::book::errors::BookError;
use crate::domain::authentication::errors::AuthError;
use crate::seller::errors::SellerError;

pub mod create_book;
pub mod create_seller;
pub mod delete_book;
pub mod delete_seller;
pub mod get_book;
pub mod get_seller;
pub mod issue_token;
pub mod list_books;
pub mod list_sellers;
pub mod update_book;
pub mod update_seller;

/// Single message for every rejected bearer token, whatever the cause.
pub const CREDENTIALS_REJECTED: &str = "Could not validate credentials";

/// Body of every 500; the detail stays in the logs.
pub const INTERNAL_ERROR: &str = "Internal server error";

fn internal(detail: &dyn std::fmt::Display) -> ApiError {
    tracing::error!(error = %detail, "Request failed");
    ApiError::InternalServerError(INTERNAL_ERROR.to_string())
}

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    ServiceUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            ApiError::Unauthorized(msg) => {
                let status = StatusCode::UNAUTHORIZED;
                return (
                    status,
                    [(header::WWW_AUTHENTICATE, "Bearer")],
                    Json(ApiResponseBody::new_error(status, msg)),
                )
                    .into_response();
            }
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Malformed
            | AuthError::BadSignature
            | AuthError::Expired
            | AuthError::UnknownSubject
            | AuthError::BadCredential => ApiError::Unauthorized(CREDENTIALS_REJECTED.to_string()),
            AuthError::StoreUnavailable(_) => {
                ApiError::ServiceUnavailable("Service temporarily unavailable".to_string())
            }
            AuthError::Internal(_) => internal(&err),
        }
    }
}

impl From<SellerError> for ApiError {
    fn from(err: SellerError) -> Self {
        match err {
            SellerError::NotFound(_) => ApiError::NotFound(err.to_string()),
            SellerError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            SellerError::InvalidEmail(_) | SellerError::InvalidField(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            SellerError::Password(_) | SellerError::DatabaseError(_) | SellerError::Unknown(_) => {
                internal(&err)
            }
        }
    }
}

impl From<BookError> for ApiError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::NotFound(_) | BookError::SellerNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            BookError::InvalidField(_) | BookError::InvalidPageCount(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            BookError::DatabaseError(_) => internal(&err),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_rejections_are_indistinguishable() {
        let rejections = [
            AuthError::Malformed,
            AuthError::BadSignature,
            AuthError::Expired,
            AuthError::UnknownSubject,
            AuthError::BadCredential,
        ];

        for rejection in rejections {
            assert_eq!(
                ApiError::from(rejection),
                ApiError::Unauthorized(CREDENTIALS_REJECTED.to_string())
            );
        }
    }

    #[test]
    fn test_store_unavailable_is_not_a_rejection() {
        let err = ApiError::from(AuthError::StoreUnavailable("pool timed out".to_string()));
        assert!(matches!(err, ApiError::ServiceUnavailable(_)));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
    }

    #[test]
    fn test_internal_errors_hide_detail() {
        let err = ApiError::from(AuthError::Internal(
            "signing key rejected: InvalidKeyFormat".to_string(),
        ));
        assert_eq!(err, ApiError::InternalServerError(INTERNAL_ERROR.to_string()));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        assert_eq!(
            ApiError::from(SellerError::DatabaseError("relation \"sellers_table\"".to_string())),
            ApiError::InternalServerError(INTERNAL_ERROR.to_string())
        );
        assert_eq!(
            ApiError::from(BookError::DatabaseError("pool timed out".to_string())),
            ApiError::InternalServerError(INTERNAL_ERROR.to_string())
        );
    }

    #[test]
    fn test_unauthorized_carries_challenge() {
        let response = ApiError::Unauthorized(CREDENTIALS_REJECTED.to_string()).into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_seller_error_mapping() {
        assert!(matches!(
            ApiError::from(SellerError::NotFound("7".to_string())),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from(SellerError::EmailAlreadyExists("a@b.co".to_string())),
            ApiError::Conflict(_)
        ));
    }
}
