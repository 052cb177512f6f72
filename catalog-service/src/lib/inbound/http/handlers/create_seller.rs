use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::fields::FieldError;
use crate::domain::seller::models::CreateSellerCommand;
use crate::domain::seller::models::EmailAddress;
use crate::domain::seller::models::PersonName;
use crate::domain::seller::models::Seller;
use crate::inbound::http::router::AppState;
use crate::seller::errors::EmailError;

pub async fn create_seller(
    State(state): State<AppState>,
    Json(body): Json<CreateSellerRequest>,
) -> Result<ApiSuccess<SellerData>, ApiError> {
    state
        .seller_service
        .create_seller(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref seller| ApiSuccess::new(StatusCode::CREATED, seller.into()))
}

/// HTTP request body for seller registration (raw JSON)
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct CreateSellerRequest {
    first_name: String,
    last_name: String,
    e_mail: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateSellerRequestError {
    #[error("Invalid name: {0}")]
    Name(#[from] FieldError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Password must not be empty")]
    EmptyPassword,
}

impl CreateSellerRequest {
    fn try_into_command(self) -> Result<CreateSellerCommand, ParseCreateSellerRequestError> {
        let first_name = PersonName::new(self.first_name)?;
        let last_name = PersonName::new(self.last_name)?;
        let e_mail = EmailAddress::new(self.e_mail)?;
        if self.password.is_empty() {
            return Err(ParseCreateSellerRequestError::EmptyPassword);
        }
        Ok(CreateSellerCommand::new(
            first_name,
            last_name,
            e_mail,
            self.password,
        ))
    }
}

impl From<ParseCreateSellerRequestError> for ApiError {
    fn from(err: ParseCreateSellerRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

/// Public view of a seller. The password hash never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SellerData {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub e_mail: String,
}

impl From<&Seller> for SellerData {
    fn from(seller: &Seller) -> Self {
        Self {
            id: seller.id.0,
            first_name: seller.first_name.as_str().to_string(),
            last_name: seller.last_name.as_str().to_string(),
            e_mail: seller.e_mail.as_str().to_string(),
        }
    }
}
