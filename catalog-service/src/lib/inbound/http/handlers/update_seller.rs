use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::create_seller::SellerData;
use crate::domain::authentication::models::Principal;
use crate::domain::seller::models::EmailAddress;
use crate::domain::seller::models::PersonName;
use crate::domain::seller::models::SellerId;
use crate::domain::seller::models::UpdateSellerCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::seller::errors::SellerError;

/// HTTP request body for updating a seller (raw JSON)
#[derive(Deserialize)]
pub struct UpdateSellerRequest {
    pub first_name: String,
    pub last_name: String,
    pub e_mail: String,
    pub password: Option<String>,
}

impl UpdateSellerRequest {
    fn try_into_command(self) -> Result<UpdateSellerCommand, SellerError> {
        Ok(UpdateSellerCommand {
            first_name: PersonName::new(self.first_name)?,
            last_name: PersonName::new(self.last_name)?,
            e_mail: EmailAddress::new(self.e_mail)?,
            password: self.password.filter(|p| !p.is_empty()),
        })
    }
}

pub async fn update_seller(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateSellerRequest>,
) -> Result<ApiSuccess<SellerData>, ApiError> {
    let command = req.try_into_command()?;

    let seller = state
        .seller_service
        .update_seller(&SellerId(id), command, &principal)
        .await?;

    Ok(ApiSuccess::new(StatusCode::OK, (&seller).into()))
}
