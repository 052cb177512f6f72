use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::create_book::BookData;
use crate::book::errors::BookError;
use crate::domain::authentication::models::Principal;
use crate::domain::book::models::AuthorName;
use crate::domain::book::models::BookId;
use crate::domain::book::models::BookTitle;
use crate::domain::book::models::PageCount;
use crate::domain::book::models::UpdateBookCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// HTTP request body for replacing a book (raw JSON). A `seller_id` in the
/// body is ignored; books do not change hands.
#[derive(Debug, Deserialize)]
pub struct UpdateBookRequest {
    pub title: String,
    pub author: String,
    pub year: i32,
    #[serde(alias = "pages")]
    pub count_pages: i32,
}

impl UpdateBookRequest {
    fn try_into_command(self) -> Result<UpdateBookCommand, BookError> {
        Ok(UpdateBookCommand {
            title: BookTitle::new(self.title)?,
            author: AuthorName::new(self.author)?,
            year: self.year,
            count_pages: PageCount::new(self.count_pages)?,
        })
    }
}

pub async fn update_book(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateBookRequest>,
) -> Result<ApiSuccess<BookData>, ApiError> {
    let command = req.try_into_command()?;

    state
        .book_service
        .update_book(&BookId(id), command, &principal)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::OK, book.into()))
}
