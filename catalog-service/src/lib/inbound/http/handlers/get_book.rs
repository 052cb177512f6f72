use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::create_book::BookData;
use crate::domain::book::models::BookId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiSuccess<BookData>, ApiError> {
    state
        .book_service
        .get_book(&BookId(id))
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::OK, book.into()))
}
