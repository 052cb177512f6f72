use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::create_book::BookData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_books(
    State(state): State<AppState>,
) -> Result<ApiSuccess<ListBooksResponseData>, ApiError> {
    let books = state.book_service.list_books().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ListBooksResponseData {
            books: books.iter().map(BookData::from).collect(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListBooksResponseData {
    pub books: Vec<BookData>,
}
