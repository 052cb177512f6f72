use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::book::errors::BookError;
use crate::domain::authentication::models::Principal;
use crate::domain::book::models::AuthorName;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookTitle;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::PageCount;
use crate::domain::seller::models::SellerId;
use crate::inbound::http::router::AppState;

const DEFAULT_YEAR: i32 = 2000;
const DEFAULT_PAGES: i32 = 300;

pub async fn create_book(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Json(body): Json<CreateBookRequest>,
) -> Result<ApiSuccess<BookData>, ApiError> {
    state
        .book_service
        .create_book(body.try_into_command()?, &principal)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::CREATED, book.into()))
}

fn default_year() -> i32 {
    DEFAULT_YEAR
}

fn default_pages() -> i32 {
    DEFAULT_PAGES
}

/// HTTP request body for listing a book (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateBookRequest {
    title: String,
    author: String,
    #[serde(default = "default_year")]
    year: i32,
    #[serde(rename = "pages", alias = "count_pages", default = "default_pages")]
    count_pages: i32,
    seller_id: i64,
}

impl CreateBookRequest {
    fn try_into_command(self) -> Result<CreateBookCommand, BookError> {
        Ok(CreateBookCommand {
            seller_id: SellerId(self.seller_id),
            title: BookTitle::new(self.title)?,
            author: AuthorName::new(self.author)?,
            year: self.year,
            count_pages: PageCount::new(self.count_pages)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookData {
    pub id: i64,
    pub seller_id: i64,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub count_pages: i32,
}

impl From<&Book> for BookData {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.0,
            seller_id: book.seller_id.0,
            title: book.title.as_str().to_string(),
            author: book.author.as_str().to_string(),
            year: book.year,
            count_pages: book.count_pages.get(),
        }
    }
}
