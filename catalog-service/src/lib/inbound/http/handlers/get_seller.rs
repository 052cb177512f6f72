use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::book::models::Book;
use crate::domain::seller::models::SellerId;
use crate::inbound::http::router::AppState;

/// Seller profile together with the seller's books.
pub async fn get_seller(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiSuccess<SellerWithBooksData>, ApiError> {
    let seller_id = SellerId(id);

    let seller = state.seller_service.get_seller(&seller_id).await?;
    let books = state.book_service.list_books_by_seller(&seller_id).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        SellerWithBooksData {
            id: seller.id.0,
            first_name: seller.first_name.as_str().to_string(),
            last_name: seller.last_name.as_str().to_string(),
            e_mail: seller.e_mail.as_str().to_string(),
            books: books.iter().map(SellerBookData::from).collect(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SellerWithBooksData {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub e_mail: String,
    pub books: Vec<SellerBookData>,
}

/// Book as listed under its seller (no seller id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SellerBookData {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub count_pages: i32,
}

impl From<&Book> for SellerBookData {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.0,
            title: book.title.as_str().to_string(),
            author: book.author.as_str().to_string(),
            year: book.year,
            count_pages: book.count_pages.get(),
        }
    }
}
