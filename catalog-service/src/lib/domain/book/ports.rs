use async_trait::async_trait;

use crate::book::errors::BookError;
use crate::book::models::Book;
use crate::book::models::BookId;
use crate::book::models::CreateBookCommand;
use crate::book::models::NewBook;
use crate::book::models::UpdateBookCommand;
use crate::domain::authentication::models::Principal;
use crate::seller::models::SellerId;

/// Port for book domain service operations.
#[async_trait]
pub trait BookServicePort: Send + Sync + 'static {
    /// Create a book listing on behalf of `actor`.
    ///
    /// # Errors
    /// * `SellerNotFound` - Referenced seller does not exist
    /// * `DatabaseError` - Database operation failed
    async fn create_book(
        &self,
        command: CreateBookCommand,
        actor: &Principal,
    ) -> Result<Book, BookError>;

    /// Retrieve all books.
    async fn list_books(&self) -> Result<Vec<Book>, BookError>;

    /// Retrieve the books of one seller.
    async fn list_books_by_seller(&self, seller_id: &SellerId) -> Result<Vec<Book>, BookError>;

    /// Retrieve book by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    async fn get_book(&self, id: &BookId) -> Result<Book, BookError>;

    /// Replace a book's details on behalf of `actor`.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    async fn update_book(
        &self,
        id: &BookId,
        command: UpdateBookCommand,
        actor: &Principal,
    ) -> Result<Book, BookError>;

    /// Delete a book on behalf of `actor`.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    async fn delete_book(&self, id: &BookId, actor: &Principal) -> Result<(), BookError>;
}

/// Persistence operations for books.
#[async_trait]
pub trait BookRepository: Send + Sync + 'static {
    async fn create(&self, book: NewBook) -> Result<Book, BookError>;

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError>;

    async fn list_all(&self) -> Result<Vec<Book>, BookError>;

    async fn list_by_seller(&self, seller_id: &SellerId) -> Result<Vec<Book>, BookError>;

    /// # Errors
    /// * `NotFound` - Book does not exist
    async fn update(&self, book: Book) -> Result<Book, BookError>;

    /// # Errors
    /// * `NotFound` - Book does not exist
    async fn delete(&self, id: &BookId) -> Result<(), BookError>;
}
