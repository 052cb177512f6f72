use std::sync::Arc;

use async_trait::async_trait;

use crate::book::errors::BookError;
use crate::book::models::Book;
use crate::book::models::BookId;
use crate::book::models::CreateBookCommand;
use crate::book::models::NewBook;
use crate::book::models::UpdateBookCommand;
use crate::book::ports::BookRepository;
use crate::book::ports::BookServicePort;
use crate::domain::authentication::models::Principal;
use crate::seller::models::SellerId;
use crate::seller::ports::SellerRepository;

/// Domain service implementation for book operations.
pub struct BookService<BR, SR>
where
    BR: BookRepository,
    SR: SellerRepository,
{
    repository: Arc<BR>,
    seller_repository: Arc<SR>,
}

impl<BR, SR> BookService<BR, SR>
where
    BR: BookRepository,
    SR: SellerRepository,
{
    /// Create a new book service.
    ///
    /// # Arguments
    /// * `repository` - Book persistence implementation
    /// * `seller_repository` - Used to check that a book's seller exists
    pub fn new(repository: Arc<BR>, seller_repository: Arc<SR>) -> Self {
        Self {
            repository,
            seller_repository,
        }
    }
}

#[async_trait]
impl<BR, SR> BookServicePort for BookService<BR, SR>
where
    BR: BookRepository,
    SR: SellerRepository,
{
    async fn create_book(
        &self,
        command: CreateBookCommand,
        actor: &Principal,
    ) -> Result<Book, BookError> {
        let seller = self
            .seller_repository
            .find_by_id(&command.seller_id)
            .await
            .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        if seller.is_none() {
            return Err(BookError::SellerNotFound(command.seller_id.to_string()));
        }

        let book = NewBook {
            seller_id: command.seller_id,
            title: command.title,
            author: command.author,
            year: command.year,
            count_pages: command.count_pages,
        };

        let created_book = self.repository.create(book).await?;

        tracing::info!(
            book_id = %created_book.id,
            seller_id = %created_book.seller_id,
            actor = %actor.seller_id,
            "Book created"
        );

        Ok(created_book)
    }

    async fn list_books(&self) -> Result<Vec<Book>, BookError> {
        self.repository.list_all().await
    }

    async fn list_books_by_seller(&self, seller_id: &SellerId) -> Result<Vec<Book>, BookError> {
        self.repository.list_by_seller(seller_id).await
    }

    async fn get_book(&self, id: &BookId) -> Result<Book, BookError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound(id.to_string()))
    }

    async fn update_book(
        &self,
        id: &BookId,
        command: UpdateBookCommand,
        actor: &Principal,
    ) -> Result<Book, BookError> {
        let mut book = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound(id.to_string()))?;

        book.title = command.title;
        book.author = command.author;
        book.year = command.year;
        book.count_pages = command.count_pages;

        let updated_book = self.repository.update(book).await?;

        tracing::info!(book_id = %updated_book.id, actor = %actor.seller_id, "Book updated");

        Ok(updated_book)
    }

    async fn delete_book(&self, id: &BookId, actor: &Principal) -> Result<(), BookError> {
        self.repository.delete(id).await?;

        tracing::info!(book_id = %id, actor = %actor.seller_id, "Book deleted");

        Ok(())
    }
}
