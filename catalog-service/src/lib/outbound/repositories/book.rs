use async_trait::async_trait;
use sqlx::PgPool;

use crate::book::errors::BookError;
use crate::domain::book::models::AuthorName;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::domain::book::models::BookTitle;
use crate::domain::book::models::NewBook;
use crate::domain::book::models::PageCount;
use crate::domain::book::ports::BookRepository;
use crate::domain::seller::models::SellerId;

#[derive(sqlx::FromRow)]
struct BookRow {
    id: i64,
    seller_id: i64,
    title: String,
    author: String,
    year: i32,
    count_pages: i32,
}

impl TryFrom<BookRow> for Book {
    type Error = BookError;

    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        Ok(Book {
            id: BookId(row.id),
            seller_id: SellerId(row.seller_id),
            title: BookTitle::new(row.title)?,
            author: AuthorName::new(row.author)?,
            year: row.year,
            count_pages: PageCount::new(row.count_pages)?,
        })
    }
}

fn map_write_error(e: sqlx::Error, seller_id: &SellerId) -> BookError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return BookError::SellerNotFound(seller_id.to_string());
        }
    }
    BookError::DatabaseError(e.to_string())
}

pub struct PostgresBookRepository {
    pool: PgPool,
}

impl PostgresBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PostgresBookRepository {
    async fn create(&self, book: NewBook) -> Result<Book, BookError> {
        let row: BookRow = sqlx::query_as(
            r#"
            INSERT INTO books_table (seller_id, title, author, year, count_pages)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, seller_id, title, author, year, count_pages
            "#,
        )
        .bind(book.seller_id.0)
        .bind(book.title.as_str())
        .bind(book.author.as_str())
        .bind(book.year)
        .bind(book.count_pages.get())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &book.seller_id))?;

        Book::try_from(row)
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError> {
        let row: Option<BookRow> = sqlx::query_as(
            r#"
            SELECT id, seller_id, title, author, year, count_pages
            FROM books_table
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        row.map(Book::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Book>, BookError> {
        let rows: Vec<BookRow> = sqlx::query_as(
            r#"
            SELECT id, seller_id, title, author, year, count_pages
            FROM books_table
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Book::try_from).collect()
    }

    async fn list_by_seller(&self, seller_id: &SellerId) -> Result<Vec<Book>, BookError> {
        let rows: Vec<BookRow> = sqlx::query_as(
            r#"
            SELECT id, seller_id, title, author, year, count_pages
            FROM books_table
            WHERE seller_id = $1
            ORDER BY id
            "#,
        )
        .bind(seller_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Book::try_from).collect()
    }

    async fn update(&self, book: Book) -> Result<Book, BookError> {
        let result = sqlx::query(
            r#"
            UPDATE books_table
            SET title = $2, author = $3, year = $4, count_pages = $5
            WHERE id = $1
            "#,
        )
        .bind(book.id.0)
        .bind(book.title.as_str())
        .bind(book.author.as_str())
        .bind(book.year)
        .bind(book.count_pages.get())
        .execute(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(BookError::NotFound(book.id.to_string()));
        }

        Ok(book)
    }

    async fn delete(&self, id: &BookId) -> Result<(), BookError> {
        let result = sqlx::query(
            r#"
            DELETE FROM books_table
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(BookError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
