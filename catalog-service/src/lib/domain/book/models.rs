use std::fmt;

use crate::book::errors::BookError;
use crate::domain::fields::bounded_text;
use crate::domain::fields::FieldError;
use crate::seller::models::SellerId;

/// A book offered by a seller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub seller_id: SellerId,
    pub title: BookTitle,
    pub author: AuthorName,
    pub year: i32,
    pub count_pages: PageCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookId(pub i64);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Book title, 1-50 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookTitle(String);

impl BookTitle {
    const MAX_LENGTH: usize = 50;

    pub fn new(title: String) -> Result<Self, FieldError> {
        bounded_text("title", title, Self::MAX_LENGTH).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Author name, 1-100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorName(String);

impl AuthorName {
    const MAX_LENGTH: usize = 100;

    pub fn new(author: String) -> Result<Self, FieldError> {
        bounded_text("author", author, Self::MAX_LENGTH).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Number of pages; always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCount(i32);

impl PageCount {
    pub fn new(pages: i32) -> Result<Self, BookError> {
        if pages > 0 {
            Ok(Self(pages))
        } else {
            Err(BookError::InvalidPageCount(pages))
        }
    }

    pub fn get(&self) -> i32 {
        self.0
    }
}

/// Book about to be persisted; the id is assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub seller_id: SellerId,
    pub title: BookTitle,
    pub author: AuthorName,
    pub year: i32,
    pub count_pages: PageCount,
}

/// Command to create a new book listing
#[derive(Debug)]
pub struct CreateBookCommand {
    pub seller_id: SellerId,
    pub title: BookTitle,
    pub author: AuthorName,
    pub year: i32,
    pub count_pages: PageCount,
}

/// Command to replace a book's details. The owning seller does not change.
#[derive(Debug)]
pub struct UpdateBookCommand {
    pub title: BookTitle,
    pub author: AuthorName,
    pub year: i32,
    pub count_pages: PageCount,
}
