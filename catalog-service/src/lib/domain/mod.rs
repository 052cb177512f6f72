pub mod authentication;
pub mod book;
pub mod fields;
pub mod seller;
