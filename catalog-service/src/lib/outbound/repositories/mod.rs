pub mod book;
pub mod seller;

pub use book::PostgresBookRepository;
pub use seller::PostgresSellerRepository;
