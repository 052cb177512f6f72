//! Authentication primitives for the catalog service.
//!
//! - Password hashing (Argon2id, salted, cost fixed at construction)
//! - Access token minting and validation (JWT, HS256 pinned)
//! - Login coordination (verify, then mint)
//!
//! Nothing in this crate performs I/O. Looking up stored credentials and
//! resolving a token subject to a principal belong to the service that owns
//! the credential store.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//! use chrono::Utc;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash password
//! let hash = auth.hash_password("correct-horse").unwrap();
//!
//! // Login: verify and mint a token
//! let issued = auth
//!     .authenticate("correct-horse", &hash, "alice@example.com", Utc::now())
//!     .unwrap();
//!
//! // Every protected request: validate the token
//! let claims = auth.validate_token(&issued.access_token).unwrap();
//! assert_eq!(claims.subject(), Some("alice@example.com"));
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use authenticator::IssuedToken;
pub use authenticator::DEFAULT_TOKEN_TTL_MINUTES;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
