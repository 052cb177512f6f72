use std::fmt;
use std::str::FromStr;

use crate::domain::fields::bounded_text;
use crate::domain::fields::FieldError;
use crate::seller::errors::EmailError;

/// Seller aggregate entity.
///
/// A registered seller. The e-mail address is the seller's login identity.
#[derive(Debug, Clone)]
pub struct Seller {
    pub id: SellerId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub e_mail: EmailAddress,
    pub password_hash: String,
}

/// Seller unique identifier type (assigned by the database)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SellerId(pub i64);

impl fmt::Display for SellerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// First or last name of a seller, 1-50 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    const MAX_LENGTH: usize = 50;

    pub fn new(name: String) -> Result<Self, FieldError> {
        bounded_text("name", name, Self::MAX_LENGTH).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    const MAX_LENGTH: usize = 50;

    /// Create a new validated email address.
    ///
    /// # Arguments
    /// * `email` - Raw email string
    ///
    /// # Returns
    /// Validated EmailAddress value object
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    /// * `TooLong` - Email longer than 50 characters
    pub fn new(email: String) -> Result<Self, EmailError> {
        let length = email.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Seller about to be persisted; the id is assigned on insert.
#[derive(Debug, Clone)]
pub struct NewSeller {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub e_mail: EmailAddress,
    pub password_hash: String,
}

/// Command to register a new seller with domain types
pub struct CreateSellerCommand {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub e_mail: EmailAddress,
    pub password: String,
}

impl CreateSellerCommand {
    /// Construct a new create seller command.
    ///
    /// # Arguments
    /// * `password` - Plain text password (will be hashed by service)
    pub fn new(
        first_name: PersonName,
        last_name: PersonName,
        e_mail: EmailAddress,
        password: String,
    ) -> Self {
        Self {
            first_name,
            last_name,
            e_mail,
            password,
        }
    }
}

impl fmt::Debug for CreateSellerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateSellerCommand")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("e_mail", &self.e_mail)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Command to replace a seller's profile, optionally with a new password.
pub struct UpdateSellerCommand {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub e_mail: EmailAddress,
    /// Plain text; hashed by the service before anything is written
    pub password: Option<String>,
}

impl fmt::Debug for UpdateSellerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateSellerCommand")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("e_mail", &self.e_mail)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Column values for a seller update, applied in one write.
///
/// `password_hash: None` leaves the stored hash untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellerUpdate {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub e_mail: EmailAddress,
    pub password_hash: Option<String>,
}
