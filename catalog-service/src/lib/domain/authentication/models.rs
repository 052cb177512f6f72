use crate::seller::models::SellerId;

/// Stored credential of a seller, as read from the credential store.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub seller_id: SellerId,
    /// Unique login identity (the seller's e-mail); the token subject
    pub identity_key: String,
    /// Argon2id PHC string
    pub secret_hash: String,
}

impl std::fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("seller_id", &self.seller_id)
            .field("identity_key", &self.identity_key)
            .field("secret_hash", &"<redacted>")
            .finish()
    }
}

/// The caller a request acts as, resolved from a validated token.
///
/// Inserted into request extensions by the bearer guard and handed to
/// resource operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub seller_id: SellerId,
    pub identity_key: String,
}

impl From<CredentialRecord> for Principal {
    fn from(record: CredentialRecord) -> Self {
        Self {
            seller_id: record.seller_id,
            identity_key: record.identity_key,
        }
    }
}
