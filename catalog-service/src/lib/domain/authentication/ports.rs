use async_trait::async_trait;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::CredentialRecord;
use crate::domain::authentication::models::Principal;

/// Login and token validation.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify a plaintext secret for `identity_key` and mint an access token.
    ///
    /// # Errors
    /// * `UnknownSubject` - No credential stored for this identity
    /// * `BadCredential` - Secret does not match, or the stored hash is unusable
    /// * `StoreUnavailable` - Credential store failed or timed out
    async fn authenticate(
        &self,
        identity_key: &str,
        plaintext: &str,
    ) -> Result<auth::IssuedToken, AuthError>;

    /// Validate a bearer token and resolve it to the current principal.
    ///
    /// Always consults the credential store: a principal deleted after the
    /// token was issued is rejected.
    ///
    /// # Errors
    /// * `Malformed` - Token cannot be parsed or has no subject
    /// * `BadSignature` - Token was not signed by this service with HS256
    /// * `Expired` - Token lifetime is over
    /// * `UnknownSubject` - Subject no longer exists
    /// * `StoreUnavailable` - Credential store failed or timed out
    async fn resolve_principal(&self, token: &str) -> Result<Principal, AuthError>;
}

/// Credential lookups backing authentication.
///
/// Implementations report their own failures as `StoreUnavailable`.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve the credential stored for `identity_key`.
    ///
    /// # Returns
    /// Optional record (None if no principal has this identity)
    async fn find_by_identity(
        &self,
        identity_key: &str,
    ) -> Result<Option<CredentialRecord>, AuthError>;
}
