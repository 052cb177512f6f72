use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::IssuedToken;
use chrono::Utc;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::CredentialRecord;
use crate::domain::authentication::models::Principal;
use crate::domain::authentication::ports::AuthServicePort;
use crate::domain::authentication::ports::CredentialStore;

/// Default upper bound on a single credential store call.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(2);

/// Authentication core bound to a credential store.
///
/// The authenticator (signing key, hashing cost, token lifetime) is shared
/// read-only; every call is independent and safe to run concurrently.
pub struct AuthService<CS>
where
    CS: CredentialStore,
{
    store: Arc<CS>,
    authenticator: Arc<Authenticator>,
    lookup_timeout: Duration,
}

impl<CS> AuthService<CS>
where
    CS: CredentialStore,
{
    /// Create a new auth service.
    ///
    /// # Arguments
    /// * `store` - Credential store adapter
    /// * `authenticator` - Hashing and token primitives configured at startup
    pub fn new(store: Arc<CS>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            store,
            authenticator,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    /// Bound every credential store call by `lookup_timeout`.
    pub fn with_lookup_timeout(mut self, lookup_timeout: Duration) -> Self {
        self.lookup_timeout = lookup_timeout;
        self
    }

    async fn find_record(&self, identity_key: &str) -> Result<Option<CredentialRecord>, AuthError> {
        tokio::time::timeout(self.lookup_timeout, self.store.find_by_identity(identity_key))
            .await
            .unwrap_or_else(|_| {
                Err(AuthError::StoreUnavailable(format!(
                    "credential lookup timed out after {}ms",
                    self.lookup_timeout.as_millis()
                )))
            })
            .inspect_err(|e| {
                if let AuthError::StoreUnavailable(reason) = e {
                    tracing::error!(reason = %reason, "Credential store unavailable");
                }
            })
    }
}

fn reject(err: AuthError, stage: &'static str) -> AuthError {
    tracing::warn!(stage, kind = err.kind(), "Authentication rejected");
    err
}

#[async_trait]
impl<CS> AuthServicePort for AuthService<CS>
where
    CS: CredentialStore,
{
    async fn authenticate(
        &self,
        identity_key: &str,
        plaintext: &str,
    ) -> Result<IssuedToken, AuthError> {
        let record = self
            .find_record(identity_key)
            .await?
            .ok_or_else(|| reject(AuthError::UnknownSubject, "login"))?;

        let authenticator = Arc::clone(&self.authenticator);
        let plaintext = plaintext.to_string();
        let issued_at = Utc::now();

        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(
                &plaintext,
                &record.secret_hash,
                &record.identity_key,
                issued_at,
            )
        })
        .await
        .map_err(|e| AuthError::Internal(format!("Password verification task failed: {}", e)))?;

        match result {
            Ok(token) => {
                tracing::info!(expires_at = %token.expires_at, "Access token issued");
                Ok(token)
            }
            Err(AuthenticationError::InvalidCredentials) => {
                Err(reject(AuthError::BadCredential, "login"))
            }
            Err(AuthenticationError::StoredHashInvalid(e)) => {
                tracing::warn!(error = %e, "Stored password hash is unusable");
                Err(reject(AuthError::BadCredential, "login"))
            }
            Err(AuthenticationError::JwtError(e)) => Err(AuthError::from(e)),
        }
    }

    async fn resolve_principal(&self, token: &str) -> Result<Principal, AuthError> {
        let claims = self
            .authenticator
            .validate_token(token)
            .map_err(|e| reject(AuthError::from(e), "token"))?;

        let subject = claims
            .subject()
            .ok_or_else(|| reject(AuthError::Malformed, "token"))?;

        let record = self
            .find_record(subject)
            .await?
            .ok_or_else(|| reject(AuthError::UnknownSubject, "token"))?;

        Ok(Principal::from(record))
    }
}
