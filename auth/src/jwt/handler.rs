use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::rand_core::RngCore;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// Length in bytes of a generated signing secret.
pub const GENERATED_SECRET_LEN: usize = 32;

/// JWT token handler for encoding and decoding access tokens.
///
/// Signs and verifies with HS256 only. The algorithm is fixed at
/// construction and never taken from the token: a header naming any other
/// algorithm is rejected even when its signature would verify.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtHandler {
    pub const ALGORITHM: Algorithm = Algorithm::HS256;

    /// Create a new JWT handler with a secret key.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - The handler keeps the only copy it needs; callers should drop theirs
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Self::ALGORITHM);
        // Expiry is checked against the caller's clock in `decode`, with zero leeway
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Generate a random signing secret from the OS RNG.
    pub fn generate_secret() -> [u8; GENERATED_SECRET_LEN] {
        let mut secret = [0u8; GENERATED_SECRET_LEN];
        OsRng.fill_bytes(&mut secret);
        secret
    }

    /// Encode claims into a signed JWT token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(Self::ALGORITHM);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a JWT token at time `now` (Unix seconds).
    ///
    /// # Errors
    /// * `Malformed` - Token structure, header, or claims cannot be parsed
    /// * `BadSignature` - Signature does not verify, or the header names another algorithm
    /// * `Expired` - `now` is at or past the `exp` claim
    /// * `MissingSubject` - Subject claim is absent or empty
    pub fn decode(&self, token: &str, now: i64) -> Result<Claims, JwtError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    JwtError::BadSignature
                }
                _ => JwtError::Malformed(e.to_string()),
            })?;

        let claims = token_data.claims;

        if claims.is_expired(now) {
            return Err(JwtError::Expired);
        }

        if claims.subject().is_none() {
            return Err(JwtError::MissingSubject);
        }

        Ok(claims)
    }
}
