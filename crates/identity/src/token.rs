//! Session token issuance and verification.

use chalkboard_database::{IdentityError, IdentityResult};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Claims carried by a session token. The subject is the identity's
/// store-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

/// HS256 token issuer. The signing secret and token lifetime are injected
/// at construction; nothing here reads ambient process state.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
            ttl,
        }
    }

    /// Issue a signed token for the given identity id.
    pub fn issue(&self, subject: &str) -> IdentityResult<String> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| IdentityError::Token("system time before epoch".to_string()))?;
        let exp = now + self.ttl;

        let claims = Claims {
            sub: subject.to_string(),
            iat: now.as_secs() as usize,
            exp: exp.as_secs() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| IdentityError::Token(e.to_string()))
    }

    /// Validate a token's signature and expiry and return its claims.
    pub fn verify(&self, token: &str) -> IdentityResult<Claims> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| IdentityError::Token(e.to_string()))
    }
}
