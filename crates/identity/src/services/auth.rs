//! Login flow: credential verification and session token issuance.

use crate::password;
use crate::store::{IdentityRecord, IdentityStore};
use crate::token::TokenIssuer;
use chalkboard_database::{IdentityError, IdentityResult};

/// Authenticates identities of one kind and issues session tokens.
pub struct AuthService<S> {
    store: S,
    tokens: TokenIssuer,
}

impl<S: IdentityStore> AuthService<S> {
    pub fn new(store: S, tokens: TokenIssuer) -> Self {
        Self { store, tokens }
    }

    /// Verify an email/password pair and issue a token whose subject is
    /// the matched record's id.
    ///
    /// An unknown email and a wrong password are indistinguishable to the
    /// caller: both answer `InvalidCredentials`.
    pub async fn login(&self, email: &str, password: &str) -> IdentityResult<(S::Record, String)> {
        let record = match self.store.find_by_email(email).await? {
            Some(record) => record,
            None => return Err(IdentityError::InvalidCredentials),
        };

        if !password::verify_password(password, record.password_hash()) {
            return Err(IdentityError::InvalidCredentials);
        }

        let token = self.tokens.issue(record.id())?;

        tracing::info!(
            kind = self.store.kind().label(),
            id = record.id(),
            "login succeeded"
        );
        Ok((record, token))
    }

    pub fn tokens(&self) -> &TokenIssuer {
        &self.tokens
    }
}
