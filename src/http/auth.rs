//! Bearer-token authentication.
//!
//! Token issuance is out of scope here: the service only maps a presented token to a
//! [`Principal`]. Routes receive the result as a [`Caller`], which is `None` for a missing,
//! malformed or unknown token. Whether `None` is acceptable is decided by each client's
//! access policy, not here.

use super::AppState;
use crate::lifecycle::TokenGrant;
use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use resource_framework::Principal;
use std::collections::HashMap;
use std::convert::Infallible;
use tracing::debug;

#[async_trait]
pub trait Authenticator: Send + Sync {
    /// The principal `token` stands for, if any.
    async fn authenticate(&self, token: &str) -> Option<Principal>;
}

/// Static token table from configuration.
#[derive(Debug, Clone, Default)]
pub struct TokenTable {
    tokens: HashMap<String, Principal>,
}

impl TokenTable {
    pub fn from_grants(grants: &[TokenGrant]) -> Self {
        let tokens = grants
            .iter()
            .map(|grant| (grant.token.clone(), grant.principal()))
            .collect();
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[async_trait]
impl Authenticator for TokenTable {
    async fn authenticate(&self, token: &str) -> Option<Principal> {
        self.tokens.get(token).copied()
    }
}

/// The principal behind the request's `Authorization: Bearer` header, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Caller(pub Option<Principal>);

impl Caller {
    pub fn principal(&self) -> Option<&Principal> {
        self.0.as_ref()
    }
}

#[async_trait]
impl FromRequestParts<AppState> for Caller {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty());

        let principal = match token {
            Some(token) => state.auth.authenticate(token).await,
            None => None,
        };
        debug!(authenticated = principal.is_some(), "Caller resolved");
        Ok(Caller(principal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_framework::Role;

    #[tokio::test]
    async fn token_table_resolves_known_tokens_only() {
        let table = TokenTable::from_grants(&[
            TokenGrant {
                token: "alice".into(),
                user_id: 1,
                role: Role::User,
            },
            TokenGrant {
                token: "root".into(),
                user_id: 99,
                role: Role::Admin,
            },
        ]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.authenticate("alice").await, Some(Principal::user(1)));
        assert_eq!(table.authenticate("root").await, Some(Principal::admin(99)));
        assert_eq!(table.authenticate("mallory").await, None);
    }
}
