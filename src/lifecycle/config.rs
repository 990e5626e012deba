//! Service configuration, loaded from TOML.
//!
//! ```toml
//! bind_addr = "0.0.0.0:8000"
//! todo_store = "data/todos.json"
//! seed_books = true
//! channel_capacity = 64
//!
//! [[tokens]]
//! token = "alice-token"
//! user_id = 1
//! role = "user"
//!
//! [[tokens]]
//! token = "root-token"
//! user_id = 99
//! role = "admin"
//! ```
//!
//! Every key is optional; missing keys take the [`ServiceConfig::default`] values.

use resource_framework::{Principal, Role};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    /// Snapshot file for todos. Todos live in memory only when unset.
    pub todo_store: Option<PathBuf>,
    /// Start the books service with the starter catalogue.
    pub seed_books: bool,
    /// Request queue depth of each actor.
    pub channel_capacity: usize,
    pub tokens: Vec<TokenGrant>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            todo_store: None,
            seed_books: true,
            channel_capacity: 32,
            tokens: Vec::new(),
        }
    }
}

/// A bearer token and the principal it stands for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenGrant {
    pub token: String,
    pub user_id: u32,
    #[serde(default = "default_role")]
    pub role: Role,
}

fn default_role() -> Role {
    Role::User
}

impl TokenGrant {
    pub fn principal(&self) -> Principal {
        Principal {
            id: self.user_id,
            role: self.role,
        }
    }
}

impl ServiceConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_capacity == 0 {
            return Err(ConfigError::Invalid(
                "channel_capacity must be greater than 0".to_string(),
            ));
        }
        let mut seen = std::collections::HashSet::new();
        for grant in &self.tokens {
            if grant.token.is_empty() {
                return Err(ConfigError::Invalid("tokens must not be empty".to_string()));
            }
            if !seen.insert(grant.token.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "token for user {} is listed twice",
                    grant.user_id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = ServiceConfig::default();
        assert_eq!(c.bind_addr, "127.0.0.1:8000".parse::<SocketAddr>().unwrap());
        assert!(c.seed_books);
        assert_eq!(c.channel_capacity, 32);
        assert!(c.todo_store.is_none());
        assert!(c.tokens.is_empty());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let c = ServiceConfig::from_toml_str(
            r#"
            todo_store = "todos.json"

            [[tokens]]
            token = "t1"
            user_id = 1

            [[tokens]]
            token = "t2"
            user_id = 2
            role = "admin"
            "#,
        )
        .unwrap();
        assert_eq!(c.todo_store, Some(PathBuf::from("todos.json")));
        assert!(c.seed_books);
        assert_eq!(c.tokens[0].principal(), Principal::user(1));
        assert_eq!(c.tokens[1].principal(), Principal::admin(2));
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let err = ServiceConfig::from_toml_str("channel_capacity = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn duplicate_tokens_are_rejected() {
        let err = ServiceConfig::from_toml_str(
            r#"
            [[tokens]]
            token = "same"
            user_id = 1

            [[tokens]]
            token = "same"
            user_id = 2
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn unknown_role_is_a_parse_error() {
        let err = ServiceConfig::from_toml_str(
            r#"
            [[tokens]]
            token = "t"
            user_id = 1
            role = "superuser"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = ServiceConfig::load(Path::new("/nonexistent/service.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/service.toml"));
    }
}
