//! # Access Control
//!
//! Access is decided once per call, before the request reaches the actor. A policy turns the
//! acting [`Principal`] into a [`Filter`] (the rows that principal may see) or refuses with
//! [`FrameworkError::Unauthorized`]. The actor applies the filter when it locates rows, so a
//! row outside the filter behaves exactly like a missing row: invisible to `list`, and
//! `NotFound` for `get`, `update` and `delete`.
//!
//! Because the policy runs first, an unauthorized caller is refused even when the target id
//! does not exist.

use crate::error::FrameworkError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// The authenticated actor issuing a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: u32,
    pub role: Role,
}

impl Principal {
    pub fn user(id: u32) -> Self {
        Self {
            id,
            role: Role::User,
        }
    }

    pub fn admin(id: u32) -> Self {
        Self {
            id,
            role: Role::Admin,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// A row predicate shipped to the actor with a request.
pub struct Filter<T>(Arc<dyn Fn(&T) -> bool + Send + Sync>);

impl<T: 'static> Filter<T> {
    pub fn new(predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(predicate))
    }

    /// Matches every row.
    pub fn all() -> Self {
        Self::new(|_| true)
    }

    pub fn matches(&self, item: &T) -> bool {
        (self.0)(item)
    }

    pub fn and(self, other: Filter<T>) -> Self {
        Self::new(move |item| self.matches(item) && other.matches(item))
    }
}

impl<T> Clone for Filter<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Filter")
    }
}

/// Records that belong to a principal.
pub trait Owned {
    fn owner_id(&self) -> u32;
}

/// Turns a principal into the set of rows it may act on.
pub trait AccessPolicy<T>: Send + Sync {
    fn scope(&self, principal: Option<&Principal>) -> Result<Filter<T>, FrameworkError>;
}

/// Everyone sees everything, anonymous callers included.
#[derive(Debug, Clone, Copy, Default)]
pub struct Public;

impl<T: 'static> AccessPolicy<T> for Public {
    fn scope(&self, _principal: Option<&Principal>) -> Result<Filter<T>, FrameworkError> {
        Ok(Filter::all())
    }
}

/// Authenticated principals see only the rows they own, whatever their role.
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnerOnly;

impl<T: Owned + 'static> AccessPolicy<T> for OwnerOnly {
    fn scope(&self, principal: Option<&Principal>) -> Result<Filter<T>, FrameworkError> {
        let principal = principal.ok_or_else(|| {
            FrameworkError::Unauthorized("Could not validate user".to_string())
        })?;
        let owner = principal.id;
        Ok(Filter::new(move |item: &T| item.owner_id() == owner))
    }
}

/// Admins see every row; everyone else is refused.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdminOnly;

impl<T: 'static> AccessPolicy<T> for AdminOnly {
    fn scope(&self, principal: Option<&Principal>) -> Result<Filter<T>, FrameworkError> {
        match principal {
            Some(p) if p.is_admin() => Ok(Filter::all()),
            _ => Err(FrameworkError::Unauthorized(
                "Authentication failed or insufficient permissions".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        owner: u32,
    }

    impl Owned for Row {
        fn owner_id(&self) -> u32 {
            self.owner
        }
    }

    #[test]
    fn public_allows_anonymous() {
        let filter: Filter<Row> = Public.scope(None).unwrap();
        assert!(filter.matches(&Row { owner: 9 }));
    }

    #[test]
    fn owner_only_filters_by_principal() {
        let alice = Principal::user(1);
        let filter: Filter<Row> = OwnerOnly.scope(Some(&alice)).unwrap();
        assert!(filter.matches(&Row { owner: 1 }));
        assert!(!filter.matches(&Row { owner: 2 }));
    }

    #[test]
    fn owner_only_does_not_widen_for_admins() {
        let root = Principal::admin(1);
        let filter: Filter<Row> = OwnerOnly.scope(Some(&root)).unwrap();
        assert!(!filter.matches(&Row { owner: 2 }));
    }

    #[test]
    fn owner_only_requires_a_principal() {
        let result: Result<Filter<Row>, _> = OwnerOnly.scope(None);
        assert!(matches!(result, Err(FrameworkError::Unauthorized(_))));
    }

    #[test]
    fn admin_only_refuses_users_and_anonymous() {
        let user = Principal::user(1);
        let as_user: Result<Filter<Row>, _> = AdminOnly.scope(Some(&user));
        let anonymous: Result<Filter<Row>, _> = AdminOnly.scope(None);
        assert!(matches!(as_user, Err(FrameworkError::Unauthorized(_))));
        assert!(matches!(anonymous, Err(FrameworkError::Unauthorized(_))));

        let root = Principal::admin(7);
        let filter: Filter<Row> = AdminOnly.scope(Some(&root)).unwrap();
        assert!(filter.matches(&Row { owner: 1 }));
    }

    #[test]
    fn filters_compose() {
        let filter =
            Filter::new(|row: &Row| row.owner > 1).and(Filter::new(|row: &Row| row.owner < 4));
        assert!(filter.matches(&Row { owner: 3 }));
        assert!(!filter.matches(&Row { owner: 4 }));
    }
}
