//! Payload constraints checked at the service boundary.
//!
//! Every request body and path id is validated here before it is sent to an actor, so a
//! malformed request never touches a store.

use resource_framework::Patch;
use std::fmt::Display;
use std::ops::RangeInclusive;
use thiserror::Error;

/// A single field that failed its constraint.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Text whose length in characters falls inside `bounds`.
pub fn text_len(
    field: &'static str,
    value: &str,
    bounds: RangeInclusive<usize>,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if bounds.contains(&len) {
        return Ok(());
    }
    let reason = if *bounds.end() == usize::MAX {
        format!("must be at least {} characters", bounds.start())
    } else {
        format!(
            "must be between {} and {} characters",
            bounds.start(),
            bounds.end()
        )
    };
    Err(ValidationError::new(field, reason))
}

/// A number inside `bounds`.
pub fn in_range<N>(
    field: &'static str,
    value: N,
    bounds: RangeInclusive<N>,
) -> Result<(), ValidationError>
where
    N: PartialOrd + Display,
{
    if bounds.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new(
            field,
            format!("must be between {} and {}", bounds.start(), bounds.end()),
        ))
    }
}

/// Path and body ids start at 1.
pub fn positive_id(field: &'static str, id: impl Into<u32>) -> Result<(), ValidationError> {
    if id.into() > 0 {
        Ok(())
    } else {
        Err(ValidationError::new(field, "must be greater than 0"))
    }
}

/// Run `check` on a present value. Absent passes; `null` is refused because every
/// patchable field is required on the record.
pub fn patched<T>(
    field: &'static str,
    patch: &Patch<T>,
    check: impl FnOnce(&T) -> Result<(), ValidationError>,
) -> Result<(), ValidationError> {
    match patch {
        Patch::Absent => Ok(()),
        Patch::Null => Err(ValidationError::new(field, "must not be null")),
        Patch::Value(value) => check(value),
    }
}
