//! # Sparse Patch Fields
//!
//! A [`Patch<T>`] is one field of an update payload. It keeps three states apart:
//!
//! | JSON            | Patch          | Meaning                  |
//! |-----------------|----------------|--------------------------|
//! | field missing   | `Absent`       | leave the value unchanged |
//! | `null`          | `Null`         | caller asked to clear it |
//! | a value         | `Value(v)`     | overwrite with `v`       |
//!
//! Use it with `#[serde(default)]` so a missing field deserializes to `Absent`:
//!
//! ```rust
//! use resource_framework::Patch;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct TitlePatch {
//!     #[serde(default)]
//!     title: Patch<String>,
//! }
//!
//! let absent: TitlePatch = serde_json::from_str("{}").unwrap();
//! assert!(absent.title.is_absent());
//!
//! let null: TitlePatch = serde_json::from_str(r#"{"title":null}"#).unwrap();
//! assert!(null.title.is_null());
//!
//! let mut title = String::from("old");
//! let set: TitlePatch = serde_json::from_str(r#"{"title":"new"}"#).unwrap();
//! set.title.apply_to(&mut title);
//! assert_eq!(title, "new");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Patch::Null)
    }

    /// The present value, if any.
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Overwrite `target` when a value is present.
    ///
    /// `Null` leaves a required field untouched; reject it before merging if that matters.
    /// Returns whether `target` changed.
    pub fn apply_to(self, target: &mut T) -> bool {
        match self {
            Patch::Value(v) => {
                *target = v;
                true
            }
            Patch::Absent | Patch::Null => false,
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Patch::Value(v) => serializer.serialize_some(v),
            Patch::Absent | Patch::Null => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    struct Sample {
        #[serde(default, skip_serializing_if = "Patch::is_absent")]
        name: Patch<String>,
        #[serde(default, skip_serializing_if = "Patch::is_absent")]
        rating: Patch<u8>,
    }

    #[test]
    fn missing_null_and_value_stay_distinct() {
        let sample: Sample = serde_json::from_str(r#"{"name":null,"rating":4}"#).unwrap();
        assert!(sample.name.is_null());
        assert_eq!(sample.rating, Patch::Value(4));

        let empty: Sample = serde_json::from_str("{}").unwrap();
        assert!(empty.name.is_absent());
        assert!(empty.rating.is_absent());
    }

    #[test]
    fn apply_only_overwrites_values() {
        let mut name = String::from("kept");
        assert!(!Patch::Absent.apply_to(&mut name));
        assert!(!Patch::Null.apply_to(&mut name));
        assert_eq!(name, "kept");

        assert!(Patch::Value("changed".to_string()).apply_to(&mut name));
        assert_eq!(name, "changed");
    }

    #[test]
    fn absent_fields_are_skipped_when_serializing() {
        let sample = Sample {
            name: Patch::Absent,
            rating: Patch::Value(2),
        };
        assert_eq!(serde_json::to_string(&sample).unwrap(), r#"{"rating":2}"#);
    }
}
