use super::validation::{in_range, patched, text_len, ValidationError};
use resource_framework::Patch;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

const TITLE: RangeInclusive<usize> = 3..=usize::MAX;
const DESCRIPTION: RangeInclusive<usize> = 3..=100;
const PRIORITY: RangeInclusive<u8> = 1..=5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u32);

impl From<u32> for TodoId {
    fn from(id: u32) -> Self {
        TodoId(id)
    }
}

impl From<TodoId> for u32 {
    fn from(id: TodoId) -> Self {
        id.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A todo item owned by one user.
///
/// See [`impl ActorEntity for Todo`](#impl-ActorEntity-for-Todo) for details on:
/// - Creation parameters ([`NewTodo`])
/// - Patch parameters ([`TodoPatch`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: String,
    pub priority: u8,
    #[serde(rename = "is_complete")]
    pub complete: bool,
    pub owner_id: u32,
}

/// Request body for creating a todo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TodoCreate {
    pub title: String,
    pub description: String,
    pub priority: u8,
    #[serde(default, rename = "is_complete")]
    pub complete: bool,
}

impl TodoCreate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        text_len("title", &self.title, TITLE)?;
        text_len("description", &self.description, DESCRIPTION)?;
        in_range("priority", self.priority, PRIORITY)
    }
}

/// A validated create request bound to its owner.
///
/// The owner always comes from the authenticated principal, never from the body.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTodo {
    pub owner_id: u32,
    pub todo: TodoCreate,
}

/// Sparse changes to a todo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TodoPatch {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub title: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub description: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub priority: Patch<u8>,
    #[serde(
        default,
        rename = "is_complete",
        skip_serializing_if = "Patch::is_absent"
    )]
    pub complete: Patch<bool>,
}

impl TodoPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        patched("title", &self.title, |v| text_len("title", v, TITLE))?;
        patched("description", &self.description, |v| {
            text_len("description", v, DESCRIPTION)
        })?;
        patched("priority", &self.priority, |v| in_range("priority", *v, PRIORITY))?;
        patched("is_complete", &self.complete, |_| Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_defaults_to_false() {
        let body = r#"{"title": "Buy milk", "description": "Two litres", "priority": 2}"#;
        let create: TodoCreate = serde_json::from_str(body).unwrap();
        assert!(!create.complete);
        assert!(create.validate().is_ok());
    }

    #[test]
    fn create_constraints() {
        let ok = TodoCreate {
            title: "Buy milk".into(),
            description: "Two litres".into(),
            priority: 3,
            complete: false,
        };
        assert!(ok.validate().is_ok());

        let short = TodoCreate {
            description: "ab".into(),
            ..ok.clone()
        };
        assert_eq!(short.validate().unwrap_err().field, "description");

        let urgent = TodoCreate {
            priority: 6,
            ..ok.clone()
        };
        assert_eq!(urgent.validate().unwrap_err().field, "priority");
    }

    #[test]
    fn patch_rejects_null_complete() {
        let patch: TodoPatch = serde_json::from_str(r#"{"is_complete": null}"#).unwrap();
        assert_eq!(patch.validate().unwrap_err().field, "is_complete");

        let patch: TodoPatch = serde_json::from_str(r#"{"is_complete": true}"#).unwrap();
        assert!(patch.validate().is_ok());
        assert!(patch.title.is_absent());
    }

    #[test]
    fn is_complete_is_the_wire_name() {
        let body = r#"{"title": "Learn", "description": "Every day", "priority": 5, "is_complete": true}"#;
        let create: TodoCreate = serde_json::from_str(body).unwrap();
        assert!(create.complete);

        let todo = Todo {
            id: TodoId(1),
            title: create.title,
            description: create.description,
            priority: create.priority,
            complete: create.complete,
            owner_id: 1,
        };
        let value = serde_json::to_value(&todo).unwrap();
        assert_eq!(value["is_complete"], true);
        assert!(value.get("complete").is_none());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let body = r#"{"title": "Learn", "description": "Every day", "priority": 5, "complete": true}"#;
        assert!(serde_json::from_str::<TodoCreate>(body).is_err());
        assert!(serde_json::from_str::<TodoPatch>(r#"{"owner_id": 2}"#).is_err());
    }
}
