//! [`ActorEntity`] and [`Owned`] implementations for the [`Todo`] domain type.

use crate::model::{NewTodo, Todo, TodoId, TodoPatch};
use crate::todo_actor::TodoError;
use async_trait::async_trait;
use resource_framework::{ActorEntity, Owned};

#[async_trait]
impl ActorEntity for Todo {
    type Id = TodoId;
    type Create = NewTodo;
    type Patch = TodoPatch;
    type Context = ();
    type Error = TodoError;

    fn id(&self) -> TodoId {
        self.id
    }

    fn from_create_params(id: TodoId, params: NewTodo) -> Result<Self, Self::Error> {
        let NewTodo { owner_id, todo } = params;
        Ok(Self {
            id,
            title: todo.title,
            description: todo.description,
            priority: todo.priority,
            complete: todo.complete,
            owner_id,
        })
    }

    /// The owner is not patchable; a todo stays with whoever created it.
    async fn on_update(&mut self, patch: TodoPatch, _ctx: &()) -> Result<(), Self::Error> {
        patch.title.apply_to(&mut self.title);
        patch.description.apply_to(&mut self.description);
        patch.priority.apply_to(&mut self.priority);
        patch.complete.apply_to(&mut self.complete);
        Ok(())
    }
}

impl Owned for Todo {
    fn owner_id(&self) -> u32 {
        self.owner_id
    }
}
