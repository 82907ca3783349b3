//! Todo records and the service that owns them.

mod store;

use chrono::{DateTime, Utc};
use derive_more::derive::Display;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use self::store::TodoStore;

/// A todo's unique identifier. IDs are assigned in strictly increasing order and never reused
/// within the lifetime of the process.
#[derive(
    Display, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug,
)]
#[serde(transparent)]
pub struct TodoId(u64);

/// A single todo item.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// The todo's ID.
    pub id: TodoId,

    /// What needs doing. Never empty.
    pub title: String,

    /// Whether the todo has been done.
    pub is_completed: bool,

    /// When the todo was created.
    pub created_at: DateTime<Utc>,

    /// When the todo was created or last updated, whichever is later. Never earlier than
    /// `created_at`.
    pub updated_at: DateTime<Utc>,
}

/// A partial update to a [`Todo`]. Fields set to `None` are left unchanged.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub(crate) struct TodoPatch {
    /// The todo's new title.
    pub(crate) title: Option<String>,

    /// The todo's new completion state.
    pub(crate) is_completed: Option<bool>,
}

/// Creates, reads, updates, and removes todos held in process memory.
///
/// All access to the underlying store is serialized through a read/write lock, so concurrent
/// requests can't observe a half-applied mutation or be handed the same ID.
#[derive(Default, Debug)]
pub(crate) struct TodoService {
    /// The todos and the ID counter.
    store: RwLock<TodoStore>,
}

impl TodoService {
    /// Constructs a [`TodoService`] with no todos.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Creates a new incomplete todo with the next available ID.
    pub(crate) async fn create(&self, title: String) -> Todo {
        let todo = self.store.write().await.insert(title, Utc::now()).clone();

        tracing::debug!(id = %todo.id, "created todo");
        todo
    }

    /// Returns every todo in the order they were created.
    pub(crate) async fn list(&self) -> Vec<Todo> {
        self.store.read().await.iter().cloned().collect()
    }

    /// Returns the todo with the specified ID, if it exists.
    pub(crate) async fn get(&self, id: TodoId) -> Option<Todo> {
        self.store.read().await.get(id).cloned()
    }

    /// Applies a patch to the todo with the specified ID and refreshes its `updated_at`,
    /// returning the updated todo. Returns `None` if the todo doesn't exist.
    pub(crate) async fn update(&self, id: TodoId, patch: TodoPatch) -> Option<Todo> {
        let todo = self
            .store
            .write()
            .await
            .update(id, patch, Utc::now())
            .cloned()?;

        tracing::debug!(%id, "updated todo");
        Some(todo)
    }

    /// Removes the todo with the specified ID. Returns whether it existed.
    pub(crate) async fn remove(&self, id: TodoId) -> bool {
        let removed = self.store.write().await.remove(id).is_some();

        if removed {
            tracing::debug!(%id, "removed todo");
        }

        removed
    }
}
