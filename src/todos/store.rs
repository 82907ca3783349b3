//! See [`TodoStore`].

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::{Todo, TodoId, TodoPatch};

/// An in-memory collection of todos plus the counter new IDs are taken from.
///
/// Todos are keyed by ID. Since IDs are only ever handed out in increasing order, iterating the
/// map in key order is the same as iterating in insertion order.
#[derive(Debug)]
pub(super) struct TodoStore {
    /// Every todo that hasn't been removed.
    todos: BTreeMap<TodoId, Todo>,

    /// The ID the next inserted todo will get. Never decreases, even when todos are removed.
    next_id: u64,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self {
            todos: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl TodoStore {
    /// Inserts a new incomplete todo with the next ID, returning a reference to it.
    pub(super) fn insert(&mut self, title: String, now: DateTime<Utc>) -> &Todo {
        let id = TodoId(self.next_id);
        self.next_id += 1;

        self.todos.entry(id).or_insert(Todo {
            id,
            title,
            is_completed: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Iterates over all todos in insertion order.
    pub(super) fn iter(&self) -> impl Iterator<Item = &Todo> {
        self.todos.values()
    }

    /// Gets the todo with the specified ID.
    pub(super) fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.get(&id)
    }

    /// Applies a patch to the todo with the specified ID and sets its `updated_at` to `now`.
    ///
    /// If `now` is earlier than the todo's `created_at` (e.g. the system clock went backwards),
    /// `updated_at` is set to `created_at` instead.
    pub(super) fn update(
        &mut self,
        id: TodoId,
        patch: TodoPatch,
        now: DateTime<Utc>,
    ) -> Option<&Todo> {
        let todo = self.todos.get_mut(&id)?;

        if let Some(title) = patch.title {
            todo.title = title;
        }

        if let Some(is_completed) = patch.is_completed {
            todo.is_completed = is_completed;
        }

        todo.updated_at = now.max(todo.created_at);

        Some(&*todo)
    }

    /// Removes the todo with the specified ID, returning it if it existed.
    pub(super) fn remove(&mut self, id: TodoId) -> Option<Todo> {
        self.todos.remove(&id)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::*;

    /// Returns a fixed point in time plus the specified number of seconds.
    fn at(seconds: i64) -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(1_700_000_000 + seconds)
    }

    /// Returns the IDs of every todo in the store, in iteration order.
    fn ids(store: &TodoStore) -> Vec<u64> {
        store.iter().map(|todo| todo.id.0).collect()
    }

    #[test]
    fn insert_assigns_increasing_ids() {
        let mut store = TodoStore::default();

        let first = store.insert("buy milk".into(), at(0)).clone();
        let second = store.insert("walk dog".into(), at(1)).clone();

        assert_eq!(first.id, TodoId(1), "IDs should start at 1");
        assert_eq!(second.id, TodoId(2), "IDs should increase by 1");
        assert!(!first.is_completed, "new todos should be incomplete");
        assert_eq!(first.created_at, at(0), "`created_at` should be the insertion time");
        assert_eq!(
            first.updated_at, first.created_at,
            "`updated_at` should start equal to `created_at`"
        );
    }

    #[test]
    fn ids_are_never_reused_after_removal() {
        let mut store = TodoStore::default();

        for i in 0..3 {
            store.insert(format!("todo {i}"), at(i));
        }

        assert!(store.remove(TodoId(3)).is_some(), "todo 3 should exist");
        assert!(store.remove(TodoId(1)).is_some(), "todo 1 should exist");

        let next = store.insert("after removal".into(), at(10)).id;

        assert_eq!(next, TodoId(4), "removed IDs shouldn't be reused");
        assert_eq!(ids(&store), [2, 4], "remaining todos should keep their order");
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut store = TodoStore::default();

        for i in 0..5 {
            store.insert(format!("todo {i}"), at(i));
        }

        store.update(
            TodoId(2),
            TodoPatch {
                title: Some("renamed".into()),
                is_completed: Some(true),
            },
            at(100),
        );

        assert_eq!(ids(&store), [1, 2, 3, 4, 5], "updates shouldn't reorder todos");
    }

    #[test]
    fn update_applies_only_present_fields() {
        let mut store = TodoStore::default();
        store.insert("buy milk".into(), at(0));

        let todo = store
            .update(
                TodoId(1),
                TodoPatch {
                    is_completed: Some(true),
                    ..TodoPatch::default()
                },
                at(5),
            )
            .expect("todo should exist");

        assert_eq!(todo.title, "buy milk", "title should be unchanged");
        assert!(todo.is_completed, "completion should be updated");
        assert_eq!(todo.updated_at, at(5), "`updated_at` should be refreshed");
        assert_eq!(todo.created_at, at(0), "`created_at` should never change");
    }

    #[test]
    fn empty_patch_still_refreshes_updated_at() {
        let mut store = TodoStore::default();
        let original = store.insert("buy milk".into(), at(0)).clone();

        let todo = store
            .update(TodoId(1), TodoPatch::default(), at(30))
            .expect("todo should exist");

        assert_eq!(todo.title, original.title, "title should be unchanged");
        assert_eq!(
            todo.is_completed, original.is_completed,
            "completion should be unchanged"
        );
        assert_eq!(todo.updated_at, at(30), "`updated_at` should be refreshed");
    }

    #[test]
    fn updated_at_never_precedes_created_at() {
        let mut store = TodoStore::default();
        store.insert("buy milk".into(), at(60));

        let todo = store
            .update(TodoId(1), TodoPatch::default(), at(0))
            .expect("todo should exist");

        assert_eq!(
            todo.updated_at, todo.created_at,
            "a clock going backwards shouldn't put `updated_at` before `created_at`"
        );
    }

    #[test]
    fn missing_todos_are_not_found() {
        let mut store = TodoStore::default();
        store.insert("buy milk".into(), at(0));

        assert!(store.get(TodoId(99)).is_none(), "todo 99 shouldn't exist");
        assert!(
            store
                .update(TodoId(99), TodoPatch::default(), at(1))
                .is_none(),
            "todo 99 shouldn't be updatable"
        );
        assert!(store.remove(TodoId(99)).is_none(), "todo 99 shouldn't be removable");
        assert!(store.remove(TodoId(1)).is_some(), "todo 1 should be removable");
        assert!(store.get(TodoId(1)).is_none(), "todo 1 should be gone after removal");
    }
}
