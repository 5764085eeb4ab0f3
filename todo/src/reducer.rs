//! Reducer logic for the todo editor.
//!
//! Validates each intent against the current list and edit cursor, then
//! applies it. A rejected intent leaves the state untouched.

use crate::error::PreconditionError;
use crate::types::{TodoAction, TodoIcon, TodoItem, TodoState};
use std::sync::Arc;
use todo_editor_core::{
    SmallVec, effect::Effect, environment::RandomSource, reducer::Reducer, smallvec,
};

/// Tasks used by [`TodoAction::AddRandomItem`]
pub const SAMPLE_TASKS: [&str; 9] = [
    "Learn compose",
    "Learn state",
    "Build dynamic UIs",
    "Learn Unidirectional Data Flow",
    "Integrate LiveData",
    "Integrate ViewModel",
    "Remember to savedState!",
    "Build stateless composables",
    "Use state from stateless composables",
];

/// Environment dependencies for the todo reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Randomness for sample items
    pub random: Arc<dyn RandomSource>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Builds a sample item from the catalogue
    ///
    /// Out-of-range indexes from the random source wrap around.
    #[must_use]
    pub fn random_item(&self) -> TodoItem {
        let task = SAMPLE_TASKS[self.pick(SAMPLE_TASKS.len())];
        let icon = TodoIcon::ALL[self.pick(TodoIcon::ALL.len())];
        TodoItem::new(task, icon)
    }

    fn pick(&self, len: usize) -> usize {
        self.random.index(len) % len
    }
}

type Effects = SmallVec<[Effect<TodoAction>; 4]>;

/// Reducer for the todo editor
#[derive(Clone, Debug)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates an `AddItem` command
    fn validate_add_item(state: &TodoState, item: &TodoItem) -> Result<(), PreconditionError> {
        if state.exists(&item.id) {
            return Err(PreconditionError::DuplicateId(item.id.clone()));
        }

        Ok(())
    }

    /// Validates an `EditItemChange` command
    fn validate_edit_change(state: &TodoState, item: &TodoItem) -> Result<(), PreconditionError> {
        let Some(current) = state.current_edit_item() else {
            return Err(PreconditionError::NoCurrentEditItem);
        };

        if current.id != item.id {
            return Err(PreconditionError::IdMismatch {
                expected: current.id.clone(),
                actual: item.id.clone(),
            });
        }

        Ok(())
    }

    /// Clears the edit cursor. Returns whether something was under edit.
    fn finish_edit(state: &mut TodoState) -> bool {
        let was_editing = state.editing_id().is_some();
        state.set_editing(None);
        was_editing
    }
}

impl Default for TodoReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;
    type Error = PreconditionError;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Result<Effects, Self::Error> {
        match action {
            // ========== List ==========
            TodoAction::AddItem { item } => {
                Self::validate_add_item(state, &item)?;

                tracing::debug!(id = %item.id, task = %item.task, "Adding item");
                state.push(item);

                Ok(SmallVec::new())
            },

            TodoAction::AddRandomItem => {
                let item = env.random_item();
                tracing::debug!(id = %item.id, task = %item.task, "Generated sample item");

                Ok(smallvec![Effect::send(TodoAction::AddItem { item })])
            },

            TodoAction::RemoveItem { item } => {
                let Some(removed) = state.remove(&item.id) else {
                    tracing::debug!(id = %item.id, "Item to remove not found");
                    return Ok(SmallVec::new());
                };

                tracing::debug!(id = %removed.id, "Removed item");
                if state.editing_id() == Some(&removed.id) {
                    // Don't leave the editor open on a removed item.
                    Self::finish_edit(state);
                    tracing::debug!(id = %removed.id, "Closed editor of removed item");
                }

                Ok(SmallVec::new())
            },

            // ========== Editing ==========
            TodoAction::EditItemSelected { item } => {
                if state.exists(&item.id) {
                    tracing::debug!(id = %item.id, "Editing item");
                    state.set_editing(Some(item.id));
                } else {
                    // Not found collapses into no selection.
                    tracing::debug!(id = %item.id, "Selected item not in list, clearing edit cursor");
                    state.set_editing(None);
                }

                Ok(SmallVec::new())
            },

            TodoAction::EditItemChange { item } => {
                Self::validate_edit_change(state, &item)?;

                let id = item.id.clone();
                if !state.replace(item) {
                    tracing::error!(%id, "Validated edit target disappeared from the list");
                }

                Ok(SmallVec::new())
            },

            TodoAction::EditDone => {
                if Self::finish_edit(state) {
                    tracing::debug!("Edit finished");
                }

                Ok(SmallVec::new())
            },
        }
    }
}
