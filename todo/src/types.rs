//! Domain types for the todo editor.
//!
//! A todo list is an ordered collection of items plus an edit cursor naming
//! the single item (if any) currently open in the inline editor.

use crate::error::PreconditionError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Unique identifier for a todo item
///
/// Assigned once when the item is built and never reused.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Creates a new random `TodoId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Icon attached to a todo item
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TodoIcon {
    /// Plain square
    #[default]
    Square,
    /// Check mark
    Done,
    /// Calendar
    Event,
    /// Privacy shield
    Privacy,
    /// Smiling face
    Happy,
}

impl TodoIcon {
    /// Every icon, in picker order
    pub const ALL: [Self; 5] = [
        Self::Square,
        Self::Done,
        Self::Event,
        Self::Privacy,
        Self::Happy,
    ];

    /// Identifier of the glyph drawn for this icon
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Square => "crop_square",
            Self::Done => "done",
            Self::Event => "event",
            Self::Privacy => "privacy_tip",
            Self::Happy => "sentiment_satisfied",
        }
    }

    /// Identifier of the accessibility description for this icon
    #[must_use]
    pub const fn content_description(self) -> &'static str {
        match self {
            Self::Square => "cd_expand",
            Self::Done => "cd_done",
            Self::Event => "cd_event",
            Self::Privacy => "cd_privacy",
            Self::Happy => "cd_happy",
        }
    }

    /// Short marker used by the console renderer
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Square => "[ ]",
            Self::Done => "[x]",
            Self::Event => "(@)",
            Self::Privacy => "(!)",
            Self::Happy => "(:)",
        }
    }
}

/// A single todo item
///
/// Items are values: editing produces a new item with the same `id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// Task text, possibly empty
    pub task: String,
    /// Icon shown next to the task
    pub icon: TodoIcon,
}

impl TodoItem {
    /// Creates a new todo item with a fresh id
    #[must_use]
    pub fn new(task: impl Into<String>, icon: TodoIcon) -> Self {
        Self {
            id: TodoId::new(),
            task: task.into(),
            icon,
        }
    }

    /// Creates a new todo item with a fresh id and the default icon
    #[must_use]
    pub fn with_default_icon(task: impl Into<String>) -> Self {
        Self::new(task, TodoIcon::default())
    }

    /// Copy of this item with different task text
    #[must_use]
    pub fn with_task(&self, task: impl Into<String>) -> Self {
        Self {
            id: self.id.clone(),
            task: task.into(),
            icon: self.icon,
        }
    }

    /// Copy of this item with a different icon
    #[must_use]
    pub fn with_icon(&self, icon: TodoIcon) -> Self {
        Self {
            id: self.id.clone(),
            task: self.task.clone(),
            icon,
        }
    }
}

/// State of the todo editor
///
/// Only [`crate::TodoReducer`] mutates it. The edit cursor is keyed by id and
/// resolved to a position on demand, so it cannot drift when the list
/// changes shape.
///
/// Deserializing goes through the same checks as [`TodoState::with_items`]:
/// duplicate ids are dropped, and a cursor naming no item is refused.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTodoState")]
pub struct TodoState {
    items: Vec<TodoItem>,
    editing: Option<TodoId>,
}

/// Unchecked wire form of [`TodoState`]
#[derive(Deserialize)]
struct RawTodoState {
    items: Vec<TodoItem>,
    #[serde(default)]
    editing: Option<TodoId>,
}

impl TryFrom<RawTodoState> for TodoState {
    type Error = PreconditionError;

    fn try_from(raw: RawTodoState) -> Result<Self, Self::Error> {
        let mut state = Self::with_items(raw.items);
        if let Some(id) = raw.editing {
            if !state.exists(&id) {
                return Err(PreconditionError::DanglingEditCursor(id));
            }
            state.editing = Some(id);
        }
        Ok(state)
    }
}

impl TodoState {
    /// Creates a new empty todo state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            editing: None,
        }
    }

    /// Creates a state holding `items` with nothing under edit
    ///
    /// Later duplicates of an id are dropped so ids stay unique.
    #[must_use]
    pub fn with_items(items: impl IntoIterator<Item = TodoItem>) -> Self {
        let mut seen = HashSet::new();
        let items = items
            .into_iter()
            .filter(|item| seen.insert(item.id.clone()))
            .collect();
        Self {
            items,
            editing: None,
        }
    }

    /// All items in display order
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Returns the number of items
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns true when the list has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an item by ID
    #[must_use]
    pub fn get(&self, id: &TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == *id)
    }

    /// Position of the item with `id`
    #[must_use]
    pub fn position(&self, id: &TodoId) -> Option<usize> {
        self.items.iter().position(|item| item.id == *id)
    }

    /// Checks if an item exists
    #[must_use]
    pub fn exists(&self, id: &TodoId) -> bool {
        self.position(id).is_some()
    }

    /// Id of the item under edit
    #[must_use]
    pub const fn editing_id(&self) -> Option<&TodoId> {
        self.editing.as_ref()
    }

    /// The item currently under edit, if any
    ///
    /// A cursor naming an id that is not in the list is an invariant
    /// violation; it is logged and reported as no selection.
    #[must_use]
    pub fn current_edit_item(&self) -> Option<&TodoItem> {
        let id = self.editing.as_ref()?;
        let item = self.get(id);
        if item.is_none() {
            tracing::error!(%id, "Edit cursor points at an item that is not in the list");
        }
        item
    }

    pub(crate) fn push(&mut self, item: TodoItem) {
        self.items.push(item);
    }

    pub(crate) fn remove(&mut self, id: &TodoId) -> Option<TodoItem> {
        let position = self.position(id)?;
        Some(self.items.remove(position))
    }

    /// Replaces the item sharing `item.id`. Returns false if there is none.
    pub(crate) fn replace(&mut self, item: TodoItem) -> bool {
        match self.items.iter_mut().find(|slot| slot.id == item.id) {
            Some(slot) => {
                *slot = item;
                true
            },
            None => false,
        }
    }

    pub(crate) fn set_editing(&mut self, id: Option<TodoId>) {
        self.editing = id;
    }
}

/// Actions the todo editor reacts to
///
/// Each variant is one user intent forwarded by the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    // ========== List ==========
    /// Append an item to the end of the list
    AddItem {
        /// Item to append
        item: TodoItem,
    },

    /// Append an item picked from the sample catalogue
    AddRandomItem,

    /// Remove the item with the same id, if present
    RemoveItem {
        /// Item to remove
        item: TodoItem,
    },

    // ========== Editing ==========
    /// Open the inline editor on an item
    EditItemSelected {
        /// Item to edit
        item: TodoItem,
    },

    /// Replace the item under edit with a new value
    EditItemChange {
        /// New value, must carry the id of the item under edit
        item: TodoItem,
    },

    /// Close the inline editor
    EditDone,
}
