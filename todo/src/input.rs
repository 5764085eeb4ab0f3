//! Headless input models for the presentation layer.
//!
//! [`TodoInput`] is the draft behind the "new item" entry row; it owns its
//! own text and icon until submitted. [`InlineEdit`] owns nothing: every
//! keystroke on the item under edit becomes a [`TodoAction::EditItemChange`].

use crate::types::{TodoAction, TodoIcon, TodoItem};

/// Draft for a new todo item
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoInput {
    text: String,
    icon: TodoIcon,
}

impl TodoInput {
    /// Creates an empty draft with the default icon
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draft text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Currently chosen icon
    #[must_use]
    pub const fn icon(&self) -> TodoIcon {
        self.icon
    }

    /// Replaces the draft text
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Chooses an icon
    pub fn set_icon(&mut self, icon: TodoIcon) {
        self.icon = icon;
    }

    /// Whether submission is enabled (text is not blank)
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Whether the icon picker is shown
    #[must_use]
    pub fn is_icon_row_visible(&self) -> bool {
        self.can_submit()
    }

    /// Turns the draft into an `AddItem` action and resets it
    ///
    /// Returns `None` and keeps the draft when the text is blank.
    pub fn submit(&mut self) -> Option<TodoAction> {
        if !self.can_submit() {
            return None;
        }

        let draft = std::mem::take(self);
        Some(TodoAction::AddItem {
            item: TodoItem::new(draft.text, draft.icon),
        })
    }
}

/// Inline editor bound to the item under edit
#[derive(Clone, Copy, Debug)]
pub struct InlineEdit<'a> {
    item: &'a TodoItem,
}

impl<'a> InlineEdit<'a> {
    /// Binds the editor to `item`
    #[must_use]
    pub const fn new(item: &'a TodoItem) -> Self {
        Self { item }
    }

    /// Text typed into the editor
    #[must_use]
    pub fn task_changed(&self, task: impl Into<String>) -> TodoAction {
        TodoAction::EditItemChange {
            item: self.item.with_task(task),
        }
    }

    /// Icon picked in the editor
    #[must_use]
    pub fn icon_changed(&self, icon: TodoIcon) -> TodoAction {
        TodoAction::EditItemChange {
            item: self.item.with_icon(icon),
        }
    }

    /// Whether the save button is enabled
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.item.task.trim().is_empty()
    }

    /// Closes the editor, unless the task is blank
    #[must_use]
    pub fn submit(&self) -> Option<TodoAction> {
        self.can_submit().then_some(TodoAction::EditDone)
    }
}
