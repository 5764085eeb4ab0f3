//! Presentation model derived from [`TodoState`].
//!
//! The screen is rebuilt from a state snapshot after every change
//! notification. The item under edit is shown as an inline editor row.

use crate::types::{TodoItem, TodoState};

/// One row of the todo screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoRow {
    /// Plain row; selecting it opens the editor
    Item(TodoItem),
    /// Inline editor for the item under edit
    Editor(TodoItem),
}

impl TodoRow {
    /// The item shown by this row
    #[must_use]
    pub const fn item(&self) -> &TodoItem {
        match self {
            Self::Item(item) | Self::Editor(item) => item,
        }
    }

    /// One console line for this row
    fn render(&self) -> String {
        let item = self.item();
        match self {
            Self::Item(_) => format!("  {} {}\n", item.icon.symbol(), item.task),
            Self::Editor(_) => format!("> {} [{}] (editing)\n", item.icon.symbol(), item.task),
        }
    }
}

/// The whole screen
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoScreen {
    rows: Vec<TodoRow>,
}

impl TodoScreen {
    /// Derives the screen from a state snapshot
    #[must_use]
    pub fn from_state(state: &TodoState) -> Self {
        let editing = state.current_edit_item().map(|item| &item.id);
        let rows = state
            .items()
            .iter()
            .map(|item| {
                if editing == Some(&item.id) {
                    TodoRow::Editor(item.clone())
                } else {
                    TodoRow::Item(item.clone())
                }
            })
            .collect();

        Self { rows }
    }

    /// Rows in display order
    #[must_use]
    pub fn rows(&self) -> &[TodoRow] {
        &self.rows
    }

    /// The item shown in the inline editor, if any
    #[must_use]
    pub fn editor(&self) -> Option<&TodoItem> {
        self.rows.iter().find_map(|row| match row {
            TodoRow::Editor(item) => Some(item),
            TodoRow::Item(_) => None,
        })
    }

    /// Renders the screen as console text
    #[must_use]
    pub fn render(&self) -> String {
        if self.rows.is_empty() {
            return "  (no items)\n".to_string();
        }

        self.rows.iter().map(TodoRow::render).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TodoIcon;

    #[test]
    fn rows_mark_item_under_edit() {
        let a = TodoItem::new("a", TodoIcon::Done);
        let b = TodoItem::with_default_icon("b");
        let mut state = TodoState::with_items([a.clone(), b.clone()]);
        state.set_editing(Some(b.id.clone()));

        let screen = TodoScreen::from_state(&state);

        assert_eq!(screen.rows(), &[TodoRow::Item(a), TodoRow::Editor(b.clone())]);
        assert_eq!(screen.editor(), Some(&b));
        assert_eq!(screen.rows()[1].item(), &b);
    }

    #[test]
    fn render_lists_rows() {
        let a = TodoItem::new("Buy milk", TodoIcon::Done);
        let b = TodoItem::with_default_icon("Walk dog");
        let mut state = TodoState::with_items([a, b.clone()]);
        state.set_editing(Some(b.id));

        let rendered = TodoScreen::from_state(&state).render();

        assert_eq!(rendered, "  [x] Buy milk\n> [ ] [Walk dog] (editing)\n");
    }

    #[test]
    fn render_empty_screen() {
        let screen = TodoScreen::from_state(&TodoState::new());
        assert!(screen.rows().is_empty());
        assert_eq!(screen.editor(), None);
        assert_eq!(screen.render(), "  (no items)\n");
    }
}
