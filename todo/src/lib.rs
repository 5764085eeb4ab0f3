//! Todo list editor with single-item inline editing.
//!
//! One ordered list of items, at most one item open for editing, and a
//! reducer that keeps the two consistent:
//!
//! - Adding appends and never touches the editor
//! - Removing the item under edit closes the editor in the same step
//! - Changes are only accepted for the item under edit, by id
//! - Selecting an item that is not in the list closes the editor
//!
//! # Quick Start
//!
//! ```no_run
//! use todo::{TodoAction, TodoEnvironment, TodoItem, TodoReducer, TodoState};
//! use todo_editor_core::environment::ThreadRandom;
//! use todo_editor_runtime::Store;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let env = TodoEnvironment::new(Arc::new(ThreadRandom));
//! let store = Store::new(TodoState::new(), TodoReducer::new(), env);
//! let mut changes = store.subscribe();
//!
//! let item = TodoItem::with_default_icon("Buy milk");
//! store.send(TodoAction::AddItem { item: item.clone() }).await?;
//! store.send(TodoAction::EditItemSelected { item: item.clone() }).await?;
//! store.send(TodoAction::EditItemChange { item: item.with_task("Buy oat milk") }).await?;
//! store.send(TodoAction::EditDone).await?;
//!
//! let change = changes.recv().await?;
//! println!("revision {}: {:?}", change.revision, change.action);
//! let tasks = store.state(|s| s.items().iter().map(|i| i.task.clone()).collect::<Vec<_>>()).await;
//! println!("{tasks:?}");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod input;
pub mod reducer;
pub mod screen;
pub mod types;

// Re-export commonly used types
pub use error::PreconditionError;
pub use input::{InlineEdit, TodoInput};
pub use reducer::{SAMPLE_TASKS, TodoEnvironment, TodoReducer};
pub use screen::{TodoRow, TodoScreen};
pub use types::{TodoAction, TodoIcon, TodoId, TodoItem, TodoState};

/// The todo editor's store
pub type TodoStore =
    todo_editor_runtime::Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>;
