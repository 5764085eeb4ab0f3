//! Console demo for the todo editor.
//!
//! Plays the part of the presentation layer: it turns scripted gestures into
//! actions and re-renders the screen after each one, while a background
//! observer logs every change notification.

use std::sync::Arc;
use todo::{
    InlineEdit, TodoAction, TodoEnvironment, TodoInput, TodoReducer, TodoScreen, TodoState,
    TodoStore,
};
use todo_editor_core::environment::ThreadRandom;
use todo_editor_runtime::Store;
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn render(store: &TodoStore, label: &str) {
    let screen = store.state(TodoScreen::from_state).await;
    println!("\n>>> {label}");
    print!("{}", screen.render());
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo=debug,todo_editor_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Todo Editor ===");

    let env = TodoEnvironment::new(Arc::new(ThreadRandom));
    let store = Store::new(TodoState::new(), TodoReducer::new(), env);

    let mut changes = store.subscribe();
    let observer = tokio::spawn(async move {
        let mut seen = 0_u64;
        loop {
            match changes.recv().await {
                Ok(change) => {
                    seen += 1;
                    tracing::info!(revision = change.revision, action = ?change.action, "State changed");
                },
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Observer lagged, re-reading state");
                },
                Err(RecvError::Closed) => break seen,
            }
        }
    });

    render(&store, "Initial").await;

    // Type into the entry row and submit
    let mut input = TodoInput::new();
    input.set_text("Buy milk");
    if let Some(action) = input.submit() {
        store.send(action).await?;
    }
    render(&store, "Added 'Buy milk'").await;

    store.send(TodoAction::AddRandomItem).await?;
    store.send(TodoAction::AddRandomItem).await?;
    render(&store, "Added two random items").await;

    // Open the first item in the inline editor
    let Some(first) = store.state(|s| s.items().first().cloned()).await else {
        return Ok(());
    };
    store
        .send(TodoAction::EditItemSelected {
            item: first.clone(),
        })
        .await?;
    render(&store, "Selected 'Buy milk'").await;

    let editor = InlineEdit::new(&first);
    store.send(editor.task_changed("Buy oat milk")).await?;
    render(&store, "Typed 'Buy oat milk'").await;

    // A change for some other item is a presentation bug and gets rejected
    if let Some(other) = store.state(|s| s.items().get(1).cloned()).await {
        if let Err(error) = store
            .send(TodoAction::EditItemChange {
                item: other.with_task("hijacked"),
            })
            .await
        {
            println!("\n>>> Rejected stray edit: {error}");
        }
    }

    let edited = store.state(|s| s.current_edit_item().cloned()).await;
    if let Some(action) = edited.as_ref().and_then(|item| InlineEdit::new(item).submit()) {
        store.send(action).await?;
    }
    render(&store, "Finished editing").await;

    store.send(TodoAction::RemoveItem { item: first }).await?;
    render(&store, "Removed 'Buy oat milk'").await;

    store.shutdown();
    drop(store);
    let seen = observer.await?;

    println!("\n=== Demo Complete ({seen} changes observed) ===");
    Ok(())
}
