//! # Todo Editor Runtime
//!
//! Runtime implementation for the todo editor's unidirectional data flow.
//!
//! This crate provides the Store runtime that serialises reducer execution,
//! interprets feedback effects, and notifies observers after every change.
//!
//! ## Core Components
//!
//! - **Store**: Owns state behind a write lock and runs the reducer
//! - **Feedback loop**: Actions produced by effects are reduced in the same atomic step
//! - **Change notifications**: Every applied action is broadcast as a [`StoreChange`]
//!
//! ## Example
//!
//! ```ignore
//! use todo_editor_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//! let mut changes = store.subscribe();
//!
//! // Send an action
//! store.send(Action::DoSomething).await?;
//!
//! // Re-render on change
//! let change = changes.recv().await?;
//! let value = store.state(|s| s.some_field).await;
//! ```

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use todo_editor_core::{SmallVec, effect::Effect, reducer::Reducer};
use tokio::sync::RwLock;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    ///
    /// # Type Parameters
    ///
    /// - `E`: The reducer's error type
    #[derive(Error, Debug)]
    pub enum StoreError<E: std::error::Error + 'static> {
        /// The reducer refused the action; state is unchanged
        #[error("Action rejected: {0}")]
        Rejected(#[source] E),

        /// Store is shutting down and not accepting new actions
        ///
        /// This error is returned when `send()` is called after `shutdown()`.
        #[error("Store is shutting down")]
        ShutdownInProgress,
    }

    impl<E: std::error::Error + 'static> StoreError<E> {
        /// The reducer's rejection, if that is what happened
        #[must_use]
        pub fn into_rejection(self) -> Option<E> {
            match self {
                Self::Rejected(error) => Some(error),
                Self::ShutdownInProgress => None,
            }
        }
    }
}

pub use error::StoreError;
pub use store::Store;

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use todo_editor_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_broadcast_capacity(64);
/// assert_eq!(config.broadcast_capacity, 64);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Number of change notifications buffered per observer before it lags
    pub broadcast_capacity: usize,
}

impl StoreConfig {
    /// Set the change broadcast capacity
    ///
    /// Values below 1 are raised to 1 when the store is built.
    #[must_use]
    pub const fn with_broadcast_capacity(mut self, capacity: usize) -> Self {
        self.broadcast_capacity = capacity;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            broadcast_capacity: 16,
        }
    }
}

/// Change notification emitted after the store applies an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreChange<A> {
    /// Monotonic revision of the state after this action, starting at 1
    pub revision: u64,
    /// The action that produced the change
    pub action: A,
}

/// Store module - The runtime for reducers
pub mod store {
    use super::{
        Arc, AtomicBool, AtomicU64, Effect, Ordering, Reducer, RwLock, SmallVec, StoreChange,
        StoreConfig, StoreError, VecDeque,
    };
    use std::fmt::Debug;
    use std::time::Instant;
    use tokio::sync::broadcast;

    /// Effects returned by a single reduction
    type Effects<A> = SmallVec<[Effect<A>; 4]>;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`, so every action is reduced atomically)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Change notifications (broadcast to every subscriber)
    ///
    /// Cloning a Store is cheap; clones share the same state and observers.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: Arc<R>,
        environment: Arc<E>,
        shutdown: Arc<AtomicBool>,
        revision: Arc<AtomicU64>,
        changes: broadcast::Sender<StoreChange<A>>,
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: Arc::clone(&self.reducer),
                environment: Arc::clone(&self.environment),
                shutdown: Arc::clone(&self.shutdown),
                revision: Arc::clone(&self.revision),
                changes: self.changes.clone(),
            }
        }
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        A: Clone + Debug,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        #[must_use]
        pub fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            let (changes, _) = broadcast::channel(config.broadcast_capacity.max(1));

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer: Arc::new(reducer),
                environment: Arc::new(environment),
                shutdown: Arc::new(AtomicBool::new(false)),
                revision: Arc::new(AtomicU64::new(0)),
                changes,
            }
        }

        /// Send an action to the store
        ///
        /// 1. Acquires the write lock on state
        /// 2. Calls the reducer with (state, action, environment)
        /// 3. Reduces every action fed back by effects, still under the lock
        /// 4. Broadcasts one [`StoreChange`] per applied action
        ///
        /// Concurrent `send()` calls serialise on the lock, so observers never
        /// see a half-applied action.
        ///
        /// # Returns
        ///
        /// The state revision after the last applied action.
        ///
        /// # Errors
        ///
        /// - [`StoreError::Rejected`] if the reducer refused the action. State is unchanged
        ///   and no notification is sent.
        /// - [`StoreError::ShutdownInProgress`] if the store is shutting down.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<u64, StoreError<R::Error>> {
            if self.shutdown.load(Ordering::Acquire) {
                tracing::warn!("Rejected action: store is shutting down");
                metrics::counter!("store.shutdown.rejected_actions").increment(1);
                return Err(StoreError::ShutdownInProgress);
            }

            tracing::debug!(?action, "Processing action");
            metrics::counter!("store.actions.total").increment(1);

            let mut state = self.state.write().await;
            tracing::trace!("Acquired write lock on state");

            let (mut revision, effects) = self.apply(&mut *state, action).map_err(|error| {
                tracing::warn!(%error, "Action rejected by reducer");
                metrics::counter!("store.actions.rejected").increment(1);
                StoreError::Rejected(error)
            })?;

            let mut pending: VecDeque<A> =
                effects.into_iter().filter_map(Effect::into_action).collect();

            while let Some(next) = pending.pop_front() {
                tracing::trace!(action = ?next, "Reducing feedback action");
                metrics::counter!("store.feedback.total").increment(1);

                match self.apply(&mut *state, next) {
                    Ok((applied, effects)) => {
                        revision = applied;
                        pending.extend(effects.into_iter().filter_map(Effect::into_action));
                    },
                    Err(error) => {
                        // The originating action stays applied.
                        tracing::error!(%error, "Feedback action rejected by reducer");
                        metrics::counter!("store.feedback.rejected").increment(1);
                    },
                }
            }
            drop(state);

            tracing::debug!(revision, "Action processing completed");
            Ok(revision)
        }

        /// Reduce one action and publish the change on success
        fn apply(&self, state: &mut S, action: A) -> Result<(u64, Effects<A>), R::Error> {
            let span = tracing::debug_span!("reducer_execution");
            let _enter = span.enter();

            let start = Instant::now();
            let result = self.reducer.reduce(state, action.clone(), &self.environment);
            metrics::histogram!("store.reducer.duration_seconds")
                .record(start.elapsed().as_secs_f64());

            let effects = result?;
            let revision = self.revision.fetch_add(1, Ordering::AcqRel) + 1;

            if self.changes.send(StoreChange { revision, action }).is_err() {
                tracing::trace!(revision, "No change observers subscribed");
            }

            Ok((revision, effects))
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let item_count = store.state(|s| s.count()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }

        /// Subscribe to change notifications
        ///
        /// The receiver gets one [`StoreChange`] per applied action, in the
        /// order actions were applied. A receiver that falls more than
        /// [`StoreConfig::broadcast_capacity`] changes behind gets
        /// `RecvError::Lagged` and should re-read the whole state.
        #[must_use]
        pub fn subscribe(&self) -> broadcast::Receiver<StoreChange<A>> {
            self.changes.subscribe()
        }

        /// Revision of the most recently applied action (0 before any)
        #[must_use]
        pub fn revision(&self) -> u64 {
            self.revision.load(Ordering::Acquire)
        }

        /// Stop accepting actions
        ///
        /// Actions already holding the lock complete normally.
        pub fn shutdown(&self) {
            if !self.shutdown.swap(true, Ordering::AcqRel) {
                tracing::info!("Store shutdown initiated");
            }
        }

        /// Returns true once [`Store::shutdown`] has been called
        #[must_use]
        pub fn is_shutting_down(&self) -> bool {
            self.shutdown.load(Ordering::Acquire)
        }
    }
}
