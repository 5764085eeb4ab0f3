//! # Todo Editor Core
//!
//! Core traits and types for the todo editor's unidirectional data flow.
//!
//! ## Core Concepts
//!
//! - **State**: The data a feature owns (for the editor: the item list and the edit cursor)
//! - **Action**: Every user intent the state can react to
//! - **Reducer**: Function `(State, Action, Environment) → Result<Effects, Error>`
//! - **Effect**: Follow-up actions the runtime feeds back into the reducer
//! - **Environment**: Injected dependencies (randomness)
//!
//! Reducers never touch the outside world. A rejected action must leave the
//! state exactly as it found it.
//!
//! ## Example
//!
//! ```
//! use todo_editor_core::{effect::Effect, reducer::Reducer, SmallVec};
//!
//! #[derive(Default)]
//! struct Tally {
//!     count: u32,
//! }
//!
//! enum TallyAction {
//!     Bump,
//! }
//!
//! struct TallyReducer;
//!
//! impl Reducer for TallyReducer {
//!     type State = Tally;
//!     type Action = TallyAction;
//!     type Environment = ();
//!     type Error = std::convert::Infallible;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut Tally,
//!         action: TallyAction,
//!         _env: &(),
//!     ) -> Result<SmallVec<[Effect<TallyAction>; 4]>, Self::Error> {
//!         match action {
//!             TallyAction::Bump => state.count += 1,
//!         }
//!         Ok(SmallVec::new())
//!     }
//! }
//!
//! let mut state = Tally::default();
//! let effects = TallyReducer.reduce(&mut state, TallyAction::Bump, &());
//! assert!(matches!(effects, Ok(ref e) if e.is_empty()));
//! assert_eq!(state.count, 1);
//! ```

pub use smallvec::{SmallVec, smallvec};

/// Reducer module - The core trait for business logic
///
/// Reducers are functions `(State, Action, Environment) → Result<Effects, Error>`.
/// They contain all business logic and are deterministic given their environment.
pub mod reducer {
    use super::SmallVec;
    use super::effect::Effect;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    /// - `Error`: Caller contract violations the reducer refuses to apply
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Contract violations reported instead of mutating state
        type Error: std::error::Error + Send + Sync + 'static;

        /// Reduce an action into state changes and effects
        ///
        /// 1. Validates the action against the current state
        /// 2. Updates state in place
        /// 3. Returns follow-up effects for the runtime
        ///
        /// # Errors
        ///
        /// Returns `Self::Error` when the action violates a precondition.
        /// In that case `state` must be left untouched.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Result<SmallVec<[Effect<Self::Action>; 4]>, Self::Error>;
    }
}

/// Effect module - Follow-up work described by reducers
///
/// Effects are values, not execution. The runtime interprets them after the
/// reducer returns, while still holding the state lock.
pub mod effect {
    /// Effect type - describes work to perform after a reduction
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Feed an action back into the reducer in the same atomic step
        Send(Box<Action>),
    }

    impl<Action> Effect<Action> {
        /// Create an effect that dispatches `action` back into the reducer
        #[must_use]
        pub fn send(action: Action) -> Self {
            Effect::Send(Box::new(action))
        }

        /// The action this effect feeds back, if any
        #[must_use]
        pub fn into_action(self) -> Option<Action> {
            match self {
                Effect::None => None,
                Effect::Send(action) => Some(*action),
            }
        }

        /// Returns true for [`Effect::None`]
        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Effect::None)
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All sources of nondeterminism are abstracted behind traits and injected
/// via the Environment parameter.
pub mod environment {
    use rand::Rng;

    /// Random source - abstracts randomness for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use todo_editor_core::environment::{RandomSource, ThreadRandom};
    ///
    /// let random = ThreadRandom;
    /// assert!(random.index(3) < 3);
    /// assert_eq!(random.index(0), 0);
    /// ```
    pub trait RandomSource: Send + Sync {
        /// Pick an index in `0..len`. Returns 0 when `len` is 0.
        fn index(&self, len: usize) -> usize;
    }

    /// Production random source backed by the thread-local RNG
    #[derive(Clone, Copy, Debug, Default)]
    pub struct ThreadRandom;

    impl RandomSource for ThreadRandom {
        fn index(&self, len: usize) -> usize {
            if len == 0 {
                return 0;
            }
            rand::thread_rng().gen_range(0..len)
        }
    }
}
