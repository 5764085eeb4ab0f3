//! # Todo Editor Testing
//!
//! Testing utilities and helpers for the todo editor.
//!
//! This crate provides:
//! - Deterministic implementations of Environment traits
//! - A Given-When-Then builder for reducers ([`ReducerTest`])
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use todo_editor_testing::{ReducerTest, SequenceRandom};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(TodoEnvironment::new(Arc::new(SequenceRandom::new(vec![0]))))
//!     .given_state(TodoState::new())
//!     .when_action(TodoAction::AddItem { item })
//!     .then_state(|state| assert_eq!(state.count(), 1))
//!     .run();
//! ```

pub mod reducer_test;

/// Deterministic implementations of Environment traits
pub mod mocks {
    use std::sync::Mutex;
    use todo_editor_core::environment::RandomSource;

    /// Random source that replays a fixed script of picks
    ///
    /// Each call to [`RandomSource::index`] takes the next scripted value,
    /// cycling when the script runs out, and reduces it modulo `len`.
    ///
    /// # Example
    ///
    /// ```
    /// use todo_editor_testing::mocks::SequenceRandom;
    /// use todo_editor_core::environment::RandomSource;
    ///
    /// let random = SequenceRandom::new(vec![1, 7]);
    /// assert_eq!(random.index(5), 1);
    /// assert_eq!(random.index(5), 2); // 7 % 5
    /// assert_eq!(random.index(5), 1); // cycles
    /// ```
    #[derive(Debug, Default)]
    pub struct SequenceRandom {
        script: Vec<usize>,
        cursor: Mutex<usize>,
    }

    impl SequenceRandom {
        /// Create a random source replaying `script`
        #[must_use]
        pub const fn new(script: Vec<usize>) -> Self {
            Self {
                script,
                cursor: Mutex::new(0),
            }
        }
    }

    impl RandomSource for SequenceRandom {
        fn index(&self, len: usize) -> usize {
            if len == 0 || self.script.is_empty() {
                return 0;
            }

            // A poisoned cursor only means another test thread panicked mid-pick.
            let mut cursor = match self.cursor.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            let pick = self.script[*cursor % self.script.len()];
            *cursor += 1;
            pick % len
        }
    }
}

// Re-export commonly used items
pub use mocks::SequenceRandom;
pub use reducer_test::{ReducerTest, assertions};
