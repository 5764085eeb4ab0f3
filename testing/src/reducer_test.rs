//! Ergonomic testing utilities for reducers
//!
//! This module provides a fluent API for testing reducers with readable Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use todo_editor_core::{effect::Effect, reducer::Reducer};

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Type alias for effect assertion functions
type EffectAssertion<A> = Box<dyn FnOnce(&[Effect<A>])>;

/// Type alias for error assertion functions
type ErrorAssertion<Err> = Box<dyn FnOnce(&Err)>;

/// Fluent API for testing reducers with Given-When-Then syntax
///
/// State assertions run whether or not the reducer accepted the action, so a
/// rejection test can also check that nothing moved.
///
/// # Example
///
/// ```ignore
/// use todo_editor_testing::ReducerTest;
///
/// ReducerTest::new(TodoReducer::new())
///     .with_env(test_environment())
///     .given_state(TodoState::new())
///     .when_action(TodoAction::EditItemChange { item })
///     .then_state(|state| assert!(state.is_empty()))
///     .then_error(|error| assert_eq!(*error, PreconditionError::NoCurrentEditItem))
///     .run();
/// ```
pub struct ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    reducer: R,
    environment: Option<E>,
    initial_state: Option<S>,
    action: Option<A>,
    state_assertions: Vec<StateAssertion<S>>,
    effect_assertions: Vec<EffectAssertion<A>>,
    error_assertions: Vec<ErrorAssertion<R::Error>>,
}

impl<R, S, A, E> ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            environment: None,
            initial_state: None,
            action: None,
            state_assertions: Vec::new(),
            effect_assertions: Vec::new(),
            error_assertions: Vec::new(),
        }
    }

    /// Set the environment for the test
    #[must_use]
    pub fn with_env(mut self, env: E) -> Self {
        self.environment = Some(env);
        self
    }

    /// Set the initial state (Given)
    #[must_use]
    pub fn given_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Set the action to test (When)
    #[must_use]
    pub fn when_action(mut self, action: A) -> Self {
        self.action = Some(action);
        self
    }

    /// Add an assertion about the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&S) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion about the resulting effects (Then)
    ///
    /// Implies the reducer must accept the action.
    #[must_use]
    pub fn then_effects<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&[Effect<A>]) + 'static,
    {
        self.effect_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion about the rejection (Then)
    ///
    /// Implies the reducer must reject the action.
    #[must_use]
    pub fn then_error<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&R::Error) + 'static,
    {
        self.error_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if initial state, action, or environment is not set, if the
    /// reducer's verdict contradicts the registered assertions, or if any
    /// assertion fails.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let mut state = self
            .initial_state
            .expect("Initial state must be set with given_state()");

        let action = self.action.expect("Action must be set with when_action()");

        let env = self
            .environment
            .expect("Environment must be set with with_env()");

        // Execute reducer
        let result = self.reducer.reduce(&mut state, action, &env);

        // Run state assertions
        for assertion in self.state_assertions {
            assertion(&state);
        }

        match result {
            Ok(effects) => {
                assert!(
                    self.error_assertions.is_empty(),
                    "Expected the reducer to reject the action, but it was accepted"
                );
                for assertion in self.effect_assertions {
                    assertion(&effects);
                }
            },
            Err(error) => {
                assert!(
                    !self.error_assertions.is_empty(),
                    "Reducer rejected the action unexpectedly: {error}"
                );
                assert!(
                    self.effect_assertions.is_empty(),
                    "Expected effects, but the reducer rejected the action: {error}"
                );
                for assertion in self.error_assertions {
                    assertion(&error);
                }
            },
        }
    }
}

/// Helper assertions for effects
pub mod assertions {
    use todo_editor_core::effect::Effect;

    /// Assert that there are no effects
    ///
    /// # Panics
    ///
    /// Panics if effects is not empty.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_no_effects<A: std::fmt::Debug>(effects: &[Effect<A>]) {
        assert!(
            effects.iter().all(Effect::is_none),
            "Expected no effects, but found {}: {:?}",
            effects.len(),
            effects
        );
    }

    /// Assert the number of effects
    ///
    /// # Panics
    ///
    /// Panics if the number of effects doesn't match expected.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_effects_count<A>(effects: &[Effect<A>], expected: usize) {
        assert_eq!(
            effects.len(),
            expected,
            "Expected {} effects, but found {}",
            expected,
            effects.len()
        );
    }

    /// Assert that effects feed back at least one action matching `predicate`
    ///
    /// # Panics
    ///
    /// Panics if no `Send` effect carries a matching action.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_sends<A, F>(effects: &[Effect<A>], predicate: F)
    where
        A: std::fmt::Debug,
        F: Fn(&A) -> bool,
    {
        assert!(
            effects
                .iter()
                .any(|e| matches!(e, Effect::Send(action) if predicate(action))),
            "Expected a Send effect with a matching action, found {effects:?}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thiserror::Error;
    use todo_editor_core::{SmallVec, smallvec};

    #[derive(Clone, Debug)]
    struct TestState {
        count: i32,
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    enum TestAction {
        Increment,
        Decrement,
        Echo,
    }

    #[derive(Error, Debug, PartialEq, Eq)]
    #[error("count cannot go below zero")]
    struct Underflow;

    struct TestReducer;

    struct TestEnv;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = TestEnv;
        type Error = Underflow;

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> Result<SmallVec<[Effect<Self::Action>; 4]>, Self::Error> {
            match action {
                TestAction::Increment => {
                    state.count += 1;
                    Ok(smallvec![Effect::None])
                },
                TestAction::Decrement => {
                    if state.count == 0 {
                        return Err(Underflow);
                    }
                    state.count -= 1;
                    Ok(SmallVec::new())
                },
                TestAction::Echo => Ok(smallvec![Effect::send(TestAction::Increment)]),
            }
        }
    }

    #[test]
    fn test_reducer_test_increment() {
        ReducerTest::new(TestReducer)
            .with_env(TestEnv)
            .given_state(TestState { count: 0 })
            .when_action(TestAction::Increment)
            .then_state(|state| {
                assert_eq!(state.count, 1);
            })
            .then_effects(|effects| {
                assertions::assert_no_effects(effects);
            })
            .run();
    }

    #[test]
    fn test_reducer_test_rejection_keeps_state() {
        ReducerTest::new(TestReducer)
            .with_env(TestEnv)
            .given_state(TestState { count: 0 })
            .when_action(TestAction::Decrement)
            .then_state(|state| {
                assert_eq!(state.count, 0);
            })
            .then_error(|error| {
                assert_eq!(*error, Underflow);
            })
            .run();
    }

    #[test]
    fn test_reducer_test_feedback() {
        ReducerTest::new(TestReducer)
            .with_env(TestEnv)
            .given_state(TestState { count: 5 })
            .when_action(TestAction::Echo)
            .then_state(|state| {
                assert_eq!(state.count, 5);
            })
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 1);
                assertions::assert_sends(effects, |a| *a == TestAction::Increment);
            })
            .run();
    }

    #[test]
    #[should_panic(expected = "rejected the action unexpectedly")]
    fn test_unexpected_rejection_fails() {
        ReducerTest::new(TestReducer)
            .with_env(TestEnv)
            .given_state(TestState { count: 0 })
            .when_action(TestAction::Decrement)
            .run();
    }

    #[test]
    fn test_assertions_no_effects() {
        assertions::assert_no_effects::<TestAction>(&[Effect::None]);
        assertions::assert_no_effects::<TestAction>(&[]);
    }

    #[test]
    fn test_assertions_effects_count() {
        assertions::assert_effects_count(&[Effect::<TestAction>::None], 1);
        assertions::assert_effects_count::<TestAction>(&[], 0);
    }
}
