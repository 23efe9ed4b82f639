//! Builder API for assembling interpreter configurations.
//!
//! An [`InterpreterConfig`](crate::InterpreterConfig) has no optional fields;
//! the builder collects the reducers, the sentinel, and the factory map with
//! a fluent API and validates completeness at [`build`](InterpreterBuilder::build).

pub mod error;
pub mod macros;

pub use error::BuildError;

use crate::core::{ActionDescriptor, ActionFactoryMap, ActionOutcome, Event};
use crate::interpreter::{InterpreterConfig, OutputReducer, UpdateReducer};
use std::sync::Arc;

/// Builder for [`InterpreterConfig`] with a fluent API.
///
/// The factory map may legitimately stay empty (a machine whose transitions
/// only emit embedded actions needs no registrations) but the reducers and
/// the no-output seed are required.
///
/// # Example
///
/// ```rust
/// use statefold::reducers::{copy_on_write, recipe, sequence_outputs, NO_OUTPUT};
/// use statefold::{ActionOutcome, InterpreterBuilder};
/// use serde_json::json;
///
/// let config = InterpreterBuilder::new()
///     .update_state(copy_on_write())
///     .merge_outputs(sequence_outputs())
///     .no_output(NO_OUTPUT)
///     .action("increment", |count: &u32, _event, _action| ActionOutcome {
///         updates: recipe(|c: &mut u32| *c += 1),
///         outputs: Some(vec![json!(count + 1)]),
///     })
///     .build()
///     .unwrap();
///
/// assert!(config.action_factory_map.contains_key("increment"));
/// ```
pub struct InterpreterBuilder<E: 'static, U: 'static, O: 'static> {
    update_state: Option<UpdateReducer<E, U>>,
    merge_outputs: Option<OutputReducer<O>>,
    no_output: Option<O>,
    action_factory_map: ActionFactoryMap<E, U, O>,
}

impl<E: 'static, U: 'static, O: 'static> InterpreterBuilder<E, U, O> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            update_state: None,
            merge_outputs: None,
            no_output: None,
            action_factory_map: ActionFactoryMap::new(),
        }
    }

    /// Set the update reducer (required).
    pub fn update_state(mut self, reducer: UpdateReducer<E, U>) -> Self {
        self.update_state = Some(reducer);
        self
    }

    /// Set the output merge reducer (required).
    pub fn merge_outputs(mut self, reducer: OutputReducer<O>) -> Self {
        self.merge_outputs = Some(reducer);
        self
    }

    /// Set the "no output" sentinel used to seed each event's fold (required).
    pub fn no_output(mut self, seed: O) -> Self {
        self.no_output = Some(seed);
        self
    }

    /// Register one action factory under an identifier.
    pub fn action<N, F>(mut self, name: N, factory: F) -> Self
    where
        N: Into<String>,
        F: Fn(&E, &Event, &ActionDescriptor<E, U, O>) -> ActionOutcome<U, O>
            + Send
            + Sync
            + 'static,
    {
        self.action_factory_map.insert(name.into(), Arc::new(factory));
        self
    }

    /// Register multiple action factories at once.
    pub fn actions(mut self, factories: ActionFactoryMap<E, U, O>) -> Self {
        self.action_factory_map.extend(factories);
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] naming the first missing required field.
    pub fn build(self) -> Result<InterpreterConfig<E, U, O>, BuildError> {
        let update_state = self.update_state.ok_or(BuildError::MissingUpdateReducer)?;
        let merge_outputs = self.merge_outputs.ok_or(BuildError::MissingOutputReducer)?;
        let no_output = self.no_output.ok_or(BuildError::MissingNoOutputSeed)?;

        Ok(InterpreterConfig {
            update_state,
            merge_outputs,
            action_factory_map: self.action_factory_map,
            no_output,
        })
    }
}

impl<E: 'static, U: 'static, O: 'static> Default for InterpreterBuilder<E, U, O> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::{copy_on_write, recipe, sequence_outputs, OutputSequence, Recipe, NO_OUTPUT};
    use serde_json::json;

    type TestBuilder = InterpreterBuilder<u32, Recipe<u32>, OutputSequence>;

    #[test]
    fn builder_requires_an_update_reducer() {
        let result = TestBuilder::new()
            .merge_outputs(sequence_outputs())
            .no_output(NO_OUTPUT)
            .build();

        assert!(matches!(result, Err(BuildError::MissingUpdateReducer)));
    }

    #[test]
    fn builder_requires_an_output_reducer() {
        let result = TestBuilder::new()
            .update_state(copy_on_write())
            .no_output(NO_OUTPUT)
            .build();

        assert!(matches!(result, Err(BuildError::MissingOutputReducer)));
    }

    #[test]
    fn builder_requires_the_sentinel() {
        let result = TestBuilder::new()
            .update_state(copy_on_write())
            .merge_outputs(sequence_outputs())
            .build();

        assert!(matches!(result, Err(BuildError::MissingNoOutputSeed)));
    }

    #[test]
    fn empty_factory_map_is_legal() {
        let config = TestBuilder::new()
            .update_state(copy_on_write())
            .merge_outputs(sequence_outputs())
            .no_output(NO_OUTPUT)
            .build()
            .unwrap();

        assert!(config.action_factory_map.is_empty());
    }

    #[test]
    fn fluent_api_registers_factories() {
        let config = TestBuilder::new()
            .update_state(copy_on_write())
            .merge_outputs(sequence_outputs())
            .no_output(NO_OUTPUT)
            .action("bump", |count: &u32, _event, _action| ActionOutcome {
                updates: recipe(|c: &mut u32| *c += 1),
                outputs: Some(vec![json!(count)]),
            })
            .build()
            .unwrap();

        assert_eq!(config.action_factory_map.len(), 1);
        assert!(config.action_factory_map.contains_key("bump"));
    }
}
