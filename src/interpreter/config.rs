//! Interpreter configuration: the pluggable reducers and the factory map.

use std::sync::Arc;

use crate::core::ActionFactoryMap;

/// Pure function folding an update specification into a new extended state.
///
/// Must not mutate its first argument: a copy-on-write implementation works
/// against a clone, a patch implementation against a fresh document. The
/// interpreter only threads values through; it never inspects the update
/// specification.
pub type UpdateReducer<E, U> = Arc<dyn Fn(&E, U) -> E + Send + Sync>;

/// Pure function folding newly produced outputs into an accumulator.
///
/// Seeded per event with the configured "no output" sentinel.
pub type OutputReducer<O> = Arc<dyn Fn(O, O) -> O + Send + Sync>;

/// Configuration for one interpreter instance.
///
/// Every field is required; assemble with
/// [`InterpreterBuilder`](crate::InterpreterBuilder) or construct directly.
/// The interpreter depends only on these contracts, never on a concrete
/// update or merge implementation: swapping reducers changes the update
/// semantics without touching the interpreter.
pub struct InterpreterConfig<E: 'static, U: 'static, O: 'static> {
    /// Folds each action's update specification into the running extended
    /// state.
    pub update_state: UpdateReducer<E, U>,
    /// Folds each action's outputs into the per-event accumulator.
    pub merge_outputs: OutputReducer<O>,
    /// Factories consulted for named action descriptors.
    pub action_factory_map: ActionFactoryMap<E, U, O>,
    /// Seed meaning "no output", returned unchanged for events whose
    /// transition carries no actions.
    pub no_output: O,
}
