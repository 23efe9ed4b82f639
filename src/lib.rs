//! Statefold: a pluggable state machine interpreter
//!
//! Statefold drives an external hierarchical/parallel transition engine while
//! keeping two policies fully configurable: how the extended (domain) state
//! is updated, and how action outputs are aggregated. The same interpreter
//! runs with copy-on-write update semantics or JSON-patch-sequence semantics,
//! and with any output aggregation policy, without change.
//!
//! # Core Concepts
//!
//! - **Control state**: opaque value owned by the injected [`TransitionEngine`]
//! - **Extended state**: domain data evolving through a configured update reducer
//! - **Action descriptors**: side effects scheduled by transitions, either
//!   embedded callables or named references into a factory map
//! - **Atomic commit**: each event either commits a full new
//!   `(control state, extended state)` pair or leaves the previous one untouched
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use statefold::reducers::{copy_on_write, recipe, sequence_outputs, OutputSequence, Recipe, NO_OUTPUT};
//! use statefold::{
//!     ActionDescriptor, ActionOutcome, Event, Interpreter, InterpreterBuilder, TransitionEngine,
//!     TransitionOutcome,
//! };
//!
//! struct Toggle;
//!
//! impl TransitionEngine<bool, Recipe<bool>, OutputSequence> for Toggle {
//!     type ControlState = &'static str;
//!
//!     fn initial_state(&self) -> Self::ControlState {
//!         "off"
//!     }
//!
//!     fn transition(
//!         &self,
//!         current: &Self::ControlState,
//!         event: &Event,
//!         _extended: &bool,
//!     ) -> TransitionOutcome<Self::ControlState, bool, Recipe<bool>, OutputSequence> {
//!         match (*current, event.name()) {
//!             ("off", "TOGGLE") => {
//!                 TransitionOutcome::with_actions("on", vec![ActionDescriptor::named("flip")])
//!             }
//!             ("on", "TOGGLE") => {
//!                 TransitionOutcome::with_actions("off", vec![ActionDescriptor::named("flip")])
//!             }
//!             _ => TransitionOutcome::new(*current),
//!         }
//!     }
//! }
//!
//! let config = InterpreterBuilder::new()
//!     .update_state(copy_on_write())
//!     .merge_outputs(sequence_outputs())
//!     .no_output(NO_OUTPUT)
//!     .action("flip", |lit: &bool, _event, _action| ActionOutcome {
//!         updates: recipe(|on: &mut bool| *on = !*on),
//!         outputs: Some(vec![json!(!*lit)]),
//!     })
//!     .build()
//!     .unwrap();
//!
//! let mut interpreter = Interpreter::new(Toggle, false, config);
//!
//! let outputs = interpreter.send(&Event::new("TOGGLE")).unwrap();
//! assert_eq!(outputs, Some(vec![json!(true)]));
//! assert_eq!(interpreter.extended_state(), &true);
//! assert_eq!(interpreter.control_state(), &"on");
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod interpreter;
pub mod reducers;

// Re-export commonly used types
pub use crate::builder::{BuildError, InterpreterBuilder};
pub use crate::checkpoint::{Checkpoint, CheckpointError, CHECKPOINT_VERSION};
pub use crate::core::{
    factory, ActionDescriptor, ActionFactory, ActionFactoryMap, ActionOutcome, Event,
    InterpreterError, TransitionEngine, TransitionOutcome, INIT_EVENT,
};
pub use crate::interpreter::{Interpreter, InterpreterConfig, OutputReducer, UpdateReducer};
