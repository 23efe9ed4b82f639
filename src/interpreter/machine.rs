//! The interpreter: processes events and commits state atomically.

use crate::checkpoint::Checkpoint;
use crate::core::{ActionOutcome, Event, InterpreterError, TransitionEngine, TransitionOutcome};
use crate::interpreter::config::InterpreterConfig;

/// Drives a transition engine while folding action updates and outputs
/// through the configured reducers.
///
/// One instance owns the committed `(control state, extended state)` pair.
/// Processing an event either commits a full new pair or leaves the previous
/// pair untouched; no partial update is ever observable.
///
/// Instances are single-threaded and call-and-return: [`start`](Self::start)
/// and [`send`](Self::send) run to completion synchronously, with no
/// suspension point and no internal queue. A multi-threaded host must
/// serialize access to one instance itself. There is no stop operation; an
/// interpreter lives as long as its owner.
pub struct Interpreter<M, E: 'static, U: 'static, O: 'static>
where
    M: TransitionEngine<E, U, O>,
{
    machine: M,
    control_state: M::ControlState,
    extended_state: E,
    config: InterpreterConfig<E, U, O>,
}

impl<M, E, U, O> Interpreter<M, E, U, O>
where
    M: TransitionEngine<E, U, O>,
    E: Clone + 'static,
    U: 'static,
    O: Clone + 'static,
{
    /// Create an interpreter seeded with the engine's initial control state
    /// and the machine's initial context.
    pub fn new(machine: M, initial_context: E, config: InterpreterConfig<E, U, O>) -> Self {
        let control_state = machine.initial_state();
        Self {
            machine,
            control_state,
            extended_state: initial_context,
            config,
        }
    }

    /// Send the reserved initialization event, running any entry actions of
    /// the initial control state and returning their accumulated outputs.
    ///
    /// Calling `start` again re-runs initialization actions against whatever
    /// the current committed state is. The interpreter does not guard against
    /// this; it is a deliberate low-level capability left to the caller.
    ///
    /// # Errors
    ///
    /// Fails exactly as [`send`](Self::send) does.
    pub fn start(&mut self) -> Result<O, InterpreterError> {
        self.send(&Event::init())
    }

    /// Process one event synchronously, returning the outputs accumulated
    /// for it.
    ///
    /// The transition engine computes the next control state and an ordered
    /// list of action descriptors. Each descriptor is resolved and invoked in
    /// order; its outputs are merged into the accumulator and its updates
    /// folded into the working extended state, so later actions observe the
    /// updates of earlier ones. An event whose transition carries no actions
    /// returns the configured no-output seed and leaves the extended state
    /// unchanged, with only the control state advancing.
    ///
    /// # Errors
    ///
    /// Fails when a descriptor carries an unregistered or empty identifier.
    /// The committed state pair is then exactly what it was before the call,
    /// and all intermediate updates and outputs from earlier descriptors of
    /// the same event are discarded.
    pub fn send(&mut self, event: &Event) -> Result<O, InterpreterError> {
        let TransitionOutcome {
            control_state,
            actions,
        } = self
            .machine
            .transition(&self.control_state, event, &self.extended_state);

        let mut extended = self.extended_state.clone();
        let mut outputs = self.config.no_output.clone();

        for descriptor in &actions {
            let factory = descriptor.resolve(&self.config.action_factory_map)?;
            let ActionOutcome {
                updates,
                outputs: produced,
            } = factory(&extended, event, descriptor);
            outputs = (self.config.merge_outputs)(outputs, produced);
            extended = (self.config.update_state)(&extended, updates);
        }

        self.control_state = control_state;
        self.extended_state = extended;

        Ok(outputs)
    }

    /// The transition engine this interpreter drives, for introspection.
    pub fn machine(&self) -> &M {
        &self.machine
    }

    /// The committed control state.
    pub fn control_state(&self) -> &M::ControlState {
        &self.control_state
    }

    /// The committed extended state.
    pub fn extended_state(&self) -> &E {
        &self.extended_state
    }
}

impl<M, E, U, O> Interpreter<M, E, U, O>
where
    M: TransitionEngine<E, U, O>,
    M::ControlState: Clone,
    E: Clone + 'static,
    U: 'static,
    O: Clone + 'static,
{
    /// Capture the committed state pair as a serializable checkpoint.
    pub fn checkpoint(&self) -> Checkpoint<M::ControlState, E> {
        Checkpoint::new(self.control_state.clone(), self.extended_state.clone())
    }

    /// Rebuild an interpreter from a checkpointed state pair.
    ///
    /// Reducers and action factories are not serializable, so the machine and
    /// configuration are supplied fresh; only the committed pair is restored.
    pub fn restore(
        machine: M,
        checkpoint: Checkpoint<M::ControlState, E>,
        config: InterpreterConfig<E, U, O>,
    ) -> Self {
        Self {
            machine,
            control_state: checkpoint.control_state,
            extended_state: checkpoint.extended_state,
            config,
        }
    }
}
