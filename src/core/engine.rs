//! The transition engine contract consumed by the interpreter.
//!
//! The engine owns the hierarchical/parallel transition computation: given
//! the current control state, an event, and the extended state, it decides
//! the next control state and which actions to run. Entry-action ordering,
//! guard evaluation, and parallel-region fan-out are its responsibility; the
//! interpreter runs the returned actions in the order given.

use crate::core::action::ActionDescriptor;
use crate::core::event::Event;

/// What the transition engine computed for one processed event: the control
/// state to commit and the actions to run, in order.
pub struct TransitionOutcome<C, E: 'static, U: 'static, O: 'static> {
    /// Next control state, committed only if every action processes cleanly.
    pub control_state: C,
    /// Action descriptors in execution order. Order is authoritative: later
    /// actions observe the updates made by earlier ones.
    pub actions: Vec<ActionDescriptor<E, U, O>>,
}

impl<C, E: 'static, U: 'static, O: 'static> TransitionOutcome<C, E, U, O> {
    /// Outcome with no actions to run.
    pub fn new(control_state: C) -> Self {
        Self {
            control_state,
            actions: Vec::new(),
        }
    }

    /// Outcome carrying an ordered list of actions.
    pub fn with_actions(control_state: C, actions: Vec<ActionDescriptor<E, U, O>>) -> Self {
        Self {
            control_state,
            actions,
        }
    }
}

/// A hierarchical/parallel transition computation.
///
/// The interpreter never inspects [`ControlState`](Self::ControlState): it
/// hands the current value back on the next event and exposes it unchanged
/// for introspection. The extended state is passed in read-only; all
/// mutation flows through the action descriptors the engine returns.
pub trait TransitionEngine<E: 'static, U: 'static, O: 'static> {
    /// Opaque control state owned and produced exclusively by the engine.
    type ControlState;

    /// The control state the machine starts in, before any event.
    fn initial_state(&self) -> Self::ControlState;

    /// Compute the transition for `event` from `current`.
    fn transition(
        &self,
        current: &Self::ControlState,
        event: &Event,
        extended: &E,
    ) -> TransitionOutcome<Self::ControlState, E, U, O>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{factory, ActionOutcome};

    struct Gate;

    impl TransitionEngine<u8, (), u8> for Gate {
        type ControlState = bool;

        fn initial_state(&self) -> bool {
            false
        }

        fn transition(
            &self,
            current: &bool,
            event: &Event,
            _extended: &u8,
        ) -> TransitionOutcome<bool, u8, (), u8> {
            match event.name() {
                "OPEN" if !current => TransitionOutcome::with_actions(
                    true,
                    vec![ActionDescriptor::embedded(factory(
                        |_state, _event, _action| ActionOutcome {
                            updates: (),
                            outputs: 1,
                        },
                    ))],
                ),
                _ => TransitionOutcome::new(*current),
            }
        }
    }

    #[test]
    fn engine_supplies_the_initial_control_state() {
        assert!(!Gate.initial_state());
    }

    #[test]
    fn transition_without_actions_is_empty() {
        let outcome = Gate.transition(&true, &Event::new("OPEN"), &0);
        assert!(outcome.control_state);
        assert!(outcome.actions.is_empty());
    }

    #[test]
    fn transition_carries_ordered_actions() {
        let outcome = Gate.transition(&false, &Event::new("OPEN"), &0);
        assert!(outcome.control_state);
        assert_eq!(outcome.actions.len(), 1);
    }
}
