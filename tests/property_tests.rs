//! Property-based tests for the interpreter invariants.
//!
//! These tests use proptest to verify that atomicity, determinism, and the
//! sentinel seed hold across randomly generated event sequences.

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::json;
use statefold::reducers::{copy_on_write, recipe, sequence_outputs, OutputSequence, Recipe, NO_OUTPUT};
use statefold::{
    ActionDescriptor, ActionOutcome, Checkpoint, Event, Interpreter, InterpreterBuilder,
    TransitionEngine, TransitionOutcome,
};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
enum Phase {
    Idle,
    Counting,
}

/// INC runs one registered action; BOOM schedules a registered action
/// followed by an unregistered one; everything else transitions without
/// actions.
struct CounterMachine;

impl TransitionEngine<u32, Recipe<u32>, OutputSequence> for CounterMachine {
    type ControlState = Phase;

    fn initial_state(&self) -> Phase {
        Phase::Idle
    }

    fn transition(
        &self,
        current: &Phase,
        event: &Event,
        _extended: &u32,
    ) -> TransitionOutcome<Phase, u32, Recipe<u32>, OutputSequence> {
        match event.name() {
            "INC" => TransitionOutcome::with_actions(
                Phase::Counting,
                vec![ActionDescriptor::named("increment")],
            ),
            "BOOM" => TransitionOutcome::with_actions(
                Phase::Counting,
                vec![
                    ActionDescriptor::named("increment"),
                    ActionDescriptor::named("unregistered"),
                ],
            ),
            _ => TransitionOutcome::new(*current),
        }
    }
}

fn counter_interpreter() -> Interpreter<CounterMachine, u32, Recipe<u32>, OutputSequence> {
    let config = InterpreterBuilder::new()
        .update_state(copy_on_write())
        .merge_outputs(sequence_outputs())
        .no_output(NO_OUTPUT)
        .action("increment", |count: &u32, _event, _action| ActionOutcome {
            updates: recipe(|c: &mut u32| *c += 1),
            outputs: Some(vec![json!(count + 1)]),
        })
        .build()
        .unwrap();
    Interpreter::new(CounterMachine, 0, config)
}

prop_compose! {
    fn arbitrary_event()(variant in 0..2u8) -> Event {
        match variant {
            0 => Event::new("INC"),
            _ => Event::new("NOP"),
        }
    }
}

proptest! {
    #[test]
    fn event_processing_is_deterministic(
        events in prop::collection::vec(arbitrary_event(), 0..12)
    ) {
        let mut left = counter_interpreter();
        let mut right = counter_interpreter();

        for event in &events {
            let a = left.send(event).unwrap();
            let b = right.send(event).unwrap();
            prop_assert_eq!(a, b);
        }

        prop_assert_eq!(left.extended_state(), right.extended_state());
        prop_assert_eq!(left.control_state(), right.control_state());
    }

    #[test]
    fn failed_event_leaves_the_committed_pair_untouched(
        prefix in prop::collection::vec(arbitrary_event(), 0..8)
    ) {
        let mut interpreter = counter_interpreter();
        for event in &prefix {
            interpreter.send(event).unwrap();
        }
        let control_before = *interpreter.control_state();
        let extended_before = *interpreter.extended_state();

        let result = interpreter.send(&Event::new("BOOM"));

        prop_assert!(result.is_err());
        prop_assert_eq!(interpreter.control_state(), &control_before);
        prop_assert_eq!(interpreter.extended_state(), &extended_before);
    }

    #[test]
    fn events_without_actions_return_the_sentinel(count in 0..10u32) {
        let mut interpreter = counter_interpreter();

        for _ in 0..count {
            let outputs = interpreter.send(&Event::new("NOP")).unwrap();
            prop_assert_eq!(outputs, NO_OUTPUT);
            prop_assert_eq!(interpreter.extended_state(), &0);
        }
    }

    #[test]
    fn snapshots_taken_before_a_send_remain_valid(count in 1..8u32) {
        let mut interpreter = counter_interpreter();
        let snapshot = *interpreter.extended_state();

        for _ in 0..count {
            interpreter.send(&Event::new("INC")).unwrap();
        }

        prop_assert_eq!(snapshot, 0);
        prop_assert_eq!(*interpreter.extended_state(), count);
    }

    #[test]
    fn output_sequence_tracks_the_running_count(count in 1..8u32) {
        let mut interpreter = counter_interpreter();

        for expected in 1..=count {
            let outputs = interpreter.send(&Event::new("INC")).unwrap();
            prop_assert_eq!(outputs, Some(vec![json!(expected)]));
        }
    }

    #[test]
    fn checkpoint_roundtrips_the_committed_pair(count in 0..8u32) {
        let mut interpreter = counter_interpreter();
        for _ in 0..count {
            interpreter.send(&Event::new("INC")).unwrap();
        }

        let encoded = interpreter.checkpoint().to_json().unwrap();
        let restored: Checkpoint<Phase, u32> = Checkpoint::from_json(&encoded).unwrap();

        prop_assert_eq!(restored.extended_state, count);
        prop_assert_eq!(&restored.control_state, interpreter.control_state());
    }
}
