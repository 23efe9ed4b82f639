//! Door Machine with Patch Updates and Checkpointing
//!
//! This example drives a hierarchical door machine whose extended state is a
//! JSON document evolved through RFC 6902 patch sequences, then checkpoints
//! the committed state pair and resumes from it.
//!
//! Key concepts:
//! - Hierarchical control states behind an opaque engine-owned enum
//! - An embedded action factory as the error sub-state's entry action
//! - Patch-sequence update semantics over `serde_json::Value`
//! - Checkpoint to JSON, restore with a fresh machine and configuration
//!
//! Run with: cargo run --example door_machine

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use statefold::reducers::{
    empty_patch, patch_sequence, sequence_outputs, OutputSequence, Patch, NO_OUTPUT,
};
use statefold::{
    action_map, factory, ActionDescriptor, ActionFactoryMap, ActionOutcome, Checkpoint, Event,
    Interpreter, InterpreterBuilder, InterpreterConfig, TransitionEngine, TransitionOutcome,
};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
enum Door {
    ClosedIdle,
    ClosedError,
    Opened,
}

struct DoorMachine;

impl TransitionEngine<Value, Patch, OutputSequence> for DoorMachine {
    type ControlState = Door;

    fn initial_state(&self) -> Door {
        Door::ClosedIdle
    }

    fn transition(
        &self,
        current: &Door,
        event: &Event,
        extended: &Value,
    ) -> TransitionOutcome<Door, Value, Patch, OutputSequence> {
        match (current, event.name()) {
            (Door::ClosedIdle | Door::ClosedError, "OPEN") => {
                if extended["isAdmin"] == json!(true) {
                    TransitionOutcome::new(Door::Opened)
                } else {
                    TransitionOutcome::with_actions(
                        Door::ClosedError,
                        vec![ActionDescriptor::embedded(factory(
                            |_state, event, _action| ActionOutcome {
                                updates: empty_patch(),
                                outputs: Some(vec![
                                    json!("Entered .closed.error!"),
                                    json!(event.name()),
                                ]),
                            },
                        ))],
                    )
                }
            }
            (Door::Opened, "CLOSE") => {
                let override_admin = event
                    .field("overrideAdmin")
                    .and_then(Value::as_bool)
                    .unwrap_or(false);
                if override_admin {
                    TransitionOutcome::with_actions(
                        Door::ClosedIdle,
                        vec![ActionDescriptor::named("cancelAdmin")],
                    )
                } else {
                    TransitionOutcome::new(Door::ClosedIdle)
                }
            }
            _ => TransitionOutcome::new(*current),
        }
    }
}

fn door_config() -> InterpreterConfig<Value, Patch, OutputSequence> {
    let factories: ActionFactoryMap<Value, Patch, OutputSequence> = action_map! {
        "cancelAdmin" => |_state, _event, _action| ActionOutcome {
            updates: serde_json::from_value(json!([
                {"op": "add", "path": "/isAdmin", "value": false}
            ]))
            .expect("valid patch"),
            outputs: Some(vec![json!("admin rights overriden")]),
        },
    };

    InterpreterBuilder::new()
        .update_state(patch_sequence())
        .merge_outputs(sequence_outputs())
        .no_output(NO_OUTPUT)
        .actions(factories)
        .build()
        .expect("complete configuration")
}

fn main() {
    println!("=== Door Machine: Patch Updates and Checkpointing ===\n");

    let mut interpreter = Interpreter::new(DoorMachine, json!({"isAdmin": true}), door_config());
    println!("Context: {}\n", interpreter.extended_state());

    let outputs = interpreter.send(&Event::new("OPEN")).expect("OPEN");
    println!("OPEN  -> {:?}, outputs {:?}", interpreter.control_state(), outputs);

    let close = Event::new("CLOSE").with("overrideAdmin", true);
    let outputs = interpreter.send(&close).expect("CLOSE");
    println!(
        "CLOSE (overrideAdmin) -> {:?}, outputs {:?}, context {}",
        interpreter.control_state(),
        outputs,
        interpreter.extended_state()
    );

    // Persist the committed pair and rebuild from it
    let encoded = interpreter.checkpoint().to_json().expect("serializable");
    println!("\nCheckpoint: {encoded}\n");

    let checkpoint: Checkpoint<Door, Value> = Checkpoint::from_json(&encoded).expect("restorable");
    let mut restored = Interpreter::restore(DoorMachine, checkpoint, door_config());

    let outputs = restored.send(&Event::new("OPEN")).expect("OPEN");
    println!(
        "Restored, OPEN without admin -> {:?}, outputs {:?}",
        restored.control_state(),
        outputs
    );

    println!("\n=== Example Complete ===");
}
