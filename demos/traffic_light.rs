//! Traffic Light Interpreter
//!
//! This example drives a non-hierarchical three-state light machine through
//! the interpreter with copy-on-write update semantics.
//!
//! Key concepts:
//! - A hand-written transition engine behind the `TransitionEngine` trait
//! - Named action descriptors resolved through a factory map
//! - Copy-on-write recipes evolving the extended state
//! - Outputs aggregated per event and returned to the caller
//!
//! Run with: cargo run --example traffic_light

use serde_json::json;
use statefold::reducers::{copy_on_write, recipe, sequence_outputs, OutputSequence, Recipe, NO_OUTPUT};
use statefold::{
    action_map, ActionDescriptor, ActionFactoryMap, ActionOutcome, Event, Interpreter,
    InterpreterBuilder, TransitionEngine, TransitionOutcome,
};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Light {
    Green,
    Yellow,
    Red,
}

struct LightMachine;

impl TransitionEngine<Vec<String>, Recipe<Vec<String>>, OutputSequence> for LightMachine {
    type ControlState = Light;

    fn initial_state(&self) -> Light {
        Light::Green
    }

    fn transition(
        &self,
        current: &Light,
        event: &Event,
        extended: &Vec<String>,
    ) -> TransitionOutcome<Light, Vec<String>, Recipe<Vec<String>>, OutputSequence> {
        if event.name() != "TIMER" {
            return TransitionOutcome::new(*current);
        }
        match current {
            Light::Green => TransitionOutcome::with_actions(
                Light::Yellow,
                vec![
                    ActionDescriptor::named("incGreenTimer"),
                    ActionDescriptor::named("incYellowTimer"),
                ],
            ),
            Light::Yellow => {
                let yellows = extended.iter().filter(|e| e.as_str() == "yellow").count();
                if yellows > 1 {
                    TransitionOutcome::new(Light::Red)
                } else {
                    TransitionOutcome::with_actions(
                        Light::Yellow,
                        vec![ActionDescriptor::named("incYellowTimer")],
                    )
                }
            }
            Light::Red => TransitionOutcome::with_actions(
                Light::Green,
                vec![ActionDescriptor::named("logGreen")],
            ),
        }
    }
}

fn main() {
    println!("=== Traffic Light Interpreter ===\n");

    let factories: ActionFactoryMap<Vec<String>, Recipe<Vec<String>>, OutputSequence> = action_map! {
        "incGreenTimer" => |history, event, _action| ActionOutcome {
            updates: recipe(|entries: &mut Vec<String>| entries.push("green".to_string())),
            outputs: Some(vec![json!(history), json!(event.name())]),
        },
        "incYellowTimer" => |history, event, _action| ActionOutcome {
            updates: recipe(|entries: &mut Vec<String>| entries.push("yellow".to_string())),
            outputs: Some(vec![json!(history), json!(event.name())]),
        },
        "logGreen" => |history, event, _action| ActionOutcome {
            updates: recipe(|entries: &mut Vec<String>| {
                entries.pop();
                entries.pop();
            }),
            outputs: Some(vec![json!(history), json!(event.name())]),
        },
    };

    let config = InterpreterBuilder::new()
        .update_state(copy_on_write())
        .merge_outputs(sequence_outputs())
        .no_output(NO_OUTPUT)
        .actions(factories)
        .build()
        .expect("complete configuration");

    let mut interpreter = Interpreter::new(LightMachine, Vec::new(), config);

    println!("Initial control state: {:?}", interpreter.control_state());
    println!("Initial context: {:?}\n", interpreter.extended_state());

    let start_outputs = interpreter.start().expect("initialization");
    println!("start() outputs: {:?} (no entry actions on the initial state)\n", start_outputs);

    let timer = Event::new("TIMER");
    for round in 1..=5 {
        let outputs = interpreter.send(&timer).expect("TIMER processed");
        println!(
            "TIMER #{round}: outputs = {:?}\n          control = {:?}, context = {:?}",
            outputs,
            interpreter.control_state(),
            interpreter.extended_state()
        );
    }

    println!("\nEach event committed atomically: outputs reflect the state");
    println!("each action observed, in the order the engine emitted them.");

    println!("\n=== Example Complete ===");
}
