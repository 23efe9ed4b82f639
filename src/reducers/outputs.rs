//! Output aggregation over sequences of JSON values.

use std::sync::Arc;

use serde_json::Value;

use crate::interpreter::OutputReducer;

/// Output accumulator shape: `None` until the first batch arrives.
pub type OutputSequence = Option<Vec<Value>>;

/// The "no output" sentinel seeding every event's fold.
pub const NO_OUTPUT: OutputSequence = None;

/// Output merge reducer that concatenates batches in arrival order.
///
/// A `None` batch contributes nothing, so an event whose actions all declare
/// no outputs still returns the sentinel.
pub fn sequence_outputs() -> OutputReducer<OutputSequence> {
    Arc::new(|accumulated: OutputSequence, batch: OutputSequence| match batch {
        None => accumulated,
        Some(values) => {
            let mut merged = accumulated.unwrap_or_default();
            merged.extend(values);
            Some(merged)
        }
    })
}
