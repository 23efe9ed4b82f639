//! Reference reducer implementations.
//!
//! The interpreter depends only on the reducer contracts in
//! [`crate::interpreter`]; this module ships the two update shapes most
//! callers want (copy-on-write recipes and JSON patch sequences) plus an
//! output merge that concatenates batches. Any function with the right shape
//! can replace them.

mod copy_on_write;
mod outputs;
mod patch;

pub use copy_on_write::{copy_on_write, recipe, Recipe};
pub use outputs::{sequence_outputs, OutputSequence, NO_OUTPUT};
pub use patch::{empty_patch, patch_sequence, Patch};
