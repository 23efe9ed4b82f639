//! Patch-sequence update semantics over JSON documents.

use std::sync::Arc;

use serde_json::Value;

use crate::interpreter::UpdateReducer;

pub use json_patch::Patch;

/// The "no updates" patch: an empty operation sequence.
pub fn empty_patch() -> Patch {
    Patch(Vec::new())
}

/// Update reducer that applies an RFC 6902 patch sequence to a clone of the
/// current document.
///
/// The input document is never touched. Operations are not validated up
/// front; a failing patch yields the document unchanged rather than a
/// partially patched one.
///
/// # Example
///
/// ```rust
/// use statefold::reducers::{patch_sequence, Patch};
/// use serde_json::json;
///
/// let update = patch_sequence();
/// let before = json!({"isAdmin": true});
/// let revoke: Patch = serde_json::from_value(json!([
///     {"op": "add", "path": "/isAdmin", "value": false}
/// ]))
/// .unwrap();
///
/// let after = update(&before, revoke);
///
/// assert_eq!(before, json!({"isAdmin": true}));
/// assert_eq!(after, json!({"isAdmin": false}));
/// ```
pub fn patch_sequence() -> UpdateReducer<Value, Patch> {
    Arc::new(|document: &Value, updates: Patch| {
        let mut next = document.clone();
        match json_patch::patch(&mut next, &updates) {
            Ok(()) => next,
            Err(_) => document.clone(),
        }
    })
}
