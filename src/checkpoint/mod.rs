//! Checkpointing of the committed interpreter state pair.
//!
//! A checkpoint captures the `(control state, extended state)` pair the
//! interpreter has committed, with enough metadata to validate compatibility
//! when restoring. Reducers and action factories are not serializable, so a
//! restored interpreter is rebuilt with a fresh machine and configuration.
//! No I/O happens here; callers decide where the serialized bytes go.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for the checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of an interpreter's committed state pair.
///
/// # Example
///
/// ```rust
/// use statefold::Checkpoint;
///
/// let checkpoint = Checkpoint::new("green".to_string(), vec![1u32, 2]);
/// let json = checkpoint.to_json().unwrap();
/// let restored: Checkpoint<String, Vec<u32>> = Checkpoint::from_json(&json).unwrap();
///
/// assert_eq!(restored.control_state, "green");
/// assert_eq!(restored.extended_state, vec![1, 2]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Checkpoint<C, E> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When the checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Committed control state
    pub control_state: C,

    /// Committed extended state
    pub extended_state: E,
}

impl<C, E> Checkpoint<C, E> {
    /// Capture a state pair under the current format version.
    pub fn new(control_state: C, extended_state: E) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            control_state,
            extended_state,
        }
    }
}

impl<C, E> Checkpoint<C, E>
where
    C: Serialize + DeserializeOwned,
    E: Serialize + DeserializeOwned,
{
    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from JSON, validating the format version.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()
    }

    /// Serialize to a compact binary encoding.
    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from the binary encoding, validating the format version.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()
    }

    fn validate(self) -> Result<Self, CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(self)
    }
}
