//! Checkpoint error types.

use thiserror::Error;

/// Errors raised while serializing or restoring a checkpoint.
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Encoding the checkpoint to JSON or binary failed
    #[error("Checkpoint serialization failed: {0}")]
    SerializationFailed(String),

    /// Decoding a checkpoint from JSON or binary failed
    #[error("Checkpoint deserialization failed: {0}")]
    DeserializationFailed(String),

    /// The checkpoint was written by an incompatible format version
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
