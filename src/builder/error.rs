//! Build errors for interpreter configuration.

use thiserror::Error;

/// Errors that can occur when assembling an interpreter configuration.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Update reducer not specified. Call .update_state(reducer) before .build()")]
    MissingUpdateReducer,

    #[error("Output merge reducer not specified. Call .merge_outputs(reducer) before .build()")]
    MissingOutputReducer,

    #[error("No-output sentinel not specified. Call .no_output(seed) before .build()")]
    MissingNoOutputSeed,
}
