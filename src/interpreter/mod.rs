//! Event processing and atomic state commits.
//!
//! This module is the shell around the core contracts: the [`Interpreter`]
//! drives an external transition engine, folds each transition's actions
//! through the configured reducers, and commits the resulting
//! `(control state, extended state)` pair atomically per processed event.

mod config;
mod machine;

pub use config::{InterpreterConfig, OutputReducer, UpdateReducer};
pub use machine::Interpreter;
