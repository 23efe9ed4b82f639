//! Action descriptors, action factories, and descriptor resolution.
//!
//! A transition computation schedules side effects as action descriptors.
//! Each descriptor either embeds its action factory directly or names one
//! registered in the interpreter's factory map. Resolution is a single pure
//! dispatch; the factory itself declares how the extended state should change
//! and what the interpreter should emit.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::core::error::InterpreterError;
use crate::core::event::Event;

/// What one action factory invocation declares: the update specification to
/// fold into the extended state and the outputs to merge into the event's
/// accumulator.
pub struct ActionOutcome<U, O> {
    /// Update specification handed to the configured update reducer.
    pub updates: U,
    /// Outputs handed to the configured output merge reducer.
    pub outputs: O,
}

/// The callable that executes one action descriptor's effect.
///
/// Invoked once per descriptor with the extended state as folded so far for
/// the current event, the event itself, and the descriptor being executed,
/// in the order the transition engine supplied them.
pub type ActionFactory<E, U, O> =
    Arc<dyn Fn(&E, &Event, &ActionDescriptor<E, U, O>) -> ActionOutcome<U, O> + Send + Sync>;

/// Mapping from action identifiers to factories, consulted for named
/// descriptors. Lookups are exact-match.
pub type ActionFactoryMap<E, U, O> = HashMap<String, ActionFactory<E, U, O>>;

/// Wrap a closure as an [`ActionFactory`].
pub fn factory<E, U, O, F>(f: F) -> ActionFactory<E, U, O>
where
    E: 'static,
    U: 'static,
    O: 'static,
    F: Fn(&E, &Event, &ActionDescriptor<E, U, O>) -> ActionOutcome<U, O> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// One scheduled side effect emitted by a transition computation.
///
/// Exactly two shapes exist. `Embedded` carries a directly callable factory;
/// `Named` carries an identifier to be looked up in the configured factory
/// map, plus whatever extra payload the engine attached. A bare identifier is
/// a `Named` descriptor with empty params.
pub enum ActionDescriptor<E: 'static, U: 'static, O: 'static> {
    /// Carries its action factory directly. Takes precedence over any
    /// identifier also attached to the descriptor.
    Embedded {
        /// Optional identifier kept for diagnostics; never used for lookup.
        name: Option<String>,
        /// The factory to invoke for this descriptor.
        factory: ActionFactory<E, U, O>,
    },
    /// References a factory registered in the interpreter's factory map.
    Named {
        /// Identifier looked up in the factory map.
        name: String,
        /// Arbitrary payload carried alongside the identifier.
        params: Map<String, Value>,
    },
}

impl<E: 'static, U: 'static, O: 'static> ActionDescriptor<E, U, O> {
    /// Descriptor embedding a factory directly.
    pub fn embedded(factory: ActionFactory<E, U, O>) -> Self {
        Self::Embedded {
            name: None,
            factory,
        }
    }

    /// Embedded descriptor that also carries an identifier. The identifier is
    /// diagnostic only: the embedded factory always wins over the map.
    pub fn embedded_named(name: impl Into<String>, factory: ActionFactory<E, U, O>) -> Self {
        Self::Embedded {
            name: Some(name.into()),
            factory,
        }
    }

    /// Named descriptor with no extra payload.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            params: Map::new(),
        }
    }

    /// Named descriptor carrying a params payload.
    pub fn named_with(name: impl Into<String>, params: Map<String, Value>) -> Self {
        Self::Named {
            name: name.into(),
            params,
        }
    }

    /// The identifier attached to this descriptor, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Embedded { name, .. } => name.as_deref(),
            Self::Named { name, .. } => Some(name),
        }
    }

    /// The params payload of a named descriptor.
    pub fn params(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Embedded { .. } => None,
            Self::Named { params, .. } => Some(params),
        }
    }

    /// Resolve this descriptor to the factory to invoke.
    ///
    /// An embedded factory is returned verbatim, regardless of any identifier
    /// the descriptor also carries. A named descriptor is looked up in
    /// `factories` by exact match. Resolution failure aborts the enclosing
    /// event's processing entirely.
    ///
    /// # Errors
    ///
    /// [`InterpreterError::InvalidActionShape`] for a named descriptor with
    /// an empty identifier; [`InterpreterError::UnresolvedActionFactory`]
    /// when the identifier is not registered.
    pub fn resolve<'a>(
        &'a self,
        factories: &'a ActionFactoryMap<E, U, O>,
    ) -> Result<&'a ActionFactory<E, U, O>, InterpreterError> {
        match self {
            Self::Embedded { factory, .. } => Ok(factory),
            Self::Named { name, .. } => {
                if name.is_empty() {
                    return Err(InterpreterError::InvalidActionShape);
                }
                factories
                    .get(name)
                    .ok_or_else(|| InterpreterError::UnresolvedActionFactory { name: name.clone() })
            }
        }
    }
}

impl<E: 'static, U: 'static, O: 'static> Clone for ActionDescriptor<E, U, O> {
    fn clone(&self) -> Self {
        match self {
            Self::Embedded { name, factory } => Self::Embedded {
                name: name.clone(),
                factory: Arc::clone(factory),
            },
            Self::Named { name, params } => Self::Named {
                name: name.clone(),
                params: params.clone(),
            },
        }
    }
}

impl<E: 'static, U: 'static, O: 'static> fmt::Debug for ActionDescriptor<E, U, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded { name, .. } => f
                .debug_struct("Embedded")
                .field("name", name)
                .finish_non_exhaustive(),
            Self::Named { name, params } => f
                .debug_struct("Named")
                .field("name", name)
                .field("params", params)
                .finish(),
        }
    }
}
