//! Macros for ergonomic factory-map construction.

/// Build an [`ActionFactoryMap`](crate::ActionFactoryMap) from
/// `identifier => closure` pairs.
///
/// # Example
///
/// ```rust
/// use statefold::action_map;
/// use statefold::reducers::{recipe, OutputSequence, Recipe};
/// use statefold::{ActionFactoryMap, ActionOutcome};
/// use serde_json::json;
///
/// let factories: ActionFactoryMap<u32, Recipe<u32>, OutputSequence> = action_map! {
///     "increment" => |count, _event, _action| ActionOutcome {
///         updates: recipe(|c: &mut u32| *c += 1),
///         outputs: Some(vec![json!(count + 1)]),
///     },
///     "reset" => |_count, _event, _action| ActionOutcome {
///         updates: recipe(|c: &mut u32| *c = 0),
///         outputs: None,
///     },
/// };
///
/// assert_eq!(factories.len(), 2);
/// ```
#[macro_export]
macro_rules! action_map {
    ($($name:expr => $factory:expr),* $(,)?) => {{
        let mut map: $crate::ActionFactoryMap<_, _, _> = ::std::collections::HashMap::new();
        $(
            map.insert(::std::string::String::from($name), $crate::factory($factory));
        )*
        map
    }};
}
