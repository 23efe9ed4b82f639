//! Copy-on-write update semantics: recipes applied to a fresh clone.

use std::sync::Arc;

use crate::interpreter::UpdateReducer;

/// A mutation recipe: runs once against a clone of the extended state.
pub type Recipe<E> = Box<dyn FnOnce(&mut E) + Send + Sync>;

/// Wrap a closure as a [`Recipe`].
pub fn recipe<E, F>(f: F) -> Recipe<E>
where
    E: 'static,
    F: FnOnce(&mut E) + Send + Sync + 'static,
{
    Box::new(f)
}

/// Update reducer that clones the current extended state and runs the recipe
/// against the clone.
///
/// The input state is never touched, so snapshots taken before the update
/// stay valid; the recipe may mutate freely because it only ever sees the
/// copy.
///
/// # Example
///
/// ```rust
/// use statefold::reducers::{copy_on_write, recipe};
///
/// let update = copy_on_write::<Vec<String>>();
/// let before = vec!["green".to_string()];
///
/// let after = update(&before, recipe(|entries: &mut Vec<String>| entries.push("yellow".to_string())));
///
/// assert_eq!(before, vec!["green".to_string()]);
/// assert_eq!(after, vec!["green".to_string(), "yellow".to_string()]);
/// ```
pub fn copy_on_write<E>() -> UpdateReducer<E, Recipe<E>>
where
    E: Clone + 'static,
{
    Arc::new(|state: &E, updates: Recipe<E>| {
        let mut next = state.clone();
        updates(&mut next);
        next
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_mutates_only_the_clone() {
        let update = copy_on_write::<Vec<u32>>();
        let before = vec![1, 2];

        let after = update(&before, recipe(|numbers: &mut Vec<u32>| numbers.push(3)));

        assert_eq!(before, vec![1, 2]);
        assert_eq!(after, vec![1, 2, 3]);
    }

    #[test]
    fn empty_recipe_returns_an_equal_state() {
        let update = copy_on_write::<u32>();
        let after = update(&7, recipe(|_| {}));
        assert_eq!(after, 7);
    }

    #[test]
    fn recipes_compose_sequentially_through_the_fold() {
        let update = copy_on_write::<u32>();
        let first = update(&0, recipe(|n| *n += 1));
        let second = update(&first, recipe(|n| *n *= 10));
        assert_eq!(second, 10);
    }
}
