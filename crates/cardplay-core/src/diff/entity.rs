//! Generic id-keyed entity differ.
//!
//! Classifies every id of two collections as added, removed or modified.
//! Both collections are indexed once by id, so the comparison is linear.
//! Duplicate ids are not rejected: the last entity with a given id wins the
//! index, and the id is reported at most once, at its first position.

use std::collections::{HashMap, HashSet};

use crate::diff::model::ChangeType;
use crate::model::Identified;

/// Classification of one id, borrowing the entities it was derived from.
#[derive(Debug, PartialEq)]
pub enum EntityChange<'a, T> {
    Added(&'a T),
    Removed(&'a T),
    Modified { old: &'a T, new: &'a T },
}

impl<T> Clone for EntityChange<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EntityChange<'_, T> {}

impl<'a, T: Identified> EntityChange<'a, T> {
    pub fn change_type(&self) -> ChangeType {
        match self {
            EntityChange::Added(_) => ChangeType::Added,
            EntityChange::Removed(_) => ChangeType::Removed,
            EntityChange::Modified { .. } => ChangeType::Modified,
        }
    }

    pub fn entity_id(&self) -> &'a str {
        match self {
            EntityChange::Added(e) | EntityChange::Removed(e) => e.entity_id(),
            EntityChange::Modified { new, .. } => new.entity_id(),
        }
    }
}

/// Index a collection by id; later duplicates shadow earlier ones.
pub fn index_by_id<T: Identified>(entities: &[T]) -> HashMap<&str, &T> {
    entities.iter().map(|e| (e.entity_id(), e)).collect()
}

/// Diff two collections of one entity kind.
///
/// Additions and modifications come first, in `new` order; removals follow,
/// in `old` order. Entities present in both and `equals` are omitted.
pub fn diff_entities<'a, T, F>(old: &'a [T], new: &'a [T], equals: F) -> Vec<EntityChange<'a, T>>
where
    T: Identified,
    F: Fn(&T, &T) -> bool,
{
    let old_by_id = index_by_id(old);
    let new_by_id = index_by_id(new);
    let mut changes = Vec::new();

    let mut visited: HashSet<&str> = HashSet::with_capacity(new.len());
    for entity in new {
        let id = entity.entity_id();
        if !visited.insert(id) {
            continue;
        }
        let current = new_by_id.get(id).copied().unwrap_or(entity);
        match old_by_id.get(id).copied() {
            None => changes.push(EntityChange::Added(current)),
            Some(previous) if !equals(previous, current) => changes.push(EntityChange::Modified {
                old: previous,
                new: current,
            }),
            Some(_) => {}
        }
    }

    let mut visited: HashSet<&str> = HashSet::with_capacity(old.len());
    for entity in old {
        let id = entity.entity_id();
        if !visited.insert(id) || new_by_id.contains_key(id) {
            continue;
        }
        let previous = old_by_id.get(id).copied().unwrap_or(entity);
        changes.push(EntityChange::Removed(previous));
    }

    changes
}
