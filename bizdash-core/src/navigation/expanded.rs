//! Expanded-group set and its transitions

use std::collections::BTreeSet;

use crate::types::NavItem;

use super::matching::is_parent_active;

/// Paths of parent entries currently showing their sub-items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedSet {
    paths: BTreeSet<String>,
}

impl ExpandedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Flip membership of `path`, returning whether it is now expanded.
    ///
    /// Defined for any string.
    pub fn toggle(&mut self, path: &str) -> bool {
        if self.paths.remove(path) {
            false
        } else {
            self.paths.insert(path.to_string());
            true
        }
    }

    /// Add `path`, returning `true` if it was not already present
    pub fn insert(&mut self, path: &str) -> bool {
        self.paths.insert(path.to_string())
    }

    pub fn clear(&mut self) {
        self.paths.clear();
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ExpandedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Pure toggle: `set` with the membership of `path` flipped.
#[must_use]
pub fn toggle_expanded(set: &ExpandedSet, path: &str) -> ExpandedSet {
    let mut next = set.clone();
    next.toggle(path);
    next
}

/// Pure auto-expansion for a route change.
///
/// Every item with sub-items that is parent-active for `current` is added;
/// nothing is ever removed, so applying it twice equals applying it once.
#[must_use]
pub fn auto_expand(items: &[NavItem], current: &str, set: &ExpandedSet) -> ExpandedSet {
    let mut next = set.clone();
    expand_active_parents(items, current, &mut next);
    next
}

/// In-place form of [`auto_expand`]; returns the paths that were added.
pub(crate) fn expand_active_parents<'a>(
    items: &'a [NavItem],
    current: &str,
    set: &mut ExpandedSet,
) -> Vec<&'a str> {
    items
        .iter()
        .filter(|item| item.has_sub_items() && is_parent_active(item, current))
        .filter_map(|item| set.insert(&item.path).then_some(item.path.as_str()))
        .collect()
}
