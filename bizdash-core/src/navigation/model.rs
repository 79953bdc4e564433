//! Navigation state container
//!
//! Owns the expanded set, the last observed route and the collapsed flag.
//! All mutation goes through [`NavigationModel::on_route_change`],
//! [`NavigationModel::toggle`], [`NavigationModel::activate`] and
//! [`NavigationModel::set_collapsed`].

use crate::router::RouteObserver;
use crate::types::{NavIcon, NavItem, NavTree};

use super::expanded::{expand_active_parents, ExpandedSet};
use super::matching::{is_active, is_exact_active, is_parent_active};

/// Result of activating (clicking / pressing Enter on) a navigation row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    /// The router should move to this path
    Navigate(String),
    /// A parent group was opened or closed
    Toggled { path: String, expanded: bool },
}

/// Derived flags of a sub-item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubItemState {
    pub path: String,
    pub label: String,
    pub active: bool,
    pub exact_active: bool,
}

/// Derived flags of a top-level item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItemState {
    pub path: String,
    pub label: String,
    pub icon: NavIcon,
    pub badge: Option<String>,
    pub active: bool,
    pub exact_active: bool,
    pub parent_active: bool,
    pub expanded: bool,
    pub sub_items: Vec<SubItemState>,
}

impl NavItemState {
    pub fn has_sub_items(&self) -> bool {
        !self.sub_items.is_empty()
    }
}

/// A row of the flattened sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRow {
    /// Top-level item by index
    Item(usize),
    /// Sub-item by (parent index, child index)
    SubItem(usize, usize),
}

/// Navigation model
#[derive(Debug, Clone)]
pub struct NavigationModel {
    tree: NavTree,
    expanded: ExpandedSet,
    current_path: String,
    collapsed: bool,
}

impl NavigationModel {
    /// Create a model for `tree`, positioned at `/` with nothing expanded
    pub fn new(tree: NavTree) -> Self {
        Self {
            tree,
            expanded: ExpandedSet::new(),
            current_path: "/".to_string(),
            collapsed: false,
        }
    }

    pub fn tree(&self) -> &NavTree {
        &self.tree
    }

    pub fn expanded(&self) -> &ExpandedSet {
        &self.expanded
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    /// Record a new route and expand the parents it lands under.
    pub fn on_route_change(&mut self, path: &str) {
        path.clone_into(&mut self.current_path);
        let added = expand_active_parents(self.tree.items(), &self.current_path, &mut self.expanded);
        if !added.is_empty() {
            log::debug!("Route {path} auto-expanded {added:?}");
        }
    }

    /// Explicit user toggle of a group.
    ///
    /// Never fails. Paths that own no sub-items are ignored so the expanded
    /// set only ever holds expandable parents. Returns the resulting
    /// membership.
    pub fn toggle(&mut self, path: &str) -> bool {
        if !self.tree.is_expandable(path) {
            log::debug!("Ignoring toggle of non-expandable path {path}");
            return self.expanded.contains(path);
        }
        let expanded = self.expanded.toggle(path);
        log::debug!("Toggled {path}: expanded={expanded}");
        expanded
    }

    /// Handle activation of the row for `path`.
    ///
    /// Parents toggle while the sidebar is expanded; when it is collapsed the
    /// expansion UI is unavailable so they navigate to their own path instead.
    pub fn activate(&mut self, path: &str) -> NavAction {
        if self.tree.is_expandable(path) && !self.collapsed {
            let expanded = self.toggle(path);
            return NavAction::Toggled {
                path: path.to_string(),
                expanded,
            };
        }
        NavAction::Navigate(path.to_string())
    }

    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
    }

    /// Flip the collapsed flag, returning the new value
    pub fn toggle_collapsed(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        self.collapsed
    }

    /// Forget all expansions, as on remount
    pub fn reset(&mut self) {
        self.expanded.clear();
    }

    /// Per-item flags for the current route and expanded set
    pub fn derive(&self) -> Vec<NavItemState> {
        self.tree
            .items()
            .iter()
            .map(|item| self.derive_item(item))
            .collect()
    }

    fn derive_item(&self, item: &NavItem) -> NavItemState {
        let current = self.current_path.as_str();
        NavItemState {
            path: item.path.clone(),
            label: item.label.clone(),
            icon: item.icon,
            badge: item.badge.clone(),
            active: is_active(&item.path, current),
            exact_active: is_exact_active(&item.path, current),
            parent_active: is_parent_active(item, current),
            expanded: self.expanded.contains(&item.path),
            sub_items: item
                .sub_items
                .iter()
                .map(|sub| SubItemState {
                    path: sub.path.clone(),
                    label: sub.label.clone(),
                    active: is_active(&sub.path, current),
                    exact_active: is_exact_active(&sub.path, current),
                })
                .collect(),
        }
    }

    /// Rows the sidebar shows, top to bottom.
    ///
    /// Sub-items appear under expanded parents only while the sidebar is not
    /// collapsed.
    pub fn visible_rows(&self) -> Vec<NavRow> {
        let mut rows = Vec::new();
        for (i, item) in self.tree.items().iter().enumerate() {
            rows.push(NavRow::Item(i));
            if !self.collapsed && self.expanded.contains(&item.path) {
                rows.extend((0..item.sub_items.len()).map(|j| NavRow::SubItem(i, j)));
            }
        }
        rows
    }

    /// Route path behind a row
    pub fn row_path(&self, row: NavRow) -> Option<&str> {
        let items = self.tree.items();
        match row {
            NavRow::Item(i) => items.get(i).map(|item| item.path.as_str()),
            NavRow::SubItem(i, j) => items
                .get(i)
                .and_then(|item| item.sub_items.get(j))
                .map(|sub| sub.path.as_str()),
        }
    }
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::new(NavTree::dashboard())
    }
}

impl RouteObserver for NavigationModel {
    fn on_route_change(&mut self, path: &str) {
        NavigationModel::on_route_change(self, path);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn state<'a>(states: &'a [NavItemState], path: &str) -> &'a NavItemState {
        states.iter().find(|s| s.path == path).unwrap()
    }

    #[test]
    fn test_new_model_starts_at_root() {
        let model = NavigationModel::default();
        assert_eq!(model.current_path(), "/");
        assert!(model.expanded().is_empty());
        assert!(!model.is_collapsed());
    }

    #[test]
    fn test_toggle_ignores_non_expandable() {
        let mut model = NavigationModel::default();
        assert!(!model.toggle("/invoices"));
        assert!(!model.toggle("/does-not-exist"));
        assert!(model.expanded().is_empty());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut model = NavigationModel::default();
        assert!(model.toggle("/products"));
        assert!(!model.toggle("/products"));
        assert!(model.expanded().is_empty());
    }

    #[test]
    fn test_activate_parent_toggles_when_expanded() {
        let mut model = NavigationModel::default();
        assert_eq!(
            model.activate("/services"),
            NavAction::Toggled {
                path: "/services".to_string(),
                expanded: true
            }
        );
        assert!(model.is_expanded("/services"));
    }

    #[test]
    fn test_activate_parent_navigates_when_collapsed() {
        let mut model = NavigationModel::default();
        model.set_collapsed(true);
        assert_eq!(
            model.activate("/products"),
            NavAction::Navigate("/products".to_string())
        );
        assert!(model.expanded().is_empty());
    }

    #[test]
    fn test_activate_leaf_and_sub_item_navigate() {
        let mut model = NavigationModel::default();
        assert_eq!(
            model.activate("/customers"),
            NavAction::Navigate("/customers".to_string())
        );
        assert_eq!(
            model.activate("/categories"),
            NavAction::Navigate("/categories".to_string())
        );
        assert!(model.expanded().is_empty());
    }

    #[test]
    fn test_derive_flags_for_detail_route() {
        let mut model = NavigationModel::default();
        model.on_route_change("/invoices/INV-1001");
        let states = model.derive();

        let invoices = state(&states, "/invoices");
        assert!(invoices.active);
        assert!(!invoices.exact_active);
        assert!(invoices.parent_active);
        assert!(!state(&states, "/").active);
    }

    #[test]
    fn test_derive_sub_item_flags() {
        let mut model = NavigationModel::default();
        model.on_route_change("/services/plans");
        let states = model.derive();

        let services = state(&states, "/services");
        assert!(services.active);
        assert!(services.parent_active);
        assert!(services.expanded);
        assert!(services.sub_items[0].exact_active);
        assert!(!services.sub_items[1].active);
    }

    #[test]
    fn test_visible_rows_follow_expansion() {
        let mut model = NavigationModel::default();
        assert_eq!(model.visible_rows().len(), 7);

        model.toggle("/products");
        let rows = model.visible_rows();
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[3], NavRow::SubItem(2, 0));
        assert_eq!(model.row_path(rows[4]), Some("/inventory"));

        model.set_collapsed(true);
        assert_eq!(model.visible_rows().len(), 7);
        assert!(model.is_expanded("/products"));
    }

    #[test]
    fn test_reset_clears_expansions() {
        let mut model = NavigationModel::default();
        model.on_route_change("/categories");
        model.toggle("/services");
        model.reset();
        assert!(model.expanded().is_empty());
    }

    #[test]
    fn test_row_path_out_of_range() {
        let model = NavigationModel::default();
        assert_eq!(model.row_path(NavRow::Item(99)), None);
        assert_eq!(model.row_path(NavRow::SubItem(0, 0)), None);
    }
}
