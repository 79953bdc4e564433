//! Navigation tree type definitions

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::router::is_normalized;

/// Icon identity of a navigation entry.
///
/// The model never renders icons; front-ends map each variant to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NavIcon {
    Dashboard,
    Invoices,
    Products,
    Customers,
    Services,
    Reports,
    Settings,
    #[default]
    Generic,
}

/// Second-level navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubNavItem {
    /// Route path
    pub path: String,
    /// Display text
    pub label: String,
}

impl SubNavItem {
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }
}

/// Top-level navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Route path
    pub path: String,
    /// Display text
    pub label: String,
    /// Icon identity
    #[serde(default)]
    pub icon: NavIcon,
    /// Static badge text (e.g. a count), supplied by configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Ordered child entries
    #[serde(rename = "subItems", default, skip_serializing_if = "Vec::is_empty")]
    pub sub_items: Vec<SubNavItem>,
}

impl NavItem {
    pub fn new(path: impl Into<String>, label: impl Into<String>, icon: NavIcon) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            icon,
            badge: None,
            sub_items: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    #[must_use]
    pub fn with_sub_items(mut self, sub_items: Vec<SubNavItem>) -> Self {
        self.sub_items = sub_items;
        self
    }

    /// Whether this entry owns sub-items (and can therefore be expanded)
    pub fn has_sub_items(&self) -> bool {
        !self.sub_items.is_empty()
    }
}

/// Validated, immutable navigation tree.
///
/// Paths are unique across all levels and rooted at `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavTree {
    items: Vec<NavItem>,
}

impl NavTree {
    /// Validate and build a tree
    pub fn new(items: Vec<NavItem>) -> CoreResult<Self> {
        if items.is_empty() {
            return Err(CoreError::EmptyTree);
        }

        let mut seen = HashSet::new();
        let all_paths = items.iter().flat_map(|item| {
            std::iter::once(item.path.as_str()).chain(item.sub_items.iter().map(|s| s.path.as_str()))
        });

        for path in all_paths {
            if !is_normalized(path) {
                return Err(CoreError::InvalidPath(path.to_string()));
            }
            if !seen.insert(path) {
                return Err(CoreError::DuplicatePath(path.to_string()));
            }
        }

        Ok(Self { items })
    }

    /// Default tree of the business dashboard
    pub fn dashboard() -> Self {
        Self {
            items: vec![
                NavItem::new("/", "Dashboard", NavIcon::Dashboard),
                NavItem::new("/invoices", "Invoices", NavIcon::Invoices).with_badge("4"),
                NavItem::new("/products", "Products", NavIcon::Products).with_sub_items(vec![
                    SubNavItem::new("/categories", "Categories"),
                    SubNavItem::new("/inventory", "Inventory"),
                ]),
                NavItem::new("/customers", "Customers", NavIcon::Customers),
                NavItem::new("/services", "Services", NavIcon::Services).with_sub_items(vec![
                    SubNavItem::new("/services/plans", "Plans"),
                    SubNavItem::new("/services/subscriptions", "Subscriptions"),
                ]),
                NavItem::new("/reports", "Reports", NavIcon::Reports).with_badge("New"),
                NavItem::new("/settings", "Settings", NavIcon::Settings),
            ],
        }
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Find a top-level item by path
    pub fn item(&self, path: &str) -> Option<&NavItem> {
        self.items.iter().find(|item| item.path == path)
    }

    /// Whether `path` belongs to a top-level item that owns sub-items
    pub fn is_expandable(&self, path: &str) -> bool {
        self.item(path).is_some_and(NavItem::has_sub_items)
    }

    /// Look up the display label of any path in the tree
    pub fn label_of(&self, path: &str) -> Option<&str> {
        self.items.iter().find_map(|item| {
            if item.path == path {
                return Some(item.label.as_str());
            }
            item.sub_items
                .iter()
                .find(|sub| sub.path == path)
                .map(|sub| sub.label.as_str())
        })
    }
}

impl Default for NavTree {
    fn default() -> Self {
        Self::dashboard()
    }
}

impl<'de> Deserialize<'de> for NavTree {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let items = Vec::<NavItem>::deserialize(deserializer)?;
        Self::new(items).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_tree_is_valid() {
        let tree = NavTree::dashboard();
        assert_eq!(NavTree::new(tree.items().to_vec()).unwrap(), tree);
        assert_eq!(tree.items().len(), 7);
    }

    #[test]
    fn test_duplicate_sub_item_path_rejected() {
        let items = vec![
            NavItem::new("/products", "Products", NavIcon::Products)
                .with_sub_items(vec![SubNavItem::new("/categories", "Categories")]),
            NavItem::new("/categories", "Categories", NavIcon::Generic),
        ];
        assert_eq!(
            NavTree::new(items),
            Err(CoreError::DuplicatePath("/categories".to_string()))
        );
    }

    #[test]
    fn test_unrooted_path_rejected() {
        let items = vec![NavItem::new("invoices", "Invoices", NavIcon::Invoices)];
        assert_eq!(
            NavTree::new(items),
            Err(CoreError::InvalidPath("invoices".to_string()))
        );
    }

    #[test]
    fn test_trailing_separator_rejected() {
        let items = vec![
            NavItem::new("/", "Home", NavIcon::Dashboard),
            NavItem::new("/shop/", "Shop", NavIcon::Generic)
                .with_sub_items(vec![SubNavItem::new("/shop/orders", "Orders")]),
        ];
        assert_eq!(
            NavTree::new(items),
            Err(CoreError::InvalidPath("/shop/".to_string()))
        );
    }

    #[test]
    fn test_empty_segment_rejected() {
        let items = vec![NavItem::new("/shop", "Shop", NavIcon::Generic)
            .with_sub_items(vec![SubNavItem::new("//x", "X")])];
        assert_eq!(
            NavTree::new(items),
            Err(CoreError::InvalidPath("//x".to_string()))
        );
    }

    #[test]
    fn test_empty_path_rejected() {
        let items = vec![NavItem::new("", "Blank", NavIcon::Generic)];
        assert_eq!(NavTree::new(items), Err(CoreError::InvalidPath(String::new())));
    }

    #[test]
    fn test_empty_tree_rejected() {
        assert_eq!(NavTree::new(Vec::new()), Err(CoreError::EmptyTree));
    }

    #[test]
    fn test_is_expandable() {
        let tree = NavTree::dashboard();
        assert!(tree.is_expandable("/products"));
        assert!(tree.is_expandable("/services"));
        assert!(!tree.is_expandable("/invoices"));
        assert!(!tree.is_expandable("/categories"));
        assert!(!tree.is_expandable("/nowhere"));
    }

    #[test]
    fn test_label_of_sub_item() {
        let tree = NavTree::dashboard();
        assert_eq!(tree.label_of("/categories"), Some("Categories"));
        assert_eq!(tree.label_of("/"), Some("Dashboard"));
        assert_eq!(tree.label_of("/missing"), None);
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"[
            {"path": "/", "label": "Home", "icon": "dashboard"},
            {"path": "/shop", "label": "Shop", "subItems": [{"path": "/shop/cart", "label": "Cart"}]}
        ]"#;
        let tree: NavTree = serde_json::from_str(json).unwrap();
        assert_eq!(tree.items()[0].icon, NavIcon::Dashboard);
        assert_eq!(tree.items()[1].icon, NavIcon::Generic);
        assert!(tree.is_expandable("/shop"));

        let dup = r#"[{"path": "/", "label": "A"}, {"path": "/", "label": "B"}]"#;
        assert!(serde_json::from_str::<NavTree>(dup).is_err());
    }
}
