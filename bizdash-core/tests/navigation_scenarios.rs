#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! End-to-end navigation scenarios through the public API.

use bizdash_core::navigation::{auto_expand, is_active, is_exact_active, is_parent_active, ExpandedSet};
use bizdash_core::{NavAction, NavIcon, NavItem, NavTree, NavigationModel, Router, SubNavItem};

fn products_tree() -> NavTree {
    NavTree::new(vec![
        NavItem::new("/", "Dashboard", NavIcon::Dashboard),
        NavItem::new("/invoices", "Invoices", NavIcon::Invoices),
        NavItem::new("/products", "Products", NavIcon::Products)
            .with_sub_items(vec![SubNavItem::new("/categories", "Categories")]),
        NavItem::new("/customers", "Customers", NavIcon::Customers),
        NavItem::new("/services", "Services", NavIcon::Services)
            .with_sub_items(vec![SubNavItem::new("/services/plans", "Plans")]),
    ])
    .expect("valid tree")
}

// ===== Scenarios =====

#[test]
fn categories_route_activates_and_expands_products() {
    let tree = products_tree();
    let products = tree.item("/products").unwrap();

    assert!(is_parent_active(products, "/categories"));
    assert!(!is_exact_active(&products.path, "/categories"));

    let expanded = auto_expand(tree.items(), "/categories", &ExpandedSet::new());
    assert!(expanded.contains("/products"));
}

#[test]
fn root_route_only_dashboard_is_exact_active() {
    let mut model = NavigationModel::new(products_tree());
    let mut router = Router::new("/invoices");
    router.navigate("/", &mut model);

    let states = model.derive();
    let exact: Vec<_> = states.iter().filter(|s| s.exact_active).map(|s| s.path.as_str()).collect();
    assert_eq!(exact, vec!["/"]);

    let invoices = states.iter().find(|s| s.path == "/invoices").unwrap();
    assert!(!invoices.active);
    assert!(!is_active("/invoices", "/"));
}

#[test]
fn manual_expansion_survives_unrelated_navigation() {
    let mut model = NavigationModel::new(products_tree());
    let mut router = Router::default();

    assert_eq!(
        model.activate("/services"),
        NavAction::Toggled {
            path: "/services".to_string(),
            expanded: true
        }
    );
    router.navigate("/customers", &mut model);

    assert!(model.is_expanded("/services"));
    assert_eq!(model.current_path(), "/customers");
}

#[test]
fn collapsed_sidebar_parent_click_navigates_without_toggling() {
    let mut model = NavigationModel::new(products_tree());
    model.set_collapsed(true);
    let before = model.expanded().clone();

    let action = model.activate("/products");

    assert_eq!(action, NavAction::Navigate("/products".to_string()));
    assert_eq!(model.expanded(), &before);
}

#[test]
fn navigating_into_a_group_then_away_keeps_it_open() {
    let mut model = NavigationModel::new(products_tree());
    let mut router = Router::default();

    router.navigate("/categories", &mut model);
    assert!(model.is_expanded("/products"));

    router.navigate("/invoices", &mut model);
    assert!(model.is_expanded("/products"));

    // 只有显式切换才会收起
    model.toggle("/products");
    assert!(!model.is_expanded("/products"));

    router.go_back(&mut model);
    assert_eq!(model.current_path(), "/categories");
    assert!(model.is_expanded("/products"));
}

#[test]
fn exact_active_holds_for_every_configured_path() {
    let tree = NavTree::dashboard();
    for item in tree.items() {
        assert!(is_exact_active(&item.path, &item.path));
        for sub in &item.sub_items {
            assert!(is_exact_active(&sub.path, &sub.path));
        }
    }
}

#[test]
fn remount_starts_empty_then_auto_expands_current_route() {
    let mut model = NavigationModel::new(products_tree());
    let router = Router::new("/services/plans");

    router.announce(&mut model);
    assert!(model.is_expanded("/services"));

    model.reset();
    assert!(model.expanded().is_empty());
    router.announce(&mut model);
    assert!(model.is_expanded("/services"));
    assert_eq!(model.expanded().len(), 1);
}
