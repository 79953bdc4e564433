//! Active-route matching rules

use crate::types::NavItem;

/// Separator between path segments
pub const PATH_SEPARATOR: char = '/';

/// Loose match: `current` is `path` itself or lies below it.
///
/// `/invoices` matches `/invoices` and `/invoices/INV-1001`, but not
/// `/invoices2`. The root `/` only matches itself, since no real path starts
/// with `//`.
pub fn is_active(path: &str, current: &str) -> bool {
    match current.strip_prefix(path) {
        Some("") => true,
        Some(rest) => rest.starts_with(PATH_SEPARATOR),
        None => false,
    }
}

/// Strict match, used for the indicator bar.
pub fn is_exact_active(path: &str, current: &str) -> bool {
    current == path
}

/// Whether a top-level item should be highlighted for `current`.
pub fn is_parent_active(item: &NavItem, current: &str) -> bool {
    is_active(&item.path, current)
        || item
            .sub_items
            .iter()
            .any(|sub| is_active(&sub.path, current))
}
