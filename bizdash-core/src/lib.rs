//! bizdash Core Library
//!
//! Platform-independent state behind the bizdash admin dashboard:
//! - Navigation tree types and validation
//! - Active-route matching and the expand/collapse state model
//! - Route history with change notification
//! - Light/dark theme store
//!
//! Front-ends only render what this crate derives; no view concerns live here.

pub mod error;
pub mod navigation;
pub mod router;
pub mod theme;
pub mod types;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use navigation::{NavAction, NavItemState, NavRow, NavigationModel, SubItemState};
pub use router::{RouteObserver, Router};
pub use theme::{ThemeMode, ThemeStore, ThemeSubscription};
pub use types::{NavIcon, NavItem, NavTree, SubNavItem};
