//! Navigation model
//!
//! Pure matching rules, the expanded-set transitions and the state container
//! that ties them to the current route.

mod expanded;
mod matching;
mod model;

pub use expanded::{auto_expand, toggle_expanded, ExpandedSet};
pub use matching::{is_active, is_exact_active, is_parent_active, PATH_SEPARATOR};
pub use model::{NavAction, NavItemState, NavRow, NavigationModel, SubItemState};
