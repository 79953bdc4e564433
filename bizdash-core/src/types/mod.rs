//! 类型定义模块

mod nav;

pub use nav::{NavIcon, NavItem, NavTree, SubNavItem};
