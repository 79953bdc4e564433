//! 通用 UI 组件

pub mod header;
pub mod sidebar;
pub mod statusbar;
