//! View 层：把 Model 渲染到终端
//!
//!     layout.rs           标题栏 + 侧边栏 + 内容区 + 状态栏
//!     theme.rs            明暗两套颜色
//!     components/         标题栏、侧边栏、状态栏
//!     pages/              各路由对应的页面

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
