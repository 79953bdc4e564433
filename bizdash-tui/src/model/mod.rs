//! Model 层：应用状态
//!
//!     App                 // 主应用状态（src/model/app.rs）
//!     FocusPanel          // 焦点面板：Sidebar / Content
//!     NavigationState     // 侧边栏：bizdash_core::NavigationModel + 键盘光标
//!     Page                // 由当前路由解析出的页面
//!     ContentState        // 列表页光标
//!     BusinessData        // 页面展示的示例业务数据
//!
//! 数据流：
//!     Router 产生路由变更
//!         ↓
//!     NavigationModel::on_route_change 记录路径并自动展开父级
//!         ↓
//!     App.current_page = Page::from_path(..)
//!         ↓
//!     View 层读取 NavigationModel::derive() 渲染侧边栏
//!
//! Model 层的数据被 Update 层修改，然后被 View 层读取并渲染成 UI。

mod app;
mod content;
mod focus;
mod navigation;
mod page;

pub mod domain;

pub use app::App;
pub use content::ContentState;
pub use domain::BusinessData;
pub use focus::FocusPanel;
pub use navigation::NavigationState;
pub use page::Page;

#[cfg(test)]
pub(crate) use app::test_support;
