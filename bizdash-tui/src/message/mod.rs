//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。
//! 所有的用户操作和状态变更都通过 Message 来表达，
//! Update 层根据 Message 来更新 Model。
//!
//!     app.rs              主消息 AppMessage
//!     navigation.rs       侧边栏中的子消息
//!     content.rs          内容面板中的子消息

mod app;
mod content;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use navigation::NavigationMessage;
