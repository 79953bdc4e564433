//! 应用主消息枚举

use super::{ContentMessage, NavigationMessage};

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板
    ToggleFocus,

    /// 切换明暗主题
    ToggleTheme,

    /// 折叠 / 展开侧边栏
    ToggleSidebar,

    /// 跳转到指定路由（数字键直达顶层导航项）
    Navigate(String),

    /// 返回上一页
    GoBack,

    /// 前进到下一页
    GoForward,

    /// 侧边栏相关消息
    Navigation(NavigationMessage),

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
