//! 侧边栏相关消息

/// 侧边栏消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMessage {
    /// 选择上一行
    SelectPrevious,
    /// 选择下一行
    SelectNext,
    /// 跳转到第一行
    SelectFirst,
    /// 跳转到最后一行
    SelectLast,
    /// 激活光标所在行（展开 / 收起分组，或跳转）
    Activate,
}
