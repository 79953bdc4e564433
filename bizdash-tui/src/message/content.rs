//! 内容面板相关消息

/// 内容面板消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    /// 选择上一行
    SelectPrevious,
    /// 选择下一行
    SelectNext,
    /// 打开选中项
    Open,
}
