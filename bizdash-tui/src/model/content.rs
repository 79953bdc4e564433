//! 内容面板状态

/// 列表页的光标
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentState {
    /// 当前选中的行
    pub selected: usize,
}

impl ContentState {
    /// 选择上一行
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一行，`len` 为当前页面的行数
    pub fn select_next(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// 切换页面时回到第一行
    pub fn reset(&mut self) {
        self.selected = 0;
    }
}
