//! 侧边栏导航状态
//!
//! 展开集合、当前路由与折叠标志由 `bizdash_core::NavigationModel` 持有，
//! 这里只额外记录键盘光标所在的可见行。

use bizdash_core::{NavRow, NavTree, NavigationModel};

/// 导航状态
#[derive(Debug, Clone)]
pub struct NavigationState {
    /// 导航模型
    pub model: NavigationModel,
    /// 光标所在的可见行索引
    pub selected: usize,
}

impl NavigationState {
    /// 创建导航状态
    pub fn new(tree: NavTree, collapsed: bool) -> Self {
        let mut model = NavigationModel::new(tree);
        model.set_collapsed(collapsed);
        Self { model, selected: 0 }
    }

    /// 当前可见行
    pub fn rows(&self) -> Vec<NavRow> {
        self.model.visible_rows()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        let len = self.rows().len();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// 跳转到第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 跳转到最后一项
    pub fn select_last(&mut self) {
        self.selected = self.rows().len().saturating_sub(1);
    }

    /// 光标所在行
    pub fn selected_row(&self) -> Option<NavRow> {
        self.rows().get(self.selected).copied()
    }

    /// 光标所在行对应的路由
    pub fn selected_path(&self) -> Option<String> {
        self.selected_row()
            .and_then(|row| self.model.row_path(row))
            .map(str::to_string)
    }

    /// 可见行变化后（展开 / 收起 / 折叠），让光标停留在同一路由上
    pub fn keep_selection_on(&mut self, path: &str) {
        let rows = self.rows();
        if let Some(index) = rows
            .iter()
            .position(|row| self.model.row_path(*row) == Some(path))
        {
            self.selected = index;
        } else {
            self.clamp_selection();
        }
    }

    /// 把光标移到当前路由最匹配的行（优先精确匹配的子项）
    pub fn select_current_route(&mut self) {
        let current = self.model.current_path().to_string();
        let rows = self.rows();
        let exact = rows
            .iter()
            .position(|row| self.model.row_path(*row) == Some(current.as_str()));
        let parent = || {
            self.model.derive().iter().position(|item| item.parent_active).and_then(|i| {
                rows.iter().position(|row| *row == NavRow::Item(i))
            })
        };
        if let Some(index) = exact.or_else(parent) {
            self.selected = index;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.rows().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(NavTree::dashboard(), false)
    }
}
