//! 主题颜色与常用样式

use bizdash_core::ThemeMode;
use ratatui::style::{Color, Modifier, Style};

/// 获取主题的颜色方案
pub fn colors(mode: ThemeMode) -> ThemeColors {
    match mode {
        ThemeMode::Dark => ThemeColors::dark(),
        ThemeMode::Light => ThemeColors::light(),
    }
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    /// 当前路由的指示条与文字
    pub active: Color,
    pub badge_bg: Color,
    pub badge_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(30, 30, 30),
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            border_focused: Color::Rgb(0, 122, 204),
            highlight: Color::Rgb(0, 122, 204),
            selected_bg: Color::Rgb(38, 79, 120),
            selected_fg: Color::White,
            active: Color::Rgb(86, 182, 255),
            badge_bg: Color::Rgb(197, 134, 192),
            badge_fg: Color::Rgb(30, 30, 30),
            success: Color::Rgb(78, 201, 176),
            warning: Color::Rgb(206, 145, 120),
            error: Color::Rgb(244, 135, 113),
            muted: Color::Rgb(128, 128, 128),
        }
    }

    /// 浅色主题
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(250, 250, 250),
            fg: Color::Rgb(51, 51, 51),
            border: Color::Rgb(204, 204, 204),
            border_focused: Color::Rgb(0, 102, 204),
            highlight: Color::Rgb(0, 102, 204),
            selected_bg: Color::Rgb(204, 232, 255),
            selected_fg: Color::Black,
            active: Color::Rgb(0, 92, 197),
            badge_bg: Color::Rgb(130, 80, 223),
            badge_fg: Color::White,
            success: Color::Rgb(34, 134, 58),
            warning: Color::Rgb(176, 136, 0),
            error: Color::Rgb(215, 58, 73),
            muted: Color::Rgb(128, 128, 128),
        }
    }

    /// 面板边框，焦点所在面板高亮
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused { self.border_focused } else { self.border })
    }

    /// 光标所在行
    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.selected_bg)
            .fg(self.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 面板标题
    pub fn title(&self) -> Style {
        Style::default().fg(self.fg).add_modifier(Modifier::BOLD)
    }

    /// 标题栏与状态栏
    pub fn bar(&self) -> Style {
        Style::default().bg(self.highlight).fg(Color::White)
    }

    /// 快捷键提示
    pub fn hint_key(&self) -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明
    pub fn hint_desc(&self) -> Style {
        Style::default().fg(Color::Rgb(225, 225, 225))
    }

    /// 表头
    pub fn table_header(&self) -> Style {
        Style::default().fg(self.muted).add_modifier(Modifier::BOLD)
    }
}
