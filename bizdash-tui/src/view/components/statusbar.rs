//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FocusPanel, Page};
use crate::view::theme::ThemeColors;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect, c: &ThemeColors) {
    let separator = Style::default().fg(c.muted);
    let mut spans = Vec::new();

    for (i, (key, desc)) in get_hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", separator));
        }
        spans.push(Span::styled(*key, c.hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, c.hint_desc()));
    }

    // 状态消息显示在提示之后
    if let Some(msg) = &app.status_message {
        spans.push(Span::styled(" │ ", separator));
        spans.push(Span::styled(msg.clone(), Style::default().fg(c.warning)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(c.bar()), area);
}

/// 根据焦点和页面生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("Tab", "Switch Panels")];

    match app.focus {
        FocusPanel::Sidebar => {
            hints.push(("↑↓", "Move"));
            let expandable = app
                .navigation
                .selected_path()
                .is_some_and(|path| app.navigation.model.tree().is_expandable(&path));
            if expandable && !app.navigation.model.is_collapsed() {
                hints.push(("Enter", "Expand/Collapse"));
            } else {
                hints.push(("Enter", "Open"));
            }
            hints.push(("b", "Sidebar"));
        }
        FocusPanel::Content => match &app.current_page {
            Page::Invoices => {
                hints.push(("↑↓", "Select"));
                hints.push(("Enter", "Details"));
            }
            Page::Settings => hints.push(("Enter", "Toggle Theme")),
            Page::NotFound { .. } => hints.push(("Enter", "Home")),
            Page::Dashboard | Page::Reports => {}
            _ => hints.push(("↑↓", "Select")),
        },
    }

    if app.current_page.is_detail_page() {
        hints.push(("Esc", "Back"));
    }
    if app.router.can_go_back() {
        hints.push(("Alt+←", "History"));
    }
    hints.push(("t", "Theme"));
    hints.push(("q", "Quit"));

    hints
}
