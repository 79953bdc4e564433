//! 未知路由页面视图

use ratatui::{layout::Rect, style::Style, text::Line, widgets::Paragraph, Frame};

use crate::view::theme::ThemeColors;

/// 渲染未知路由提示
pub fn render(path: &str, frame: &mut Frame, area: Rect, c: &ThemeColors) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::styled(format!("  No page at {path}"), Style::default().fg(c.error)),
        Line::styled("  Press Enter to go to the dashboard.", Style::default().fg(c.muted)),
    ]);
    frame.render_widget(content, area);
}
